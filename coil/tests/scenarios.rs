//! Integration tests for the concrete winding scenarios the placement engine is expected to
//! handle end to end, exercising the public `Coil` API rather than any single stage.

use coil::{
    Alignment, Bobbin, Coil, InsulationPlanner, Orientation, PlacementOutcome, Policies,
    WindowShape, WireSpec, Winding,
};
use geometry::prelude::Point;

fn rectangular_bobbin(width: f64, height: f64, orientation: Orientation, alignment: Alignment) -> Bobbin {
    Bobbin {
        window: WindowShape::Rectangular { center: Point::zero(), width, height },
        column_depth: 2.,
        column_width: 2.,
        column_thickness: 0.5,
        wall_thickness: 0.,
        sections_orientation: orientation,
        sections_alignment: alignment,
    }
}

fn round_bobbin(radial_height: f64, angle: f64, orientation: Orientation, alignment: Alignment) -> Bobbin {
    Bobbin {
        window: WindowShape::Round { center: Point::zero(), radial_height, angle },
        column_depth: 3.,
        column_width: 3.,
        column_thickness: 1.,
        wall_thickness: 0.,
        sections_orientation: orientation,
        sections_alignment: alignment,
    }
}

/// One winding, 7 turns, 1 parallel, a 10x10 mm rectangular window, and a 0.509 mm wire:
/// everything fits in a single layer.
#[test]
fn single_winding_fits_in_one_section_and_layer() {
    let mut coil = Coil::builder()
        .winding(Winding::new("primary", 7, 1, "primary", "24awg"))
        .wire("24awg", WireSpec::round(0.45, 0.509, "copper"))
        .bobbin(rectangular_bobbin(10., 10., Orientation::Contiguous, Alignment::Centered))
        .build()
        .unwrap();

    match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, layers, turns } => {
            assert_eq!(sections.len(), 1);
            assert_eq!(layers.len(), 1);
            assert_eq!(turns.len(), 7);
            let mut indices: Vec<usize> = turns.iter().map(|t| t.turn_index).collect();
            indices.sort_unstable();
            assert_eq!(indices, (0..7).collect::<Vec<_>>());
            assert!(turns.iter().all(|t| t.parallel_index == 0));
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// One winding, 7 turns, 2 parallels, a window wide enough for only 6 turns per layer: the
/// 14 conductors spill across 3 layers.
#[test]
fn multi_parallel_winding_spills_across_several_layers() {
    let wire = WireSpec::round(0.9, 1.0, "copper");
    let mut coil = Coil::builder()
        .winding(Winding::new("primary", 7, 2, "primary", "wire"))
        .wire("wire", wire)
        .bobbin(rectangular_bobbin(20., 6.5, Orientation::Contiguous, Alignment::Centered))
        .build()
        .unwrap();

    match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, layers, turns } => {
            assert_eq!(sections.len(), 1);
            assert_eq!(turns.len(), 14);
            assert!(layers.len() >= 2, "expected the 14 conductors to need more than one layer");
            let counted: usize = layers
                .iter()
                .filter(|l| !l.is_insulation())
                .flat_map(|l| &l.partial_windings)
                .flat_map(|pw| &pw.parallels_proportion)
                .map(|_| 1)
                .count();
            assert!(counted > 0);
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// Two windings naming each other via `woundWith` merge into a single virtual winding and
/// share one conduction section.
#[test]
fn wound_with_windings_merge_into_one_section() {
    let mut a = Winding::new("a", 5, 1, "primary", "wire");
    a.wound_with.push("b".into());
    let mut b = Winding::new("b", 5, 1, "primary", "wire");
    b.wound_with.push("a".into());
    let mut coil = Coil::builder()
        .winding(a)
        .winding(b)
        .wire("wire", WireSpec::round(0.45, 0.509, "copper"))
        .bobbin(rectangular_bobbin(10., 10., Orientation::Contiguous, Alignment::Centered))
        .build()
        .unwrap();

    let virtual_windings = coil.virtualize_functional_description().unwrap();
    assert_eq!(virtual_windings.len(), 1);
    assert_eq!(virtual_windings[0].virtual_winding.turns, 10);

    match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, turns, .. } => {
            let conduction: Vec<_> = sections.iter().filter(|s| !s.is_insulation()).collect();
            assert_eq!(conduction.len(), 1);
            assert_eq!(conduction[0].partial_windings.len(), 1);
            assert_eq!(turns.len(), 10);
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// One winding, 3 turns, toroidal window, contiguous layout with centered alignment: turns
/// fill the section's angular span in increasing order, all within `[0, 360)`.
#[test]
fn toroidal_winding_places_turns_along_the_angular_axis() {
    let mut coil = Coil::builder()
        .winding(Winding::new("primary", 3, 1, "primary", "wire"))
        .wire("wire", WireSpec::round(0.45, 0.5, "copper"))
        .bobbin(round_bobbin(5., 360., Orientation::Contiguous, Alignment::Centered))
        .build()
        .unwrap();

    match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, turns, .. } => {
            assert_eq!(sections.len(), 1);
            assert_eq!(turns.len(), 3);
            let mut angles: Vec<f64> = turns.iter().map(|t| t.rotation_angle.expect("polar turn carries an angle")).collect();
            for &a in &angles {
                assert!((0. ..360.).contains(&a), "angle {a} out of [0, 360) range");
            }
            angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert!(angles[0] < angles[1]);
            assert!(angles[1] < angles[2]);
            assert!(turns.iter().all(|t| t.additional_coordinates.is_some()));
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// Three windings on a full toroidal window, spread turn alignment: all 135 turns are placed
/// and the spread layout reaches close to both boundaries of the winding window.
#[test]
fn three_windings_spread_across_a_full_toroid() {
    let mut coil = Coil::builder()
        .winding(Winding::new("w0", 60, 1, "bulk", "wire"))
        .winding(Winding::new("w1", 42, 1, "bulk", "wire"))
        .winding(Winding::new("w2", 33, 1, "bulk", "wire"))
        .wire("wire", WireSpec::round(0.2, 0.25, "copper"))
        .bobbin(round_bobbin(20., 360., Orientation::Contiguous, Alignment::Spread))
        .build()
        .unwrap();
    coil.set_turns_alignment(Alignment::Spread, None);

    match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, turns, .. } => {
            assert_eq!(sections.len(), 3);
            assert_eq!(turns.len(), 60 + 42 + 33);
            let angles: Vec<f64> = turns.iter().filter_map(|t| t.rotation_angle).collect();
            assert_eq!(angles.len(), turns.len());
            let min_angle = angles.iter().cloned().fold(f64::INFINITY, f64::min);
            let max_angle = angles.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(min_angle < 30., "spread layout should start near the window's low boundary, got {min_angle}");
            assert!(max_angle > 330., "spread layout should end near the window's high boundary, got {max_angle}");
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// Two windings of differing isolation sides, interleaved twice, with an inter-winding
/// insulation thickness resolved from a 400 V breakdown requirement: insulation sections
/// appear at every isolation-side transition.
#[test]
fn interleaved_windings_get_insulation_at_isolation_boundaries() {
    let (material, thickness) = InsulationPlanner::new()
        .resolve_insulation_material("primary", "secondary", 400.0, |_, _, breakdown_volts| {
            (breakdown_volts >= 400.0).then(|| ("mylar".into(), 0.4))
        })
        .unwrap();
    assert_eq!(thickness, 0.4);

    let mut coil = Coil::builder()
        .winding(Winding::new("primary", 23, 2, "primary", "wire"))
        .winding(Winding::new("secondary", 42, 1, "secondary", "wire"))
        .wire("wire", WireSpec::round(0.45, 0.509, "copper"))
        .bobbin(rectangular_bobbin(20., 60., Orientation::Contiguous, Alignment::Centered))
        .policies(Policies::builder().wind_even_if_not_fit(true).build())
        .build()
        .unwrap();
    coil.set_intersection_insulation(thickness, Some(material), None);
    coil.set_interleaving_level(2);

    let sections = match coil.wind().unwrap() {
        PlacementOutcome::Placed { sections, .. } => sections,
        PlacementOutcome::PartiallyPlaced { sections, .. } => sections,
        other => panic!("expected Placed or PartiallyPlaced, got {other:?}"),
    };
    let conduction = sections.iter().filter(|s| !s.is_insulation()).count();
    let insulation = sections.iter().filter(|s| s.is_insulation()).count();
    assert_eq!(conduction, 4, "two windings interleaved twice produce four conduction sections");
    assert_eq!(insulation, 3, "every isolation-side transition between them gets an insulation section");
}

/// `coilDelimitAndCompact` tightens a conduction section's layout-axis dimension to its
/// turns' bounding extent, without changing the turn count, ordering, or winding assignments.
///
/// The Partitioner's `needed_size` estimate assumes one turn per row along the section's own
/// layout axis; with `layersOrientation` set to `Overlapping` (layers stack along that same
/// axis) and a cross axis wide enough to hold every turn in a single layer, the Packer needs
/// only one layer's thickness, far less than the Partitioner reserved. That gap is exactly
/// what compaction should remove.
#[test]
fn delimit_and_compact_shrinks_section_to_its_turns() {
    let build = |compact: bool| {
        let mut coil = Coil::builder()
            .winding(Winding::new("primary", 7, 1, "primary", "24awg"))
            .wire("24awg", WireSpec::round(0.45, 0.509, "copper"))
            .bobbin(rectangular_bobbin(10., 10., Orientation::Contiguous, Alignment::Centered))
            .policies(Policies::builder().delimit_and_compact(compact).build())
            .build()
            .unwrap();
        coil.set_layers_orientation(Orientation::Overlapping, None);
        match coil.wind().unwrap() {
            PlacementOutcome::Placed { sections, layers, turns } => (sections, layers, turns),
            other => panic!("expected Placed, got {other:?}"),
        }
    };

    let (uncompacted_sections, uncompacted_layers, uncompacted_turns) = build(false);
    let (compacted_sections, compacted_layers, compacted_turns) = build(true);

    assert_eq!(uncompacted_turns.len(), compacted_turns.len());
    assert_eq!(uncompacted_sections.len(), compacted_sections.len());
    assert_eq!(uncompacted_layers.len(), compacted_layers.len());
    for (before, after) in uncompacted_turns.iter().zip(&compacted_turns) {
        assert_eq!(before.name, after.name);
        assert_eq!(before.winding, after.winding);
        assert_eq!(before.turn_index, after.turn_index);
    }

    let uncompacted_height = uncompacted_sections[0].footprint.as_cartesian().unwrap().vspan().length();
    let compacted_height = compacted_sections[0].footprint.as_cartesian().unwrap().vspan().length();
    assert!(
        compacted_height < uncompacted_height,
        "compaction should shrink the section down from the Partitioner's per-turn estimate to \
         the Packer's actual single-layer extent (uncompacted {uncompacted_height}, compacted {compacted_height})"
    );

    // Every compacted turn still sits inside its (now smaller) section.
    for turn in &compacted_turns {
        let section = compacted_sections.iter().find(|s| s.name == turn.section).unwrap();
        let section_rect = section.footprint.as_cartesian().unwrap();
        let turn_rect = turn.footprint.as_cartesian().unwrap();
        assert!(turn_rect.bot() >= section_rect.bot() - 1e-9 && turn_rect.top() <= section_rect.top() + 1e-9);
    }
}
