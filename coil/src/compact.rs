//! The compaction/delimiting post-pass (§4.3 *Compaction / delimiting*).
//!
//! When `coilDelimitAndCompact` is set, every conduction section's footprint is tightened
//! along its own layout axis to the minimum extent spanned by its turns, then re-centered
//! within the span it originally occupied under the bobbin's `sectionsAlignment` — the same
//! "row of sized elements positioned within an available span under one of four alignments"
//! rule [`crate::layout::sequence_offsets`] applies everywhere else (§9). The cross axis is
//! left untouched: it is a window-wide dimension shared by every section, not a per-section
//! degree of freedom the Partitioner ever varies (§4.1).
//!
//! This is a pure rigid translation, never a resize, of every layer and turn belonging to a
//! compacted section: their own extents and mutual ordering are unchanged, only their
//! position along the section's layout axis slides by the same constant amount the section
//! itself slides. That keeps the pass a "must not change relative ordering or winding
//! assignments" operation as §4.3 requires.

use geometry::prelude::{Point, Rect, Sector, Span};

use crate::axis::{dim_along, section_axes, sub_footprint, Axis};
use crate::bobbin::{Alignment, Orientation};
use crate::layout::sequence_offsets;
use crate::model::{Footprint, Layer, Section, Turn};

/// Runs the compaction pass over a completed placement, in place.
///
/// Only conduction sections that carry at least one turn are affected; insulation sections,
/// and conduction sections with no turns (e.g. an elided pattern slot), are left untouched.
pub fn compact(
    sections: &mut [Section],
    layers: &mut [Layer],
    turns: &mut [Turn],
    sections_orientation: Orientation,
    sections_alignment: Alignment,
) {
    for section in sections.iter_mut() {
        if section.is_insulation() {
            continue;
        }

        let (section_axis, _cross_axis) = section_axes(&section.footprint, sections_orientation);
        let Some((min_edge, max_edge)) = turn_extent_along(turns, &section.name, section_axis) else {
            continue;
        };

        let original_len = dim_along(&section.footprint, section_axis);
        let tight_len = (max_edge - min_edge).max(0.);
        if tight_len >= original_len {
            continue;
        }

        let old_low = low_edge(&section.footprint, section_axis);
        let desired_offset = sequence_offsets(&[tight_len], original_len, sections_alignment)[0];
        let shift = old_low + desired_offset - min_edge;

        section.footprint = sub_footprint(&section.footprint, section_axis, desired_offset, tight_len);

        for layer in layers.iter_mut().filter(|l| l.section == section.name) {
            layer.footprint = translate_along(&layer.footprint, section_axis, shift);
        }
        for turn in turns.iter_mut().filter(|t| t.section == section.name) {
            turn.footprint = translate_along(&turn.footprint, section_axis, shift);
            if let Some((left, right)) = turn.additional_coordinates {
                turn.additional_coordinates = Some((shift_point(left, section_axis, shift), shift_point(right, section_axis, shift)));
            }
        }
    }
}

/// The `[min, max)` extent, along `axis`, spanned by every turn in section `section_name`.
fn turn_extent_along(turns: &[Turn], section_name: &str, axis: Axis) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for turn in turns.iter().filter(|t| t.section.as_str() == section_name) {
        any = true;
        let low = low_edge(&turn.footprint, axis);
        let high = low + dim_along(&turn.footprint, axis);
        min = min.min(low);
        max = max.max(high);
    }
    any.then_some((min, max))
}

/// The low-edge coordinate of `footprint` along `axis`: the rectangle's left/bottom edge in
/// Cartesian mode, or the sector's start-angle/inner-radius in polar mode.
fn low_edge(footprint: &Footprint, axis: Axis) -> f64 {
    match (footprint, axis) {
        (Footprint::Cartesian(r), Axis::X) => r.left(),
        (Footprint::Cartesian(r), Axis::Y) => r.bot(),
        (Footprint::Polar(s), Axis::Angle) => s.angle_start(),
        (Footprint::Polar(s), Axis::Radial) => s.inner_radius(),
        _ => panic!("axis does not apply to this footprint's coordinate system"),
    }
}

/// Translates `footprint` by `delta` along `axis`, leaving its size and cross-axis position
/// unchanged.
fn translate_along(footprint: &Footprint, axis: Axis, delta: f64) -> Footprint {
    if delta == 0. {
        return *footprint;
    }
    match footprint {
        Footprint::Cartesian(rect) => {
            let (hspan, vspan) = match axis {
                Axis::X => (Span::new(rect.left() + delta, rect.right() + delta), rect.vspan()),
                Axis::Y => (rect.hspan(), Span::new(rect.bot() + delta, rect.top() + delta)),
                _ => panic!("cartesian footprint cannot use a polar axis"),
            };
            Footprint::Cartesian(Rect::from_spans(hspan, vspan))
        }
        Footprint::Polar(sector) => match axis {
            Axis::Angle => Footprint::Polar(Sector::new(sector.center(), sector.radial(), sector.angle_start() + delta, sector.angle_span())),
            Axis::Radial => Footprint::Polar(Sector::new(
                sector.center(),
                Span::new(sector.inner_radius() + delta, sector.outer_radius() + delta),
                sector.angle_start(),
                sector.angle_span(),
            )),
            _ => panic!("polar footprint cannot use a cartesian axis"),
        },
    }
}

fn shift_point(point: Point, axis: Axis, delta: f64) -> Point {
    match axis {
        Axis::X => Point::new(point.x + delta, point.y),
        Axis::Y => Point::new(point.x, point.y + delta),
        // Additional coordinates are only ever produced in polar mode, whose section axis is
        // always `Angle`; a literal angular shift has no single well-defined Cartesian
        // translation, so the reported endpoints are left as originally placed.
        Axis::Angle | Axis::Radial => point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoordinateSystem, EntityKind, Margin, PartialWinding, TurnOrientation, WindingStyle};

    fn section(footprint: Footprint) -> Section {
        Section {
            name: "primary section".into(),
            footprint,
            kind: EntityKind::Conduction,
            layers_orientation: Orientation::Contiguous,
            layers_alignment: Alignment::Centered,
            margin: Margin::ZERO,
            partial_windings: vec![PartialWinding { winding: "primary".into(), parallels_proportion: vec![1.0] }],
        }
    }

    fn turn(name: &str, footprint: Footprint) -> Turn {
        Turn {
            name: name.into(),
            winding: "primary".into(),
            parallel_index: 0,
            turn_index: 0,
            section: "primary section".into(),
            layer: "primary section layer 0".into(),
            footprint,
            orientation: TurnOrientation::Clockwise,
            rotation_angle: None,
            estimated_length: 1.,
            additional_coordinates: None,
        }
    }

    fn layer(footprint: Footprint) -> Layer {
        Layer {
            name: "primary section layer 0".into(),
            section: "primary section".into(),
            footprint,
            kind: EntityKind::Conduction,
            turns_orientation: Orientation::Overlapping,
            turns_alignment: Alignment::Centered,
            partial_windings: vec![PartialWinding { winding: "primary".into(), parallels_proportion: vec![1.0] }],
            insulation_material: None,
            filling_factor: 0.3,
            winding_style: Some(WindingStyle::ConsecutiveTurns),
        }
    }

    #[test]
    fn shrinks_section_to_turn_bbox_and_recenters() {
        // A 10-unit-tall (Y = section axis under Contiguous orientation) section with three
        // 1-unit turns occupying only Y in [4, 7). Expect the section to shrink to length 3
        // and recenter within its original [0, 10) span: new offset (10 - 3) / 2 = 3.5.
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(0., 10.)));
        let mut sections = vec![section(footprint)];
        let mut layers = vec![layer(footprint)];
        let mut turns = vec![
            turn("t0", Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(4., 5.)))),
            turn("t1", Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(5., 6.)))),
            turn("t2", Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(6., 7.)))),
        ];

        compact(&mut sections, &mut layers, &mut turns, Orientation::Contiguous, Alignment::Centered);

        let new_rect = sections[0].footprint.as_cartesian().unwrap();
        assert!((new_rect.vspan().length() - 3.).abs() < 1e-9);
        assert!((new_rect.bot() - 3.5).abs() < 1e-9);
        assert!((new_rect.top() - 6.5).abs() < 1e-9);

        // Turns shifted by the same amount the section's low edge shifted (3.5 - 4 = -0.5).
        assert!((turns[0].footprint.as_cartesian().unwrap().bot() - 3.5).abs() < 1e-9);
        assert!((turns[2].footprint.as_cartesian().unwrap().top() - 6.5).abs() < 1e-9);

        // Relative ordering and winding assignment preserved.
        assert_eq!(turns[0].name.as_str(), "t0");
        assert_eq!(turns[0].winding.as_str(), "primary");
        assert_eq!(layers[0].footprint.as_cartesian().unwrap().bot(), new_rect.bot());
    }

    #[test]
    fn leaves_insulation_and_empty_sections_untouched() {
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(0., 10.)));
        let mut insulation_section = section(footprint);
        insulation_section.kind = EntityKind::Insulation;
        insulation_section.partial_windings.clear();
        let mut sections = vec![insulation_section];
        let mut layers = vec![];
        let mut turns = vec![];

        compact(&mut sections, &mut layers, &mut turns, Orientation::Contiguous, Alignment::Centered);
        assert_eq!(sections[0].footprint.as_cartesian().unwrap().vspan().length(), 10.);
    }

    #[test]
    fn coordinate_system_unaffected() {
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 2.), Span::new(0., 10.)));
        assert_eq!(footprint.coordinate_system(), CoordinateSystem::Cartesian);
    }
}
