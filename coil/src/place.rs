//! The Placer: turns a section's layer plan into concrete [`Turn`] records (§4.3).
//!
//! Calls the same [`layout_section`] the Packer calls, so the two stages never disagree
//! about how many layers a section has or which conductors occupy each one (§9).

use std::f64::consts::PI;

use arcstr::ArcStr;
use geometry::prelude::Point;

use crate::axis::{wire_dim_along, Axis};
use crate::bobbin::{Alignment, Bobbin, Orientation, WindowShape};
use crate::error::Result;
use crate::insulation::InsulationPlanner;
use crate::layerize::layout_section;
use crate::layout::sequence_offsets;
use crate::model::{Footprint, Section, Turn, TurnOrientation};
use crate::winding::ResolvedWinding;

/// The inputs the Placer needs to build turns for one coil's sections (§4.3).
pub struct PlaceInput<'a> {
    /// The resolved (virtual, wire-bound) windings this coil carries.
    pub windings: &'a [ResolvedWinding],
    /// The bobbin this coil is wound inside; used for the mean-length-per-turn estimate.
    pub bobbin: &'a Bobbin,
    /// How turns are aligned along a layer's turn axis (`setTurnsAlignment`, §6). Must match
    /// the value passed to the Packer's [`crate::pack::PackInput`] for the two stages to
    /// agree on layer naming and geometry.
    pub turns_alignment: Alignment,
    /// Registered inter-layer insulation constraints.
    pub insulation: &'a InsulationPlanner,
    /// If true, a turn that cannot fit is still placed (overlap permitted) rather than
    /// failing the pass.
    pub wind_even_if_not_fit: bool,
}

/// Places the turns of every conduction section in `sections`, in section order (§4.3).
///
/// Insulation sections contribute no turns. Returns the flattened, ordered turn list; turn
/// order within a layer follows the layer's winding style (§5 *Ordering guarantees*).
pub fn place(sections: &[Section], input: &PlaceInput<'_>) -> Result<Vec<Turn>> {
    let mut turns = Vec::new();
    for section in sections {
        if section.is_insulation() {
            continue;
        }
        turns.extend(place_section(section, input)?);
    }
    Ok(turns)
}

pub(crate) fn place_section(section: &Section, input: &PlaceInput<'_>) -> Result<Vec<Turn>> {
    let layout = layout_section(
        section,
        input.windings,
        input.bobbin.sections_orientation,
        input.insulation,
        input.wind_even_if_not_fit,
    )?;

    let mut turns = Vec::new();
    for (conduction_index, (slots, footprint)) in layout.plan.layers.iter().zip(&layout.conduction_footprints).enumerate() {
        let layer_name = ArcStr::from(format!("{} layer {}", section.name, conduction_index));

        let lengths: Vec<f64> = slots
            .iter()
            .map(|slot| wire_dim_along(&layout.plan.partials[slot.partial_index].resolved.wire, layout.turn_axis, layout.representative_radius))
            .collect();
        let offsets = sequence_offsets(&lengths, layout.turn_axis_dim, input.turns_alignment);

        for (slot, (&offset, &length)) in slots.iter().zip(offsets.iter().zip(&lengths)) {
            let partial = &layout.plan.partials[slot.partial_index];
            let winding_name = partial.resolved.virtual_winding.name();
            let turn_footprint = crate::axis::sub_footprint(footprint, layout.turn_axis, offset, length);

            let (rotation_angle, additional_coordinates) = match &turn_footprint {
                Footprint::Polar(sector) => {
                    let mean_radius = (sector.inner_radius() + sector.outer_radius()) / 2.;
                    let left = sector.point_at(mean_radius, sector.angle_start());
                    let right = sector.point_at(mean_radius, sector.angle_stop());
                    (Some(sector.angle_start()), Some((left, right)))
                }
                Footprint::Cartesian(_) => (None, None),
            };

            let estimated_length = estimated_turn_length(input.bobbin, &turn_footprint, layout.turn_axis);

            turns.push(Turn {
                name: ArcStr::from(format!("{} parallel {} turn {}", winding_name, slot.parallel_index, slot.turn_index)),
                winding: winding_name,
                parallel_index: slot.parallel_index,
                turn_index: slot.turn_index,
                section: section.name.clone(),
                layer: layer_name.clone(),
                footprint: turn_footprint,
                orientation: TurnOrientation::Clockwise,
                rotation_angle,
                estimated_length,
                additional_coordinates,
            });
        }
    }

    Ok(turns)
}

/// A rough mean-length-per-turn estimate (§4.3 *estimatedLength is an estimate, not an EM
/// simulation*): twice the core cross-section's two in-plane dimensions, plus the
/// circumference contributed by the turn's radial distance from the column ("build").
///
/// This is the textbook transformer-design MLT approximation, not a field solve; Non-goals
/// explicitly exclude EM/thermal analysis.
fn estimated_turn_length(bobbin: &Bobbin, turn_footprint: &Footprint, turn_axis: Axis) -> f64 {
    match (bobbin.window, turn_footprint) {
        (WindowShape::Rectangular { center, .. }, Footprint::Cartesian(rect)) => {
            let build = match turn_axis {
                Axis::X => (rect.center().x - center.x).abs(),
                Axis::Y => (rect.center().y - center.y).abs(),
                _ => 0.,
            };
            let build = (build - bobbin.column_width / 2.).max(0.);
            2. * (bobbin.column_width + bobbin.column_depth) + 2. * PI * build
        }
        (WindowShape::Round { .. }, Footprint::Polar(sector)) => {
            let mean_radius = (sector.inner_radius() + sector.outer_radius()) / 2.;
            2. * (bobbin.column_depth + bobbin.column_thickness) + 2. * PI * mean_radius
        }
        _ => 0.,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, Margin, PartialWinding};
    use crate::wire::WireSpec;
    use crate::winding::{virtualize, Winding};
    use geometry::prelude::{Rect, Sector, Span};

    fn resolved(name: &str, turns: usize, parallels: usize, wire: WireSpec) -> ResolvedWinding {
        let winding = Winding::new(name, turns, parallels, "primary", "w");
        let virt = virtualize(&[winding]).unwrap().remove(0);
        ResolvedWinding { virtual_winding: virt, wire }
    }

    fn rectangular_bobbin() -> Bobbin {
        Bobbin {
            window: WindowShape::Rectangular { center: Point::zero(), width: 10., height: 10. },
            column_depth: 5.,
            column_width: 5.,
            column_thickness: 1.,
            wall_thickness: 0.,
            sections_orientation: Orientation::Contiguous,
            sections_alignment: Alignment::Centered,
        }
    }

    fn conduction_section(footprint: Footprint, winding: &str, parallels_proportion: Vec<f64>) -> Section {
        Section {
            name: "primary section".into(),
            footprint,
            kind: EntityKind::Conduction,
            layers_orientation: Orientation::Contiguous,
            layers_alignment: Alignment::Centered,
            margin: Margin::ZERO,
            partial_windings: vec![PartialWinding { winding: winding.into(), parallels_proportion }],
        }
    }

    #[test]
    fn single_layer_places_every_turn() {
        let windings = vec![resolved("primary", 7, 1, WireSpec::round(0.45, 0.509, "copper"))];
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 10.), Span::new(0., 10.)));
        let section = conduction_section(footprint, "primary", vec![1.0]);
        let bobbin = rectangular_bobbin();
        let insulation = InsulationPlanner::new();
        let input = PlaceInput {
            windings: &windings,
            bobbin: &bobbin,
            turns_alignment: Alignment::Centered,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let turns = place(&[section], &input).unwrap();
        assert_eq!(turns.len(), 7);
        for (i, turn) in turns.iter().enumerate() {
            assert_eq!(turn.turn_index, i);
            assert_eq!(turn.parallel_index, 0);
            assert_eq!(turn.name, ArcStr::from(format!("primary parallel 0 turn {i}")));
        }
    }

    #[test]
    fn turns_agree_with_packed_layer_count() {
        let windings = vec![resolved("primary", 7, 2, WireSpec::round(0.45, 0.509, "copper"))];
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 5.), Span::new(0., 2.)));
        let section = conduction_section(footprint, "primary", vec![1.0, 1.0]);
        let bobbin = rectangular_bobbin();
        let insulation = InsulationPlanner::new();
        let input = PlaceInput {
            windings: &windings,
            bobbin: &bobbin,
            turns_alignment: Alignment::Centered,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let turns = place(&[section.clone()], &input).unwrap();
        assert_eq!(turns.len(), 7 * 2);

        let pack_input = crate::pack::PackInput {
            windings: &windings,
            sections_orientation: Orientation::Contiguous,
            insulation: &insulation,
            turns_alignment: Alignment::Centered,
            wind_even_if_not_fit: false,
        };
        let layers = crate::pack::pack(&[section], &pack_input).unwrap();
        let conduction_layers = layers.iter().filter(|l| !l.is_insulation()).count();
        let layer_names: std::collections::HashSet<_> = turns.iter().map(|t| t.layer.clone()).collect();
        assert_eq!(layer_names.len(), conduction_layers);
    }

    #[test]
    fn polar_turns_carry_additional_coordinates() {
        let footprint = Footprint::Polar(Sector::new(Point::zero(), Span::new(5., 7.), 120., 120.));
        let section = conduction_section(footprint, "primary", vec![1.0]);
        let windings = vec![resolved("primary", 3, 1, WireSpec::round(0.45, 0.5, "copper"))];
        let bobbin = Bobbin {
            window: WindowShape::Round { center: Point::zero(), radial_height: 2., angle: 360. },
            column_depth: 3.,
            column_width: 3.,
            column_thickness: 1.,
            wall_thickness: 0.,
            sections_orientation: Orientation::Contiguous,
            sections_alignment: Alignment::Centered,
        };
        let insulation = InsulationPlanner::new();
        let input = PlaceInput {
            windings: &windings,
            bobbin: &bobbin,
            turns_alignment: Alignment::Centered,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let turns = place(&[section], &input).unwrap();
        assert!(!turns.is_empty());
        for turn in &turns {
            assert!(turn.additional_coordinates.is_some());
            assert!(turn.rotation_angle.is_some());
            assert!(turn.estimated_length > 0.);
        }
    }

    #[test]
    fn insulation_sections_produce_no_turns() {
        let footprint = Footprint::Cartesian(Rect::from_spans(Span::new(0., 1.), Span::new(0., 10.)));
        let section = Section {
            name: "insulation".into(),
            footprint,
            kind: EntityKind::Insulation,
            layers_orientation: Orientation::Contiguous,
            layers_alignment: Alignment::Centered,
            margin: Margin::ZERO,
            partial_windings: Vec::new(),
        };
        let bobbin = rectangular_bobbin();
        let insulation = InsulationPlanner::new();
        let input = PlaceInput {
            windings: &[],
            bobbin: &bobbin,
            turns_alignment: Alignment::Centered,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let turns = place(&[section], &input).unwrap();
        assert!(turns.is_empty());
    }
}
