//! Shared conductor-distribution bookkeeping: which exact `(winding, parallel, turn)` slot
//! lands in which layer, and in what order (§4.2 *Parallels-proportion split*, *Winding
//! styles*).
//!
//! The Packer and the Placer both need this answer — the Packer to size and label each
//! layer, the Placer to know exactly which turns to emit into it. Rather than thread an
//! out-of-band data structure between two "pure stage functions" (§9's re-architecture
//! note), both stages call this module and recompute the identical, deterministic plan from
//! the same section and winding data.

use crate::axis::{wire_dim_along, Axis};
use crate::error::{CoilError, Result};
use crate::model::{Section, WindingStyle};
use crate::winding::ResolvedWinding;

/// One physical conductor placed within a section: the index of its `partial_windings` entry,
/// its parallel strand index, and its turn index (both relative to the parent winding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConductorSlot {
    pub partial_index: usize,
    pub parallel_index: usize,
    pub turn_index: usize,
}

/// One partial winding's resolved sizing, used both to plan layers and to label them.
pub struct PartialWindingInfo<'a> {
    pub resolved: &'a ResolvedWinding,
    pub turns: usize,
}

/// The full layer plan for one conduction section: how many turns fit per layer, the chosen
/// winding style, and the exact slot sequence occupying each layer.
pub struct SectionLayerPlan<'a> {
    pub turns_per_layer: usize,
    pub style: WindingStyle,
    pub partials: Vec<PartialWindingInfo<'a>>,
    pub layers: Vec<Vec<ConductorSlot>>,
}

fn resolve_partials<'a>(section: &Section, windings: &'a [ResolvedWinding]) -> Result<Vec<PartialWindingInfo<'a>>> {
    section
        .partial_windings
        .iter()
        .map(|pw| {
            let resolved = windings
                .iter()
                .find(|w| w.virtual_winding.name() == pw.winding)
                .ok_or_else(|| {
                    CoilError::InvalidConfiguration(format!(
                        "section `{}` names unknown winding `{}`",
                        section.name, pw.winding
                    ))
                })?;
            let turns = pw.turn_count(resolved.virtual_winding.turns);
            Ok(PartialWindingInfo { resolved, turns })
        })
        .collect()
}

/// Builds the slot sequence for one partial winding under `style` (§4.2 *Winding styles*).
///
/// `pub(crate)`: also used directly by the planar specialization (§4.5), which assigns
/// layers from an explicit stack-up rather than a computed `turnsPerLayer`.
pub(crate) fn winding_slots(partial_index: usize, turns: usize, parallels: usize, style: WindingStyle) -> Vec<ConductorSlot> {
    let mut slots = Vec::with_capacity(turns * parallels);
    match style {
        WindingStyle::ConsecutiveTurns => {
            for parallel_index in 0..parallels {
                for turn_index in 0..turns {
                    slots.push(ConductorSlot { partial_index, parallel_index, turn_index });
                }
            }
        }
        WindingStyle::ConsecutiveParallels => {
            for turn_index in 0..turns {
                for parallel_index in 0..parallels {
                    slots.push(ConductorSlot { partial_index, parallel_index, turn_index });
                }
            }
        }
    }
    slots
}

/// Plans the layers of one conduction section (§4.2).
///
/// Fails with [`CoilError::DoesNotFit`] if no wire of the section's windings fits within
/// `turn_axis_dim` and `wind_even_if_not_fit` is false.
pub fn plan_section_layers<'a>(
    section: &Section,
    windings: &'a [ResolvedWinding],
    turn_axis: Axis,
    turn_axis_dim: f64,
    representative_radius: f64,
    wind_even_if_not_fit: bool,
) -> Result<SectionLayerPlan<'a>> {
    let partials = resolve_partials(section, windings)?;

    let per_layer_candidates: Vec<usize> = partials
        .iter()
        .map(|p| {
            let wire_dim = wire_dim_along(&p.resolved.wire, turn_axis, representative_radius);
            if wire_dim <= 0. {
                0
            } else {
                (turn_axis_dim / wire_dim).floor() as usize
            }
        })
        .collect();

    let turns_per_layer = per_layer_candidates.iter().copied().min().unwrap_or(0);
    if turns_per_layer == 0 && !wind_even_if_not_fit {
        return Err(CoilError::DoesNotFit {
            required: partials.iter().map(|p| p.turns * p.resolved.virtual_winding.parallels).sum::<usize>() as f64,
            available: 0.,
            reason: format!("wire does not fit within section `{}`'s turn-axis dimension", section.name),
        });
    }
    let turns_per_layer = turns_per_layer.max(1);

    let total_conductors: usize = partials.iter().map(|p| p.turns * p.resolved.virtual_winding.parallels).sum();
    let layer_count = total_conductors.div_ceil(turns_per_layer).max(1);

    let single_winding_single_layer = partials.len() == 1 && layer_count == 1;
    let style = if single_winding_single_layer && partials[0].resolved.virtual_winding.parallels > 1 {
        WindingStyle::ConsecutiveParallels
    } else {
        WindingStyle::ConsecutiveTurns
    };

    let mut all_slots = Vec::with_capacity(total_conductors);
    for (partial_index, partial) in partials.iter().enumerate() {
        all_slots.extend(winding_slots(
            partial_index,
            partial.turns,
            partial.resolved.virtual_winding.parallels,
            style,
        ));
    }

    let layers = all_slots
        .chunks(turns_per_layer)
        .map(|chunk| chunk.to_vec())
        .collect::<Vec<_>>();
    let layers = if layers.is_empty() { vec![Vec::new()] } else { layers };
    debug_assert_eq!(layers.len(), layer_count);

    Ok(SectionLayerPlan { turns_per_layer, style, partials, layers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bobbin::Orientation;
    use crate::model::{EntityKind, Footprint, Margin, PartialWinding};
    use crate::winding::{virtualize, Winding};
    use crate::wire::WireSpec;
    use geometry::prelude::{Rect, Span};

    fn resolved(name: &str, turns: usize, parallels: usize, wire: WireSpec) -> ResolvedWinding {
        let winding = Winding::new(name, turns, parallels, "primary", "w");
        let virt = virtualize(&[winding]).unwrap().remove(0);
        ResolvedWinding { virtual_winding: virt, wire }
    }

    fn section(winding: &str, proportion: Vec<f64>) -> Section {
        Section {
            name: "s".into(),
            footprint: Footprint::Cartesian(Rect::from_spans(Span::new(0., 10.), Span::new(0., 10.))),
            kind: EntityKind::Conduction,
            layers_orientation: Orientation::Contiguous,
            layers_alignment: crate::bobbin::Alignment::Centered,
            margin: Margin::ZERO,
            partial_windings: vec![PartialWinding { winding: winding.into(), parallels_proportion: proportion }],
        }
    }

    #[test]
    fn single_layer_plan_holds_all_slots_in_one_bucket() {
        let windings = vec![resolved("primary", 5, 1, WireSpec::round(0.45, 0.509, "copper"))];
        let section = section("primary", vec![1.0]);
        let plan = plan_section_layers(&section, &windings, Axis::Y, 10., 0., false).unwrap();
        assert_eq!(plan.layers.len(), 1);
        assert_eq!(plan.layers[0].len(), 5);
        assert_eq!(plan.style, WindingStyle::ConsecutiveTurns);
    }

    #[test]
    fn multi_parallel_single_layer_uses_consecutive_parallels() {
        let windings = vec![resolved("primary", 3, 4, WireSpec::round(0.45, 0.509, "copper"))];
        let section = section("primary", vec![1.0; 4]);
        let plan = plan_section_layers(&section, &windings, Axis::Y, 20., 0., false).unwrap();
        assert_eq!(plan.style, WindingStyle::ConsecutiveParallels);
        // first 4 slots (one full layer's worth of 4 turns/layer... ) share turn_index 0.
        assert!(plan.layers[0].iter().take(4).all(|s| s.turn_index == 0));
    }

    #[test]
    fn oversized_wire_without_overflow_policy_fails() {
        let windings = vec![resolved("primary", 5, 1, WireSpec::round(2., 2.2, "copper"))];
        let section = section("primary", vec![1.0]);
        let err = plan_section_layers(&section, &windings, Axis::Y, 1., 0., false).unwrap_err();
        assert!(matches!(err, CoilError::DoesNotFit { .. }));
    }

    #[test]
    fn unknown_winding_name_fails() {
        let windings = vec![resolved("primary", 5, 1, WireSpec::round(0.45, 0.509, "copper"))];
        let section = section("missing", vec![1.0]);
        let err = plan_section_layers(&section, &windings, Axis::Y, 10., 0., false).unwrap_err();
        assert!(matches!(err, CoilError::InvalidConfiguration(_)));
    }
}
