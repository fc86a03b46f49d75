//! The Packer: determines how many layers each conduction section needs and builds their
//! footprints (§4.2).

use arcstr::ArcStr;

use crate::bobbin::{Alignment, Orientation};
use crate::error::Result;
use crate::insulation::InsulationPlanner;
use crate::layerize::layout_section;
use crate::model::{EntityKind, Layer, PartialWinding, Section};
use crate::winding::ResolvedWinding;

/// The inputs the Packer needs to build layers for one coil's sections (§4.2).
pub struct PackInput<'a> {
    /// The resolved (virtual, wire-bound) windings this coil carries.
    pub windings: &'a [ResolvedWinding],
    /// The bobbin's `sectionsOrientation`, used to recover each Cartesian section's own axis.
    pub sections_orientation: Orientation,
    /// Registered inter-layer insulation constraints.
    pub insulation: &'a InsulationPlanner,
    /// How turns are aligned along a layer's turn axis (`setTurnsAlignment`, §6); consumed
    /// verbatim into each conduction layer's `turnsAlignment` field for the Placer.
    pub turns_alignment: Alignment,
    /// If true, a turn that cannot fit is still placed (overlap permitted) rather than
    /// failing the pass.
    pub wind_even_if_not_fit: bool,
}

/// Builds the layers for every conduction section in `sections`, in section order (§4.2).
///
/// Insulation sections produce no layers. Returns the flattened, ordered layer list; layer
/// indices within a section are implied by this order (§5 *Ordering guarantees*).
pub fn pack(sections: &[Section], input: &PackInput<'_>) -> Result<Vec<Layer>> {
    let mut layers = Vec::new();
    for section in sections {
        if section.is_insulation() {
            continue;
        }
        layers.extend(pack_section(section, input)?);
    }
    Ok(layers)
}

pub(crate) fn pack_section(section: &Section, input: &PackInput<'_>) -> Result<Vec<Layer>> {
    let layout = layout_section(
        section,
        input.windings,
        input.sections_orientation,
        input.insulation,
        input.wind_even_if_not_fit,
    )?;

    let mut layers = Vec::with_capacity(layout.plan.layers.len());
    for (conduction_index, (slots, footprint)) in layout.plan.layers.iter().zip(&layout.conduction_footprints).enumerate() {
        if conduction_index > 0 {
            if let Some(gap_footprint) = layout.insulation_footprints.get(conduction_index - 1) {
                layers.push(Layer {
                    name: ArcStr::from(format!("{} interlayer insulation {}", section.name, conduction_index - 1)),
                    section: section.name.clone(),
                    footprint: *gap_footprint,
                    kind: EntityKind::Insulation,
                    turns_orientation: section.layers_orientation,
                    turns_alignment: input.turns_alignment,
                    partial_windings: Vec::new(),
                    insulation_material: None,
                    filling_factor: 1.0,
                    winding_style: None,
                });
            }
        }

        let mut partial_windings = Vec::new();
        for (partial_index, partial) in layout.plan.partials.iter().enumerate() {
            let parallels = partial.resolved.virtual_winding.parallels;
            let mut per_parallel_counts = vec![0usize; parallels];
            for slot in slots {
                if slot.partial_index == partial_index {
                    per_parallel_counts[slot.parallel_index] += 1;
                }
            }
            if per_parallel_counts.iter().all(|&c| c == 0) {
                continue;
            }
            let proportion = per_parallel_counts
                .iter()
                .map(|&c| if partial.turns == 0 { 0. } else { c as f64 / partial.turns as f64 })
                .collect();
            partial_windings.push(PartialWinding {
                winding: partial.resolved.virtual_winding.name(),
                parallels_proportion: proportion,
            });
        }

        let turn_axis_used: f64 = slots
            .iter()
            .map(|slot| crate::axis::wire_dim_along(&layout.plan.partials[slot.partial_index].resolved.wire, layout.turn_axis, layout.representative_radius))
            .sum();
        let filling_factor = if layout.turn_axis_dim > 0. { turn_axis_used / layout.turn_axis_dim } else { 1.0 };

        layers.push(Layer {
            name: ArcStr::from(format!("{} layer {}", section.name, conduction_index)),
            section: section.name.clone(),
            footprint: *footprint,
            kind: EntityKind::Conduction,
            turns_orientation: section.layers_orientation,
            turns_alignment: input.turns_alignment,
            partial_windings,
            insulation_material: None,
            filling_factor,
            winding_style: Some(layout.plan.style),
        });
    }

    Ok(layers)
}
