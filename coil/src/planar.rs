//! The planar-transformer specialization (§4.5): a PCB stack-up replaces pattern-driven
//! sections, turns lie along each layer's width axis, and wire is flat copper with a fixed
//! thin height.

use arcstr::ArcStr;
use geometry::prelude::{Rect, Span};
use itertools::Itertools;

use crate::bobbin::{Alignment, Bobbin, Orientation, WindowShape};
use crate::distribute::winding_slots;
use crate::error::{CoilError, Result};
use crate::layout::sequence_offsets;
use crate::model::{EntityKind, Footprint, Layer, Margin, PartialWinding, Section, Turn, TurnOrientation, WindingStyle};
use crate::winding::ResolvedWinding;

/// The inputs the planar specialization needs (§4.5, §6 `windByPlanarSections`).
pub struct PlanarInput<'a> {
    /// The resolved windings this planar coil carries.
    pub windings: &'a [ResolvedWinding],
    /// One winding index per PCB copper layer, in board order. Consecutive repeats of the
    /// same index mean multiple copper layers assigned to that winding.
    pub stack_up: &'a [usize],
    /// The dielectric spacing inserted between two copper layers of differing windings.
    pub inter_winding_insulation: f64,
    /// The dielectric spacing inserted between the outermost copper layer and the core.
    pub insulation_to_core: f64,
    /// The bobbin supplying the board's width; `sections_orientation`/`column_*` fields are
    /// otherwise unused by the planar path.
    pub bobbin: &'a Bobbin,
    /// The fixed copper thickness used for every planar turn's footprint, centered within
    /// its layer.
    pub wire_height: f64,
    /// How turns are aligned along a layer's width axis.
    pub turns_alignment: Alignment,
}

/// A maximal run of consecutive identical `stackUp` entries: `(winding_index, layer_count)`.
fn runs_of(stack_up: &[usize]) -> Vec<(usize, usize)> {
    stack_up
        .iter()
        .chunk_by(|&&idx| idx)
        .into_iter()
        .map(|(idx, group)| (idx, group.count()))
        .collect()
}

fn rectangular_window(bobbin: &Bobbin) -> Result<(geometry::prelude::Point, f64)> {
    match bobbin.usable_window() {
        WindowShape::Rectangular { center, width, .. } => Ok((center, width)),
        WindowShape::Round { .. } => Err(CoilError::InvalidConfiguration(
            "the planar specialization requires a rectangular winding window".into(),
        )),
    }
}

/// Splits `stackUp` into maximal runs of the same winding index and builds one Conduction
/// [`Section`] per run (one layer per board position in the run), interleaved with
/// Insulation sections at winding boundaries and at the two board faces (§4.5).
pub fn plan_planar_sections(input: &PlanarInput<'_>) -> Result<Vec<Section>> {
    if input.stack_up.is_empty() {
        return Err(CoilError::InvalidConfiguration("stackUp must be non-empty".into()));
    }
    for &idx in input.stack_up {
        if idx >= input.windings.len() {
            return Err(CoilError::InvalidConfiguration(format!(
                "stackUp references winding index {idx}, but only {} windings are defined",
                input.windings.len()
            )));
        }
    }

    let (center, width) = rectangular_window(input.bobbin)?;
    let runs = runs_of(input.stack_up);

    // One nominal unit of stacking extent per copper layer; the planar path does not place
    // turns along this axis (it only orders and sizes insulation gaps along it), so its
    // absolute scale is immaterial.
    let mut sizes = Vec::with_capacity(runs.len() * 2 + 1);
    let mut is_conduction = Vec::with_capacity(sizes.capacity());
    sizes.push(input.insulation_to_core);
    is_conduction.push(false);
    for (i, (_, layer_count)) in runs.iter().enumerate() {
        sizes.push(*layer_count as f64);
        is_conduction.push(true);
        if i + 1 < runs.len() {
            sizes.push(input.inter_winding_insulation);
            is_conduction.push(false);
        }
    }
    sizes.push(input.insulation_to_core);
    is_conduction.push(false);

    let available: f64 = sizes.iter().sum();
    let offsets = sequence_offsets(&sizes, available, Alignment::InnerOrTop);

    let mut sections = Vec::with_capacity(runs.len());
    let mut run_idx = 0;
    for ((&size, &offset), &conduction) in sizes.iter().zip(&offsets).zip(&is_conduction) {
        let rect = Rect::from_spans(Span::from_center_span(center.x, width), Span::with_start_and_length(offset, size));
        if conduction {
            let (winding_index, _layer_count) = runs[run_idx];
            run_idx += 1;
            let resolved = &input.windings[winding_index];
            sections.push(Section {
                name: ArcStr::from(format!("{} planar section", resolved.virtual_winding.name())),
                footprint: Footprint::Cartesian(rect),
                kind: EntityKind::Conduction,
                layers_orientation: Orientation::Contiguous,
                layers_alignment: Alignment::InnerOrTop,
                margin: Margin::ZERO,
                partial_windings: vec![PartialWinding {
                    winding: resolved.virtual_winding.name(),
                    parallels_proportion: vec![1.0; resolved.virtual_winding.parallels],
                }],
            });
        } else if size > 0. {
            sections.push(Section {
                name: ArcStr::from(format!("planar insulation {}", sections.len())),
                footprint: Footprint::Cartesian(rect),
                kind: EntityKind::Insulation,
                layers_orientation: Orientation::Contiguous,
                layers_alignment: Alignment::Centered,
                margin: Margin::ZERO,
                partial_windings: Vec::new(),
            });
        }
    }

    Ok(sections)
}

/// Builds one [`Layer`] per board position named in `stackUp`, splitting each run's winding
/// turns evenly across its layer_count positions (§4.5).
pub fn pack_planar_layers(sections: &[Section], input: &PlanarInput<'_>) -> Result<Vec<Layer>> {
    let runs = runs_of(input.stack_up);
    let conduction_sections: Vec<&Section> = sections.iter().filter(|s| !s.is_insulation()).collect();
    if conduction_sections.len() != runs.len() {
        return Err(CoilError::InvalidConfiguration(
            "planar sections do not match the stack-up runs; were they built by plan_planar_sections?".into(),
        ));
    }

    let mut layers = Vec::new();
    for (section, &(winding_index, layer_count)) in conduction_sections.iter().zip(&runs) {
        let resolved = &input.windings[winding_index];
        let turns_total = resolved.virtual_winding.turns;
        let parallels = resolved.virtual_winding.parallels;
        let per_layer = turns_total.div_ceil(layer_count).max(1);
        let all_slots = winding_slots(0, turns_total, parallels, WindingStyle::ConsecutiveTurns);

        let footprint = section.footprint.as_cartesian().expect("planar sections are always cartesian");
        let per_layer_height = footprint.vspan().length() / layer_count as f64;

        for layer_index in 0..layer_count {
            let chunk_start = layer_index * per_layer;
            let chunk = if chunk_start < all_slots.len() {
                &all_slots[chunk_start..all_slots.len().min(chunk_start + per_layer)]
            } else {
                &[][..]
            };
            let rect = Rect::from_spans(
                footprint.hspan(),
                Span::with_start_and_length(footprint.bot() + layer_index as f64 * per_layer_height, per_layer_height),
            );

            let mut per_parallel_counts = vec![0usize; parallels];
            for slot in chunk {
                per_parallel_counts[slot.parallel_index] += 1;
            }
            let proportion: Vec<f64> = per_parallel_counts
                .iter()
                .map(|&c| if turns_total == 0 { 0. } else { c as f64 / turns_total as f64 })
                .collect();

            layers.push(Layer {
                name: ArcStr::from(format!("{} layer {}", section.name, layer_index)),
                section: section.name.clone(),
                footprint: Footprint::Cartesian(rect),
                kind: EntityKind::Conduction,
                turns_orientation: Orientation::Overlapping,
                turns_alignment: input.turns_alignment,
                partial_windings: vec![PartialWinding { winding: resolved.virtual_winding.name(), parallels_proportion: proportion }],
                insulation_material: None,
                filling_factor: if chunk.is_empty() { 0. } else { chunk.len() as f64 / per_layer as f64 },
                winding_style: Some(WindingStyle::ConsecutiveTurns),
            });
        }
    }

    Ok(layers)
}

/// Places turns along each planar layer's width axis (§4.5).
pub fn place_planar_turns(sections: &[Section], layers: &[Layer], input: &PlanarInput<'_>) -> Result<Vec<Turn>> {
    let runs = runs_of(input.stack_up);
    let conduction_sections: Vec<&Section> = sections.iter().filter(|s| !s.is_insulation()).collect();
    if conduction_sections.len() != runs.len() {
        return Err(CoilError::InvalidConfiguration(
            "planar sections do not match the stack-up runs; were they built by plan_planar_sections?".into(),
        ));
    }

    let mut turns = Vec::new();
    let mut layer_cursor = 0;
    for (&(winding_index, layer_count), section) in runs.iter().zip(&conduction_sections) {
        let resolved = &input.windings[winding_index];
        let turns_total = resolved.virtual_winding.turns;
        let parallels = resolved.virtual_winding.parallels;
        let per_layer = turns_total.div_ceil(layer_count).max(1);
        let all_slots = winding_slots(0, turns_total, parallels, WindingStyle::ConsecutiveTurns);

        for layer_index in 0..layer_count {
            let layer = &layers[layer_cursor];
            layer_cursor += 1;
            let layer_footprint = layer.footprint.as_cartesian().expect("planar layers are always cartesian");

            let chunk_start = layer_index * per_layer;
            let chunk = if chunk_start < all_slots.len() {
                &all_slots[chunk_start..all_slots.len().min(chunk_start + per_layer)]
            } else {
                &[][..]
            };

            let lengths: Vec<f64> = chunk.iter().map(|_| resolved.wire.outer_width()).collect();
            let offsets = sequence_offsets(&lengths, layer_footprint.hspan().length(), input.turns_alignment);

            for (slot, (&offset, &length)) in chunk.iter().zip(offsets.iter().zip(&lengths)) {
                let rect = Rect::from_spans(
                    Span::with_start_and_length(layer_footprint.left() + offset, length),
                    Span::from_center_span(layer_footprint.center().y, input.wire_height.min(layer_footprint.vspan().length())),
                );
                turns.push(Turn {
                    name: ArcStr::from(format!("{} parallel {} turn {}", resolved.virtual_winding.name(), slot.parallel_index, slot.turn_index)),
                    winding: resolved.virtual_winding.name(),
                    parallel_index: slot.parallel_index,
                    turn_index: slot.turn_index,
                    section: section.name.clone(),
                    layer: layer.name.clone(),
                    footprint: Footprint::Cartesian(rect),
                    orientation: TurnOrientation::Clockwise,
                    rotation_angle: None,
                    estimated_length: 2. * (input.bobbin.column_width + input.bobbin.column_depth),
                    additional_coordinates: None,
                });
            }
        }
    }

    Ok(turns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireSpec;
    use crate::winding::{virtualize, Winding};
    use geometry::prelude::Point;

    fn resolved(name: &str, turns: usize, parallels: usize) -> ResolvedWinding {
        let winding = Winding::new(name, turns, parallels, "primary", "w");
        let virt = virtualize(&[winding]).unwrap().remove(0);
        ResolvedWinding { virtual_winding: virt, wire: WireSpec::round(0.1, 0.12, "copper") }
    }

    fn planar_bobbin() -> Bobbin {
        Bobbin {
            window: WindowShape::Rectangular { center: Point::zero(), width: 20., height: 4. },
            column_depth: 5.,
            column_width: 5.,
            column_thickness: 1.6,
            wall_thickness: 0.,
            sections_orientation: Orientation::Contiguous,
            sections_alignment: Alignment::Centered,
        }
    }

    #[test]
    fn single_winding_stack_up_produces_one_section_per_run() {
        let windings = vec![resolved("primary", 8, 1)];
        let bobbin = planar_bobbin();
        let input = PlanarInput {
            windings: &windings,
            stack_up: &[0, 0],
            inter_winding_insulation: 0.1,
            insulation_to_core: 0.2,
            bobbin: &bobbin,
            wire_height: 0.035,
            turns_alignment: Alignment::Centered,
        };
        let sections = plan_planar_sections(&input).unwrap();
        let conduction: Vec<_> = sections.iter().filter(|s| !s.is_insulation()).collect();
        assert_eq!(conduction.len(), 1);

        let layers = pack_planar_layers(&sections, &input).unwrap();
        assert_eq!(layers.len(), 2);
        let total_turns: usize = layers
            .iter()
            .map(|l| (l.partial_windings[0].parallels_proportion[0] * 8.).round() as usize)
            .sum();
        assert_eq!(total_turns, 8);

        let turns = place_planar_turns(&sections, &layers, &input).unwrap();
        assert_eq!(turns.len(), 8);
    }

    #[test]
    fn differing_windings_insert_insulation_between_runs() {
        let windings = vec![resolved("primary", 4, 1), resolved("secondary", 4, 1)];
        let bobbin = planar_bobbin();
        let input = PlanarInput {
            windings: &windings,
            stack_up: &[0, 1],
            inter_winding_insulation: 0.1,
            insulation_to_core: 0.2,
            bobbin: &bobbin,
            wire_height: 0.035,
            turns_alignment: Alignment::Centered,
        };
        let sections = plan_planar_sections(&input).unwrap();
        assert!(sections.iter().any(|s| s.is_insulation()));
        assert_eq!(sections.iter().filter(|s| !s.is_insulation()).count(), 2);
    }

    #[test]
    fn unknown_stack_up_index_fails() {
        let windings = vec![resolved("primary", 4, 1)];
        let bobbin = planar_bobbin();
        let input = PlanarInput {
            windings: &windings,
            stack_up: &[0, 5],
            inter_winding_insulation: 0.1,
            insulation_to_core: 0.2,
            bobbin: &bobbin,
            wire_height: 0.035,
            turns_alignment: Alignment::Centered,
        };
        let err = plan_planar_sections(&input).unwrap_err();
        assert!(matches!(err, CoilError::InvalidConfiguration(_)));
    }
}
