//! The Partitioner: splits a winding window into an ordered list of [`Section`]s (§4.1).

use arcstr::ArcStr;
use geometry::prelude::{Rect, Sector, Span};

use crate::bobbin::{Alignment, Bobbin, Orientation, WindowShape};
use crate::error::{CoilError, Result};
use crate::insulation::InsulationPlanner;
use crate::layout::sequence_offsets;
use crate::model::{EntityKind, Footprint, Margin, PartialWinding, Section};
use crate::winding::ResolvedWinding;

/// The inputs the Partitioner needs to build a coil's sections (§4.1 *Input*).
pub struct PartitionInput<'a> {
    /// The (already virtualized) windings this coil carries, in declaration order.
    pub windings: &'a [ResolvedWinding],
    /// The pattern vector: indices into `windings`, repeated `repetitions` times.
    pub pattern: &'a [usize],
    /// The interleaving level: the number of times `pattern` is repeated (§2 item 4, Glossary).
    pub repetitions: u32,
    /// Per-winding proportions, of length `windings.len()` summing to `1.0`, or `None` to
    /// auto-balance each winding evenly across its own occurrences.
    pub proportions: Option<&'a [f64]>,
    /// The bobbin supplying the winding window, its orientation, and its alignment.
    pub bobbin: &'a Bobbin,
    /// Registered inter-section insulation constraints.
    pub insulation: &'a InsulationPlanner,
    /// If true, overflowing the window is permitted rather than failing.
    pub wind_even_if_not_fit: bool,
}

/// One occurrence of a winding in the expanded pattern sequence.
struct ConductionSlot {
    winding_index: usize,
    /// This occurrence's proportion of its winding's total turns (sums to 1.0 across all of
    /// one winding's occurrences).
    share: f64,
}

/// Expands `pattern` by `repetitions` and assigns each occurrence of each winding its share
/// of that winding's turns (§4.1 *Pattern semantics*).
///
/// Per-winding occurrences are always split evenly; see `DESIGN.md` for why `proportions`,
/// once validated, has no further effect on an individual winding's own split (an explicit
/// resolution of an underspecified legacy formula, in which a per-winding scalar divided by
/// that same winding's own occurrence count collapses to an even split regardless of its
/// value).
fn expand_pattern(
    windings: &[ResolvedWinding],
    pattern: &[usize],
    repetitions: u32,
    proportions: Option<&[f64]>,
) -> Result<Vec<ConductionSlot>> {
    if pattern.is_empty() || repetitions == 0 {
        return Err(CoilError::InvalidConfiguration(
            "pattern must be non-empty and repetitions must be at least 1".into(),
        ));
    }
    for &idx in pattern {
        if idx >= windings.len() {
            return Err(CoilError::InvalidConfiguration(format!(
                "pattern references winding index {idx}, but only {} windings are defined",
                windings.len()
            )));
        }
    }
    if let Some(props) = proportions {
        if props.len() != windings.len() {
            return Err(CoilError::InvalidConfiguration(format!(
                "proportions has {} entries but there are {} windings",
                props.len(),
                windings.len()
            )));
        }
        let sum: f64 = props.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(CoilError::InvalidConfiguration(format!(
                "proportions must sum to 1.0, got {sum}"
            )));
        }
    }

    let seq: Vec<usize> = pattern
        .iter()
        .copied()
        .cycle()
        .take(pattern.len() * repetitions as usize)
        .collect();

    for (idx, resolved) in windings.iter().enumerate() {
        if !seq.contains(&idx) {
            return Err(CoilError::InvalidConfiguration(format!(
                "winding `{}` does not appear in the pattern",
                resolved.virtual_winding.name()
            )));
        }
    }

    let mut occurrence_count = vec![0usize; windings.len()];
    for &w in &seq {
        occurrence_count[w] += 1;
    }

    let mut seen = vec![0usize; windings.len()];
    let mut placed_share = vec![0f64; windings.len()];
    let mut slots = Vec::with_capacity(seq.len());
    for &winding_index in &seq {
        seen[winding_index] += 1;
        let is_last_occurrence = seen[winding_index] == occurrence_count[winding_index];
        let share = if is_last_occurrence {
            1.0 - placed_share[winding_index]
        } else {
            1.0 / occurrence_count[winding_index] as f64
        };
        placed_share[winding_index] += share;
        slots.push(ConductionSlot { winding_index, share });
    }

    Ok(slots)
}

/// The dimension (metres along a Cartesian layout axis, degrees along the polar angular
/// axis) a winding's occurrence needs, given the `share` of its turns placed there.
///
/// In polar mode the representative radius is the annulus's mean radius, since layers (and
/// therefore each turn's actual placement radius) are not yet known at partition time; see
/// `DESIGN.md`.
fn needed_size(resolved: &ResolvedWinding, share: f64, window: &WindowShape, orientation: Orientation) -> f64 {
    let turns = (resolved.virtual_winding.turns as f64 * share).round().max(0.);
    match window {
        WindowShape::Round { radial_height, .. } => {
            let mean_radius = radial_height / 2.;
            if mean_radius <= 0. {
                return 0.;
            }
            let outer = resolved.wire.outer_width();
            let angular_footprint = 2. * ((outer / 2.) / mean_radius).asin().to_degrees();
            turns * angular_footprint
        }
        WindowShape::Rectangular { .. } => {
            let dim = match orientation {
                Orientation::Overlapping => resolved.wire.outer_width(),
                Orientation::Contiguous => resolved.wire.outer_height(),
            };
            turns * dim
        }
    }
}

/// The span available along the section layout axis, and the fixed cross-axis extent every
/// section spans in full.
fn layout_and_cross_extent(window: &WindowShape, orientation: Orientation) -> (f64, f64) {
    match window {
        WindowShape::Rectangular { width, height, .. } => match orientation {
            Orientation::Overlapping => (*width, *height),
            Orientation::Contiguous => (*height, *width),
        },
        WindowShape::Round { radial_height, angle, .. } => (*angle, *radial_height),
    }
}

/// Builds the footprint of a section spanning `[layout_start, layout_start + layout_len)`
/// along the layout axis and the full cross-axis extent.
fn footprint_for(
    window: &WindowShape,
    orientation: Orientation,
    layout_start: f64,
    layout_len: f64,
) -> Footprint {
    match window {
        WindowShape::Rectangular { center, width, height } => {
            let rect = match orientation {
                Orientation::Overlapping => Rect::from_spans(
                    Span::with_start_and_length(center.x - width / 2. + layout_start, layout_len),
                    Span::from_center_span(center.y, *height),
                ),
                Orientation::Contiguous => Rect::from_spans(
                    Span::from_center_span(center.x, *width),
                    Span::with_start_and_length(center.y - height / 2. + layout_start, layout_len),
                ),
            };
            Footprint::Cartesian(rect)
        }
        WindowShape::Round { center, radial_height, .. } => {
            let sector = Sector::new(*center, Span::new(0., *radial_height), layout_start, layout_len);
            Footprint::Polar(sector)
        }
    }
}

enum Entry {
    Conduction { winding_index: usize, share: f64 },
    Insulation { side_a: ArcStr, side_b: ArcStr },
}

/// Builds the ordered list of sections for a coil (§4.1).
///
/// Returns sections in final layout order (conduction and interleaved insulation), ready for
/// the Packer. Fails with [`CoilError::DoesNotFit`] if the required sections exceed the
/// window and `wind_even_if_not_fit` is false.
pub fn partition(input: &PartitionInput<'_>) -> Result<Vec<Section>> {
    let window = input.bobbin.usable_window();
    let orientation = input.bobbin.sections_orientation;
    if window.is_polar() && orientation == Orientation::Overlapping {
        return Err(CoilError::InvalidConfiguration(
            "overlapping sections orientation is not defined for a round winding window".into(),
        ));
    }

    let slots = expand_pattern(input.windings, input.pattern, input.repetitions, input.proportions)?;

    // Drop zero-turn occurrences (§4.1: "An entry in seq with zero assigned turns is elided").
    let slots: Vec<ConductionSlot> = slots
        .into_iter()
        .filter(|slot| {
            let resolved = &input.windings[slot.winding_index];
            (resolved.virtual_winding.turns as f64 * slot.share).round() > 0.
        })
        .collect();

    // Interleave insulation entries between adjacent conduction entries whose isolation
    // side differs (§4.1 *Insulation sections*).
    let mut entries = Vec::new();
    let mut prev_side: Option<&ArcStr> = None;
    for slot in &slots {
        let resolved = &input.windings[slot.winding_index];
        let side = &resolved.virtual_winding.isolation_side;
        if let Some(prev) = prev_side {
            if prev != side {
                let thickness = input.insulation.intersection_thickness(prev, side);
                if thickness > 0. {
                    entries.push(Entry::Insulation {
                        side_a: prev.clone(),
                        side_b: side.clone(),
                    });
                }
            }
        }
        entries.push(Entry::Conduction {
            winding_index: slot.winding_index,
            share: slot.share,
        });
        prev_side = Some(side);
    }

    let (layout_extent, _cross_extent) = layout_and_cross_extent(&window, orientation);

    let sizes: Vec<f64> = entries
        .iter()
        .map(|entry| match entry {
            Entry::Conduction { winding_index, share } => {
                needed_size(&input.windings[*winding_index], *share, &window, orientation)
            }
            Entry::Insulation { side_a, side_b } => input.insulation.intersection_thickness(side_a, side_b),
        })
        .collect();

    let total: f64 = sizes.iter().sum();
    if total > layout_extent && !input.wind_even_if_not_fit {
        return Err(CoilError::DoesNotFit {
            required: total,
            available: layout_extent,
            reason: "sum of section widths exceeds the winding window".into(),
        });
    }

    let offsets = sequence_offsets(&sizes, layout_extent, input.bobbin.sections_alignment);

    let mut occurrence_seen = vec![0usize; input.windings.len()];
    let mut sections = Vec::with_capacity(entries.len());
    for ((entry, &offset), &size) in entries.iter().zip(&offsets).zip(&sizes) {
        let footprint = footprint_for(&window, orientation, offset, size);
        match entry {
            Entry::Conduction { winding_index, share } => {
                let resolved = &input.windings[*winding_index];
                let occurrence = occurrence_seen[*winding_index];
                occurrence_seen[*winding_index] += 1;
                let name = if occurrence == 0 {
                    ArcStr::from(format!("{} section", resolved.virtual_winding.name()))
                } else {
                    ArcStr::from(format!("{} section {}", resolved.virtual_winding.name(), occurrence))
                };
                sections.push(Section {
                    name,
                    footprint,
                    kind: EntityKind::Conduction,
                    layers_orientation: Orientation::Contiguous,
                    layers_alignment: Alignment::Centered,
                    margin: Margin::ZERO,
                    partial_windings: vec![PartialWinding {
                        winding: resolved.virtual_winding.name(),
                        parallels_proportion: vec![*share; resolved.virtual_winding.parallels],
                    }],
                });
            }
            Entry::Insulation { side_a, side_b } => {
                sections.push(Section {
                    name: ArcStr::from(format!("{side_a}-{side_b} insulation {}", sections.len())),
                    footprint,
                    kind: EntityKind::Insulation,
                    layers_orientation: Orientation::Contiguous,
                    layers_alignment: Alignment::Centered,
                    margin: Margin::ZERO,
                    partial_windings: Vec::new(),
                });
            }
        }
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::prelude::Point;

    use crate::wire::WireSpec;
    use crate::winding::{virtualize, Winding};

    fn resolved(name: &str, turns: usize, parallels: usize, side: &str, wire: WireSpec) -> ResolvedWinding {
        let winding = Winding::new(name, turns, parallels, side, "w");
        let virt = virtualize(&[winding]).unwrap().remove(0);
        ResolvedWinding {
            virtual_winding: virt,
            wire,
        }
    }

    fn rectangular_bobbin(width: f64, height: f64, orientation: Orientation, alignment: Alignment) -> Bobbin {
        Bobbin {
            window: WindowShape::Rectangular {
                center: Point::zero(),
                width,
                height,
            },
            column_depth: 1.,
            column_width: 1.,
            column_thickness: 1.,
            wall_thickness: 0.,
            sections_orientation: orientation,
            sections_alignment: alignment,
        }
    }

    #[test]
    fn single_winding_produces_one_section() {
        let windings = vec![resolved("primary", 7, 1, "primary", WireSpec::round(0.45, 0.509, "copper"))];
        let bobbin = rectangular_bobbin(10., 10., Orientation::Contiguous, Alignment::Centered);
        let insulation = InsulationPlanner::new();
        let input = PartitionInput {
            windings: &windings,
            pattern: &[0],
            repetitions: 1,
            proportions: None,
            bobbin: &bobbin,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let sections = partition(&input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].partial_windings.len(), 1);
        assert_eq!(sections[0].partial_windings[0].parallels_proportion, vec![1.0]);
    }

    #[test]
    fn differing_isolation_sides_insert_insulation_section() {
        let windings = vec![
            resolved("primary", 23, 2, "primary", WireSpec::round(0.45, 0.509, "copper")),
            resolved("secondary", 42, 1, "secondary", WireSpec::round(0.45, 0.509, "copper")),
        ];
        let bobbin = rectangular_bobbin(20., 10., Orientation::Contiguous, Alignment::Centered);
        let mut insulation = InsulationPlanner::new();
        insulation.intersection_insulation(0.4, None, None);
        let input = PartitionInput {
            windings: &windings,
            pattern: &[0, 1],
            repetitions: 2,
            proportions: None,
            bobbin: &bobbin,
            insulation: &insulation,
            wind_even_if_not_fit: true,
        };
        let sections = partition(&input).unwrap();
        assert!(sections.iter().any(|s| s.is_insulation()));
    }

    #[test]
    fn pattern_referencing_unknown_index_fails() {
        let windings = vec![resolved("primary", 7, 1, "primary", WireSpec::round(0.45, 0.509, "copper"))];
        let bobbin = rectangular_bobbin(10., 10., Orientation::Contiguous, Alignment::Centered);
        let insulation = InsulationPlanner::new();
        let input = PartitionInput {
            windings: &windings,
            pattern: &[3],
            repetitions: 1,
            proportions: None,
            bobbin: &bobbin,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let err = partition(&input).unwrap_err();
        assert!(matches!(err, CoilError::InvalidConfiguration(_)));
    }

    #[test]
    fn oversized_winding_fails_without_overflow_policy() {
        let windings = vec![resolved("primary", 1000, 1, "primary", WireSpec::round(2., 2.2, "copper"))];
        let bobbin = rectangular_bobbin(5., 5., Orientation::Contiguous, Alignment::Centered);
        let insulation = InsulationPlanner::new();
        let input = PartitionInput {
            windings: &windings,
            pattern: &[0],
            repetitions: 1,
            proportions: None,
            bobbin: &bobbin,
            insulation: &insulation,
            wind_even_if_not_fit: false,
        };
        let err = partition(&input).unwrap_err();
        assert!(matches!(err, CoilError::DoesNotFit { .. }));
    }

    #[test]
    fn oversized_winding_with_overflow_policy_succeeds() {
        let windings = vec![resolved("primary", 1000, 1, "primary", WireSpec::round(2., 2.2, "copper"))];
        let bobbin = rectangular_bobbin(5., 5., Orientation::Contiguous, Alignment::Centered);
        let insulation = InsulationPlanner::new();
        let input = PartitionInput {
            windings: &windings,
            pattern: &[0],
            repetitions: 1,
            proportions: None,
            bobbin: &bobbin,
            insulation: &insulation,
            wind_even_if_not_fit: true,
        };
        let sections = partition(&input).unwrap();
        assert_eq!(sections.len(), 1);
    }
}
