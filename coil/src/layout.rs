//! A one-dimensional sequencing helper shared by the Partitioner, Packer, and Placer.
//!
//! Sections along a winding window's layout axis, layers along a section's cross axis, and
//! turns along a layer's turn axis are all "a row of sized elements positioned within an
//! available span under one of four [`Alignment`]s" (§4.1, §4.3). This module centralizes
//! that one piece of arithmetic so the three stages agree on its semantics.

use crate::bobbin::Alignment;

/// Computes the starting offset (from the low boundary of `available`) of each element in
/// `lengths`, laid out in order under `alignment`.
///
/// - `Centered`: the whole run is centered within `available`.
/// - `InnerOrTop`: the run is flush against the low boundary.
/// - `OuterOrBottom`: the run is flush against the high boundary.
/// - `Spread`: slack is distributed as equal gaps between elements so the first and last
///   touch the boundaries. A single element under `Spread` is centered (§9 Open Questions:
///   the source centers this case; this port preserves that behavior deliberately).
///
/// If the elements' total length exceeds `available`, the returned offsets overlap (a
/// negative gap under `Spread`, or a run that extends past the boundary otherwise); callers
/// use this as the overflow signal and report it via `fillingFactor` or `DoesNotFit` per the
/// active policy.
pub fn sequence_offsets(lengths: &[f64], available: f64, alignment: Alignment) -> Vec<f64> {
    if lengths.is_empty() {
        return Vec::new();
    }
    let total: f64 = lengths.iter().sum();
    match alignment {
        Alignment::Centered => {
            let mut offset = (available - total) / 2.;
            lengths
                .iter()
                .map(|&len| {
                    let start = offset;
                    offset += len;
                    start
                })
                .collect()
        }
        Alignment::InnerOrTop => {
            let mut offset = 0.;
            lengths
                .iter()
                .map(|&len| {
                    let start = offset;
                    offset += len;
                    start
                })
                .collect()
        }
        Alignment::OuterOrBottom => {
            let mut offset = available - total;
            lengths
                .iter()
                .map(|&len| {
                    let start = offset;
                    offset += len;
                    start
                })
                .collect()
        }
        Alignment::Spread => {
            if lengths.len() == 1 {
                return vec![(available - total) / 2.];
            }
            let gap = (available - total) / (lengths.len() - 1) as f64;
            let mut offset = 0.;
            lengths
                .iter()
                .map(|&len| {
                    let start = offset;
                    offset += len + gap;
                    start
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_offsets_split_slack_evenly() {
        let offsets = sequence_offsets(&[2., 2.], 10., Alignment::Centered);
        assert_eq!(offsets, vec![3., 5.]);
    }

    #[test]
    fn inner_top_is_flush_against_low_boundary() {
        let offsets = sequence_offsets(&[2., 3.], 10., Alignment::InnerOrTop);
        assert_eq!(offsets, vec![0., 2.]);
    }

    #[test]
    fn outer_bottom_is_flush_against_high_boundary() {
        let offsets = sequence_offsets(&[2., 3.], 10., Alignment::OuterOrBottom);
        assert_eq!(offsets, vec![5., 7.]);
        assert_eq!(offsets[1] + 3., 10.);
    }

    #[test]
    fn spread_touches_both_boundaries_with_equal_gaps() {
        let offsets = sequence_offsets(&[1., 1., 1.], 10., Alignment::Spread);
        assert_eq!(offsets[0], 0.);
        assert_eq!(offsets[2] + 1., 10.);
        assert_eq!(offsets[1] - offsets[0], offsets[2] - offsets[1]);
    }

    #[test]
    fn spread_with_one_element_is_centered() {
        let offsets = sequence_offsets(&[4.], 10., Alignment::Spread);
        assert_eq!(offsets, vec![3.]);
    }

    #[test]
    fn overflowing_lengths_overlap_rather_than_panic() {
        let offsets = sequence_offsets(&[6., 6.], 10., Alignment::Spread);
        assert!(offsets[1] < offsets[0] + 6.);
    }
}
