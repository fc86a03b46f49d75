//! Lays out one conduction section's layers: axis resolution, slot planning, and the
//! resulting footprints. Shared by the Packer (which turns this into [`Layer`] records) and
//! the Placer (which turns the same plan into [`Turn`] records), so the two stages agree on
//! geometry without threading extra state between them (§9 "three pure stage functions").

use crate::axis::{dim_along, layer_and_turn_axes, representative_radius, section_axes, sub_footprint, Axis};
use crate::bobbin::Orientation;
use crate::distribute::{plan_section_layers, SectionLayerPlan};
use crate::error::Result;
use crate::insulation::InsulationPlanner;
use crate::layout::sequence_offsets;
use crate::model::{Footprint, Section};
use crate::winding::ResolvedWinding;

/// The resolved geometry and conductor plan for one conduction section.
pub struct SectionLayout<'a> {
    /// The axis turns stack along within a layer.
    pub turn_axis: Axis,
    /// The full extent available along the turn axis.
    pub turn_axis_dim: f64,
    /// The representative radius used for polar angular-footprint conversions.
    pub representative_radius: f64,
    /// The conductor distribution plan (§4.2).
    pub plan: SectionLayerPlan<'a>,
    /// Each conduction layer's footprint, in the same order as `plan.layers`.
    pub conduction_footprints: Vec<Footprint>,
    /// Each interlayer insulation gap's footprint, one fewer than `conduction_footprints`
    /// when present (empty if `interlayerInsulation` is unset for this section's windings).
    pub insulation_footprints: Vec<Footprint>,
}

/// Resolves axes, plans conductor slots, and builds layer footprints for `section` (§4.2).
pub fn layout_section<'a>(
    section: &Section,
    windings: &'a [ResolvedWinding],
    sections_orientation: Orientation,
    insulation: &InsulationPlanner,
    wind_even_if_not_fit: bool,
) -> Result<SectionLayout<'a>> {
    let (section_axis, cross_axis) = section_axes(&section.footprint, sections_orientation);
    let (layer_axis, turn_axis) = layer_and_turn_axes(section_axis, cross_axis, section.layers_orientation);
    let radius = representative_radius(&section.footprint);
    let turn_axis_dim = dim_along(&section.footprint, turn_axis);

    let plan = plan_section_layers(section, windings, turn_axis, turn_axis_dim, radius, wind_even_if_not_fit)?;

    let interlayer_gap = plan
        .partials
        .iter()
        .map(|p| insulation.interlayer_thickness(&p.resolved.virtual_winding.name()))
        .fold(0.0_f64, f64::max);
    let layer_thickness = plan
        .partials
        .iter()
        .map(|p| crate::axis::wire_dim_along(&p.resolved.wire, layer_axis, radius))
        .fold(0.0_f64, f64::max);

    let layer_count = plan.layers.len();
    let has_gaps = interlayer_gap > 0. && layer_count > 1;
    let mut sizes = Vec::new();
    for i in 0..layer_count {
        sizes.push(layer_thickness);
        if i + 1 < layer_count && has_gaps {
            sizes.push(interlayer_gap);
        }
    }
    let layer_axis_available = dim_along(&section.footprint, layer_axis);
    let offsets = sequence_offsets(&sizes, layer_axis_available, section.layers_alignment);

    let mut conduction_footprints = Vec::with_capacity(layer_count);
    let mut insulation_footprints = Vec::with_capacity(layer_count.saturating_sub(1));
    for (i, (&offset, &size)) in offsets.iter().zip(&sizes).enumerate() {
        let footprint = sub_footprint(&section.footprint, layer_axis, offset, size);
        if has_gaps && i % 2 == 1 {
            insulation_footprints.push(footprint);
        } else {
            conduction_footprints.push(footprint);
        }
    }

    Ok(SectionLayout {
        turn_axis,
        turn_axis_dim,
        representative_radius: radius,
        plan,
        conduction_footprints,
        insulation_footprints,
    })
}
