//! Insulation planning: inter-section and inter-layer thickness/material contracts (§4.4).
//!
//! The insulation-material table itself (§6 *Insulation-material table*) is owned by the
//! caller and supplied as a lookup closure at resolution time; this module only tracks the
//! thickness/material overrides the caller has registered via [`InsulationPlanner`]'s setters.

use arcstr::ArcStr;

use crate::error::{CoilError, Result};

/// One registered thickness/material override, optionally scoped to a single winding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsulationConstraint {
    /// The minimum thickness this constraint requires.
    pub thickness: f64,
    /// An explicit material to use, if the caller specified one.
    pub material: Option<ArcStr>,
    /// If set, this constraint applies only to section/layer pairs involving this winding.
    pub apply_to_winding: Option<ArcStr>,
}

/// Tracks the intersection (inter-section) and interlayer (inter-layer) insulation
/// constraints registered by the caller, and resolves materials against an external table.
#[derive(Debug, Clone, Default)]
pub struct InsulationPlanner {
    intersection_constraints: Vec<InsulationConstraint>,
    interlayer_constraints: Vec<InsulationConstraint>,
}

impl InsulationPlanner {
    /// Creates an insulation planner with no registered constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a minimum thickness between any two sections (§4.4 `intersectionInsulation`).
    pub fn intersection_insulation(
        &mut self,
        thickness: f64,
        material: Option<ArcStr>,
        apply_to_winding: Option<ArcStr>,
    ) {
        self.intersection_constraints.push(InsulationConstraint {
            thickness,
            material,
            apply_to_winding,
        });
    }

    /// Registers a minimum thickness between any two layers (§4.4 `interlayerInsulation`).
    pub fn interlayer_insulation(
        &mut self,
        thickness: f64,
        material: Option<ArcStr>,
        apply_to_winding: Option<ArcStr>,
    ) {
        self.interlayer_constraints.push(InsulationConstraint {
            thickness,
            material,
            apply_to_winding,
        });
    }

    /// Overrides both intersection and interlayer thickness uniformly (§4.4
    /// `customThicknessInsulation`).
    pub fn custom_thickness_insulation(&mut self, thickness: f64) {
        self.intersection_constraints.push(InsulationConstraint {
            thickness,
            material: None,
            apply_to_winding: None,
        });
        self.interlayer_constraints.push(InsulationConstraint {
            thickness,
            material: None,
            apply_to_winding: None,
        });
    }

    /// The minimum required intersection thickness between two sections carrying
    /// `winding_a` and `winding_b`, among all registered constraints applicable to the pair.
    pub fn intersection_thickness(&self, winding_a: &str, winding_b: &str) -> f64 {
        self.intersection_constraints
            .iter()
            .filter(|c| {
                c.apply_to_winding
                    .as_deref()
                    .map_or(true, |w| w == winding_a || w == winding_b)
            })
            .map(|c| c.thickness)
            .fold(0., f64::max)
    }

    /// The minimum required interlayer thickness for layers carrying `winding`.
    pub fn interlayer_thickness(&self, winding: &str) -> f64 {
        self.interlayer_constraints
            .iter()
            .filter(|c| c.apply_to_winding.as_deref().map_or(true, |w| w == winding))
            .map(|c| c.thickness)
            .fold(0., f64::max)
    }

    /// Resolves the material for an already-planned insulation layer or section by looking
    /// up the adjacent windings' isolation sides in `table` (§4.4
    /// `resolveInsulationLayerMaterial`).
    ///
    /// Fails with [`CoilError::InsulationLookupFailed`] if `table` has no entry for the pair.
    pub fn resolve_insulation_material(
        &self,
        side_a: &str,
        side_b: &str,
        breakdown_volts: f64,
        table: impl Fn(&str, &str, f64) -> Option<(ArcStr, f64)>,
    ) -> Result<(ArcStr, f64)> {
        table(side_a, side_b, breakdown_volts).ok_or_else(|| CoilError::InsulationLookupFailed {
            side_a: side_a.into(),
            side_b: side_b.into(),
            breakdown_volts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_thickness_takes_the_maximum_applicable_constraint() {
        let mut planner = InsulationPlanner::new();
        planner.intersection_insulation(0.1, None, None);
        planner.intersection_insulation(0.3, None, Some("primary".into()));
        assert_eq!(planner.intersection_thickness("primary", "secondary"), 0.3);
        assert_eq!(planner.intersection_thickness("secondary", "tertiary"), 0.1);
    }

    #[test]
    fn custom_thickness_insulation_sets_both_kinds() {
        let mut planner = InsulationPlanner::new();
        planner.custom_thickness_insulation(0.2);
        assert_eq!(planner.intersection_thickness("a", "b"), 0.2);
        assert_eq!(planner.interlayer_thickness("a"), 0.2);
    }

    #[test]
    fn resolve_insulation_material_fails_when_table_has_no_entry() {
        let planner = InsulationPlanner::new();
        let err = planner
            .resolve_insulation_material("primary", "secondary", 400., |_, _, _| None)
            .unwrap_err();
        assert!(matches!(err, CoilError::InsulationLookupFailed { .. }));
    }

    #[test]
    fn resolve_insulation_material_succeeds_with_table_entry() {
        let planner = InsulationPlanner::new();
        let (material, thickness) = planner
            .resolve_insulation_material("primary", "secondary", 400., |_, _, _| {
                Some((ArcStr::from("polyester tape"), 0.15))
            })
            .unwrap();
        assert_eq!(material.as_str(), "polyester tape");
        assert_eq!(thickness, 0.15);
    }
}
