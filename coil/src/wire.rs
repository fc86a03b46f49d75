//! Wire geometry: conducting vs. outer dimensions for each recognized wire construction.

use geometry::prelude::Dims;
use serde::{Deserialize, Serialize};

/// The physical construction of a wire, as read from the external wire registry (§6 *Wire registry*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireKind {
    /// A single round conductor with a circular insulation jacket.
    Round,
    /// A single rectangular conductor with a rectangular insulation jacket.
    Rectangular,
    /// A bundle of round strands served together; reports a strand count.
    Litz,
    /// A flat copper-pour conductor used on a planar/PCB layer.
    Planar,
    /// A thin copper foil conductor wound edgewise.
    Foil,
}

/// A wire specification as read from the external wire registry.
///
/// Only the fields named in §6 are read: `(type, nominalConductingDiameter|Width|Height,
/// nominalOuterDiameter|Width|Height, material, numberConductors)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSpec {
    /// The wire's physical construction.
    pub kind: WireKind,
    /// The conducting (bare copper) diameter, for round and litz wires.
    pub nominal_conducting_diameter: Option<f64>,
    /// The conducting (bare copper) width, for rectangular, planar, and foil wires.
    pub nominal_conducting_width: Option<f64>,
    /// The conducting (bare copper) height, for rectangular, planar, and foil wires.
    pub nominal_conducting_height: Option<f64>,
    /// The insulated outer diameter, for round and litz wires.
    pub nominal_outer_diameter: Option<f64>,
    /// The insulated outer width, for rectangular, planar, and foil wires.
    pub nominal_outer_width: Option<f64>,
    /// The insulated outer height, for rectangular, planar, and foil wires.
    pub nominal_outer_height: Option<f64>,
    /// The conductor material (e.g. `"copper"`).
    pub material: String,
    /// The number of parallel strands bundled under one jacket. `1` for all kinds but litz.
    pub number_conductors: usize,
}

impl WireSpec {
    /// Creates a round wire specification.
    pub fn round(conducting_diameter: f64, outer_diameter: f64, material: impl Into<String>) -> Self {
        Self {
            kind: WireKind::Round,
            nominal_conducting_diameter: Some(conducting_diameter),
            nominal_conducting_width: None,
            nominal_conducting_height: None,
            nominal_outer_diameter: Some(outer_diameter),
            nominal_outer_width: None,
            nominal_outer_height: None,
            material: material.into(),
            number_conductors: 1,
        }
    }

    /// Creates a litz wire specification from its strand count and per-strand diameters.
    pub fn litz(
        strand_conducting_diameter: f64,
        bundle_outer_diameter: f64,
        strands: usize,
        material: impl Into<String>,
    ) -> Self {
        Self {
            kind: WireKind::Litz,
            nominal_conducting_diameter: Some(strand_conducting_diameter),
            nominal_conducting_width: None,
            nominal_conducting_height: None,
            nominal_outer_diameter: Some(bundle_outer_diameter),
            nominal_outer_width: None,
            nominal_outer_height: None,
            material: material.into(),
            number_conductors: strands,
        }
    }

    /// The wire's outer footprint width, i.e. the dimension it occupies along the
    /// cross-layer or turn-stacking axis, depending on orientation.
    ///
    /// For round and litz wires this is the outer diameter in both axes.
    pub fn outer_width(&self) -> f64 {
        match self.kind {
            WireKind::Round | WireKind::Litz => self
                .nominal_outer_diameter
                .expect("round/litz wire missing nominal_outer_diameter"),
            WireKind::Rectangular | WireKind::Planar | WireKind::Foil => self
                .nominal_outer_width
                .expect("rectangular/planar/foil wire missing nominal_outer_width"),
        }
    }

    /// The wire's outer footprint height.
    pub fn outer_height(&self) -> f64 {
        match self.kind {
            WireKind::Round | WireKind::Litz => self
                .nominal_outer_diameter
                .expect("round/litz wire missing nominal_outer_diameter"),
            WireKind::Rectangular | WireKind::Planar | WireKind::Foil => self
                .nominal_outer_height
                .expect("rectangular/planar/foil wire missing nominal_outer_height"),
        }
    }

    /// The wire's outer footprint as a [`Dims`] (width, height).
    pub fn outer_dims(&self) -> Dims {
        Dims::new(self.outer_width(), self.outer_height())
    }

    /// The conducting (bare copper) cross-sectional width.
    pub fn conducting_width(&self) -> f64 {
        match self.kind {
            WireKind::Round | WireKind::Litz => self
                .nominal_conducting_diameter
                .expect("round/litz wire missing nominal_conducting_diameter"),
            WireKind::Rectangular | WireKind::Planar | WireKind::Foil => self
                .nominal_conducting_width
                .expect("rectangular/planar/foil wire missing nominal_conducting_width"),
        }
    }

    /// The conducting (bare copper) cross-sectional height.
    pub fn conducting_height(&self) -> f64 {
        match self.kind {
            WireKind::Round | WireKind::Litz => self
                .nominal_conducting_diameter
                .expect("round/litz wire missing nominal_conducting_diameter"),
            WireKind::Rectangular | WireKind::Planar | WireKind::Foil => self
                .nominal_conducting_height
                .expect("rectangular/planar/foil wire missing nominal_conducting_height"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_wire_reports_uniform_outer_dims() {
        let wire = WireSpec::round(0.45, 0.509, "copper");
        assert_eq!(wire.outer_width(), 0.509);
        assert_eq!(wire.outer_height(), 0.509);
        assert_eq!(wire.outer_dims(), Dims::new(0.509, 0.509));
    }

    #[test]
    fn litz_wire_reports_strand_count() {
        let wire = WireSpec::litz(0.1, 1.2, 40, "copper");
        assert_eq!(wire.number_conductors, 40);
        assert_eq!(wire.outer_width(), 1.2);
    }

    #[test]
    fn rectangular_wire_reports_distinct_width_and_height() {
        let wire = WireSpec {
            kind: WireKind::Rectangular,
            nominal_conducting_diameter: None,
            nominal_conducting_width: Some(2.0),
            nominal_conducting_height: Some(0.8),
            nominal_outer_diameter: None,
            nominal_outer_width: Some(2.1),
            nominal_outer_height: Some(0.9),
            material: "copper".into(),
            number_conductors: 1,
        };
        assert_eq!(wire.outer_width(), 2.1);
        assert_eq!(wire.outer_height(), 0.9);
    }
}
