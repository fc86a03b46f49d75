//! The realized geometric hierarchy: sections, layers, and turns (§3).

use arcstr::ArcStr;
use geometry::prelude::{Dims, Point, Rect, Sector};
use serde::{Deserialize, Serialize};

use crate::bobbin::{Alignment, Orientation};

/// Whether a section or layer is allocated to conduction (carries turns) or insulation
/// (carries no turns, exists only as a dielectric/mechanical spacer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// Carries turns of one or more partial windings.
    Conduction,
    /// Carries no turns; exists for dielectric clearance or mechanical spacing.
    Insulation,
}

/// Which coordinate system a section, layer, or turn is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinateSystem {
    /// A rectangular bobbin, coordinates in metres.
    Cartesian,
    /// A round (toroidal) core, radii in metres and angles in degrees on `[0, 360)`.
    Polar,
}

/// The footprint of a section, layer, or turn: a [`Rect`] in Cartesian mode or a [`Sector`]
/// in polar mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "coordinateSystem")]
pub enum Footprint {
    /// A rectangular footprint, in a Cartesian winding window.
    Cartesian(Rect),
    /// An annular-sector footprint, in a polar winding window.
    Polar(Sector),
}

impl Footprint {
    /// The coordinate system this footprint belongs to.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Footprint::Cartesian(_) => CoordinateSystem::Cartesian,
            Footprint::Polar(_) => CoordinateSystem::Polar,
        }
    }

    /// The [`Rect`] footprint, if this is a Cartesian footprint.
    pub fn as_cartesian(&self) -> Option<Rect> {
        match self {
            Footprint::Cartesian(r) => Some(*r),
            Footprint::Polar(_) => None,
        }
    }

    /// The [`Sector`] footprint, if this is a polar footprint.
    pub fn as_polar(&self) -> Option<Sector> {
        match self {
            Footprint::Cartesian(_) => None,
            Footprint::Polar(s) => Some(*s),
        }
    }

    /// The center point of this footprint.
    pub fn center(&self) -> Point {
        match self {
            Footprint::Cartesian(r) => r.center(),
            Footprint::Polar(s) => s.center(),
        }
    }
}

/// A dead-zone margin pair along a section's layer axis, or a layer's turn axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margin {
    /// The inner (Cartesian: bottom; polar: start-angle) margin.
    pub low: f64,
    /// The outer (Cartesian: top; polar: stop-angle) margin.
    pub high: f64,
}

impl Margin {
    /// A zero margin on both sides.
    pub const ZERO: Margin = Margin { low: 0., high: 0. };

    /// Creates a new margin pair.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Rebalances `self` around `slack`, the total available slack to distribute, so that
    /// `low` and `high` become equal while their sum is preserved. Used by
    /// `coilEqualizeMargins` (§6, §9a).
    pub fn equalized(&self) -> Self {
        let half = (self.low + self.high) / 2.;
        Self { low: half, high: half }
    }
}

/// A named share of a winding's turns placed within one section or layer (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialWinding {
    /// The source winding's name (or the virtual winding's display name).
    pub winding: ArcStr,
    /// The proportion of each parallel strand's turns held here, one entry per parallel index.
    pub parallels_proportion: Vec<f64>,
}

impl PartialWinding {
    /// The number of turns this partial winding contributes, given the winding's total
    /// turn count `turns_total`.
    pub fn turn_count(&self, turns_total: usize) -> usize {
        let share: f64 = self.parallels_proportion.iter().sum::<f64>() / self.parallels_proportion.len().max(1) as f64;
        (share * turns_total as f64).round() as usize
    }
}

/// A rectangular (Cartesian) or annular-sector (polar) region of a winding window (§3 *Section*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The section's identity name.
    pub name: ArcStr,
    /// The section's footprint.
    pub footprint: Footprint,
    /// Whether this section carries turns or is a dielectric spacer.
    pub kind: EntityKind,
    /// How this section's layers are laid out relative to each other.
    pub layers_orientation: Orientation,
    /// How this section's layers are aligned along their cross axis.
    pub layers_alignment: Alignment,
    /// The dead-zone margin pair along the section's layer axis.
    pub margin: Margin,
    /// The windings (or shares of virtual windings) this section carries. Empty for
    /// insulation sections.
    pub partial_windings: Vec<PartialWinding>,
}

impl Section {
    /// True if this section carries no turns.
    pub fn is_insulation(&self) -> bool {
        self.kind == EntityKind::Insulation
    }
}

/// The order in which parallels and turns are emitted into a conduction layer (§4.2
/// *Winding styles*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindingStyle {
    /// For each parallel, emit all of its turns before moving to the next parallel.
    ConsecutiveTurns,
    /// For each turn index, emit all parallels before moving to the next turn index.
    ConsecutiveParallels,
}

/// A conduction or insulation slab within a [`Section`] (§3 *Layer*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// The layer's identity name.
    pub name: ArcStr,
    /// The parent section's name.
    pub section: ArcStr,
    /// The layer's footprint.
    pub footprint: Footprint,
    /// Whether this layer carries turns or is a dielectric spacer.
    pub kind: EntityKind,
    /// How this layer's turns are laid out relative to each other.
    pub turns_orientation: Orientation,
    /// How this layer's turns are aligned along the turn axis.
    pub turns_alignment: Alignment,
    /// The windings (or shares of virtual windings) this layer carries.
    pub partial_windings: Vec<PartialWinding>,
    /// The insulation material used, for insulation layers resolved by §4.4.
    pub insulation_material: Option<ArcStr>,
    /// The fraction of the layer's cross-axis dimension occupied by turns. May exceed `1.0`
    /// when `coilWindEvenIfNotFit` permits overflow.
    pub filling_factor: f64,
    /// The order turns were emitted into this layer. `None` for insulation layers.
    pub winding_style: Option<WindingStyle>,
}

impl Layer {
    /// True if this layer carries no turns.
    pub fn is_insulation(&self) -> bool {
        self.kind == EntityKind::Insulation
    }
}

/// The rotational sense of an individual turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnOrientation {
    /// Wound clockwise.
    Clockwise,
    /// Wound counter-clockwise.
    CounterClockwise,
}

/// A single geometric conductor placement (§3 *Turn*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    /// `{winding} parallel {p} turn {t}`.
    pub name: ArcStr,
    /// The source winding's name.
    pub winding: ArcStr,
    /// The parallel strand index, `0 <= p < P`.
    pub parallel_index: usize,
    /// The turn index, `0 <= t < N`.
    pub turn_index: usize,
    /// The parent section's name.
    pub section: ArcStr,
    /// The parent layer's name.
    pub layer: ArcStr,
    /// The turn's footprint (outer dimensions at its placed coordinate).
    pub footprint: Footprint,
    /// The turn's winding sense.
    pub orientation: TurnOrientation,
    /// The turn's rotation angle, in degrees; only meaningful in polar mode.
    pub rotation_angle: Option<f64>,
    /// An estimate of the physical conductor length of this turn.
    pub estimated_length: f64,
    /// In polar mode: the Cartesian midpoints of the turn's left and right arc endpoints,
    /// for downstream field and loss analysis (§4.3 *Additional coordinates*).
    pub additional_coordinates: Option<(Point, Point)>,
}

/// The ordering key used for deterministic turn emission: `(section index, layer index
/// within section, turn index within layer)` (§5 *Ordering guarantees*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnOrder {
    /// Index of the turn's section among all sections.
    pub section_index: usize,
    /// Index of the turn's layer within its section.
    pub layer_index: usize,
    /// Index of the turn within its layer.
    pub turn_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_equalizes_around_mean() {
        let margin = Margin::new(2., 6.);
        assert_eq!(margin.equalized(), Margin::new(4., 4.));
    }

    #[test]
    fn partial_winding_turn_count_scales_by_share() {
        let pw = PartialWinding {
            winding: "primary".into(),
            parallels_proportion: vec![0.5],
        };
        assert_eq!(pw.turn_count(10), 5);
    }

    #[test]
    fn turn_order_sorts_lexicographically() {
        let mut orders = vec![
            TurnOrder { section_index: 0, layer_index: 1, turn_index: 0 },
            TurnOrder { section_index: 0, layer_index: 0, turn_index: 5 },
            TurnOrder { section_index: 0, layer_index: 0, turn_index: 0 },
        ];
        orders.sort();
        assert_eq!(
            orders[0],
            TurnOrder { section_index: 0, layer_index: 0, turn_index: 0 }
        );
        assert_eq!(
            orders[2],
            TurnOrder { section_index: 0, layer_index: 1, turn_index: 0 }
        );
    }
}
