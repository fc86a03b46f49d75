//! A geometric placement engine for magnetic component windings.
//!
//! Given a functional description of a component's windings and wires, this crate computes
//! the physical Section → Layer → Turn hierarchy that places them inside a bobbin's winding
//! window, in either the Cartesian coordinate system of a rectangular bobbin or the polar
//! coordinate system of a toroidal core.
//!
//! The pipeline runs in three stages:
//!
//! - the Partitioner ([`partition`]) divides the winding window into sections, one per
//!   winding occurrence of the configured pattern;
//! - the Packer ([`pack`]) divides each section into layers;
//! - the Placer ([`place`]) places each layer's individual turns.
//!
//! [`Coil`] drives all three stages end-to-end, including the rewind loop that relaxes
//! fit constraints on failure, and is the entry point most callers want.

pub mod axis;
pub mod bobbin;
pub mod coil;
pub mod compact;
pub mod distribute;
pub mod error;
pub mod insulation;
pub mod layerize;
pub mod layout;
pub mod model;
pub mod pack;
pub mod partition;
pub mod place;
pub mod planar;
pub mod policy;
pub mod winding;
pub mod wire;
pub mod wire_table;

pub use axis::Axis;
pub use bobbin::{resolve_bobbin, Alignment, Bobbin, CoreGeometry, Orientation, WindowShape};
pub use coil::{Coil, CoilBuilder, PlacementOutcome};
pub use error::{CoilError, Result};
pub use insulation::{InsulationConstraint, InsulationPlanner};
pub use model::{
    CoordinateSystem, EntityKind, Footprint, Layer, Margin, PartialWinding, Section, Turn,
    TurnOrder, TurnOrientation, WindingStyle,
};
pub use pack::pack;
pub use partition::partition;
pub use place::place;
pub use policy::{Policies, PoliciesBuilder};
pub use winding::{resolve_windings, virtualize, IsolationSide, ResolvedWinding, VirtualWinding, Winding};
pub use wire::{WireKind, WireSpec};
