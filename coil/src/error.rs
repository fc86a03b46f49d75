//! Error types returned by the placement engine.

use arcstr::ArcStr;

/// A result type returning [`CoilError`].
pub type Result<T> = std::result::Result<T, CoilError>;

/// The error type returned by fallible placement-engine operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoilError {
    /// The requested turns do not fit within the available winding window.
    #[error("required dimension {required} exceeds available {available}: {reason}")]
    DoesNotFit {
        /// The dimension (length, width, or angular span) that was required.
        required: f64,
        /// The dimension that was actually available.
        available: f64,
        /// A human-readable explanation of which stage and axis failed to fit.
        reason: String,
    },
    /// A policy, pattern, or proportion value is internally contradictory.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A `woundWith` grouping is not symmetric/transitive, or crosses isolation sides.
    #[error("invalid winding grouping: {0}")]
    InvalidGrouping(String),
    /// No bobbin was supplied and the core shape is not recognized by the geometry provider.
    #[error("could not resolve a bobbin for core shape `{0}`")]
    UnresolvedBobbin(ArcStr),
    /// The insulation-material table has no entry for the required isolation-side pair.
    #[error("insulation lookup failed for isolation sides ({side_a}, {side_b}) at {breakdown_volts} V")]
    InsulationLookupFailed {
        /// The first isolation side in the pair.
        side_a: ArcStr,
        /// The second isolation side in the pair.
        side_b: ArcStr,
        /// The breakdown voltage the lookup was attempted at.
        breakdown_volts: f64,
    },
}
