//! Traits for checking whether a shape contains another shape.

/// Ways in which an inner shape can be contained within an enclosing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// The shape is fully contained in the enclosing shape.
    Full,
    /// The shape is partially contained in the enclosing shape.
    Partial,
    /// The enclosing shape does not contain any part of the inner shape.
    None,
}

impl Containment {
    /// True if the containment is [`Containment::Full`].
    pub fn is_full(&self) -> bool {
        matches!(self, Containment::Full)
    }

    /// True if the containment is not [`Containment::None`].
    pub fn is_any(&self) -> bool {
        !matches!(self, Containment::None)
    }
}

/// Provides information on whether a shape contains another shape.
pub trait Contains<T> {
    /// Returns a [`Containment`] indicating how `other` is enclosed within this shape.
    fn contains(&self, other: &T) -> Containment;
}
