//! An import prelude that re-exports commonly used items.

pub use crate::align::{AlignMode, AlignRectMut};
pub use crate::bbox::Bbox;
pub use crate::contains::{Containment, Contains};
pub use crate::corner::Corner;
pub use crate::dims::Dims;
pub use crate::dir::Dir;
pub use crate::orientation::{NamedOrientation, Orientation};
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::sector::Sector;
pub use crate::side::{Side, Sides};
pub use crate::sign::Sign;
pub use crate::span::Span;
pub use crate::transform::{Transform, Transformation};
