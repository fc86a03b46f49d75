//! A width and a height with no specified location, in metres.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::point::Point;
use crate::rect::Rect;

/// A rectangular dimension with no specified location.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Dims {
    w: f64,
    h: f64,
}

impl Dims {
    /// Creates a new [`Dims`] from a width and height.
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Creates a new [`Dims`] with width and height equal to `value`.
    pub fn square(value: f64) -> Self {
        Self { w: value, h: value }
    }

    /// Returns the dimension along the given axis.
    pub fn dim(&self, dir: Dir) -> f64 {
        match dir {
            Dir::Vert => self.h,
            Dir::Horiz => self.w,
        }
    }

    /// Returns the direction of the longer dimension. Ties favor [`Dir::Horiz`].
    pub fn longer_dir(&self) -> Dir {
        if self.w >= self.h {
            Dir::Horiz
        } else {
            Dir::Vert
        }
    }

    /// Swaps width and height.
    pub fn transpose(self) -> Self {
        Self {
            w: self.h,
            h: self.w,
        }
    }

    /// The width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.w
    }

    /// The height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.h
    }

    /// Shorthand for [`Dims::width`].
    #[inline]
    pub fn w(&self) -> f64 {
        self.width()
    }

    /// Shorthand for [`Dims::height`].
    #[inline]
    pub fn h(&self) -> f64 {
        self.height()
    }

    /// The area `w * h`.
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Converts this dimension into a [`Rect`] with lower-left corner at the origin.
    #[inline]
    pub fn into_rect(self) -> Rect {
        Rect::from_dims(self)
    }

    /// Converts this dimension into a [`Point`] `(w, h)`.
    #[inline]
    pub fn into_point(self) -> Point {
        Point::new(self.w(), self.h())
    }
}

impl std::ops::Add<Dims> for Dims {
    type Output = Self;
    fn add(self, rhs: Dims) -> Self::Output {
        Self {
            w: self.w + rhs.w,
            h: self.h + rhs.h,
        }
    }
}

impl std::ops::Sub<Dims> for Dims {
    type Output = Self;
    fn sub(self, rhs: Dims) -> Self::Output {
        Self {
            w: self.w - rhs.w,
            h: self.h - rhs.h,
        }
    }
}

impl std::ops::Mul<f64> for Dims {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            w: self.w * rhs,
            h: self.h * rhs,
        }
    }
}

impl From<Rect> for Dims {
    #[inline]
    fn from(value: Rect) -> Self {
        value.dims()
    }
}

impl From<Point> for Dims {
    #[inline]
    fn from(value: Point) -> Self {
        Self::new(value.x, value.y)
    }
}
