//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::corner::Corner;
use crate::dims::Dims;
use crate::dir::Dir;
use crate::intersect::Intersect;
use crate::point::Point;
use crate::prelude::Transform;
use crate::side::{Side, Sides};
use crate::span::Span;
use crate::transform::{HasTransformedView, TransformMut, Transformation, TranslateMut};
use crate::union::BoundingUnion;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners, in metres.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle with corners `(0, 0), (dims.w(), dims.h())`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let dims = Dims::new(100., 200.);
    /// let rect = Rect::from_dims(dims);
    /// assert_eq!(rect.top(), 200.);
    /// assert_eq!(rect.bot(), 0.);
    /// assert_eq!(rect.left(), 0.);
    /// assert_eq!(rect.right(), 100.);
    /// ```
    pub fn from_dims(dims: Dims) -> Self {
        Self::new(Point::zero(), Point::new(dims.w(), dims.h()))
    }

    /// Returns the center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 200., 100.);
    /// assert_eq!(rect.center(), Point::new(100., 50.));
    /// ```
    pub const fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// Creates a zero-area rectangle containing the given point.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_point(Point::new(25., 60.));
    /// assert_eq!(rect.top(), 60.);
    /// assert_eq!(rect.bot(), 60.);
    /// assert_eq!(rect.left(), 25.);
    /// assert_eq!(rect.right(), 25.);
    /// ```
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15., 20., 30., 40.);
    /// assert_eq!(rect.left(), 15.);
    /// assert_eq!(rect.bot(), 20.);
    /// assert_eq!(rect.right(), 30.);
    /// assert_eq!(rect.top(), 40.);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    ///
    /// If you want sides to be sorted for you, consider using [`Rect::new`] instead.
    #[inline]
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({}) <= right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({}) <= top ({})",
            bot,
            top
        );
        Self::new(Point::new(left, bot), Point::new(right, top))
    }

    /// Creates a rectangle from a lower left and upper right corner point,
    /// but returns `None` if the given sides would make the rectangle empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_corners_option(Point::new(15., 20.), Point::new(30., 40.));
    /// assert_eq!(rect, Some(Rect::from_sides(15., 20., 30., 40.)));
    ///
    /// let rect = Rect::from_corners_option(Point::new(10., 20.), Point::new(0., 40.));
    /// assert_eq!(rect, None);
    /// ```
    #[inline]
    pub fn from_corners_option(ll: Point, ur: Point) -> Option<Self> {
        if ll.x > ur.x || ll.y > ur.y {
            None
        } else {
            Some(Self { p0: ll, p1: ur })
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top),
    /// but returns `None` if the given sides would make the rectangle empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides_option(15., 20., 30., 40.);
    /// assert_eq!(rect, Some(Rect::from_sides(15., 20., 30., 40.)));
    ///
    /// let rect = Rect::from_sides_option(10., 20., 0., 40.);
    /// assert_eq!(rect, None);
    /// ```
    #[inline]
    pub fn from_sides_option(left: f64, bot: f64, right: f64, top: f64) -> Option<Self> {
        if left > right || bot > top {
            None
        } else {
            Some(Self::from_sides(left, bot, right, top))
        }
    }

    /// Creates a zero-area empty rectangle containing the given `(x, y)` coordinates.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        let p = Point::new(x, y);
        Self::from_point(p)
    }

    /// Creates a new rectangle from the given opposite corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::new(Point::new(15., 20.), Point::new(30., 40.));
    /// assert_eq!(rect.left(), 15.);
    /// assert_eq!(rect.bot(), 20.);
    /// assert_eq!(rect.right(), 30.);
    /// assert_eq!(rect.top(), 40.);
    ///
    /// let rect = Rect::new(Point::new(30., 20.), Point::new(15., 40.));
    /// assert_eq!(rect.left(), 15.);
    /// assert_eq!(rect.right(), 30.);
    /// ```
    #[inline]
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        let p0 = lower_left;
        let p1 = upper_right;
        Self {
            p0: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            p1: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// Creates a rectangle from horizontal and vertical [`Span`]s.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let hspan = Span::new(15., 30.);
    /// let vspan = Span::new(20., 40.);
    /// let rect = Rect::from_spans(hspan, vspan);
    /// assert_eq!(rect.left(), 15.);
    /// assert_eq!(rect.bot(), 20.);
    /// assert_eq!(rect.right(), 30.);
    /// assert_eq!(rect.top(), 40.);
    /// ```
    pub const fn from_spans(h: Span, v: Span) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// Returns the horizontal [`Span`] of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10., 20., 30., 40.);
    /// assert_eq!(rect.hspan(), Span::new(10., 30.));
    /// ```
    pub const fn hspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has p0.x <= p1.x
            Span::new_unchecked(self.p0.x, self.p1.x)
        }
    }

    /// Returns the vertical span of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10., 20., 30., 40.);
    /// assert_eq!(rect.vspan(), Span::new(20., 40.));
    /// ```
    pub const fn vspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has p0.y <= p1.y
            Span::new_unchecked(self.p0.y, self.p1.y)
        }
    }

    /// Returns a new [`Rect`] with the given `hspan` and the same vertical span.
    pub fn with_hspan(self, hspan: Span) -> Self {
        Rect::new(
            Point::new(hspan.start(), self.p0.y),
            Point::new(hspan.stop(), self.p1.y),
        )
    }

    /// Returns a [`Rect`] with the given `vspan` and the same horizontal span.
    pub fn with_vspan(self, vspan: Span) -> Self {
        Rect::new(
            Point::new(self.p0.x, vspan.start()),
            Point::new(self.p1.x, vspan.stop()),
        )
    }

    /// Returns a [`Rect`] with the given `span` in the given `dir`, and the current span in the
    /// other direction.
    pub fn with_span(self, span: Span, dir: Dir) -> Self {
        match dir {
            Dir::Vert => self.with_vspan(span),
            Dir::Horiz => self.with_hspan(span),
        }
    }

    /// Returns the horizontal width of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10., 20., 30., 50.);
    /// assert_eq!(rect.width(), 20.);
    /// ```
    #[inline]
    pub const fn width(&self) -> f64 {
        self.hspan().length()
    }

    /// Returns the vertical height of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10., 20., 30., 50.);
    /// assert_eq!(rect.height(), 30.);
    /// ```
    #[inline]
    pub const fn height(&self) -> f64 {
        self.vspan().length()
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub const fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the lowest/leftmost coordinate of the rectangle in the given direction.
    pub const fn lower_coord(&self, dir: Dir) -> f64 {
        self.span(dir).start()
    }

    /// Returns the highest/rightmost coordinate of the rectangle in the given direction.
    #[inline]
    pub const fn upper_coord(&self, dir: Dir) -> f64 {
        self.span(dir).stop()
    }

    /// Returns the span of the rectangle in the given direction.
    pub const fn span(&self, dir: Dir) -> Span {
        match dir {
            Dir::Horiz => self.hspan(),
            Dir::Vert => self.vspan(),
        }
    }

    /// Returns the span between the inner two edges of two rectangles along the given direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(10., 25., 30., 50.);
    /// let r2 = Rect::from_sides(20., 15., 70., 35.);
    /// assert_eq!(r1.inner_span(r2, Dir::Horiz), Span::new(20., 30.));
    /// assert_eq!(r1.inner_span(r2, Dir::Vert), Span::new(25., 35.));
    /// ```
    pub fn inner_span(&self, other: Self, dir: Dir) -> Span {
        let mut edges = [
            self.lower_coord(dir),
            self.upper_coord(dir),
            other.lower_coord(dir),
            other.upper_coord(dir),
        ];
        edges.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Span::new(edges[1], edges[2])
    }

    /// Returns the span between the outer two edges of two rectangles along the given direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(10., 25., 30., 50.);
    /// let r2 = Rect::from_sides(20., 15., 70., 35.);
    /// assert_eq!(r1.outer_span(r2, Dir::Horiz), Span::new(10., 70.));
    /// assert_eq!(r1.outer_span(r2, Dir::Vert), Span::new(15., 50.));
    /// ```
    pub fn outer_span(&self, other: Self, dir: Dir) -> Span {
        let mut edges = [
            self.lower_coord(dir),
            self.upper_coord(dir),
            other.lower_coord(dir),
            other.upper_coord(dir),
        ];
        edges.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Span::new(edges[0], edges[3])
    }

    /// Creates a rectangle from two [`Span`]s, where the first is parallel to `dir`,
    /// and the second is perpendicular.
    #[inline]
    pub fn from_dir_spans(dir: Dir, parallel_span: Span, perp_span: Span) -> Self {
        match dir {
            Dir::Vert => Self::from_spans(perp_span, parallel_span),
            Dir::Horiz => Self::from_spans(parallel_span, perp_span),
        }
    }

    /// Returns the length of this rectangle in the given direction.
    pub const fn length(&self, dir: Dir) -> f64 {
        self.span(dir).length()
    }

    /// Returns the direction in which the rectangle is longer, choosing [`Dir::Horiz`] if the sides
    /// are equal.
    #[inline]
    pub fn longer_dir(&self) -> Dir {
        if self.height() > self.width() {
            Dir::Vert
        } else {
            Dir::Horiz
        }
    }

    /// Returns the direction in which the rectangle is shorter, choosing [`Dir::Vert`] if the sides
    /// are equal.
    ///
    /// This always returns the opposite of [`Rect::longer_dir`].
    #[inline]
    pub fn shorter_dir(&self) -> Dir {
        self.longer_dir().other()
    }

    /// Computes the rectangular union of this `Rect` with another `Rect`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0., 0., 100., 200.);
    /// let r2 = Rect::from_sides(-50., 20., 120., 160.);
    /// assert_eq!(r1.union(r2), Rect::from_sides(-50., 0., 120., 200.));
    /// ```
    pub fn union(self, other: Self) -> Self {
        Rect::new(
            Point::new(self.p0.x.min(other.p0.x), self.p0.y.min(other.p0.y)),
            Point::new(self.p1.x.max(other.p1.x), self.p1.y.max(other.p1.y)),
        )
    }

    /// Calculates the rectangular union of all rectangles provided.
    ///
    /// # Panics
    ///
    /// This function panics if the provided iterator has no elements.
    /// If your iterator may be empty, consider using [`Rect::union_all_option`].
    pub fn union_all<T>(rects: impl Iterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        rects
            .fold(None, |acc: Option<Rect>, r| match acc {
                Some(acc) => Some(acc.union(r.into())),
                None => Some(r.into()),
            })
            .unwrap()
    }

    /// Calculates the rectangular union of all `Option<Rect>`s provided.
    ///
    /// All `None` elements in the iterator are ignored.
    /// If the iterator has no `Some(_)` elements, this function returns [`None`].
    pub fn union_all_option<T>(rects: impl Iterator<Item = T>) -> Option<Self>
    where
        T: Into<Option<Self>>,
    {
        rects
            .filter_map(|r| r.into())
            .fold(None, |acc, r| match acc {
                Some(acc) => Some(acc.union(r)),
                None => Some(r),
            })
    }

    /// Computes the rectangular intersection of this `Rect` with another `Rect`.
    ///
    /// Returns `None` if the intersection is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0., 0., 100., 200.);
    /// let r2 = Rect::from_sides(-50., 20., 120., 160.);
    /// assert_eq!(r1.intersection(r2), Some(Rect::from_sides(0., 20., 100., 160.)));
    ///
    /// let r1 = Rect::from_sides(0., 0., 100., 200.);
    /// let r2 = Rect::from_sides(120., -60., 240., 800.);
    /// assert_eq!(r1.intersection(r2), None);
    /// ```
    pub fn intersection(self, other: Self) -> Option<Self> {
        let pmin = Point::new(self.p0.x.max(other.p0.x), self.p0.y.max(other.p0.y));
        let pmax = Point::new(self.p1.x.min(other.p1.x), self.p1.y.min(other.p1.y));

        if pmin.x > pmax.x || pmin.y > pmax.y {
            return None;
        }

        Some(Rect::new(pmin, pmax))
    }

    /// Returns true if this rectangle's open interior overlaps `other`'s open interior.
    ///
    /// Unlike [`Rect::intersection`], rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.p0.x < other.p1.x
            && other.p0.x < self.p1.x
            && self.p0.y < other.p1.y
            && other.p0.y < self.p1.y
    }

    /// Expands the rectangle by `amount` on all sides.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 100., 200.);
    /// assert_eq!(rect.expand_all(20.), Rect::from_sides(-20., -20., 120., 220.));
    /// ```
    #[inline]
    pub fn expand_all(&self, amount: f64) -> Self {
        Self::new(
            Point::new(self.p0.x - amount, self.p0.y - amount),
            Point::new(self.p1.x + amount, self.p1.y + amount),
        )
    }

    /// Expands the rectangle by `amount` on both sides associated with the direction `dir`.
    #[inline]
    pub fn expand_dir(&self, dir: Dir, amount: f64) -> Self {
        match dir {
            Dir::Horiz => Self::new(
                Point::new(self.p0.x - amount, self.p0.y),
                Point::new(self.p1.x + amount, self.p1.y),
            ),
            Dir::Vert => Self::new(
                Point::new(self.p0.x, self.p0.y - amount),
                Point::new(self.p1.x, self.p1.y + amount),
            ),
        }
    }

    /// Expands the rectangle by `amount` on the given side.
    #[inline]
    pub fn expand_side(&self, side: Side, amount: f64) -> Self {
        match side {
            Side::Top => Self::new(
                Point::new(self.p0.x, self.p0.y),
                Point::new(self.p1.x, self.p1.y + amount),
            ),
            Side::Bot => Self::new(
                Point::new(self.p0.x, self.p0.y - amount),
                Point::new(self.p1.x, self.p1.y),
            ),
            Side::Right => Self::new(
                Point::new(self.p0.x, self.p0.y),
                Point::new(self.p1.x + amount, self.p1.y),
            ),
            Side::Left => Self::new(
                Point::new(self.p0.x - amount, self.p0.y),
                Point::new(self.p1.x, self.p1.y),
            ),
        }
    }

    /// Expands the rectangle by some (possibly different) amount on each side.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 100., 200.);
    /// let sides = Sides::new(10., 20., 30., 40.);
    /// assert_eq!(rect.expand_sides(sides), Rect::from_sides(-10., -20., 130., 240.));
    /// ```
    pub fn expand_sides(&self, sides: Sides<f64>) -> Self {
        Self::from_sides(
            self.p0.x - sides[Side::Left],
            self.p0.y - sides[Side::Bot],
            self.p1.x + sides[Side::Right],
            self.p1.y + sides[Side::Top],
        )
    }

    /// Shrinks the rectangle by `amount` on all sides.
    ///
    /// Returns [`None`] if shrinking would make the rectangle invalid.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 100., 200.);
    /// assert_eq!(rect.shrink_all(20.), Some(Rect::from_sides(20., 20., 80., 180.)));
    /// assert_eq!(rect.shrink_all(105.), None);
    /// ```
    #[inline]
    pub fn shrink_all(&self, amount: f64) -> Option<Self> {
        Self::from_sides_option(
            self.p0.x + amount,
            self.p0.y + amount,
            self.p1.x - amount,
            self.p1.y - amount,
        )
    }

    /// Shrinks the rectangle by `amount` on both sides associated with the direction `dir`.
    #[inline]
    pub fn shrink_dir(&self, dir: Dir, amount: f64) -> Option<Self> {
        match dir {
            Dir::Horiz => Self::from_sides_option(
                self.p0.x + amount,
                self.p0.y,
                self.p1.x - amount,
                self.p1.y,
            ),
            Dir::Vert => Self::from_sides_option(
                self.p0.x,
                self.p0.y + amount,
                self.p1.x,
                self.p1.y - amount,
            ),
        }
    }

    /// Shrinks the rectangle by `amount` on the given side.
    #[inline]
    pub fn shrink_side(&self, side: Side, amount: f64) -> Option<Self> {
        match side {
            Side::Top => {
                Self::from_sides_option(self.p0.x, self.p0.y, self.p1.x, self.p1.y - amount)
            }
            Side::Bot => {
                Self::from_sides_option(self.p0.x, self.p0.y + amount, self.p1.x, self.p1.y)
            }
            Side::Right => {
                Self::from_sides_option(self.p0.x, self.p0.y, self.p1.x - amount, self.p1.y)
            }
            Side::Left => {
                Self::from_sides_option(self.p0.x + amount, self.p0.y, self.p1.x, self.p1.y)
            }
        }
    }

    /// Shrinks the rectangle by some (possibly different) amount on each side.
    ///
    /// Returns [`None`] if shrinking would make the rectangle invalid.
    pub fn shrink_sides(&self, sides: Sides<f64>) -> Option<Self> {
        Self::from_sides_option(
            self.p0.x + sides[Side::Left],
            self.p0.y + sides[Side::Bot],
            self.p1.x - sides[Side::Right],
            self.p1.y - sides[Side::Top],
        )
    }

    /// Returns the dimensions of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(20., 20., 100., 200.);
    /// assert_eq!(rect.dims(), Dims::new(80., 180.));
    /// ```
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.width(), self.height())
    }

    /// The lower left corner of the rectangle.
    #[inline]
    pub fn lower_left(&self) -> Point {
        self.corner(Corner::LowerLeft)
    }

    /// The lower right corner of the rectangle.
    #[inline]
    pub fn lower_right(&self) -> Point {
        self.corner(Corner::LowerRight)
    }

    /// The upper left corner of the rectangle.
    #[inline]
    pub fn upper_left(&self) -> Point {
        self.corner(Corner::UpperLeft)
    }

    /// The upper right corner of the rectangle.
    #[inline]
    pub fn upper_right(&self) -> Point {
        self.corner(Corner::UpperRight)
    }

    /// Returns the desired corner of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(20., 20., 100., 200.);
    /// assert_eq!(rect.corner(Corner::LowerLeft), Point::new(20., 20.));
    /// assert_eq!(rect.corner(Corner::UpperRight), Point::new(100., 200.));
    /// ```
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::LowerLeft => self.p0,
            Corner::LowerRight => Point::new(self.p1.x, self.p0.y),
            Corner::UpperLeft => Point::new(self.p0.x, self.p1.y),
            Corner::UpperRight => self.p1,
        }
    }

    /// Returns the desired side of the rectangle.
    #[inline]
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top(),
            Side::Bot => self.bot(),
            Side::Right => self.right(),
            Side::Left => self.left(),
        }
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Intersect<Rect> for Rect {
    type Output = Self;

    fn intersect(&self, bounds: &Rect) -> Option<Self::Output> {
        self.intersection(*bounds)
    }
}

impl TranslateMut for Rect {
    fn translate_mut(&mut self, p: Point) {
        self.p0.translate_mut(p);
        self.p1.translate_mut(p);
    }
}

impl TransformMut for Rect {
    fn transform_mut(&mut self, trans: Transformation) {
        let (mut p0, mut p1) = (self.p0, self.p1);
        p0.transform_mut(trans);
        p1.transform_mut(trans);

        self.p0 = Point::new(p0.x.min(p1.x), p0.y.min(p1.y));
        self.p1 = Point::new(p0.x.max(p1.x), p0.y.max(p1.y));
    }
}

impl HasTransformedView for Rect {
    type TransformedView = Rect;

    fn transformed_view(&self, trans: Transformation) -> Self::TransformedView {
        self.transform(trans)
    }
}

impl BoundingUnion<Rect> for Rect {
    type Output = Rect;
    fn bounding_union(&self, other: &Rect) -> Self::Output {
        self.union(*other)
    }
}

impl From<Dims> for Rect {
    /// Converts the [`Dims`] to a [`Rect`] as described in [`Rect::from_dims`].
    #[inline]
    fn from(value: Dims) -> Self {
        Self::from_dims(value)
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, other: &Point) -> Containment {
        if other.x >= self.p0.x
            && other.x <= self.p1.x
            && other.y >= self.p0.y
            && other.y <= self.p1.y
        {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

impl Contains<Rect> for Rect {
    fn contains(&self, other: &Rect) -> Containment {
        if other.p0.x >= self.p0.x
            && other.p1.x <= self.p1.x
            && other.p0.y >= self.p0.y
            && other.p1.y <= self.p1.y
        {
            Containment::Full
        } else if self.intersection(*other).is_some() {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}
