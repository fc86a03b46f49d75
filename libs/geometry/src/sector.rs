//! Annular sectors: the polar counterpart of [`Rect`] for toroidal winding windows.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::point::Point;
use crate::rect::Rect;
use crate::span::Span;
use crate::wrap_angle;

/// A region of an annulus bounded by a radial [`Span`] and an angular span,
/// in degrees.
///
/// Where a [`Rect`] describes a region of a rectangular winding window in
/// Cartesian coordinates, a [`Sector`] describes a region of a toroidal
/// winding window in polar coordinates: radii are measured in metres from
/// `center`, and angles are measured in degrees, increasing counterclockwise
/// from the positive x-axis.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let sector = Sector::new(Point::zero(), Span::new(10., 12.), 0., 90.);
/// assert_eq!(sector.inner_radius(), 10.);
/// assert_eq!(sector.outer_radius(), 12.);
/// assert_eq!(sector.angle_span(), 90.);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Sector {
    center: Point,
    radial: Span,
    angle_start: f64,
    angle_span: f64,
}

impl Sector {
    /// Creates a new sector.
    ///
    /// `angle_start` is wrapped into `[0, 360)`.
    ///
    /// # Panics
    ///
    /// Panics if `radial` has a negative start, or if `angle_span` is
    /// negative or greater than 360.
    pub fn new(center: Point, radial: Span, angle_start: f64, angle_span: f64) -> Self {
        assert!(
            radial.start() >= 0.,
            "sector inner radius must be non-negative"
        );
        assert!(
            (0. ..=360.).contains(&angle_span),
            "sector angular span must lie within [0, 360]"
        );
        Self {
            center,
            radial,
            angle_start: wrap_angle(angle_start),
            angle_span,
        }
    }

    /// Creates a full annulus (angular span of 360 degrees) at the given center.
    pub fn annulus(center: Point, radial: Span) -> Self {
        Self::new(center, radial, 0., 360.)
    }

    /// The center of the sector's originating circle.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The radial span, from inner to outer radius.
    pub const fn radial(&self) -> Span {
        self.radial
    }

    /// The inner radius.
    pub fn inner_radius(&self) -> f64 {
        self.radial.start()
    }

    /// The outer radius.
    pub fn outer_radius(&self) -> f64 {
        self.radial.stop()
    }

    /// The starting angle, in degrees, wrapped to `[0, 360)`.
    pub const fn angle_start(&self) -> f64 {
        self.angle_start
    }

    /// The angular span, in degrees.
    pub const fn angle_span(&self) -> f64 {
        self.angle_span
    }

    /// The ending angle, in degrees. May exceed 360 if the sector wraps past
    /// the zero angle.
    pub fn angle_stop(&self) -> f64 {
        self.angle_start + self.angle_span
    }

    /// Whether this sector spans a full circle.
    pub fn is_full_annulus(&self) -> bool {
        self.angle_span >= 360.
    }

    /// The radial thickness (outer minus inner radius) of the sector.
    pub fn thickness(&self) -> f64 {
        self.radial.length()
    }

    /// The arc length at the mean radius of the sector.
    pub fn mean_arc_length(&self) -> f64 {
        let mean_radius = (self.inner_radius() + self.outer_radius()) / 2.;
        mean_radius * self.angle_span.to_radians()
    }

    /// The area enclosed by the sector.
    pub fn area(&self) -> f64 {
        let frac = self.angle_span / 360.;
        std::f64::consts::PI * (self.outer_radius().powi(2) - self.inner_radius().powi(2)) * frac
    }

    /// Returns whether `angle` (in degrees) falls within this sector's
    /// angular span, wrapping as necessary.
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.is_full_annulus() {
            return true;
        }
        let angle = wrap_angle(angle);
        let stop = self.angle_stop();
        if stop <= 360. {
            angle >= self.angle_start && angle <= stop
        } else {
            angle >= self.angle_start || angle <= stop - 360.
        }
    }

    /// Returns the point at the given radius and angle (degrees), relative to
    /// this sector's center.
    pub fn point_at(&self, radius: f64, angle: f64) -> Point {
        let rad = angle.to_radians();
        Point::new(
            self.center.x + radius * rad.cos(),
            self.center.y + radius * rad.sin(),
        )
    }

    /// Splits this sector into `n` equal angular subsectors, ordered from
    /// `angle_start` counterclockwise.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn split_angular(&self, n: usize) -> Vec<Sector> {
        assert!(n > 0, "cannot split a sector into zero pieces");
        let step = self.angle_span / n as f64;
        (0..n)
            .map(|i| {
                Sector::new(
                    self.center,
                    self.radial,
                    self.angle_start + step * i as f64,
                    step,
                )
            })
            .collect()
    }

    /// Splits this sector into concentric subsectors whose radial spans
    /// subdivide `self`'s radial span into the given `thicknesses`, ordered
    /// from the inner radius outward.
    pub fn split_radial(&self, thicknesses: impl IntoIterator<Item = f64>) -> Vec<Sector> {
        let mut start = self.inner_radius();
        thicknesses
            .into_iter()
            .map(|t| {
                let span = Span::with_start_and_length(start, t);
                start += t;
                Sector::new(self.center, span, self.angle_start, self.angle_span)
            })
            .collect()
    }
}

impl Bbox for Sector {
    fn bbox(&self) -> Option<Rect> {
        if self.is_full_annulus() {
            let r = self.outer_radius();
            return Some(Rect::from_sides(
                self.center.x - r,
                self.center.y - r,
                self.center.x + r,
                self.center.y + r,
            ));
        }
        let mut pts = vec![
            self.point_at(self.inner_radius(), self.angle_start),
            self.point_at(self.outer_radius(), self.angle_start),
            self.point_at(self.inner_radius(), self.angle_stop()),
            self.point_at(self.outer_radius(), self.angle_stop()),
        ];
        for cardinal in [0., 90., 180., 270.] {
            if self.contains_angle(cardinal) {
                pts.push(self.point_at(self.outer_radius(), cardinal));
            }
        }
        Rect::union_all_option(pts.into_iter().map(Rect::from_point))
    }
}

impl Contains<Point> for Sector {
    fn contains(&self, other: &Point) -> Containment {
        let dx = other.x - self.center.x;
        let dy = other.y - self.center.y;
        let r = dx.hypot(dy);
        let angle = wrap_angle(dy.atan2(dx).to_degrees());
        if r >= self.inner_radius() && r <= self.outer_radius() && self.contains_angle(angle) {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_basic_accessors() {
        let sector = Sector::new(Point::zero(), Span::new(10., 20.), 45., 90.);
        assert_eq!(sector.inner_radius(), 10.);
        assert_eq!(sector.outer_radius(), 20.);
        assert_eq!(sector.thickness(), 10.);
        assert_eq!(sector.angle_start(), 45.);
        assert_eq!(sector.angle_stop(), 135.);
    }

    #[test]
    fn sector_contains_angle_handles_wraparound() {
        let sector = Sector::new(Point::zero(), Span::new(0., 5.), 350., 20.);
        assert!(sector.contains_angle(355.));
        assert!(sector.contains_angle(5.));
        assert!(!sector.contains_angle(180.));
    }

    #[test]
    fn sector_contains_point() {
        let sector = Sector::new(Point::zero(), Span::new(10., 20.), 0., 90.);
        assert_eq!(
            sector.contains(&sector.point_at(15., 45.)),
            Containment::Full
        );
        assert_eq!(sector.contains(&Point::new(5., 0.)), Containment::None);
        assert_eq!(sector.contains(&Point::new(0., -15.)), Containment::None);
    }

    #[test]
    fn sector_split_angular_covers_whole_span() {
        let sector = Sector::new(Point::zero(), Span::new(10., 20.), 0., 90.);
        let pieces = sector.split_angular(3);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].angle_start(), 0.);
        assert_eq!(pieces[2].angle_stop(), 90.);
        for piece in &pieces {
            assert_eq!(piece.angle_span(), 30.);
        }
    }

    #[test]
    fn sector_split_radial_stacks_thicknesses() {
        let sector = Sector::new(Point::zero(), Span::new(0., 6.), 0., 360.);
        let layers = sector.split_radial([2., 2., 2.]);
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].inner_radius(), 0.);
        assert_eq!(layers[0].outer_radius(), 2.);
        assert_eq!(layers[2].inner_radius(), 4.);
        assert_eq!(layers[2].outer_radius(), 6.);
    }

    #[test]
    fn full_annulus_bbox_is_square() {
        let sector = Sector::annulus(Point::zero(), Span::new(0., 10.));
        assert_eq!(
            sector.bbox(),
            Some(Rect::from_sides(-10., -10., 10., 10.))
        );
    }
}
