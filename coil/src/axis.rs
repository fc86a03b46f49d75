//! The Cartesian/polar axis bookkeeping shared by the Packer and the Placer (§4.2, §4.3).
//!
//! Both stages need to answer the same two questions about a section: which axis of its
//! footprint layers stack along, and which axis turns stack along. Centralizing the answer
//! keeps the two stages from silently disagreeing about orientation.

use geometry::prelude::{Rect, Sector, Span};

use crate::bobbin::Orientation;
use crate::model::Footprint;
use crate::wire::WireSpec;

/// The axis a dimension is measured along: the two Cartesian axes, or the polar pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Angle,
    Radial,
}

/// The section's own sizing axis (the one the Partitioner laid it out along) and the
/// complementary cross axis, given the bobbin's `sections_orientation`.
pub fn section_axes(footprint: &Footprint, sections_orientation: Orientation) -> (Axis, Axis) {
    match footprint {
        Footprint::Cartesian(_) => match sections_orientation {
            Orientation::Overlapping => (Axis::X, Axis::Y),
            Orientation::Contiguous => (Axis::Y, Axis::X),
        },
        Footprint::Polar(_) => (Axis::Angle, Axis::Radial),
    }
}

/// The layer axis (the one layers stack along within a section) and the turn axis (the one
/// turns stack along within a layer), derived from the section's own axis, its cross axis,
/// and its `layersOrientation` (§4.2: "when the section orientation is overlapping and the
/// layer orientation is also overlapping, the two axes... are perpendicular").
pub fn layer_and_turn_axes(section_axis: Axis, cross_axis: Axis, layers_orientation: Orientation) -> (Axis, Axis) {
    match layers_orientation {
        Orientation::Overlapping => (section_axis, cross_axis),
        Orientation::Contiguous => (cross_axis, section_axis),
    }
}

/// The extent of `footprint` along `axis`.
pub fn dim_along(footprint: &Footprint, axis: Axis) -> f64 {
    match (footprint, axis) {
        (Footprint::Cartesian(r), Axis::X) => r.hspan().length(),
        (Footprint::Cartesian(r), Axis::Y) => r.vspan().length(),
        (Footprint::Polar(s), Axis::Angle) => s.angle_span(),
        (Footprint::Polar(s), Axis::Radial) => s.thickness(),
        _ => panic!("axis does not apply to this footprint's coordinate system"),
    }
}

/// The representative radius used to convert a wire's linear outer width into an angular
/// footprint, for a polar footprint. Uses the footprint's mean radius, since the exact radius
/// a turn will sit at is not known until it is placed; see `DESIGN.md`.
pub fn representative_radius(footprint: &Footprint) -> f64 {
    match footprint {
        Footprint::Polar(s) => (s.inner_radius() + s.outer_radius()) / 2.,
        Footprint::Cartesian(_) => 0.,
    }
}

/// The dimension `wire` occupies along `axis`, given `representative_radius` for the polar
/// angular case (§4.3: "a turn's angular footprint is `2*arcsin((wireOuter/2) / r)`").
pub fn wire_dim_along(wire: &WireSpec, axis: Axis, representative_radius: f64) -> f64 {
    match axis {
        Axis::X => wire.outer_width(),
        Axis::Y => wire.outer_height(),
        Axis::Radial => wire.outer_width(),
        Axis::Angle => {
            if representative_radius <= 0. {
                0.
            } else {
                2. * ((wire.outer_width() / 2.) / representative_radius).asin().to_degrees()
            }
        }
    }
}

/// Builds a sub-footprint of `section_footprint` occupying `[start, start + len)` along
/// `axis`, spanning the full extent of the complementary axis.
pub fn sub_footprint(section_footprint: &Footprint, axis: Axis, start: f64, len: f64) -> Footprint {
    match section_footprint {
        Footprint::Cartesian(rect) => {
            let (hspan, vspan) = match axis {
                Axis::X => (Span::with_start_and_length(rect.left() + start, len), rect.vspan()),
                Axis::Y => (rect.hspan(), Span::with_start_and_length(rect.bot() + start, len)),
                _ => panic!("cartesian footprint cannot use a polar axis"),
            };
            Footprint::Cartesian(Rect::from_spans(hspan, vspan))
        }
        Footprint::Polar(sector) => {
            let (radial, angle_start, angle_span) = match axis {
                Axis::Radial => (
                    Span::with_start_and_length(sector.inner_radius() + start, len),
                    sector.angle_start(),
                    sector.angle_span(),
                ),
                Axis::Angle => (sector.radial(), sector.angle_start() + start, len),
                _ => panic!("polar footprint cannot use a cartesian axis"),
            };
            Footprint::Polar(Sector::new(sector.center(), radial, angle_start, angle_span))
        }
    }
}
