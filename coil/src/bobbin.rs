//! Bobbin geometry: the winding window a coil is wound inside, and its resolution from a
//! core shape when no explicit bobbin is supplied (§2 item 2 *Bobbin resolver*).

use geometry::prelude::Point;
use serde::{Deserialize, Serialize};

use crate::error::{CoilError, Result};

/// How adjacent sections are laid out relative to one another within a winding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Sections (or layers, or turns) are stacked side by side along the layout axis.
    Overlapping,
    /// Sections (or layers, or turns) span the full layout axis and stack along the cross axis.
    Contiguous,
}

/// How a row of sections, layers, or turns is positioned along its cross axis, or how slack
/// is distributed among its members (§3, §4.1, §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    /// Centered about the midpoint of the available span.
    Centered,
    /// Flush against the inner (Cartesian: bottom) or top (polar: start-angle) boundary.
    InnerOrTop,
    /// Flush against the outer (Cartesian: top) or bottom (polar: stop-angle) boundary.
    OuterOrBottom,
    /// Distributed so the first and last members touch the boundaries with equal spacing between.
    Spread,
}

/// The shape of a winding window: either a rectangular bobbin or a round/annular core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "shape")]
pub enum WindowShape {
    /// A rectangular winding window, in Cartesian coordinates.
    Rectangular {
        /// The window's center.
        center: Point,
        /// The window's full width.
        width: f64,
        /// The window's full height.
        height: f64,
    },
    /// A round (toroidal) winding window, in polar coordinates.
    Round {
        /// The window's center.
        center: Point,
        /// The radial height of the annular window (outer radius minus inner radius).
        radial_height: f64,
        /// The total angular extent of the window, in degrees (typically 360).
        angle: f64,
    },
}

impl WindowShape {
    /// True if this window uses polar (toroidal) coordinates.
    pub fn is_polar(&self) -> bool {
        matches!(self, WindowShape::Round { .. })
    }
}

/// A bobbin: the physical winding-window geometry and default layout policies a coil is
/// wound around (§3 *Bobbin*).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bobbin {
    /// The winding window's shape and extent.
    pub window: WindowShape,
    /// The depth of the central column (the dimension perpendicular to the winding window).
    pub column_depth: f64,
    /// The width of the central column.
    pub column_width: f64,
    /// The thickness of the central column's former.
    pub column_thickness: f64,
    /// The thickness of the bobbin's surrounding wall.
    pub wall_thickness: f64,
    /// How sections are laid out relative to each other.
    pub sections_orientation: Orientation,
    /// How sections are aligned along their cross axis.
    pub sections_alignment: Alignment,
}

impl Bobbin {
    /// The winding window with walls subtracted, i.e. the region sections may occupy.
    pub fn usable_window(&self) -> WindowShape {
        match self.window {
            WindowShape::Rectangular { center, width, height } => WindowShape::Rectangular {
                center,
                width: width - 2. * self.wall_thickness,
                height: height - 2. * self.wall_thickness,
            },
            WindowShape::Round { center, radial_height, angle } => WindowShape::Round {
                center,
                radial_height: radial_height - 2. * self.wall_thickness,
                angle,
            },
        }
    }
}

/// The column and window geometry returned by an external core-geometry provider (§6 *Core
/// geometry provider*) for a given core shape name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreGeometry {
    /// The window this core shape exposes.
    pub window: WindowShape,
    /// The central column's depth.
    pub column_depth: f64,
    /// The central column's width.
    pub column_width: f64,
    /// The central column's former thickness.
    pub column_thickness: f64,
}

/// Resolves a [`Bobbin`] for a coil, synthesizing defaults when none is supplied.
///
/// If `bobbin` is `Some`, it is returned unchanged (the caller's explicit geometry always
/// wins). Otherwise, `core_shape` is looked up via `provider`; if the provider recognizes it,
/// a default bobbin is synthesized around the returned [`CoreGeometry`] with zero wall
/// thickness and centered/contiguous defaults. If the provider does not recognize
/// `core_shape`, this fails with [`CoilError::UnresolvedBobbin`].
pub fn resolve_bobbin(
    bobbin: Option<Bobbin>,
    core_shape: &str,
    provider: impl Fn(&str) -> Option<CoreGeometry>,
) -> Result<Bobbin> {
    if let Some(bobbin) = bobbin {
        return Ok(bobbin);
    }

    let geometry = provider(core_shape)
        .ok_or_else(|| CoilError::UnresolvedBobbin(core_shape.into()))?;

    Ok(Bobbin {
        window: geometry.window,
        column_depth: geometry.column_depth,
        column_width: geometry.column_width,
        column_thickness: geometry.column_thickness,
        wall_thickness: 0.,
        sections_orientation: Orientation::Contiguous,
        sections_alignment: Alignment::Centered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangular_bobbin() -> Bobbin {
        Bobbin {
            window: WindowShape::Rectangular {
                center: Point::zero(),
                width: 10.,
                height: 10.,
            },
            column_depth: 5.,
            column_width: 5.,
            column_thickness: 1.,
            wall_thickness: 0.5,
            sections_orientation: Orientation::Contiguous,
            sections_alignment: Alignment::Centered,
        }
    }

    #[test]
    fn usable_window_subtracts_walls() {
        let bobbin = rectangular_bobbin();
        match bobbin.usable_window() {
            WindowShape::Rectangular { width, height, .. } => {
                assert_eq!(width, 9.);
                assert_eq!(height, 9.);
            }
            _ => panic!("expected rectangular window"),
        }
    }

    #[test]
    fn explicit_bobbin_is_returned_unchanged() {
        let bobbin = rectangular_bobbin();
        let resolved = resolve_bobbin(Some(bobbin), "unused", |_| None).unwrap();
        assert_eq!(resolved, bobbin);
    }

    #[test]
    fn unresolved_core_shape_without_bobbin_fails() {
        let err = resolve_bobbin(None, "T20/10/7", |_| None).unwrap_err();
        assert!(matches!(err, CoilError::UnresolvedBobbin(_)));
    }

    #[test]
    fn recognized_core_shape_synthesizes_default_bobbin() {
        let geometry = CoreGeometry {
            window: WindowShape::Round {
                center: Point::zero(),
                radial_height: 5.,
                angle: 360.,
            },
            column_depth: 7.,
            column_width: 10.,
            column_thickness: 1.,
        };
        let resolved = resolve_bobbin(None, "T20/10/7", |name| {
            (name == "T20/10/7").then_some(geometry)
        })
        .unwrap();
        assert_eq!(resolved.wall_thickness, 0.);
        assert!(resolved.window.is_polar());
    }
}
