//! Draw primitives derived from a [`crate::grid::TileGrid`]
//!
//! The types here carry no display state; the gui maps them to the graphics
//! library each frame.

pub mod arc;
pub mod walls;

use crate::constants::{
    ARC_PI, ARC_POINTS, CORNER_RADIUS, DOOR_COLOR, LINE_THICKNESS, TILE_SIZE, WALL_COLOR,
};
use ecolor::Color32;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A single vertex of a tessellated arc strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcVertex {
    pub pos: Point2<f32>,
    pub color: Color32,
}

/// One shape to draw for the current frame.
///
/// All shapes are flat opaque fills, so emission order does not affect the
/// rendered result.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// Axis-aligned filled rectangle.
    Rect {
        min: Point2<f32>,
        size: Vector2<f32>,
        color: Color32,
    },
    /// Triangle strip approximating a thick arc; vertices alternate between
    /// the outer and inner radius.
    ArcStrip(Vec<ArcVertex>),
}

/// Geometry constants used to derive arena draw primitives.
///
/// Defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixel width and height of one tile.
    pub tile_size: f32,
    /// Thickness of wall edge segments and corner arcs.
    pub line_thickness: f32,
    /// Radius of the rounded corner joining two open wall edges.
    pub corner_radius: f32,
    /// Number of vertex pairs per tessellated arc.
    pub arc_points: usize,
    /// π constant used to convert arc angles from degrees to radians.
    pub pi: f32,
    /// Fill color for wall segments and corner arcs.
    pub wall_color: Color32,
    /// Fill color for the door rectangle.
    pub door_color: Color32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            line_thickness: LINE_THICKNESS,
            corner_radius: CORNER_RADIUS,
            arc_points: ARC_POINTS,
            pi: ARC_PI,
            wall_color: WALL_COLOR,
            door_color: DOOR_COLOR,
        }
    }
}
