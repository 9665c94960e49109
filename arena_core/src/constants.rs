use ecolor::Color32;

/// Pixel width and height of one grid tile.
pub const TILE_SIZE: f32 = 20.0;
/// Thickness of wall edge segments and corner arcs.
pub const LINE_THICKNESS: f32 = 2.0;
/// Radius of the rounded corner joining two open wall edges.
pub const CORNER_RADIUS: f32 = 8.0;
/// Number of vertex pairs used to tessellate a thick arc.
pub const ARC_POINTS: usize = 15;
/// Truncated π used to convert arc angles from degrees to radians.
///
/// Arc vertex positions are a pure function of this value; substitute
/// [`core::f32::consts::PI`] via [`crate::geometry::RenderConfig::pi`] for
/// full-precision arcs.
pub const ARC_PI: f32 = 3.14159;

pub const WALL_COLOR: Color32 = Color32::from_rgb(33, 33, 255);
pub const DOOR_COLOR: Color32 = Color32::from_rgb(255, 182, 255);
