//! Per-tile wall outline derivation
//!
//! Walls are drawn as outlines along their open edges: a thin rectangle per
//! open side, joined by quarter arcs where two adjacent open sides meet.

use crate::geometry::arc::tessellate_thick_arc;
use crate::geometry::{DrawPrimitive, RenderConfig};
use crate::grid::{Tile, TileGrid};
use nalgebra::{Point2, Vector2};

/// Derives every draw primitive for one frame of the arena.
///
/// Pure function of the grid and config: the same inputs always produce the
/// same primitives, so callers may re-run it every frame.
pub fn derive_arena_geometry(grid: &TileGrid, config: &RenderConfig) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            tile_geometry(grid, row, col, config, &mut primitives);
        }
    }
    primitives
}

/// Emits the primitives for the tile at `(row, col)` into `out`.
///
/// Wall tiles get one edge rectangle per open side, inset by the corner
/// radius next to each adjacent open side, plus one quarter arc per pair of
/// adjacent open sides. Door tiles get a single rectangle in the lower half
/// of the cell. Floor tiles emit nothing.
pub fn tile_geometry(
    grid: &TileGrid,
    row: usize,
    col: usize,
    config: &RenderConfig,
    out: &mut Vec<DrawPrimitive>,
) {
    let ts = config.tile_size;
    let x = col as f32 * ts;
    let y = row as f32 * ts;

    match grid.tile(row, col) {
        Some(Tile::Wall) => {
            let t = config.line_thickness;
            let r = config.corner_radius;
            let open = grid.open_sides(row, col);

            let wall_rect = |min_x: f32, min_y: f32, w: f32, h: f32| DrawPrimitive::Rect {
                min: Point2::new(min_x, min_y),
                size: Vector2::new(w, h),
                color: config.wall_color,
            };

            // horizontal edges are trimmed where the left/right side is open
            let inset_x = x + if open.left { r } else { 0.0 };
            let trimmed_w = ts - if open.left { r } else { 0.0 } - if open.right { r } else { 0.0 };
            if open.top {
                out.push(wall_rect(inset_x, y, trimmed_w, t));
            }
            if open.bottom {
                out.push(wall_rect(inset_x, y + ts - t, trimmed_w, t));
            }

            // vertical edges are trimmed where the top/bottom side is open
            let inset_y = y + if open.top { r } else { 0.0 };
            let trimmed_h = ts - if open.top { r } else { 0.0 } - if open.bottom { r } else { 0.0 };
            if open.left {
                out.push(wall_rect(x, inset_y, t, trimmed_h));
            }
            if open.right {
                out.push(wall_rect(x + ts - t, inset_y, t, trimmed_h));
            }

            // one quarter arc per convex corner, joining the trimmed edges
            if open.top && open.left {
                out.push(DrawPrimitive::ArcStrip(tessellate_thick_arc(
                    Point2::new(x + r, y + r),
                    r,
                    t,
                    180.0,
                    270.0,
                    config.wall_color,
                    config,
                )));
            }
            if open.top && open.right {
                out.push(DrawPrimitive::ArcStrip(tessellate_thick_arc(
                    Point2::new(x + ts - r, y + r),
                    r,
                    t,
                    270.0,
                    360.0,
                    config.wall_color,
                    config,
                )));
            }
            if open.bottom && open.left {
                out.push(DrawPrimitive::ArcStrip(tessellate_thick_arc(
                    Point2::new(x + r, y + ts - r),
                    r,
                    t,
                    90.0,
                    180.0,
                    config.wall_color,
                    config,
                )));
            }
            if open.bottom && open.right {
                out.push(DrawPrimitive::ArcStrip(tessellate_thick_arc(
                    Point2::new(x + ts - r, y + ts - r),
                    r,
                    t,
                    0.0,
                    90.0,
                    config.wall_color,
                    config,
                )));
            }
        }
        Some(Tile::Door) => {
            out.push(DrawPrimitive::Rect {
                min: Point2::new(x, y + ts / 2.0),
                size: Vector2::new(ts, ts / 4.0),
                color: config.door_color,
            });
        }
        _ => {}
    }
}
