use crate::transform::Transform;
use arena_core::geometry::walls::derive_arena_geometry;
use arena_core::geometry::{DrawPrimitive, RenderConfig};
use arena_core::grid::TileGrid;
use eframe::egui::{Mesh, Painter, Rect, Rounding, Shape};
use nalgebra::Point2;

/// Recomputes the arena geometry from the grid and paints it.
pub fn draw_arena(painter: &Painter, wts: &Transform, grid: &TileGrid, config: &RenderConfig) {
    for primitive in derive_arena_geometry(grid, config) {
        match primitive {
            DrawPrimitive::Rect { min, size, color } => {
                let p1 = wts.map_point2(min);
                let p2 = wts.map_point2(Point2::new(min.x + size.x, min.y + size.y));
                painter.rect_filled(Rect::from_two_pos(p1, p2), Rounding::ZERO, color);
            }
            DrawPrimitive::ArcStrip(strip) => {
                // unroll the triangle strip into the indexed mesh egui expects
                let mut mesh = Mesh::default();
                for vertex in &strip {
                    mesh.colored_vertex(wts.map_point2(vertex.pos), vertex.color);
                }
                for i in 0..strip.len().saturating_sub(2) as u32 {
                    mesh.add_triangle(i, i + 1, i + 2);
                }
                painter.add(Shape::mesh(mesh));
            }
        }
    }
}
