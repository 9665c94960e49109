//! Thick arc tessellation

use crate::geometry::{ArcVertex, RenderConfig};
use ecolor::Color32;
use nalgebra::{Point2, Vector2};

/// Approximates a thick arc (a wedge of an annulus) with a triangle strip.
///
/// Produces `2 * config.arc_points` vertices. Vertex `2i` lies on the outer
/// radius and vertex `2i + 1` on the inner radius `radius - thickness`, both
/// at the angle interpolated linearly in degrees from `start_deg` to
/// `end_deg`. All vertices share `color`.
///
/// Degenerate inputs (zero thickness, equal start and end angles) produce a
/// degenerate but valid strip; there are no error conditions.
pub fn tessellate_thick_arc(
    center: Point2<f32>,
    radius: f32,
    thickness: f32,
    start_deg: f32,
    end_deg: f32,
    color: Color32,
    config: &RenderConfig,
) -> Vec<ArcVertex> {
    // a strip needs at least two vertex pairs to contain a triangle
    let points = config.arc_points.max(2);
    let mut strip = Vec::with_capacity(points * 2);
    for i in 0..points {
        let angle = start_deg + (end_deg - start_deg) * (i as f32 / (points - 1) as f32);
        let rad = angle * config.pi / 180.0;
        let dir = Vector2::new(rad.cos(), rad.sin());
        strip.push(ArcVertex {
            pos: center + dir * radius,
            color,
        });
        strip.push(ArcVertex {
            pos: center + dir * (radius - thickness),
            color,
        });
    }
    strip
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const COLOR: Color32 = Color32::WHITE;

    #[test]
    fn quarter_arc_vertex_layout() {
        let config = RenderConfig::default();
        let strip =
            tessellate_thick_arc(Point2::new(0.0, 0.0), 10.0, 2.0, 0.0, 90.0, COLOR, &config);

        assert_eq!(strip.len(), 30);

        // angle 0 is exact: cos(0) = 1, sin(0) = 0
        assert_eq!(strip[0].pos, Point2::new(10.0, 0.0));
        assert_eq!(strip[1].pos, Point2::new(8.0, 0.0));

        // the last pair sits at 90 degrees, up to the truncated pi
        let outer = strip[28].pos;
        let inner = strip[29].pos;
        assert_abs_diff_eq!(outer.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(outer.y, 10.0, epsilon = 1e-3);
        assert_abs_diff_eq!(inner.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(inner.y, 8.0, epsilon = 1e-3);
    }

    #[test]
    fn all_vertices_share_the_color() {
        let config = RenderConfig::default();
        let strip =
            tessellate_thick_arc(Point2::new(3.0, 4.0), 8.0, 2.0, 180.0, 270.0, COLOR, &config);
        assert!(strip.iter().all(|v| v.color == COLOR));
    }

    #[test]
    fn vertices_alternate_outer_and_inner_radius() {
        let config = RenderConfig::default();
        let center = Point2::new(5.0, -2.0);
        let strip = tessellate_thick_arc(center, 10.0, 3.0, 45.0, 135.0, COLOR, &config);
        for (i, vertex) in strip.iter().enumerate() {
            let dist = (vertex.pos - center).norm();
            let expected = if i % 2 == 0 { 10.0 } else { 7.0 };
            assert_abs_diff_eq!(dist, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn zero_sweep_collapses_to_one_angle() {
        let config = RenderConfig::default();
        let strip =
            tessellate_thick_arc(Point2::new(0.0, 0.0), 10.0, 2.0, 90.0, 90.0, COLOR, &config);
        assert_eq!(strip.len(), 30);
        for pair in strip.chunks(2) {
            assert_abs_diff_eq!(pair[0].pos.x, strip[0].pos.x, epsilon = 1e-6);
            assert_abs_diff_eq!(pair[0].pos.y, strip[0].pos.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_thickness_pairs_coincide() {
        let config = RenderConfig::default();
        let strip =
            tessellate_thick_arc(Point2::new(0.0, 0.0), 10.0, 0.0, 0.0, 90.0, COLOR, &config);
        for pair in strip.chunks(2) {
            assert_eq!(pair[0].pos, pair[1].pos);
        }
    }
}
