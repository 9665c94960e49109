//! Transforms between coordinate systems (arena world <=> screen pixels).

use eframe::egui::Pos2;
use nalgebra::Point2;

/// A 2D transform consisting of per-axis scale and translation.
pub struct Transform {
    scale_x: f32,
    scale_y: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Transform {
    /// Creates a `Transform` that maps the rect `(src_p1, src_p2)` inside
    /// `(dst_p1, dst_p2)`, adding padding/letterboxing so that the src rect
    /// fits inside the dst rect while preserving its aspect ratio.
    pub fn new_letterboxed(src_p1: Pos2, src_p2: Pos2, dst_p1: Pos2, dst_p2: Pos2) -> Self {
        // Compare the aspect ratios to determine the letterboxing direction.
        let src_width = (src_p1.x - src_p2.x).abs();
        let src_height = (src_p1.y - src_p2.y).abs();
        let dst_width = (dst_p1.x - dst_p2.x).abs();
        let dst_height = (dst_p1.y - dst_p2.y).abs();
        if src_height * dst_width > dst_height * src_width {
            // The src rect is "taller" than the dst rect; add horizontal padding.
            Self::new_horizontal_padded(src_p1, src_p2, dst_p1, dst_p2)
        } else {
            // The src rect is "wider" than the dst rect; add vertical padding.
            fn tr(p: Pos2) -> Pos2 {
                Pos2::new(p.y, p.x)
            }
            Self::new_horizontal_padded(tr(src_p1), tr(src_p2), tr(dst_p1), tr(dst_p2)).transpose()
        }
    }

    /// Maps `(src_p1, src_p2)` inside `(dst_p1, dst_p2)` with horizontal padding.
    fn new_horizontal_padded(src_p1: Pos2, src_p2: Pos2, dst_p1: Pos2, dst_p2: Pos2) -> Self {
        let scale_y = (dst_p1.y - dst_p2.y) / (src_p1.y - src_p2.y);
        let offset_y = dst_p1.y - src_p1.y * scale_y;
        let scale_x = scale_y.copysign((src_p2.x - src_p1.x) * (dst_p2.x - dst_p1.x));
        let src_x_middle = (src_p1.x + src_p2.x) / 2.0;
        let dst_x_middle = (dst_p1.x + dst_p2.x) / 2.0;
        let offset_x = dst_x_middle - src_x_middle * scale_x;
        Self {
            scale_x,
            scale_y,
            offset_x,
            offset_y,
        }
    }

    /// Swaps the X and Y components of this `Transform`.
    fn transpose(&self) -> Self {
        Self {
            scale_x: self.scale_y,
            scale_y: self.scale_x,
            offset_x: self.offset_y,
            offset_y: self.offset_x,
        }
    }

    /// Applies the transformation to a point.
    pub fn map_point(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            p.x * self.scale_x + self.offset_x,
            p.y * self.scale_y + self.offset_y,
        )
    }

    /// Applies the transformation to a world-space [`Point2`].
    pub fn map_point2(&self, p: Point2<f32>) -> Pos2 {
        self.map_point(Pos2::new(p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rects_map_one_to_one() {
        let t = Transform::new_letterboxed(
            Pos2::new(0.0, 0.0),
            Pos2::new(560.0, 620.0),
            Pos2::new(0.0, 0.0),
            Pos2::new(560.0, 620.0),
        );
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(0.0, 0.0));
        assert_eq!(t.map_point(Pos2::new(560.0, 620.0)), Pos2::new(560.0, 620.0));
        assert_eq!(t.map_point(Pos2::new(20.0, 40.0)), Pos2::new(20.0, 40.0));
    }

    #[test]
    fn wide_dst_centers_horizontally() {
        let t = Transform::new_letterboxed(
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 10.0),
            Pos2::new(0.0, 0.0),
            Pos2::new(30.0, 10.0),
        );
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(10.0, 0.0));
        assert_eq!(t.map_point(Pos2::new(10.0, 10.0)), Pos2::new(20.0, 10.0));
    }

    #[test]
    fn tall_dst_centers_vertically() {
        let t = Transform::new_letterboxed(
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 10.0),
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 30.0),
        );
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(0.0, 10.0));
        assert_eq!(t.map_point(Pos2::new(10.0, 10.0)), Pos2::new(10.0, 20.0));
    }
}
