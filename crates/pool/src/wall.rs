use glam::{Vec2, Vec3};

use crate::coping::Coping;

/// Vertical panel spanning one ring edge.
///
/// Derived state (`width`, `rotation`, `center`) is recomputed whenever an
/// endpoint moves or ring membership changes. Each wall owns the coping strip
/// along its top outer edge.
#[derive(Clone, Debug)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
    /// Segment length.
    pub width: f32,
    /// Rotation about +Y carrying +X onto the segment direction.
    pub rotation: f32,
    /// Segment midpoint.
    pub center: Vec2,
    pub coping: Coping,
}

impl Wall {
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        let mut wall = Self {
            start: p0,
            end: p1,
            width: 0.0,
            rotation: 0.0,
            center: Vec2::ZERO,
            coping: Coping::new(p0, p1),
        };
        wall.update_span(p0, p1);
        wall
    }

    /// Re-derive segment geometry from new endpoints. Keeps the coping base
    /// edge in sync; the outer edge is refreshed separately from the joints.
    pub fn update_span(&mut self, p0: Vec2, p1: Vec2) {
        let d = p1 - p0;
        self.start = p0;
        self.end = p1;
        self.width = d.length();
        self.rotation = (-d.y).atan2(d.x);
        self.center = (p0 + p1) * 0.5;
        self.coping.base0 = p0;
        self.coping.base1 = p1;
    }

    /// Corners of the vertical panel for draw submission, top edge first.
    pub fn quad_corners(&self, top_y: f32, depth: f32) -> [Vec3; 4] {
        let bottom = top_y - depth;
        [
            Vec3::new(self.start.x, top_y, self.start.y),
            Vec3::new(self.end.x, top_y, self.end.y),
            Vec3::new(self.end.x, bottom, self.end.y),
            Vec3::new(self.start.x, bottom, self.start.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_segment_geometry() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        assert!((wall.width - 2.0).abs() < 1e-6);
        assert!(wall.rotation.abs() < 1e-6);
        assert!((wall.center - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn update_span_recomputes() {
        let mut wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        wall.update_span(Vec2::new(0.0, 0.0), Vec2::new(0.0, 3.0));
        assert!((wall.width - 3.0).abs() < 1e-6);
        assert!((wall.center - Vec2::new(0.0, 1.5)).length() < 1e-6);
        assert_eq!(wall.coping.base1, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn quad_corners_span_depth() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let corners = wall.quad_corners(0.0, 1.5);
        assert!((corners[0].y - 0.0).abs() < 1e-6);
        assert!((corners[2].y + 1.5).abs() < 1e-6);
    }
}
