//! Mitered trim strip along each wall's top outer edge.
//!
//! Adjacent strips share a single outer vertex at every ring vertex (a
//! "joint"). Joints are first-class records owned by the model, one per node,
//! and both neighboring strips pull their end vertices from them by index.
//! This keeps the strips meeting with no gap or overlap at sharp and concave
//! corners alike.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::geometry::outward_normal;

/// Minimum |cos(theta/2)| before the miter length falls back to the raw
/// coping height (spike guard for near-reversed edges).
const MITER_COS_MIN: f32 = 0.01;

/// Vertex format for coping strip meshes, ready for GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CopingVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Shared outer vertex where two adjacent coping strips meet at a ring vertex.
#[derive(Clone, Copy, Debug, Default)]
pub struct Joint {
    /// The single outer vertex fed to both adjacent strips.
    pub outer: Vec2,
    /// Longitudinal texture offset applied at the end of the previous strip.
    pub uv_prev: f32,
    /// Longitudinal texture offset applied at the start of the next strip.
    pub uv_next: f32,
}

/// Mitered outer vertex for ring vertex `p1` with neighbors `p0` and `p2`.
///
/// The outer vertex sits on the angle bisector of the two outward edge
/// normals, pushed out far enough that both strip edges stay `height` wide.
/// The longitudinal uv skew keeps texture tiling continuous across the miter;
/// convex and concave turns produce opposite-signed skews, and a straight run
/// produces none.
pub fn compute_joint(p0: Vec2, p1: Vec2, p2: Vec2, height: f32) -> Joint {
    let n0 = outward_normal(p0, p1);
    let n1 = outward_normal(p1, p2);

    let mut dh = (n0 + n1).normalize_or_zero();
    if dh == Vec2::ZERO {
        // 180-degree fold (2-node ring): no bisector, extrude straight out.
        dh = n0;
    }

    let cos_half = dh.dot(n0);
    let sin_theta = -n0.perp_dot(n1);
    let tan_half = (1.0 / (cos_half * cos_half) - 1.0).max(0.0).sqrt();

    let miter = if cos_half.abs() > MITER_COS_MIN {
        height / cos_half
    } else {
        height
    };

    let duv = height * tan_half * sin_theta.signum();
    let len_prev = (p1 - p0).length();
    let len_next = (p2 - p1).length();

    Joint {
        outer: p1 + dh * miter,
        uv_prev: if len_prev > f32::EPSILON {
            -duv / len_prev
        } else {
            0.0
        },
        uv_next: if len_next > f32::EPSILON {
            duv / len_next
        } else {
            0.0
        },
    }
}

/// Horizontal quad strip along a wall's top outer edge.
///
/// `base0`/`base1` are shared with the wall's endpoints; `outer0`/`outer1`
/// come from the joints at each end and are shared with the neighboring
/// strips.
#[derive(Clone, Debug)]
pub struct Coping {
    pub base0: Vec2,
    pub base1: Vec2,
    pub outer0: Vec2,
    pub outer1: Vec2,
    pub uv_skew0: f32,
    pub uv_skew1: f32,
}

impl Coping {
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        Self {
            base0: p0,
            base1: p1,
            outer0: p0,
            outer1: p1,
            uv_skew0: 0.0,
            uv_skew1: 0.0,
        }
    }

    /// Pull the shared end vertices from the joints at this strip's start
    /// and end ring vertices. Both strips around a joint must be refreshed
    /// in lock-step after the joint changes.
    pub fn apply_joints(&mut self, start: &Joint, end: &Joint) {
        self.outer0 = start.outer;
        self.outer1 = end.outer;
        self.uv_skew0 = start.uv_next;
        self.uv_skew1 = end.uv_prev;
    }

    /// Quad vertices at deck height `y`, inner edge first. u runs along the
    /// strip (skewed at the outer edge), v across it.
    pub fn vertices(&self, y: f32) -> [CopingVertex; 4] {
        [
            CopingVertex {
                position: [self.base0.x, y, self.base0.y],
                uv: [0.0, 0.0],
            },
            CopingVertex {
                position: [self.base1.x, y, self.base1.y],
                uv: [1.0, 0.0],
            },
            CopingVertex {
                position: [self.outer1.x, y, self.outer1.y],
                uv: [1.0 + self.uv_skew1, 1.0],
            },
            CopingVertex {
                position: [self.outer0.x, y, self.outer0.y],
                uv: [self.uv_skew0, 1.0],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_run_has_no_skew() {
        let joint = compute_joint(
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            0.25,
        );
        assert_eq!(joint.uv_prev, 0.0);
        assert_eq!(joint.uv_next, 0.0);
        // Outer vertex sits exactly one coping height off the line.
        assert!((joint.outer - Vec2::new(0.0, -0.25)).length() < 1e-6);
    }

    #[test]
    fn right_angle_convex_miter() {
        // CCW square corner at (1, 1); the miter lands on the diagonal.
        let joint = compute_joint(
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            0.25,
        );
        assert!((joint.outer - Vec2::new(1.25, 1.25)).length() < 1e-5);
    }

    #[test]
    fn convex_and_concave_skews_have_opposite_signs() {
        let convex = compute_joint(
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            0.25,
        );
        let concave = compute_joint(
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
            0.25,
        );
        assert!(convex.uv_next != 0.0);
        assert!(concave.uv_next != 0.0);
        assert!(convex.uv_next.signum() != concave.uv_next.signum());
    }

    #[test]
    fn two_node_fold_extrudes_straight_out() {
        let joint = compute_joint(
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            0.25,
        );
        assert!(joint.outer.is_finite());
        assert!(((joint.outer - Vec2::new(0.0, 0.0)).length() - 0.25).abs() < 1e-5);
    }
}
