//! Planar predicates for ring validation and miter construction.

use glam::Vec2;

/// Sign of the 2D cross product `(c - a) x (b - a)`.
///
/// Collinear triples resolve to `false` so the predicate stays deterministic
/// under ties.
#[inline]
pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c - a).perp_dot(b - a) > 0.0
}

/// Proper-crossing test between segments `p0p1` and `q0q1`.
///
/// Collinear-overlap pairs are not specially handled and report `false`;
/// rings with overlapping collinear edges can slip past validation.
pub fn segments_intersect(p0: Vec2, p1: Vec2, q0: Vec2, q1: Vec2) -> bool {
    orientation(p0, q0, q1) != orientation(p1, q0, q1)
        && orientation(p0, p1, q0) != orientation(p0, p1, q1)
}

/// Unit perpendicular of `b - a` pointing away from the interior of a
/// CCW-oriented ring.
#[inline]
pub fn outward_normal(a: Vec2, b: Vec2) -> Vec2 {
    let d = b - a;
    Vec2::new(d.y, -d.x).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_basic() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        assert!(orientation(a, b, Vec2::new(1.0, -1.0)));
        assert!(!orientation(a, b, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn orientation_collinear_ties_resolve_false() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        assert!(!orientation(a, b, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, -1.0),
        ));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ));
    }

    #[test]
    fn collinear_overlap_is_not_detected() {
        // Known limitation: the ccw-based predicate cannot see overlap
        // between collinear segments.
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn outward_normal_points_right_of_direction() {
        let n = outward_normal(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        assert!((n - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }
}
