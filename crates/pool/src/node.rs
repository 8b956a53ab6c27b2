use glam::{Vec2, Vec3};

/// A ring vertex: 2D pool-plane position plus the 3D placement used for
/// pick/drag by the embedding application.
///
/// Identity is the ring index; nodes are created, moved, and destroyed only
/// through [`crate::PoolModel`].
#[derive(Clone, Copy, Debug)]
pub struct Node {
    /// Position in the pool plane (x, z).
    pub point: Vec2,
    /// Render/pick position; y is the deck height.
    pub placement: Vec3,
}

impl Node {
    pub fn new(placement: Vec3) -> Self {
        Self {
            point: Vec2::new(placement.x, placement.z),
            placement,
        }
    }

    pub(crate) fn set_placement(&mut self, placement: Vec3) {
        self.point = Vec2::new(placement.x, placement.z);
        self.placement = placement;
    }
}
