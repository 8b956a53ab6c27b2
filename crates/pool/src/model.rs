//! Ring topology for the pool boundary.
//!
//! Owns the ordered ring of nodes, the parallel ring of walls (each owning
//! its coping strip), and the per-node miter joints. All edits go through
//! this type; every mutating operation recomputes the affected wall and
//! coping geometry, rebuilds the interior mask, re-checks validity, and only
//! then notifies the observer. No partial state is ever observable.
//!
//! Neighbors are always resolved by modular index arithmetic on the arenas,
//! never through references between ring members.

use glam::{Vec2, Vec3};
use log::debug;
use thiserror::Error;

use crate::config::PoolConfig;
use crate::coping::{compute_joint, Joint};
use crate::geometry::segments_intersect;
use crate::mask::PoolMask;
use crate::node::Node;
use crate::wall::Wall;

/// Precondition violation on a stale node or wall index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("index {index} out of bounds for ring of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Synchronous notification sink for ring edits. The model holds at most one
/// observer and invokes it at the end of every mutating operation.
pub trait PoolObserver {
    /// Fired after any topology or position mutation.
    fn on_change(&mut self, start: usize, points: &[Vec2], total: usize);
    /// Fired only when the simple-polygon validity flag flips.
    fn on_validity_change(&mut self, is_valid: bool);
}

pub struct PoolModel {
    config: PoolConfig,
    nodes: Vec<Node>,
    walls: Vec<Wall>,
    joints: Vec<Joint>,
    valid: bool,
    mask: PoolMask,
    observer: Option<Box<dyn PoolObserver>>,
}

impl PoolModel {
    pub fn new(config: PoolConfig) -> Self {
        let mask = PoolMask::new(config.grid_resolution, config.world_half_extent);
        Self {
            config,
            nodes: Vec::new(),
            walls: Vec::new(),
            joints: Vec::new(),
            valid: true,
            mask,
            observer: None,
        }
    }

    /// Build a model from a caller-supplied initial ring, CCW in the pool
    /// plane. Points violating the minimum gap are dropped.
    pub fn with_ring(config: PoolConfig, ring: &[Vec2]) -> Self {
        let deck = config.deck_height;
        let mut model = Self::new(config);
        for &p in ring {
            let index = model.nodes.len();
            let _ = model.insert_node(index, Vec3::new(p.x, deck, p.y));
        }
        model
    }

    pub fn set_observer(&mut self, observer: Box<dyn PoolObserver>) {
        self.observer = Some(observer);
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Rasterized interior of the current ring. Rebuilt before any observer
    /// hears about an edit, so a simulation pass borrowing this within the
    /// same frame never sees stale topology.
    pub fn mask(&self) -> &PoolMask {
        &self.mask
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node at ring position `index` (0 <= index <= len), shifting
    /// subsequent indices. Returns `Ok(None)` without touching the ring when
    /// the point falls within the minimum gap of a would-be neighbor.
    pub fn insert_node(
        &mut self,
        index: usize,
        placement: Vec3,
    ) -> Result<Option<usize>, TopologyError> {
        let n = self.nodes.len();
        if index > n {
            return Err(TopologyError::IndexOutOfBounds { index, len: n });
        }
        let point = Vec2::new(placement.x, placement.z);
        if n > 0 {
            let prev = self.nodes[(index + n - 1) % n].point;
            let next = self.nodes[index % n].point;
            if point.distance(prev) < self.config.min_node_gap
                || point.distance(next) < self.config.min_node_gap
            {
                debug!("insert at {index} rejected: within min gap of a neighbor");
                return Ok(None);
            }
        }

        self.nodes.insert(index, Node::new(placement));
        let n = self.nodes.len();
        match n {
            1 => {}
            2 => {
                // Degenerate closed ring: both directed walls exist.
                let p0 = self.nodes[0].point;
                let p1 = self.nodes[1].point;
                self.walls = vec![Wall::new(p0, p1), Wall::new(p1, p0)];
                self.joints = vec![Joint::default(), Joint::default()];
                for k in 0..2 {
                    self.recompute_joint(k);
                }
                for k in 0..2 {
                    self.refresh_copings_around(k);
                }
            }
            _ => {
                // Split the wall that used to span the insertion point.
                let prev = (index + n - 1) % n;
                let next = (index + 1) % n;
                self.walls
                    .insert(index, Wall::new(point, self.nodes[next].point));
                let prev_point = self.nodes[prev].point;
                self.walls[prev].update_span(prev_point, point);
                self.joints.insert(index, Joint::default());
                for k in [prev, index, next] {
                    self.recompute_joint(k);
                }
                for k in [prev, index, next] {
                    self.refresh_copings_around(k);
                }
            }
        }
        debug!("inserted node {index}, ring now {n}");
        self.finish_edit(index, &[point]);
        Ok(Some(index))
    }

    /// Remove the node at `index`, merging its two incident walls: the
    /// predecessor wall now spans predecessor -> successor.
    pub fn remove_node(&mut self, index: usize) -> Result<(), TopologyError> {
        let n = self.nodes.len();
        if index >= n {
            return Err(TopologyError::IndexOutOfBounds { index, len: n });
        }
        self.nodes.remove(index);
        let n = self.nodes.len();
        if n < 2 {
            self.walls.clear();
            self.joints.clear();
        } else {
            self.walls.remove(index);
            self.joints.remove(index);
            let prev = (index + n - 1) % n;
            let succ = index % n;
            let prev_point = self.nodes[prev].point;
            let succ_point = self.nodes[succ].point;
            self.walls[prev].update_span(prev_point, succ_point);
            self.recompute_joint(prev);
            self.recompute_joint(succ);
            self.refresh_copings_around(prev);
            self.refresh_copings_around(succ);
        }
        debug!("removed node {index}, ring now {n}");
        self.finish_edit(index, &[]);
        Ok(())
    }

    /// Move the node at `index` to a new placement (drag). Returns
    /// `Ok(false)` without touching the ring when the target falls within
    /// the minimum gap of a neighbor.
    pub fn move_node(&mut self, index: usize, placement: Vec3) -> Result<bool, TopologyError> {
        let n = self.nodes.len();
        if index >= n {
            return Err(TopologyError::IndexOutOfBounds { index, len: n });
        }
        let point = Vec2::new(placement.x, placement.z);
        if n > 1 {
            let prev = self.nodes[(index + n - 1) % n].point;
            let next = self.nodes[(index + 1) % n].point;
            if point.distance(prev) < self.config.min_node_gap
                || point.distance(next) < self.config.min_node_gap
            {
                debug!("move of node {index} rejected: within min gap of a neighbor");
                return Ok(false);
            }
        }

        self.nodes[index].set_placement(placement);
        if n >= 2 {
            let prev = (index + n - 1) % n;
            let next = (index + 1) % n;
            self.walls[prev].update_span(self.nodes[prev].point, point);
            self.walls[index].update_span(point, self.nodes[next].point);
            for k in [prev, index, next] {
                self.recompute_joint(k);
            }
            for k in [prev, index, next] {
                self.refresh_copings_around(k);
            }
        }
        self.finish_edit(index, &[point]);
        Ok(true)
    }

    /// Insert a node at the midpoint of the wall at `wall_index`.
    pub fn split_wall(&mut self, wall_index: usize) -> Result<Option<usize>, TopologyError> {
        let n = self.walls.len();
        if wall_index >= n {
            return Err(TopologyError::IndexOutOfBounds {
                index: wall_index,
                len: n,
            });
        }
        let mid = self.walls[wall_index].center;
        let placement = Vec3::new(mid.x, self.config.deck_height, mid.y);
        self.insert_node(wall_index + 1, placement)
    }

    /// Empty the ring.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.walls.clear();
        self.joints.clear();
        debug!("ring cleared");
        self.finish_edit(0, &[]);
    }

    /// O(n^2) self-intersection check over all wall pairs, excluding each
    /// wall itself and its two ring-adjacent neighbors. First hit wins.
    pub fn has_intersection(&self) -> bool {
        let n = self.walls.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let a = &self.walls[i];
                let b = &self.walls[j];
                if segments_intersect(a.start, a.end, b.start, b.end) {
                    return true;
                }
            }
        }
        false
    }

    fn recompute_joint(&mut self, k: usize) {
        let n = self.nodes.len();
        let p0 = self.nodes[(k + n - 1) % n].point;
        let p1 = self.nodes[k].point;
        let p2 = self.nodes[(k + 1) % n].point;
        self.joints[k] = compute_joint(p0, p1, p2, self.config.coping_height);
    }

    fn refresh_coping(&mut self, w: usize) {
        let n = self.walls.len();
        let start = self.joints[w];
        let end = self.joints[(w + 1) % n];
        self.walls[w].coping.apply_joints(&start, &end);
    }

    /// Both strips meeting at joint `k` must be refreshed in lock-step.
    fn refresh_copings_around(&mut self, k: usize) {
        let n = self.walls.len();
        self.refresh_coping((k + n - 1) % n);
        self.refresh_coping(k);
    }

    /// Shared tail of every mutation: mask rebuild, validity check, then the
    /// change notification. A validity flip fires its own notification
    /// first; an unchanged flag stays silent.
    fn finish_edit(&mut self, start: usize, points: &[Vec2]) {
        let ring: Vec<Vec2> = self.nodes.iter().map(|node| node.point).collect();
        self.mask.rebuild(&ring);

        let valid = !self.has_intersection();
        if valid != self.valid {
            self.valid = valid;
            if let Some(observer) = self.observer.as_mut() {
                observer.on_validity_change(valid);
            }
        }

        let total = self.nodes.len();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change(start, points, total);
        }
    }
}

/// Default 12-point "plus" outline, CCW in the pool plane. The usual
/// caller-supplied initial ring for a fresh session.
pub fn plus_shape() -> Vec<Vec2> {
    [
        (3.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (-1.0, 3.0),
        (-1.0, 1.0),
        (-3.0, 1.0),
        (-3.0, -1.0),
        (-1.0, -1.0),
        (-1.0, -3.0),
        (1.0, -3.0),
        (1.0, -1.0),
        (3.0, -1.0),
    ]
    .into_iter()
    .map(|(x, z)| Vec2::new(x, z))
    .collect()
}
