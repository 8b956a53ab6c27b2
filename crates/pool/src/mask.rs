//! Rasterized interior of the pool ring.
//!
//! The mask is a cell-centered boolean grid over the world square
//! `[-half_extent, half_extent]^2`. The model is its only writer and rebuilds
//! it inside every mutating operation, so any simulation pass borrowing the
//! mask afterwards sees the current topology.

use glam::Vec2;

#[derive(Clone, Debug)]
pub struct PoolMask {
    width: usize,
    height: usize,
    cell_size: f32,
    origin: Vec2,
    inside: Vec<bool>,
}

impl PoolMask {
    pub fn new(resolution: usize, half_extent: f32) -> Self {
        let cell_size = (2.0 * half_extent) / resolution as f32;
        Self {
            width: resolution,
            height: resolution,
            cell_size,
            origin: Vec2::splat(-half_extent),
            inside: vec![false; resolution * resolution],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.width + i
    }

    /// World position of the center of cell (i, j).
    pub fn cell_center(&self, i: usize, j: usize) -> Vec2 {
        self.origin
            + Vec2::new(
                (i as f32 + 0.5) * self.cell_size,
                (j as f32 + 0.5) * self.cell_size,
            )
    }

    pub fn contains_cell(&self, i: usize, j: usize) -> bool {
        i < self.width && j < self.height && self.inside[self.cell_index(i, j)]
    }

    /// Whether the cell containing world point `p` is inside the ring.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let i = ((p.x - self.origin.x) / self.cell_size).floor();
        let j = ((p.y - self.origin.y) / self.cell_size).floor();
        if i < 0.0 || j < 0.0 {
            return false;
        }
        self.contains_cell(i as usize, j as usize)
    }

    /// Re-rasterize from the current ring. Rings with fewer than three
    /// vertices have no interior.
    pub fn rebuild(&mut self, ring: &[Vec2]) {
        if ring.len() < 3 {
            self.inside.fill(false);
            return;
        }
        for j in 0..self.height {
            for i in 0..self.width {
                let center = self.cell_center(i, j);
                let idx = self.cell_index(i, j);
                self.inside[idx] = point_in_ring(center, ring);
            }
        }
    }
}

/// Even-odd crossing-number test against the ring.
fn point_in_ring(p: Vec2, ring: &[Vec2]) -> bool {
    let mut inside = false;
    let mut k = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[k];
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            if p.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        k = i;
    }
    inside
}
