//! Double-buffered wave-height field confined to the pool interior.
//!
//! Two equally sized cell buffers ping-pong: every pass reads the current
//! buffer, writes the other, then swaps. Cells outside the mask are passed
//! through unchanged in every pass, so the field is inert outside the pool.
//! All passes are deterministic: each destination cell is a pure function of
//! the source buffer.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use log::debug;
use rayon::prelude::*;

use crate::config::WaterConfig;
use crate::mask::PoolMask;

/// One grid cell of the wave field. Pod so the current buffer can be
/// uploaded to the GPU as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct WaterCell {
    pub height: f32,
    pub velocity: f32,
    pub normal_x: f32,
    pub normal_z: f32,
}

pub struct WaterSimulation {
    width: usize,
    height: usize,
    buffers: [Vec<WaterCell>; 2],
    current: usize,
    step_count: u64,
    paused: bool,
    config: WaterConfig,
}

impl WaterSimulation {
    /// Square grid matching the mask resolution.
    pub fn new(resolution: usize, config: WaterConfig) -> Self {
        let cells = vec![WaterCell::zeroed(); resolution * resolution];
        Self {
            width: resolution,
            height: resolution,
            buffers: [cells.clone(), cells],
            current: 0,
            step_count: 0,
            paused: false,
            config,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The latest buffer, for draw submission.
    pub fn cells(&self) -> &[WaterCell] {
        &self.buffers[self.current]
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn height_at(&self, i: usize, j: usize) -> f32 {
        self.buffers[self.current][j * self.width + i].height
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Localized impulse at world (x, z), masked to the pool interior, then
    /// swap. A paused simulation still refreshes normals so the drop shows
    /// up immediately.
    pub fn add_drop(&mut self, mask: &PoolMask, x: f32, z: f32, radius: f32, strength: f32) {
        debug_assert_eq!(mask.width(), self.width);
        debug_assert_eq!(mask.height(), self.height);
        if radius <= 0.0 {
            debug!("drop at ({x}, {z}) ignored: non-positive radius");
            return;
        }
        let center = Vec2::new(x, z);
        let width = self.width;
        self.run_pass(|i, j, src| {
            let mut cell = src[j * width + i];
            if mask.contains_cell(i, j) {
                let dist = mask.cell_center(i, j).distance(center);
                let t = (1.0 - dist / radius).max(0.0);
                let amp = 0.5 - (t * PI).cos() * 0.5;
                cell.height += amp * strength;
            }
            cell
        });
        if self.paused {
            self.update_normal(mask);
        }
    }

    /// One propagation step followed by a normal refresh (two buffer swaps).
    pub fn step(&mut self, mask: &PoolMask) {
        debug_assert_eq!(mask.width(), self.width);
        self.step_count += 1;
        let width = self.width;
        let height = self.height;
        let propagation = self.config.propagation;
        let damping = self.config.damping;
        self.run_pass(|i, j, src| {
            let mut cell = src[j * width + i];
            if !mask.contains_cell(i, j) {
                return cell;
            }
            let h = cell.height;
            let sample = |di: isize, dj: isize| -> f32 {
                let ni = i as isize + di;
                let nj = j as isize + dj;
                if ni < 0 || nj < 0 || ni >= width as isize || nj >= height as isize {
                    return h;
                }
                let (ni, nj) = (ni as usize, nj as usize);
                // Out-of-mask neighbors reflect (zero height gradient).
                if mask.contains_cell(ni, nj) {
                    src[nj * width + ni].height
                } else {
                    h
                }
            };
            let average =
                (sample(-1, 0) + sample(1, 0) + sample(0, -1) + sample(0, 1)) * 0.25;
            cell.velocity += (average - h) * propagation;
            cell.velocity *= damping;
            cell.height = h + cell.velocity;
            cell
        });
        self.update_normal(mask);
    }

    /// Recompute (normal_x, normal_z) from central height differences;
    /// heights and velocities pass through. Also used standalone when the
    /// mask changes without a height update.
    pub fn update_normal(&mut self, mask: &PoolMask) {
        debug_assert_eq!(mask.width(), self.width);
        let width = self.width;
        let height = self.height;
        let scale = self.config.normal_scale / mask.cell_size();
        self.run_pass(|i, j, src| {
            let mut cell = src[j * width + i];
            if !mask.contains_cell(i, j) {
                return cell;
            }
            let h = cell.height;
            let sample = |di: isize, dj: isize| -> f32 {
                let ni = i as isize + di;
                let nj = j as isize + dj;
                if ni < 0 || nj < 0 || ni >= width as isize || nj >= height as isize {
                    return h;
                }
                let (ni, nj) = (ni as usize, nj as usize);
                if mask.contains_cell(ni, nj) {
                    src[nj * width + ni].height
                } else {
                    h
                }
            };
            cell.normal_x = (sample(-1, 0) - sample(1, 0)) * scale;
            cell.normal_z = (sample(0, -1) - sample(0, 1)) * scale;
            cell
        });
    }

    /// Run one pass into the other buffer, then swap. Destination rows are
    /// filled in parallel; `f` must be a pure function of the source buffer.
    fn run_pass<F>(&mut self, f: F)
    where
        F: Fn(usize, usize, &[WaterCell]) -> WaterCell + Sync,
    {
        let width = self.width;
        {
            let (head, tail) = self.buffers.split_at_mut(1);
            let (src, dst) = if self.current == 0 {
                (head[0].as_slice(), tail[0].as_mut_slice())
            } else {
                (tail[0].as_slice(), head[0].as_mut_slice())
            };
            dst.par_chunks_mut(width).enumerate().for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate() {
                    *cell = f(i, j, src);
                }
            });
        }
        self.current = 1 - self.current;
    }
}
