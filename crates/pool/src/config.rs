//! Session tunables for the boundary editor and the wave field.

use serde::{Deserialize, Serialize};

/// Editor-side tunables for the pool boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Outward extent of the coping trim strip (meters).
    pub coping_height: f32,
    /// Deck plane height; y of node placements and coping quads.
    pub deck_height: f32,
    /// Vertical extent of wall panels below the deck (meters).
    pub wall_depth: f32,
    /// Minimum spacing between ring neighbors; closer edits are rejected.
    pub min_node_gap: f32,
    /// Mask cells per axis.
    pub grid_resolution: usize,
    /// The mask covers the world square [-half, half] on both axes.
    pub world_half_extent: f32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            coping_height: 0.25,
            deck_height: 0.0,
            wall_depth: 1.5,
            min_node_gap: 0.05,
            grid_resolution: 128,
            world_half_extent: 4.0,
        }
    }
}

/// Wave-equation tunables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Pull toward the neighbor average per step.
    pub propagation: f32,
    /// Velocity retained per step.
    pub damping: f32,
    /// Slope-to-normal scale for the recompute pass.
    pub normal_scale: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            propagation: 2.0,
            damping: 0.995,
            normal_scale: 1.0,
        }
    }
}
