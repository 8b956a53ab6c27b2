//! Pool boundary editor core and masked wave simulation.
//!
//! Backend for an interactive pool builder:
//! - Ring topology for the boundary polygon (nodes, walls, coping strips)
//! - Mitered coping joints shared between neighboring strips
//! - O(n^2) simple-polygon validation surfaced as observable state
//! - Rasterized interior mask gating all water writes
//! - Double-buffered wave-height field with localized drop impulses
//!
//! This crate is framework-agnostic - it handles geometry and simulation
//! state only. Rendering, input routing, and asset loading live with the
//! embedding application, which drives the model through
//! [`PoolModel::insert_node`]/[`PoolModel::move_node`]/[`PoolModel::remove_node`]
//! and the water field through [`WaterSimulation::add_drop`] and
//! [`WaterSimulation::step`].
//!
//! # Example
//!
//! ```
//! use pool::{plus_shape, PoolConfig, PoolModel, WaterConfig, WaterSimulation};
//!
//! let config = PoolConfig::default();
//! let resolution = config.grid_resolution;
//! let model = PoolModel::with_ring(config, &plus_shape());
//! assert!(model.is_valid());
//!
//! let mut water = WaterSimulation::new(resolution, WaterConfig::default());
//! water.add_drop(model.mask(), 0.0, 0.0, 0.5, 0.4);
//! water.step(model.mask());
//! ```

pub mod config;
pub mod coping;
pub mod geometry;
pub mod mask;
pub mod model;
pub mod node;
pub mod wall;
pub mod water;

pub use config::{PoolConfig, WaterConfig};
pub use coping::{compute_joint, Coping, CopingVertex, Joint};
pub use mask::PoolMask;
pub use model::{plus_shape, PoolModel, PoolObserver, TopologyError};
pub use node::Node;
pub use wall::Wall;
pub use water::{WaterCell, WaterSimulation};
