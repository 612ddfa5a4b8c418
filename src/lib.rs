//! Gradient descent with momentum over stale gradients.
//!
//! The optimizer applies velocities that were computed some steps ago, either after a fixed lag or
//! after a randomly sampled one, and can damp the momentum of variables whose gradient oscillates.

pub mod builder;
pub mod delay;
pub mod error;
pub mod initialization;
pub mod momentum;
pub mod objective;
pub mod optimization;
pub mod specs;

pub use builder::{DynOptimizer, OptimizerBuilder};
pub use error::{ObjectiveErr, OptimErr, Result};
pub use objective::Objective;
pub use optimization::{Optimizer, OptimizerConfig, State, TrainReport, Trajectory};
pub use specs::OptimizerSpec;
