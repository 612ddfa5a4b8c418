mod fixed;
mod stochastic;
mod strategy;

pub use fixed::FixedDelay;
pub use stochastic::StochasticDelay;
pub use strategy::DelayStrategy;
