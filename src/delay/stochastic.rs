use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::DelayStrategy;
use crate::error::{OptimErr, Result};

/// A delay that's sampled anew every step from a normal distribution with unit spread.
///
/// Every velocity ever produced is kept, so large delays can still reach far back in time, they're
/// just rare.
pub struct StochasticDelay<R: Rng> {
    velocities: Vec<Vec<f64>>,
    distribution: Normal<f64>,
    rng: R,
    dims: usize,
}

impl<R: Rng> StochasticDelay<R> {
    /// Creates a new `StochasticDelay`, seeded with one zero velocity.
    ///
    /// # Arguments
    /// * `mean_delay` - The mean of the sampled delays.
    /// * `dims` - The amount of variables being optimized.
    /// * `rng` - A random number generator.
    ///
    /// # Returns
    /// A new `StochasticDelay` instance or an error if `mean_delay` isn't finite.
    pub fn new(mean_delay: f64, dims: usize, rng: R) -> Result<Self> {
        if !mean_delay.is_finite() {
            return Err(OptimErr::InvalidHyperparameter {
                name: "mean_delay",
                got: mean_delay,
            });
        }

        Ok(Self {
            velocities: vec![vec![0.; dims]],
            distribution: Normal::new(mean_delay, 1.)?,
            rng,
            dims,
        })
    }

    /// Samples the delay for this step, never below 1.
    pub fn sample_delay(&mut self) -> usize {
        let sample = self.distribution.sample(&mut self.rng).round_ties_even();

        if sample <= 1. { 1 } else { sample as usize }
    }

    /// All the velocities produced so far, oldest first.
    pub fn velocities(&self) -> &[Vec<f64>] {
        &self.velocities
    }

    /// Looks up the velocity `delay` positions from the end, falling back to the oldest one
    /// whenever the history is still too short.
    fn lookup(&self, delay: usize) -> &[f64] {
        let len = self.velocities.len();
        let idx = if len > delay { len - delay } else { 0 };
        &self.velocities[idx]
    }
}

impl<R: Rng> DelayStrategy for StochasticDelay<R> {
    fn due_velocity(&mut self) -> Vec<f64> {
        let delay = self.sample_delay();
        debug!(delay = delay, available = self.velocities.len(); "sampled delay");
        self.lookup(delay).to_vec()
    }

    fn submit(&mut self, velocity: Vec<f64>) {
        self.velocities.push(velocity);
    }

    fn dims(&self) -> usize {
        self.dims
    }
}
