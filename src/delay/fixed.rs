use std::{collections::VecDeque, num::NonZeroUsize};

use super::DelayStrategy;

/// A first-in-first-out pipeline that releases every velocity exactly `delay` steps after it was submitted.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    pending: VecDeque<Vec<f64>>,
    delay: NonZeroUsize,
    dims: usize,
}

impl FixedDelay {
    /// Creates a new `FixedDelay`, seeded with `delay` zero velocities.
    ///
    /// # Arguments
    /// * `delay` - The lag between submitting and retrieving a velocity.
    /// * `dims` - The amount of variables being optimized.
    ///
    /// # Returns
    /// A new `FixedDelay` instance.
    pub fn new(delay: NonZeroUsize, dims: usize) -> Self {
        let pending = (0..delay.get()).map(|_| vec![0.; dims]).collect();

        Self {
            pending,
            delay,
            dims,
        }
    }

    /// The configured lag.
    pub fn delay(&self) -> usize {
        self.delay.get()
    }

    /// The amount of velocities waiting to be released.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl DelayStrategy for FixedDelay {
    fn due_velocity(&mut self) -> Vec<f64> {
        self.pending
            .pop_front()
            .unwrap_or_else(|| vec![0.; self.dims])
    }

    fn submit(&mut self, velocity: Vec<f64>) {
        self.pending.push_back(velocity);
    }

    fn dims(&self) -> usize {
        self.dims
    }

    fn gradient_lag(&self) -> usize {
        self.delay.get() - 1
    }
}
