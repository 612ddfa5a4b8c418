use std::num::NonZeroUsize;

use log::debug;

use super::MomentumPolicy;
use crate::{
    error::{OptimErr, Result},
    optimization::History,
};

/// The default amount of recent steps the oscillation frequency is measured over.
pub const DEFAULT_WINDOW: usize = 10;

/// The default fraction of the window where the damping curve has its inflection point.
pub const DEFAULT_PIVOT: f64 = 0.75;

/// Whether a gradient component changed its sign between two consecutive steps.
pub fn is_oscillating(current: f64, previous: f64) -> bool {
    current * previous < 0.
}

/// Shrinks the momentum of every variable whose gradient keeps flipping its sign.
///
/// Each step and for each variable, a sign flip of the applied gradient is recorded. Whenever the
/// current step flips, the momentum is multiplied by
///
/// `1 - scalar / (1 + exp(-(frequency - window * pivot)))`
///
/// where `frequency` is the amount of flips within the last `window` steps. The factor smoothly goes
/// from about `1` for rare flips down to `1 - scalar` for constant ones.
#[derive(Debug, Clone)]
pub struct MomentumDecay {
    scalar: f64,
    window: NonZeroUsize,
    pivot: f64,
    oscillations: Vec<Vec<bool>>,
}

impl MomentumDecay {
    /// Creates a new `MomentumDecay`.
    ///
    /// # Arguments
    /// * `scalar` - The maximum damping strength, in `[0, 1]`.
    /// * `window` - The amount of recent steps the frequency is measured over.
    /// * `pivot` - Where the inflection point sits, as a fraction of `window` in `[0, 1]`.
    ///
    /// # Returns
    /// A new `MomentumDecay` instance or an error if `scalar` or `pivot` are out of range.
    pub fn new(scalar: f64, window: NonZeroUsize, pivot: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&scalar) {
            return Err(OptimErr::InvalidHyperparameter {
                name: "momentum decay scalar",
                got: scalar,
            });
        }

        if !(0.0..=1.0).contains(&pivot) {
            return Err(OptimErr::InvalidHyperparameter {
                name: "momentum decay pivot",
                got: pivot,
            });
        }

        Ok(Self {
            scalar,
            window,
            pivot,
            oscillations: Vec::new(),
        })
    }

    /// Creates a new `MomentumDecay` with the default window and pivot.
    pub fn with_scalar(scalar: f64) -> Result<Self> {
        let window = NonZeroUsize::new(DEFAULT_WINDOW).ok_or(OptimErr::InvalidHyperparameter {
            name: "momentum decay window",
            got: 0.,
        })?;

        Self::new(scalar, window, DEFAULT_PIVOT)
    }

    /// The recorded sign flips of variable `dim`, one per step.
    pub fn oscillations(&self, dim: usize) -> &[bool] {
        self.oscillations.get(dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The amount of sign flips of variable `dim` within the last `window` steps.
    pub fn frequency(&self, dim: usize) -> usize {
        let record = self.oscillations(dim);
        let start = record.len().saturating_sub(self.window.get());
        record[start..].iter().filter(|&&flip| flip).count()
    }

    /// The factor the momentum is multiplied by at a given oscillation frequency.
    pub fn damping_factor(&self, frequency: usize) -> f64 {
        let inflection = self.window.get() as f64 * self.pivot;
        1. - self.scalar / (1. + (-(frequency as f64 - inflection)).exp())
    }
}

impl MomentumPolicy for MomentumDecay {
    fn adjust(&mut self, history: &History, momentum: &mut [f64]) {
        let records = history.records();
        let Some(current) = records.last() else {
            return;
        };
        let previous = records.len().checked_sub(2).map(|i| &records[i]);

        if self.oscillations.len() != momentum.len() {
            self.oscillations.resize_with(momentum.len(), Vec::new);
        }

        for (dim, mu) in momentum.iter_mut().enumerate() {
            let flipped = previous
                .is_some_and(|prev| is_oscillating(current.applied[dim], prev.applied[dim]));

            self.oscillations[dim].push(flipped);
            if !flipped {
                continue;
            }

            let frequency = self.frequency(dim);
            let factor = self.damping_factor(frequency);
            *mu *= factor;

            debug!(
                step = current.step, dim = dim, frequency = frequency, momentum = *mu;
                "damping momentum"
            );
        }
    }
}
