use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::StartGen;
use crate::error::Result;

/// Draws every starting value independently out of a distribution.
pub struct RandomStart<R: Rng, D: Distribution<f64>> {
    rng: R,
    distribution: D,
}

impl<R: Rng, D: Distribution<f64>> RandomStart<R, D> {
    /// Creates a new `RandomStart`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution the starting values are drawn from.
    pub fn new(rng: R, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<R: Rng> RandomStart<R, Uniform<f64>> {
    /// Starts anywhere inside the box `[low, high)` on every axis.
    ///
    /// # Returns
    /// An error if the range is empty or not finite.
    pub fn uniform(rng: R, low: f64, high: f64) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new(low, high)?))
    }
}

impl<R: Rng> RandomStart<R, Normal<f64>> {
    /// Starts around `mean` with a spread of `std_dev` on every axis.
    ///
    /// # Returns
    /// An error if `std_dev` is negative or not finite.
    pub fn normal(rng: R, mean: f64, std_dev: f64) -> Result<Self> {
        Ok(Self::new(rng, Normal::new(mean, std_dev)?))
    }
}

impl<R: Rng, D: Distribution<f64>> StartGen for RandomStart<R, D> {
    fn generate(&mut self, dims: usize) -> Result<Vec<f64>> {
        let start = (&self.distribution)
            .sample_iter(&mut self.rng)
            .take(dims)
            .collect();

        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::error::OptimErr;

    #[test]
    fn uniform_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut start = RandomStart::uniform(&mut rng, -3., 3.).unwrap();
        let point = start.generate(100).unwrap();

        assert_eq!(point.len(), 100);
        assert!(point.iter().all(|v| (-3.0..3.0).contains(v)));
    }

    #[test]
    fn invalid_distributions() {
        let rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            RandomStart::uniform(rng, 3., -3.),
            Err(OptimErr::Distribution(_))
        ));

        let rng = StdRng::seed_from_u64(42);
        assert!(RandomStart::normal(rng, 0., -1.).is_err());
    }

    #[test]
    fn seeded_is_reproducible() {
        let start = |seed| {
            let rng = StdRng::seed_from_u64(seed);
            RandomStart::normal(rng, 0., 1.).unwrap().generate(4).unwrap()
        };

        assert_eq!(start(7), start(7));
        assert_ne!(start(7), start(8));
    }
}
