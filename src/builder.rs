use std::num::NonZeroUsize;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    delay::{DelayStrategy, FixedDelay, StochasticDelay},
    error::{OptimErr, Result},
    initialization::{ConstStart, RandomStart, StartGen, ValuesStart},
    momentum::{MomentumDecay, MomentumPolicy, StaticMomentum},
    objective::Objective,
    optimization::{Optimizer, OptimizerConfig, UpdateRule},
    specs::{DelaySpec, InitSpec, MomentumSpec, OptimizerSpec, UpdateRuleSpec},
};

/// An `Optimizer` whose strategies were resolved at runtime.
pub type DynOptimizer<O> = Optimizer<O, Box<dyn DelayStrategy>, Box<dyn MomentumPolicy>>;

/// Builds `Optimizer`s given a specification.
#[derive(Debug, Default)]
pub struct OptimizerBuilder;

impl OptimizerBuilder {
    /// Creates a new `OptimizerBuilder`.
    ///
    /// # Returns
    /// A new `OptimizerBuilder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Optimizer` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification of the optimizer.
    /// * `objective` - The function to minimize.
    ///
    /// # Returns
    /// A new optimizer or an error if the specification is invalid.
    pub fn build<O: Objective>(&self, spec: OptimizerSpec, objective: O) -> Result<DynOptimizer<O>> {
        let dims = spec.variables.len();
        if dims == 0 {
            return Err(OptimErr::NoVariables);
        }

        debug!("building optimizer: {spec:?}");

        let mut rng = self.generate_rng(spec.seed);
        let initial = self.resolve_init(&spec.init, dims, &mut rng)?;
        let policy = self.resolve_momentum_policy(spec.momentum_policy)?;
        let update_rule = self.resolve_update_rule(spec.update_rule, spec.delay);
        let delay = self.resolve_delay(spec.delay, dims, rng)?;

        let config = OptimizerConfig {
            variables: spec.variables,
            initial,
            tolerance: spec.tolerance,
            learning_rate: spec.learning_rate,
            momentum: spec.momentum,
            update_rule,
        };

        Optimizer::new(objective, config, delay, policy)
    }

    /// Generates a random number generator given (or not) a seed.
    ///
    /// # Arguments
    /// * `seed` - An optional seed for the rng.
    ///
    /// # Returns
    /// A random number generator.
    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Resolves the starting point.
    ///
    /// # Arguments
    /// * `spec` - The specification of the starting point.
    /// * `dims` - The amount of variables.
    /// * `rng` - A random number generator.
    ///
    /// # Returns
    /// One initial value per variable or an error if the spec can't produce them.
    fn resolve_init<R: Rng>(&self, spec: &InitSpec, dims: usize, rng: &mut R) -> Result<Vec<f64>> {
        let mut start_gen: Box<dyn StartGen + '_> = match *spec {
            InitSpec::Values { ref values } => Box::new(ValuesStart(values.clone())),
            InitSpec::Const { value } => Box::new(ConstStart(value)),
            InitSpec::Uniform { low, high } => Box::new(RandomStart::uniform(rng, low, high)?),
            InitSpec::Normal { mean, std_dev } => {
                Box::new(RandomStart::normal(rng, mean, std_dev)?)
            }
        };

        start_gen.generate(dims)
    }

    /// Resolves the `MomentumPolicy` for this optimizer.
    fn resolve_momentum_policy(&self, spec: MomentumSpec) -> Result<Box<dyn MomentumPolicy>> {
        match spec {
            MomentumSpec::Static => Ok(Box::new(StaticMomentum)),
            MomentumSpec::Decay {
                scalar,
                window,
                pivot,
            } => Ok(Box::new(MomentumDecay::new(scalar, window, pivot)?)),
        }
    }

    /// Resolves the `UpdateRule`, defaulting to the one that goes along with the delay kind.
    fn resolve_update_rule(&self, spec: Option<UpdateRuleSpec>, delay: DelaySpec) -> UpdateRule {
        match (spec, delay) {
            (Some(UpdateRuleSpec::ScaledVelocity), _) => UpdateRule::ScaledVelocity,
            (Some(UpdateRuleSpec::ScaledGradient), _) => UpdateRule::ScaledGradient,
            (None, DelaySpec::Fixed { .. }) => UpdateRule::ScaledVelocity,
            (None, DelaySpec::Stochastic { .. }) => UpdateRule::ScaledGradient,
        }
    }

    /// Resolves the `DelayStrategy` for this optimizer.
    ///
    /// # Arguments
    /// * `spec` - The specification of the delay.
    /// * `dims` - The amount of variables.
    /// * `rng` - The random number generator stochastic delays sample from.
    ///
    /// # Returns
    /// The delay strategy or an error if its parameters are invalid.
    fn resolve_delay(
        &self,
        spec: DelaySpec,
        dims: usize,
        rng: StdRng,
    ) -> Result<Box<dyn DelayStrategy>> {
        match spec {
            DelaySpec::Fixed { delay } => {
                let delay = NonZeroUsize::new(delay).ok_or(OptimErr::InvalidDelay)?;
                Ok(Box::new(FixedDelay::new(delay, dims)))
            }
            DelaySpec::Stochastic { mean_delay } => {
                Ok(Box::new(StochasticDelay::new(mean_delay, dims, rng)?))
            }
        }
    }
}
