use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::UpdateRule;
use crate::error::{OptimErr, Result};

/// A hyperparameter given either once for every variable or once per variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    Uniform(f64),
    PerVariable(Vec<f64>),
}

impl Coefficient {
    /// Expands the coefficient into one value per variable.
    ///
    /// # Arguments
    /// * `name` - The hyperparameter's name, used for error reporting.
    /// * `dims` - The amount of variables.
    ///
    /// # Returns
    /// The expanded values or an error if their amount doesn't match `dims` or any isn't finite.
    pub fn expand(&self, name: &'static str, dims: usize) -> Result<Vec<f64>> {
        let values = match self {
            Coefficient::Uniform(value) => vec![*value; dims],
            Coefficient::PerVariable(values) if values.len() == dims => values.clone(),
            Coefficient::PerVariable(values) => {
                return Err(OptimErr::SizeMismatch {
                    what: name,
                    got: values.len(),
                    expected: dims,
                });
            }
        };

        if let Some(&got) = values.iter().find(|v| !v.is_finite()) {
            return Err(OptimErr::InvalidHyperparameter { name, got });
        }

        Ok(values)
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for Coefficient {
    fn from(values: Vec<f64>) -> Self {
        Self::PerVariable(values)
    }
}

/// Everything an `Optimizer` needs besides its objective and its pluggable strategies.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    pub variables: Vec<String>,
    pub initial: Vec<f64>,
    pub tolerance: f64,
    pub learning_rate: Coefficient,
    pub momentum: Coefficient,
    pub update_rule: UpdateRule,
}

/// An `OptimizerConfig` that went through validation.
pub(super) struct Validated {
    pub variables: Vec<String>,
    pub initial: Vec<f64>,
    pub tolerance: f64,
    pub learning_rate: Vec<f64>,
    pub momentum: Vec<f64>,
    pub update_rule: UpdateRule,
}

impl OptimizerConfig {
    /// Checks every invariant of the configuration so training never fails because of it.
    pub(super) fn validate(self) -> Result<Validated> {
        let dims = self.variables.len();
        if dims == 0 {
            return Err(OptimErr::NoVariables);
        }

        let mut seen = HashSet::with_capacity(dims);
        if let Some(name) = self.variables.iter().find(|name| !seen.insert(*name)) {
            return Err(OptimErr::DuplicateVariable { name: name.clone() });
        }

        if self.initial.len() != dims {
            return Err(OptimErr::SizeMismatch {
                what: "initial values",
                got: self.initial.len(),
                expected: dims,
            });
        }

        if let Some(&got) = self.initial.iter().find(|v| !v.is_finite()) {
            return Err(OptimErr::InvalidHyperparameter {
                name: "initial value",
                got,
            });
        }

        if !(self.tolerance > 0.) || self.tolerance.is_infinite() {
            return Err(OptimErr::InvalidTolerance {
                got: self.tolerance,
            });
        }

        let learning_rate = self.learning_rate.expand("learning_rate", dims)?;
        if let Some(&got) = learning_rate.iter().find(|&&lr| lr <= 0.) {
            return Err(OptimErr::InvalidHyperparameter {
                name: "learning_rate",
                got,
            });
        }

        let momentum = self.momentum.expand("momentum", dims)?;
        if let Some(&got) = momentum.iter().find(|&&mu| mu < 0.) {
            return Err(OptimErr::InvalidHyperparameter {
                name: "momentum",
                got,
            });
        }

        Ok(Validated {
            variables: self.variables,
            initial: self.initial,
            tolerance: self.tolerance,
            learning_rate,
            momentum,
            update_rule: self.update_rule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OptimizerConfig {
        OptimizerConfig {
            variables: vec!["x".into(), "y".into()],
            initial: vec![1., 1.],
            tolerance: 1e-7,
            learning_rate: 0.01.into(),
            momentum: vec![0.9, 0.8].into(),
            update_rule: UpdateRule::ScaledVelocity,
        }
    }

    #[test]
    fn valid() {
        let validated = config().validate().unwrap();

        assert_eq!(validated.learning_rate, [0.01, 0.01]);
        assert_eq!(validated.momentum, [0.9, 0.8]);
    }

    #[test]
    fn no_variables() {
        let mut config = config();
        config.variables.clear();
        config.initial.clear();

        assert!(matches!(config.validate(), Err(OptimErr::NoVariables)));
    }

    #[test]
    fn duplicate_variable() {
        let mut config = config();
        config.variables[1] = "x".into();

        assert!(matches!(
            config.validate(),
            Err(OptimErr::DuplicateVariable { name }) if name == "x"
        ));
    }

    #[test]
    fn mismatched_lengths() {
        let mut config = config();
        config.initial.push(0.);
        assert!(matches!(
            config.validate(),
            Err(OptimErr::SizeMismatch { got: 3, expected: 2, .. })
        ));

        let mut config = self::config();
        config.momentum = vec![0.9].into();
        assert!(matches!(
            config.validate(),
            Err(OptimErr::SizeMismatch { what: "momentum", .. })
        ));
    }

    #[test]
    fn non_positive_tolerance() {
        for tolerance in [0., -1e-7, f64::NAN, f64::INFINITY] {
            let mut config = config();
            config.tolerance = tolerance;
            assert!(matches!(config.validate(), Err(OptimErr::InvalidTolerance { .. })));
        }
    }

    #[test]
    fn non_finite_learning_rate() {
        let mut config = config();
        config.learning_rate = f64::NAN.into();

        assert!(matches!(
            config.validate(),
            Err(OptimErr::InvalidHyperparameter { name: "learning_rate", .. })
        ));
    }

    #[test]
    fn out_of_range_coefficients() {
        for learning_rate in [0., -0.01] {
            let mut config = config();
            config.learning_rate = vec![0.01, learning_rate].into();

            assert!(matches!(
                config.validate(),
                Err(OptimErr::InvalidHyperparameter { name: "learning_rate", got }) if got == learning_rate
            ));
        }

        let mut config = config();
        config.momentum = (-0.5).into();
        assert!(matches!(
            config.validate(),
            Err(OptimErr::InvalidHyperparameter { name: "momentum", .. })
        ));

        let mut config = self::config();
        config.momentum = 0.0.into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn coefficient_from_json() {
        let uniform: Coefficient = serde_json::from_str("0.5").unwrap();
        let per_variable: Coefficient = serde_json::from_str("[0.5, 0.25]").unwrap();

        assert_eq!(uniform, Coefficient::Uniform(0.5));
        assert_eq!(per_variable, Coefficient::PerVariable(vec![0.5, 0.25]));
    }
}
