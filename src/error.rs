use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, OptimErr>;

/// The error an `Objective` returns whenever it can't evaluate itself or its gradient at a given point.
///
/// It boxes the objective's own error so it can be handed back to the caller untouched.
#[derive(Debug)]
pub struct ObjectiveErr(Box<dyn Error + Send + Sync>);

impl ObjectiveErr {
    /// Creates a new `ObjectiveErr`.
    ///
    /// # Arguments
    /// * `err` - Anything convertible into a boxed error, including plain strings.
    ///
    /// # Returns
    /// A new `ObjectiveErr` instance.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self(err.into())
    }

    /// Unwraps the objective's original error.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
        self.0
    }
}

impl Display for ObjectiveErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ObjectiveErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// The crate's error type.
#[derive(Debug)]
pub enum OptimErr {
    NoVariables,
    DuplicateVariable {
        name: String,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidDelay,
    InvalidTolerance {
        got: f64,
    },
    InvalidHyperparameter {
        name: &'static str,
        got: f64,
    },
    Distribution(String),
    Spec(String),
    Evaluation {
        step: usize,
        source: ObjectiveErr,
    },
}

impl OptimErr {
    /// Whether this error comes from an invalid configuration rather than from the objective.
    pub fn is_config(&self) -> bool {
        !matches!(self, OptimErr::Evaluation { .. })
    }
}

impl Display for OptimErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimErr::NoVariables => write!(f, "at least one variable must be declared"),
            OptimErr::DuplicateVariable { name } => {
                write!(f, "the variable {name:?} is declared more than once")
            }
            OptimErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "there's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            OptimErr::InvalidDelay => write!(f, "the delay depth must be at least 1"),
            OptimErr::InvalidTolerance { got } => {
                write!(f, "the convergence tolerance must be positive, got {got}")
            }
            OptimErr::InvalidHyperparameter { name, got } => {
                write!(f, "invalid value for {name}: {got}")
            }
            OptimErr::Distribution(detail) => write!(f, "invalid distribution: {detail}"),
            OptimErr::Spec(detail) => write!(f, "invalid optimizer spec: {detail}"),
            OptimErr::Evaluation { step, source } => {
                write!(f, "objective evaluation failed at step {step}: {source}")
            }
        }
    }
}

impl Error for OptimErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OptimErr::Evaluation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<NormalError> for OptimErr {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for OptimErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<serde_json::Error> for OptimErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Spec(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_keeps_source() {
        let err = OptimErr::Evaluation {
            step: 3,
            source: ObjectiveErr::new("division by zero"),
        };

        assert!(!err.is_config());
        assert_eq!(
            err.to_string(),
            "objective evaluation failed at step 3: division by zero"
        );

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "division by zero");
    }

    #[test]
    fn config_errors() {
        assert!(OptimErr::InvalidDelay.is_config());
        assert!(OptimErr::InvalidTolerance { got: 0. }.is_config());
    }
}
