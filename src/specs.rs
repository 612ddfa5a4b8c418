use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    momentum::{DEFAULT_PIVOT, DEFAULT_WINDOW},
    optimization::Coefficient,
};

/// The specification for the starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitSpec {
    Values { values: Vec<f64> },
    Const { value: f64 },
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

/// The specification for the `DelayStrategy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaySpec {
    Fixed { delay: usize },
    Stochastic { mean_delay: f64 },
}

/// The specification for the `MomentumPolicy` trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumSpec {
    #[default]
    Static,
    Decay {
        scalar: f64,
        #[serde(default = "default_window")]
        window: NonZeroUsize,
        #[serde(default = "default_pivot")]
        pivot: f64,
    },
}

/// The specification for the `UpdateRule` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRuleSpec {
    ScaledVelocity,
    ScaledGradient,
}

/// The specification for the `Optimizer` struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerSpec {
    pub variables: Vec<String>,
    pub init: InitSpec,
    pub tolerance: f64,
    pub learning_rate: Coefficient,
    pub momentum: Coefficient,
    pub delay: DelaySpec,
    #[serde(default)]
    pub momentum_policy: MomentumSpec,
    /// When missing, fixed delays scale the velocity and stochastic delays scale the gradient.
    #[serde(default)]
    pub update_rule: Option<UpdateRuleSpec>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl OptimizerSpec {
    /// Parses a spec out of its JSON representation.
    ///
    /// # Arguments
    /// * `json` - The JSON document.
    ///
    /// # Returns
    /// The parsed spec or an error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the spec into a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_window() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_WINDOW).unwrap_or(NonZeroUsize::MIN)
}

fn default_pivot() -> f64 {
    DEFAULT_PIVOT
}
