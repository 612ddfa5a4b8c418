use super::MomentumPolicy;
use crate::optimization::History;

/// Keeps the momentum coefficients untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticMomentum;

impl MomentumPolicy for StaticMomentum {
    fn adjust(&mut self, _history: &History, _momentum: &mut [f64]) {}
}
