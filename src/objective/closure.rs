use super::Objective;
use crate::error::ObjectiveErr;

/// An objective built out of two closures, one for the value and one for the gradient.
///
/// Handy for objectives whose derivatives were worked out by hand.
pub struct FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    value: F,
    gradient: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    /// Creates a new `FnObjective`.
    ///
    /// # Arguments
    /// * `value` - Computes the value of the function at a point.
    /// * `gradient` - Computes the partial derivatives at a point.
    ///
    /// # Returns
    /// A new `FnObjective` instance.
    pub fn new(value: F, gradient: G) -> Self {
        Self { value, gradient }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr> {
        let value = (self.value)(point);

        if value.is_nan() {
            return Err(ObjectiveErr::new(format!("undefined at {point:?}")));
        }

        Ok(value)
    }

    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr> {
        let grad = (self.gradient)(point);

        if grad.len() != point.len() {
            return Err(ObjectiveErr::new(format!(
                "expected {} partial derivatives, got {}",
                point.len(),
                grad.len()
            )));
        }

        if grad.iter().any(|g| g.is_nan()) {
            return Err(ObjectiveErr::new(format!("gradient undefined at {point:?}")));
        }

        Ok(grad)
    }
}
