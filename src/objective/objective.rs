use crate::error::ObjectiveErr;

/// A scalar function of several real variables that knows its own gradient.
///
/// Both methods should be pure given a point, the optimizer never retries them.
pub trait Objective {
    /// Evaluates the function at `point`.
    ///
    /// # Arguments
    /// * `point` - One value per variable, in the order the variables were declared.
    ///
    /// # Returns
    /// The value of the function or an error if it isn't defined at `point`.
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr>;

    /// Evaluates the partial derivatives at `point`.
    ///
    /// # Arguments
    /// * `point` - One value per variable, in the order the variables were declared.
    ///
    /// # Returns
    /// One partial derivative per variable or an error if it isn't defined at `point`.
    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr>;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr> {
        (**self).evaluate(point)
    }

    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr> {
        (**self).gradient(point)
    }
}

impl<T: Objective + ?Sized> Objective for Box<T> {
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr> {
        (**self).evaluate(point)
    }

    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr> {
        (**self).gradient(point)
    }
}
