use crate::error::{OptimErr, Result};

/// Produces the point an optimization starts from.
pub trait StartGen {
    /// Generates one starting value per variable.
    ///
    /// # Arguments
    /// * `dims` - The amount of variables.
    ///
    /// # Returns
    /// The starting point or an error if this generator can't produce `dims` values.
    fn generate(&mut self, dims: usize) -> Result<Vec<f64>>;
}

/// Starts from a point given by hand.
#[derive(Debug, Clone)]
pub struct ValuesStart(pub Vec<f64>);

impl StartGen for ValuesStart {
    fn generate(&mut self, dims: usize) -> Result<Vec<f64>> {
        if self.0.len() != dims {
            return Err(OptimErr::SizeMismatch {
                what: "initial values",
                got: self.0.len(),
                expected: dims,
            });
        }

        Ok(self.0.clone())
    }
}

/// Starts every variable at the same value.
#[derive(Debug, Clone, Copy)]
pub struct ConstStart(pub f64);

impl StartGen for ConstStart {
    fn generate(&mut self, dims: usize) -> Result<Vec<f64>> {
        Ok(vec![self.0; dims])
    }
}
