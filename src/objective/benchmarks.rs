use super::Objective;
use crate::error::ObjectiveErr;

/// The Beale function, a two variable surface with a narrow curved valley and its minimum at `(3, 0.5)`.
///
/// `f(x, y) = (1.5 - x + xy)² + (2.25 - x + xy²)² + (2.625 - x + xy³)²`
#[derive(Debug, Default, Clone, Copy)]
pub struct Beale;

impl Beale {
    const C: [f64; 3] = [1.5, 2.25, 2.625];

    fn check(point: &[f64]) -> Result<(f64, f64), ObjectiveErr> {
        match *point {
            [x, y] => Ok((x, y)),
            _ => Err(ObjectiveErr::new(format!(
                "the Beale function takes 2 variables, got {}",
                point.len()
            ))),
        }
    }
}

impl Objective for Beale {
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr> {
        let (x, y) = Self::check(point)?;

        let value = Self::C
            .iter()
            .zip(1..)
            .map(|(c, k)| (c - x + x * y.powi(k)).powi(2))
            .sum();

        Ok(value)
    }

    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr> {
        let (x, y) = Self::check(point)?;
        let mut dx = 0.;
        let mut dy = 0.;

        for (c, k) in Self::C.iter().zip(1..) {
            let term = c - x + x * y.powi(k);
            dx += 2. * term * (y.powi(k) - 1.);
            dy += 2. * term * x * k as f64 * y.powi(k - 1);
        }

        Ok(vec![dx, dy])
    }
}

/// A separable quadratic `f(x) = Σ aᵢxᵢ² + bᵢxᵢ`.
#[derive(Debug, Clone)]
pub struct Quadratic {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl Quadratic {
    /// Creates a new `Quadratic`.
    ///
    /// # Arguments
    /// * `a` - The quadratic coefficients, one per variable.
    /// * `b` - The linear coefficients, one per variable.
    ///
    /// # Returns
    /// A new `Quadratic` instance or `None` if the coefficient lengths differ.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Option<Self> {
        (a.len() == b.len()).then_some(Self { a, b })
    }

    /// Creates the bowl `f(x) = Σ aᵢxᵢ²`.
    pub fn centered(a: Vec<f64>) -> Self {
        let b = vec![0.; a.len()];
        Self { a, b }
    }

    fn check(&self, point: &[f64]) -> Result<(), ObjectiveErr> {
        if point.len() != self.a.len() {
            return Err(ObjectiveErr::new(format!(
                "the quadratic takes {} variables, got {}",
                self.a.len(),
                point.len()
            )));
        }

        Ok(())
    }
}

impl Objective for Quadratic {
    fn evaluate(&self, point: &[f64]) -> Result<f64, ObjectiveErr> {
        self.check(point)?;

        let value = point
            .iter()
            .zip(self.a.iter().zip(&self.b))
            .map(|(x, (a, b))| a * x * x + b * x)
            .sum();

        Ok(value)
    }

    fn gradient(&self, point: &[f64]) -> Result<Vec<f64>, ObjectiveErr> {
        self.check(point)?;

        let grad = point
            .iter()
            .zip(self.a.iter().zip(&self.b))
            .map(|(x, (a, b))| 2. * a * x + b)
            .collect();

        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beale_minimum() {
        let value = Beale.evaluate(&[3., 0.5]).unwrap();
        let grad = Beale.gradient(&[3., 0.5]).unwrap();

        assert!(value.abs() < 1e-12);
        assert!(grad.iter().all(|g| g.abs() < 1e-12));
    }

    #[test]
    fn beale_gradient_matches_finite_differences() {
        const H: f64 = 1e-6;
        let point = [1., 1.];
        let grad = Beale.gradient(&point).unwrap();

        for (i, g) in grad.iter().enumerate() {
            let mut forward = point;
            let mut backward = point;
            forward[i] += H;
            backward[i] -= H;

            let approx = (Beale.evaluate(&forward).unwrap() - Beale.evaluate(&backward).unwrap())
                / (2. * H);

            assert!((g - approx).abs() < 1e-5, "d{i}: {g} vs {approx}");
        }
    }

    #[test]
    fn beale_wrong_arity() {
        assert!(Beale.evaluate(&[1.]).is_err());
        assert!(Beale.gradient(&[1., 2., 3.]).is_err());
    }

    #[test]
    fn quadratic() {
        let quadratic = Quadratic::new(vec![1., 1.], vec![9., 0.]).unwrap();

        assert_eq!(quadratic.evaluate(&[1., 2.]).unwrap(), 1. + 9. + 4.);
        assert_eq!(quadratic.gradient(&[1., 2.]).unwrap(), [11., 4.]);
    }

    #[test]
    fn quadratic_mismatched_coefficients() {
        assert!(Quadratic::new(vec![1.], vec![]).is_none());
    }
}
