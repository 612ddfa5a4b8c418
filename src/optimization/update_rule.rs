/// How a velocity and a gradient combine into a step.
///
/// With a constant learning rate both rules walk the same path, they differ in the velocity handed
/// over to the `DelayStrategy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateRule {
    /// `v' = μ ⊙ v + g` and then `x -= η ⊙ v'`, the learning rate scales the whole velocity.
    #[default]
    ScaledVelocity,
    /// `v' = μ ⊙ v + η ⊙ g` and then `x -= v'`, the learning rate is folded into the velocity.
    ScaledGradient,
}

impl UpdateRule {
    /// Takes a step in place.
    ///
    /// # Arguments
    /// * `point` - The variables to update.
    /// * `due` - The velocity due at this step.
    /// * `grad` - The gradient applied at this step.
    /// * `momentum` - The per variable momentum coefficients.
    /// * `learning_rate` - The per variable learning rates.
    ///
    /// # Returns
    /// The new velocity.
    pub fn apply(
        self,
        point: &mut [f64],
        due: &[f64],
        grad: &[f64],
        momentum: &[f64],
        learning_rate: &[f64],
    ) -> Vec<f64> {
        let mut velocity = vec![0.; point.len()];

        point
            .iter_mut()
            .zip(&mut velocity)
            .zip(due.iter().zip(grad))
            .zip(momentum.iter().zip(learning_rate))
            .for_each(|(((x, v), (due, g)), (mu, lr))| match self {
                UpdateRule::ScaledVelocity => {
                    *v = mu * due + g;
                    *x -= lr * *v;
                }
                UpdateRule::ScaledGradient => {
                    *v = mu * due + lr * g;
                    *x -= *v;
                }
            });

        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_velocity() {
        let mut point = [1., 1.];
        let velocity =
            UpdateRule::ScaledVelocity.apply(&mut point, &[1., 2.], &[4., 8.], &[0.5, 0.5], &[0.1, 0.1]);

        assert_eq!(velocity, [4.5, 9.]);
        assert!((point[0] - 0.55).abs() < 1e-12);
        assert!((point[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn scaled_gradient() {
        let mut point = [1., 1.];
        let velocity =
            UpdateRule::ScaledGradient.apply(&mut point, &[1., 2.], &[4., 8.], &[0.5, 0.5], &[0.1, 0.1]);

        assert!((velocity[0] - 0.9).abs() < 1e-12);
        assert!((velocity[1] - 1.8).abs() < 1e-12);
        assert!((point[0] - 0.1).abs() < 1e-12);
        assert!((point[1] + 0.8).abs() < 1e-12);
    }

    #[test]
    fn rules_agree_without_momentum_history() {
        let mut a = [2.];
        let mut b = [2.];
        UpdateRule::ScaledVelocity.apply(&mut a, &[0.], &[3.], &[0.9], &[0.1]);
        UpdateRule::ScaledGradient.apply(&mut b, &[0.], &[3.], &[0.9], &[0.1]);

        assert!((a[0] - b[0]).abs() < 1e-12);
    }
}
