use crate::optimization::History;

/// Decides how the per variable momentum coefficients evolve during training.
pub trait MomentumPolicy {
    /// Called once per step, right after the variables were updated.
    ///
    /// # Arguments
    /// * `history` - Every step recorded so far, the current one included.
    /// * `momentum` - The momentum coefficients to adjust in place.
    fn adjust(&mut self, history: &History, momentum: &mut [f64]);
}

impl<T: MomentumPolicy + ?Sized> MomentumPolicy for Box<T> {
    fn adjust(&mut self, history: &History, momentum: &mut [f64]) {
        (**self).adjust(history, momentum)
    }
}
