/// Decouples the step at which a velocity is computed from the step at which it's applied.
///
/// Each step the optimizer retrieves exactly one due velocity and later submits exactly one new
/// velocity, this models the latency of gradients travelling through a distributed pipeline.
pub trait DelayStrategy {
    /// Retrieves the velocity due for application at this step.
    fn due_velocity(&mut self) -> Vec<f64>;

    /// Submits a newly computed velocity, making it eligible for future retrieval.
    ///
    /// # Arguments
    /// * `velocity` - The velocity computed at this step.
    fn submit(&mut self, velocity: Vec<f64>);

    /// The length of every velocity this strategy releases.
    fn dims(&self) -> usize;

    /// How many steps behind the current one the applied gradient should be.
    ///
    /// A read-only query, it never touches the pending velocities. Strategies with a
    /// deterministic lag keep the gradient as stale as the velocity they release, the rest
    /// apply the freshly computed gradient.
    fn gradient_lag(&self) -> usize {
        0
    }
}

impl<T: DelayStrategy + ?Sized> DelayStrategy for Box<T> {
    fn due_velocity(&mut self) -> Vec<f64> {
        (**self).due_velocity()
    }

    fn submit(&mut self, velocity: Vec<f64>) {
        (**self).submit(velocity)
    }

    fn dims(&self) -> usize {
        (**self).dims()
    }

    fn gradient_lag(&self) -> usize {
        (**self).gradient_lag()
    }
}
