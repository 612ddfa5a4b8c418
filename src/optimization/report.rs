/// Where an `Optimizer` stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    /// Consecutive objective values became closer than the tolerance.
    Converged,
    /// The iteration budget ran out before converging.
    Exhausted,
    /// The objective couldn't be evaluated, no further steps are taken.
    Failed,
}

impl State {
    pub fn is_terminal(self) -> bool {
        self != State::Running
    }
}

/// The summary of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Either `Converged` or `Exhausted`, `Failed` only when training an already failed optimizer.
    pub state: State,
    /// The amount of completed steps.
    pub steps: usize,
    /// The objective's value at the final point.
    pub value: f64,
    /// The last difference between consecutive objective values.
    pub diff: f64,
}
