use log::{debug, info};

use super::{
    History, OptimizerConfig, State, StepRecord, Trajectory, TrainReport, UpdateRule,
};
use crate::{
    delay::DelayStrategy,
    error::{OptimErr, Result},
    momentum::MomentumPolicy,
    objective::Objective,
};

/// Convergence is only checked once the step index goes past this value.
pub const MIN_STEPS: usize = 5;

/// Progress is logged every this many steps.
pub const REPORT_EVERY: usize = 100;

/// Gradient descent with momentum over delayed velocities.
///
/// Each step evaluates the objective, picks the gradient to apply, combines it with the velocity the
/// `DelayStrategy` releases and lets the `MomentumPolicy` adjust the momentum coefficients afterwards.
pub struct Optimizer<O, D, M>
where
    O: Objective,
    D: DelayStrategy,
    M: MomentumPolicy,
{
    objective: O,
    delay: D,
    policy: M,

    variables: Vec<String>,
    point: Vec<f64>,
    learning_rate: Vec<f64>,
    momentum: Vec<f64>,
    tolerance: f64,
    update_rule: UpdateRule,

    history: History,
    previous: Option<f64>,
    diff: f64,
    step: usize,
    state: State,
}

impl<O, D, M> Optimizer<O, D, M>
where
    O: Objective,
    D: DelayStrategy,
    M: MomentumPolicy,
{
    /// Creates a new `Optimizer`.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize.
    /// * `config` - Variables, starting point and hyperparameters.
    /// * `delay` - Decides which past velocity is applied at each step.
    /// * `policy` - Decides how the momentum coefficients evolve.
    ///
    /// # Returns
    /// A new `Optimizer` or an error if the configuration is invalid.
    pub fn new(objective: O, config: OptimizerConfig, delay: D, policy: M) -> Result<Self> {
        let config = config.validate()?;
        check_len("delay strategy", delay.dims(), config.variables.len())?;

        Ok(Self {
            objective,
            delay,
            policy,
            variables: config.variables,
            point: config.initial,
            learning_rate: config.learning_rate,
            momentum: config.momentum,
            tolerance: config.tolerance,
            update_rule: config.update_rule,
            history: History::new(),
            previous: None,
            diff: f64::INFINITY,
            step: 0,
            state: State::Running,
        })
    }

    /// Performs a single step, a no-op once the optimizer reached a terminal state.
    ///
    /// Any error is fatal: the optimizer moves into `State::Failed` and later steps do nothing.
    ///
    /// # Returns
    /// The state after the step or an error if the objective couldn't be evaluated.
    pub fn step(&mut self) -> Result<State> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let result = self.advance();
        self.fail_on_err(result)
    }

    fn advance(&mut self) -> Result<State> {
        let t = self.step;
        let dims = self.point.len();

        let value = self.evaluate(t)?;
        let diff = self.previous.map_or(f64::INFINITY, |prev| (prev - value).abs());

        let grad = self
            .objective
            .gradient(&self.point)
            .map_err(|source| OptimErr::Evaluation { step: t, source })?;
        check_len("gradient", grad.len(), dims)?;

        // The delay strategy is only touched once the objective answered.
        let due = self.delay.due_velocity();
        check_len("due velocity", due.len(), dims)?;

        let applied = self.select_gradient(t, &grad);

        self.history.push(StepRecord {
            step: t,
            point: self.point.clone(),
            value,
            gradient: grad.clone(),
            applied: applied.clone(),
        });

        let velocity = self.update_rule.apply(
            &mut self.point,
            &due,
            &applied,
            &self.momentum,
            &self.learning_rate,
        );

        self.policy.adjust(&self.history, &mut self.momentum);
        self.delay.submit(velocity);

        self.previous = Some(value);
        self.diff = diff;
        self.step += 1;

        if diff < self.tolerance && t > MIN_STEPS {
            let value = self.finish(grad, State::Converged)?;
            info!(steps = self.step, value = value, diff = diff; "converged");
            return Ok(self.state);
        }

        if self.step % REPORT_EVERY == 0 {
            self.report();
        }

        Ok(self.state)
    }

    /// Runs steps until convergence or until `max_iter` steps were performed.
    ///
    /// # Arguments
    /// * `max_iter` - The iteration budget.
    ///
    /// # Returns
    /// A summary of the run or an error if the objective couldn't be evaluated.
    pub fn train(&mut self, max_iter: usize) -> Result<TrainReport> {
        for _ in 0..max_iter {
            if self.step()?.is_terminal() {
                break;
            }
        }

        if self.state == State::Running {
            let grad = match self.history.last() {
                Some(record) => record.gradient.clone(),
                None => vec![0.; self.point.len()],
            };

            let value = self.finish(grad, State::Exhausted);
            let value = self.fail_on_err(value)?;
            info!(steps = self.step, value = value, diff = self.diff; "iteration budget exhausted");
        }

        Ok(self.report_summary())
    }

    /// Evaluates the objective anywhere without touching the optimizer's state.
    pub fn evaluate_at(&self, point: &[f64]) -> Result<f64> {
        check_len("point", point.len(), self.point.len())?;

        self.objective
            .evaluate(point)
            .map_err(|source| OptimErr::Evaluation {
                step: self.step,
                source,
            })
    }

    /// The path followed so far, ready to be plotted.
    pub fn trajectory(&self) -> Trajectory {
        self.history.trajectory(self.point.len())
    }

    /// The current value of every variable.
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// The current value of the variable called `name`.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        let idx = self.variables.iter().position(|v| v == name)?;
        Some(self.point[idx])
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn momentum(&self) -> &[f64] {
        &self.momentum
    }

    pub fn learning_rate(&self) -> &[f64] {
        &self.learning_rate
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn policy(&self) -> &M {
        &self.policy
    }

    /// The amount of completed steps.
    pub fn steps(&self) -> usize {
        self.step
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Picks the gradient applied at step `t`, as stale as the velocity it will be combined with.
    fn select_gradient(&self, t: usize, grad: &[f64]) -> Vec<f64> {
        let lag = self.delay.gradient_lag();
        if lag == 0 {
            return grad.to_vec();
        }

        match self.history.get(t.saturating_sub(lag)) {
            Some(record) => record.gradient.clone(),
            None => grad.to_vec(),
        }
    }

    /// Evaluates the objective at the current point.
    fn evaluate(&self, step: usize) -> Result<f64> {
        self.objective
            .evaluate(&self.point)
            .map_err(|source| OptimErr::Evaluation { step, source })
    }

    /// Records the final point and moves into a terminal state.
    ///
    /// # Returns
    /// The objective's value at the final point.
    fn finish(&mut self, grad: Vec<f64>, state: State) -> Result<f64> {
        let value = self.evaluate(self.step)?;

        self.history.push(StepRecord {
            step: self.step,
            point: self.point.clone(),
            value,
            applied: grad.clone(),
            gradient: grad,
        });

        self.state = state;
        Ok(value)
    }

    /// Moves into `State::Failed` whenever `result` is an error.
    fn fail_on_err<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            self.state = State::Failed;
        }

        result
    }

    /// Logs the training progress. Failing to evaluate the objective here never stops training.
    fn report(&self) {
        match self.evaluate(self.step) {
            Ok(value) => info!(step = self.step, value = value, diff = self.diff; "training progress"),
            Err(e) => debug!("skipping progress report: {e}"),
        }
    }

    fn report_summary(&self) -> TrainReport {
        TrainReport {
            state: self.state,
            steps: self.step,
            value: self.history.last().map_or(f64::NAN, |r| r.value),
            diff: self.diff,
        }
    }
}

fn check_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(OptimErr::SizeMismatch {
            what,
            got,
            expected,
        });
    }

    Ok(())
}
