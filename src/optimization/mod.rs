mod config;
mod history;
mod optimizer;
mod report;
mod update_rule;

pub use config::{Coefficient, OptimizerConfig};
pub use history::{History, StepRecord, Trajectory};
pub use optimizer::{MIN_STEPS, Optimizer, REPORT_EVERY};
pub use report::{State, TrainReport};
pub use update_rule::UpdateRule;
