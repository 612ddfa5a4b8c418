mod benchmarks;
mod closure;
mod objective;

pub use benchmarks::{Beale, Quadratic};
pub use closure::FnObjective;
pub use objective::Objective;
