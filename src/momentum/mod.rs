mod decay;
mod policy;
mod fixed;

pub use decay::{DEFAULT_PIVOT, DEFAULT_WINDOW, MomentumDecay, is_oscillating};
pub use fixed::StaticMomentum;
pub use policy::MomentumPolicy;
