mod random;
mod start;

pub use random::RandomStart;
pub use start::{ConstStart, StartGen, ValuesStart};
