mod comparison;
mod distance;

pub use comparison::Comparison;
pub use distance::{compare, distance};
