mod error;
pub mod mock;
mod position_set;

pub use error::PositionError;
pub use position_set::PositionSet;

/// Most negative position a statement can take.
pub const MIN_POSITION: f64 = -2.0;

/// Most positive position a statement can take.
pub const MAX_POSITION: f64 = 2.0;

/// Largest possible disagreement on a single statement.
pub const POSITION_RANGE: f64 = MAX_POSITION - MIN_POSITION;
