#![doc = "stancematch public API"]
mod distance;
pub mod io;
mod positions;
mod types;

#[doc(inline)]
pub use types::StatementId;

#[doc(inline)]
pub use positions::{MAX_POSITION, MIN_POSITION, POSITION_RANGE, PositionError, PositionSet, mock};

#[doc(inline)]
pub use distance::{Comparison, compare, distance};
