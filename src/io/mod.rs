//! Loaders that turn position files into [`PositionSet`](crate::PositionSet)s.

#[cfg(feature = "csv")]
mod csv;
mod json;

#[cfg(feature = "csv")]
pub use csv::*;
pub use json::*;
