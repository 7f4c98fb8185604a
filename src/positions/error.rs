use thiserror::Error;

use crate::types::StatementId;

/// Errors raised by the validating [`PositionSet`](super::PositionSet) builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("position {value} for statement {id} is outside [{min}, {max}]",
        min = super::MIN_POSITION, max = super::MAX_POSITION)]
    OutOfRangeValue { id: StatementId, value: f64 },
}
