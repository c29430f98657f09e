//! Error types for grid layout validation.

use thiserror::Error;

/// Input contract violations detected before a draw begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Excluded grid {grid} is outside the range 1..={total_grids}")]
    OutOfRange { grid: u32, total_grids: u32 },

    #[error("Excluded grid {0} was given more than once")]
    Duplicate(u32),
}
