//! Error types for interest calculations

use thiserror::Error;

/// Result type for interest calculations
pub type Result<T> = std::result::Result<T, InterestError>;

/// Reason an argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("days must be >= 0")]
    NegativeDays,

    #[error("principal must be >= 0")]
    NegativePrincipal,

    /// The daily series would not fit in memory
    #[error("days exceeds the projection capacity")]
    DaysOutOfRange,
}

/// Errors raised by the projector and the two-tier calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterestError {
    /// Input failed validation; the message is the reason text
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl InterestError {
    /// The validation reason behind this error
    pub fn reason(&self) -> InvalidArgument {
        match self {
            InterestError::InvalidArgument(reason) => *reason,
        }
    }
}

/// Reject negative day counts
pub(crate) fn check_days(days: i64) -> Result<()> {
    if days < 0 {
        return Err(InvalidArgument::NegativeDays.into());
    }
    Ok(())
}

/// Reject negative principals. NaN passes, matching a plain `< 0` comparison.
pub(crate) fn check_principal(principal: f64) -> Result<()> {
    if principal < 0.0 {
        return Err(InvalidArgument::NegativePrincipal.into());
    }
    Ok(())
}
