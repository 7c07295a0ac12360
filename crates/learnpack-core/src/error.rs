//! Typed library errors.
//!
//! Pack data problems are not errors; they are reported as
//! [`ValidationIssue`](crate::validate::ValidationIssue)s. These types cover
//! contract violations the type system can reject up front.

use thiserror::Error;

/// A support level outside the 0–3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("support level must be between 0 and 3, got {0}")]
pub struct SupportLevelError(pub u8);

/// Errors raised when a scheduler configuration is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The interval ladder has no rungs.
    #[error("interval ladder must contain at least one interval")]
    EmptyLadder,

    /// A rung of the ladder is zero days long.
    #[error("interval ladder rung {index} is 0 days")]
    ZeroInterval { index: usize },

    /// A rung of the ladder is longer than the scheduler allows.
    #[error("interval ladder rung {index} is {days} days, the maximum is {max}")]
    IntervalTooLong { index: usize, days: u32, max: u32 },

    /// The due ratio is not a fraction.
    #[error("due ratio must be within 0.0..=1.0, got {0}")]
    DueRatioOutOfRange(f64),
}
