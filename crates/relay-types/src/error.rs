use thiserror::Error;

/// Errors produced by type conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid priority: {0} (expected low, medium, or high)")]
    InvalidPriority(String),

    #[error("invalid priority rank: {0} (expected 0..=2)")]
    InvalidRank(u8),
}
