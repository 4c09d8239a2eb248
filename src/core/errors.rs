use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the reporting engine.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid range: start date is after end date")]
    InvalidRange,
    #[error("Range too large: window exceeds 730 days")]
    RangeTooLarge,
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Upper bound on the inclusive day span accepted by custom reports.
pub const MAX_RANGE_DAYS: i64 = 730;

pub type Result<T> = StdResult<T, ReportError>;
