//! Inclusive date windows shared by every reporting operation.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::errors::{ReportError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Defines an inclusive reporting window.
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the window of equal length ending the day before this one.
    ///
    /// Predecessors match by day count. A calendar-month window therefore
    /// precedes into whatever span of the prior month has the same length,
    /// not into the prior month's own boundaries.
    pub fn preceding(&self) -> Self {
        let end = self.start - Duration::days(1);
        let start = end - (self.end - self.start);
        Self { start, end }
    }
}
