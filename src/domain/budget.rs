//! Domain types representing per-category budget allocations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{ReportError, Result};

/// A spending allocation for one category over a period.
///
/// An unset `period_end` means the budget is open-ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub amount: Decimal,
    pub period_start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<NaiveDate>,
    pub recurring: bool,
}

impl Budget {
    pub fn new(
        user_id: Uuid,
        category_id: Uuid,
        amount: Decimal,
        period_start: NaiveDate,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(ReportError::InvalidInput(
                "budget amount must be greater than 0".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            amount,
            period_start,
            period_end: None,
            recurring: false,
        })
    }

    pub fn with_period_end(mut self, period_end: NaiveDate) -> Self {
        self.period_end = Some(period_end);
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Returns `true` when the budget covers the given date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if date < self.period_start {
            return false;
        }
        match self.period_end {
            Some(end) => date <= end,
            None => true,
        }
    }
}
