//! Domain types representing recorded expenses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{ReportError, Result};
use crate::domain::common::round_money;

/// A single spending record owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub category_id: Option<Uuid>,
    pub date: NaiveDate,
}

impl Expense {
    /// Validates and builds a new expense.
    ///
    /// The amount is stored rounded half-up to two decimal places.
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        amount: Decimal,
        category_id: Option<Uuid>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ReportError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        if amount <= Decimal::ZERO {
            return Err(ReportError::InvalidInput(
                "amount must be greater than 0".into(),
            ));
        }
        if date > today {
            return Err(ReportError::InvalidInput(
                "date must not be in the future".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            amount: round_money(amount),
            category_id,
            date,
        })
    }
}
