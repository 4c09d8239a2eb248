//! Calendar heatmaps classifying daily spend against the month average.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::common::{days_in_month, round_money};
use crate::domain::expense::Expense;
use crate::domain::report::{DaySpending, HeatmapStats, SpendLevel};

/// Colours every day of one calendar month by spend intensity.
pub struct HeatmapService;

impl HeatmapService {
    /// Builds a dense map covering every day of the requested month.
    ///
    /// Out-of-range month or year values fall back to the reference
    /// date's own month or year independently.
    pub fn heatmap(
        expenses: &[Expense],
        year: i32,
        month: u32,
        reference: NaiveDate,
    ) -> BTreeMap<NaiveDate, DaySpending> {
        let (year, month) = Self::clamp_coordinates(year, month, reference);
        let day_count = days_in_month(year, month);

        let mut daily: HashMap<u32, (Decimal, usize)> = HashMap::new();
        let mut month_total = Decimal::ZERO;
        for expense in expenses
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
        {
            let entry = daily
                .entry(expense.date.day())
                .or_insert((Decimal::ZERO, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            month_total += expense.amount;
        }

        let average_daily = round_money(month_total / Decimal::from(day_count));
        let low_cutoff = average_daily * Decimal::new(5, 1);
        let medium_cutoff = average_daily * Decimal::new(15, 1);
        let high_cutoff = average_daily * Decimal::from(3);

        let mut map = BTreeMap::new();
        for day in 1..=day_count {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let (amount, transaction_count) =
                daily.get(&day).copied().unwrap_or((Decimal::ZERO, 0));
            let level = if amount == Decimal::ZERO {
                SpendLevel::None
            } else if amount <= low_cutoff {
                SpendLevel::Low
            } else if amount <= medium_cutoff {
                SpendLevel::Medium
            } else if amount <= high_cutoff {
                SpendLevel::High
            } else {
                SpendLevel::VeryHigh
            };
            map.insert(
                date,
                DaySpending {
                    date,
                    amount,
                    transaction_count,
                    level,
                },
            );
        }
        map
    }

    /// Aggregate figures over a heatmap month.
    pub fn stats(days: &BTreeMap<NaiveDate, DaySpending>) -> HeatmapStats {
        HeatmapStats {
            total_spent: days.values().map(|day| day.amount).sum(),
            total_transactions: days.values().map(|day| day.transaction_count).sum(),
            highest_day: days
                .values()
                .max_by(|a, b| a.amount.cmp(&b.amount))
                .cloned(),
            active_days: days
                .values()
                .filter(|day| day.transaction_count > 0)
                .count(),
        }
    }

    fn clamp_coordinates(year: i32, month: u32, reference: NaiveDate) -> (i32, u32) {
        let month = if (1..=12).contains(&month) {
            month
        } else {
            tracing::warn!(month, "Month out of range, using reference month.");
            reference.month()
        };
        let year = if year >= 2000 && year <= reference.year() + 1 {
            year
        } else {
            tracing::warn!(year, "Year out of range, using reference year.");
            reference.year()
        };
        (year, month)
    }
}
