//! Sliding monthly trend series and their aggregate overview.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::common::{
    change_percent, month_end, month_label, month_start, round_money, shift_month,
};
use crate::domain::expense::Expense;
use crate::domain::report::{MonthlyTrendPoint, TrendDirection, TrendOverview};
use crate::domain::window::ReportWindow;

/// Smallest accepted trend length in months.
const MIN_MONTHS: u32 = 3;
/// Largest accepted trend length in months.
const MAX_MONTHS: u32 = 24;
/// Months requested when the caller gives none.
const DEFAULT_MONTHS: u32 = 12;

/// Direction swings within this percentage band count as stable.
const DIRECTION_THRESHOLD: f64 = 10.0;

/// Builds month-by-month spending series ending at the prior month.
pub struct TrendService;

impl TrendService {
    /// Clamps a requested series length into the supported range.
    pub fn clamp_months(requested: Option<u32>) -> u32 {
        match requested {
            None => DEFAULT_MONTHS,
            Some(months) if months < MIN_MONTHS => {
                tracing::warn!(months, "Trend length below minimum, clamping.");
                MIN_MONTHS
            }
            Some(months) if months > MAX_MONTHS => {
                tracing::warn!(months, "Trend length above maximum, clamping.");
                MAX_MONTHS
            }
            Some(months) => months,
        }
    }

    /// Produces one point per month for the `months` whole calendar
    /// months preceding the reference date's month.
    pub fn monthly_trend(
        expenses: &[Expense],
        categories: &[Category],
        months: u32,
        reference: NaiveDate,
    ) -> Vec<MonthlyTrendPoint> {
        tracing::debug!(months, "Building monthly trend.");

        let category_lookup: HashMap<Uuid, &str> = categories
            .iter()
            .map(|category| (category.id, category.name.as_str()))
            .collect();

        let end_month = shift_month(month_start(reference), -1);
        let mut points: Vec<MonthlyTrendPoint> = Vec::with_capacity(months as usize);
        for index in 0..months {
            let offset = index as i32 - (months as i32 - 1);
            let month_first = shift_month(end_month, offset);
            let window = ReportWindow {
                start: month_first,
                end: month_end(month_first),
            };

            let mut total = Decimal::ZERO;
            let mut category_totals: BTreeMap<String, Decimal> = BTreeMap::new();
            for expense in expenses.iter().filter(|e| window.contains(e.date)) {
                total += expense.amount;
                let name = expense
                    .category_id
                    .and_then(|id| category_lookup.get(&id).copied())
                    .unwrap_or("Uncategorized");
                *category_totals
                    .entry(name.to_string())
                    .or_insert(Decimal::ZERO) += expense.amount;
            }

            let (change_amount, change) = match points.last() {
                Some(prior) => (
                    Some(total - prior.total),
                    Some(change_percent(prior.total, total)),
                ),
                None => (None, None),
            };

            points.push(MonthlyTrendPoint {
                month: month_label(month_first),
                total,
                category_totals,
                change_amount,
                change_percent: change,
            });
        }
        points
    }

    /// Derives summary statistics from a trend series.
    pub fn overview(points: &[MonthlyTrendPoint]) -> TrendOverview {
        let average = if points.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = points.iter().map(|point| point.total).sum();
            round_money(total / Decimal::from(points.len() as u64))
        };
        let highest = points
            .iter()
            .max_by(|a, b| a.total.cmp(&b.total))
            .cloned();
        // Prefer the lowest spending month among active ones.
        let lowest = points
            .iter()
            .filter(|point| point.total > Decimal::ZERO)
            .min_by(|a, b| a.total.cmp(&b.total))
            .or_else(|| points.iter().min_by(|a, b| a.total.cmp(&b.total)))
            .cloned();

        TrendOverview {
            average,
            highest,
            lowest,
            direction: Self::direction(points),
        }
    }

    /// Compares the first and last three months of the series.
    ///
    /// Series shorter than six months, or ones starting from a zero
    /// baseline, report as stable.
    fn direction(points: &[MonthlyTrendPoint]) -> TrendDirection {
        if points.len() < 6 {
            return TrendDirection::Stable;
        }
        let first: Decimal = points[..3].iter().map(|point| point.total).sum();
        let last: Decimal = points[points.len() - 3..]
            .iter()
            .map(|point| point.total)
            .sum();
        let three = Decimal::from(3);
        let first_average = first / three;
        let last_average = last / three;
        if first_average <= Decimal::ZERO {
            return TrendDirection::Stable;
        }
        let swing = change_percent(first_average, last_average);
        if swing > DIRECTION_THRESHOLD {
            TrendDirection::Increasing
        } else if swing < -DIRECTION_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}
