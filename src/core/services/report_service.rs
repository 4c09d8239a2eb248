//! Window summaries: totals, averages, breakdowns, trends, comparison.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::errors::{ReportError, Result, MAX_RANGE_DAYS};
use crate::domain::category::Category;
use crate::domain::common::{percent_of, round_money, weekday_label};
use crate::domain::expense::Expense;
use crate::domain::report::{
    CategorySummary, ExpenseDetail, PeriodComparison, ReportSummary, TrendPoint,
};
use crate::domain::window::ReportWindow;

/// Maximum number of expenses listed in the top-expenses section.
const TOP_EXPENSE_LIMIT: usize = 10;

/// Builds [`ReportSummary`] values over expense slices.
pub struct ReportService;

impl ReportService {
    /// Summarizes a caller-supplied date range.
    ///
    /// Missing bounds are defaulted as described on
    /// [`PeriodService::custom_window`](crate::core::services::PeriodService::custom_window).
    pub fn custom_report(
        expenses: &[Expense],
        categories: &[Category],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category_filter: Option<Uuid>,
        reference: NaiveDate,
    ) -> Result<ReportSummary> {
        let earliest = expenses.iter().map(|expense| expense.date).min();
        let window =
            super::PeriodService::custom_window(start, end, earliest, reference)?;
        Self::aggregate(expenses, categories, window, category_filter)
    }

    /// Summarizes a named period resolved against the reference date.
    pub fn predefined_report(
        expenses: &[Expense],
        categories: &[Category],
        period: super::ReportPeriod,
        category_filter: Option<Uuid>,
        reference: NaiveDate,
    ) -> Result<ReportSummary> {
        let window = super::PeriodService::resolve(period, reference);
        Self::aggregate(expenses, categories, window, category_filter)
    }

    /// Aggregates one window into a complete summary.
    pub fn aggregate(
        expenses: &[Expense],
        categories: &[Category],
        window: ReportWindow,
        category_filter: Option<Uuid>,
    ) -> Result<ReportSummary> {
        if (window.end - window.start).num_days() > MAX_RANGE_DAYS {
            return Err(ReportError::RangeTooLarge);
        }
        tracing::debug!(
            start = %window.start,
            end = %window.end,
            "Aggregating report window."
        );

        let category_lookup: HashMap<Uuid, &str> = categories
            .iter()
            .map(|category| (category.id, category.name.as_str()))
            .collect();

        let selected = Self::filter(expenses, window, category_filter);
        let total_spent: Decimal = selected.iter().map(|expense| expense.amount).sum();

        let days = Decimal::from(window.days());
        let average_per_day = if days > Decimal::ZERO {
            round_money(total_spent / days)
        } else {
            Decimal::ZERO
        };
        // Weekly and monthly figures extrapolate the daily average with a
        // fixed 30-day month.
        let average_per_week = round_money(average_per_day * Decimal::from(7));
        let average_per_month = round_money(average_per_day * Decimal::from(30));

        let category_breakdown =
            Self::breakdown(&selected, &category_lookup, total_spent);
        let top_expenses = Self::top_expenses(&selected, &category_lookup, total_spent);
        let daily_trend = Self::daily_trend(&selected, window);
        let day_of_week_totals = Self::day_of_week_totals(&selected);

        let previous = window.preceding();
        let previous_total: Decimal = Self::filter(expenses, previous, category_filter)
            .iter()
            .map(|expense| expense.amount)
            .sum();
        let comparison = PeriodComparison::from_totals(previous, previous_total, total_spent);

        Ok(ReportSummary {
            start_date: window.start,
            end_date: window.end,
            category_filter: category_filter
                .and_then(|id| category_lookup.get(&id).map(|name| (*name).to_string())),
            total_spent,
            transaction_count: selected.len(),
            average_per_day,
            average_per_week,
            average_per_month,
            category_breakdown,
            top_expenses,
            daily_trend,
            day_of_week_totals,
            comparison,
        })
    }

    fn filter<'a>(
        expenses: &'a [Expense],
        window: ReportWindow,
        category_filter: Option<Uuid>,
    ) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| window.contains(expense.date))
            .filter(|expense| match category_filter {
                Some(wanted) => expense.category_id == Some(wanted),
                None => true,
            })
            .collect()
    }

    fn category_name<'a>(
        lookup: &HashMap<Uuid, &'a str>,
        category_id: Option<Uuid>,
    ) -> &'a str {
        category_id
            .and_then(|id| lookup.get(&id).copied())
            .unwrap_or("Uncategorized")
    }

    fn breakdown(
        selected: &[&Expense],
        lookup: &HashMap<Uuid, &str>,
        total_spent: Decimal,
    ) -> Vec<CategorySummary> {
        let mut groups: HashMap<&str, (Decimal, usize)> = HashMap::new();
        for expense in selected {
            let entry = groups
                .entry(Self::category_name(lookup, expense.category_id))
                .or_insert((Decimal::ZERO, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }
        let mut breakdown: Vec<CategorySummary> = groups
            .into_iter()
            .map(|(name, (total, count))| CategorySummary {
                category_name: name.to_string(),
                total,
                percent_of_total: percent_of(total, total_spent),
                transaction_count: count,
            })
            .collect();
        breakdown.sort_by(|a, b| b.total.cmp(&a.total));
        breakdown
    }

    fn top_expenses(
        selected: &[&Expense],
        lookup: &HashMap<Uuid, &str>,
        total_spent: Decimal,
    ) -> Vec<ExpenseDetail> {
        let mut ranked: Vec<&Expense> = selected.to_vec();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked
            .into_iter()
            .take(TOP_EXPENSE_LIMIT)
            .map(|expense| ExpenseDetail {
                id: expense.id,
                date: expense.date,
                description: expense.description.clone(),
                amount: expense.amount,
                category_name: Self::category_name(lookup, expense.category_id).to_string(),
                percent_of_total: percent_of(expense.amount, total_spent),
            })
            .collect()
    }

    /// Produces one point per calendar day, including zero-spend days.
    fn daily_trend(selected: &[&Expense], window: ReportWindow) -> Vec<TrendPoint> {
        let mut totals: HashMap<NaiveDate, Decimal> = HashMap::new();
        for expense in selected {
            *totals.entry(expense.date).or_insert(Decimal::ZERO) += expense.amount;
        }
        let mut trend = Vec::with_capacity(window.days() as usize);
        let mut date = window.start;
        while date <= window.end {
            trend.push(TrendPoint {
                label: date.to_string(),
                amount: totals.get(&date).copied().unwrap_or(Decimal::ZERO),
            });
            date += Duration::days(1);
        }
        trend
    }

    /// Only weekdays with at least one transaction appear in the map.
    fn day_of_week_totals(selected: &[&Expense]) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for expense in selected {
            *totals
                .entry(weekday_label(expense.date.weekday()).to_string())
                .or_insert(Decimal::ZERO) += expense.amount;
        }
        totals
    }
}
