//! Result value objects produced by the reporting services.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::change_percent;
use crate::domain::window::ReportWindow;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Complete summary for a reporting window.
pub struct ReportSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<String>,
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub average_per_day: Decimal,
    pub average_per_week: Decimal,
    pub average_per_month: Decimal,
    pub category_breakdown: Vec<CategorySummary>,
    pub top_expenses: Vec<ExpenseDetail>,
    pub daily_trend: Vec<TrendPoint>,
    pub day_of_week_totals: BTreeMap<String, Decimal>,
    pub comparison: PeriodComparison,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Aggregated totals for a single category within a window.
pub struct CategorySummary {
    pub category_name: String,
    pub total: Decimal,
    pub percent_of_total: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single expense enriched with its share of the window total.
pub struct ExpenseDetail {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category_name: String,
    pub percent_of_total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One labelled point in a trend series.
pub struct TrendPoint {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Change between a window's total and its predecessor's.
pub struct PeriodComparison {
    pub previous_start: NaiveDate,
    pub previous_end: NaiveDate,
    pub previous_total: Decimal,
    pub absolute_change: Decimal,
    pub percentage_change: f64,
}

impl PeriodComparison {
    /// Builds the comparison for a predecessor window and its totals.
    ///
    /// A zero previous total with new spending reports a 100% increase
    /// rather than an unbounded one.
    pub fn from_totals(
        previous: ReportWindow,
        previous_total: Decimal,
        current_total: Decimal,
    ) -> Self {
        Self {
            previous_start: previous.start,
            previous_end: previous.end,
            previous_total,
            absolute_change: current_total - previous_total,
            percentage_change: change_percent(previous_total, current_total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Spending recorded on a single heatmap day.
pub struct DaySpending {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub transaction_count: usize,
    pub level: SpendLevel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Heatmap colour bucket relative to the month's daily average.
pub enum SpendLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for SpendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendLevel::None => "none",
            SpendLevel::Low => "low",
            SpendLevel::Medium => "medium",
            SpendLevel::High => "high",
            SpendLevel::VeryHigh => "very-high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One month in a sliding trend series.
pub struct MonthlyTrendPoint {
    pub month: String,
    pub total: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Aggregate statistics derived from a monthly trend series.
pub struct TrendOverview {
    pub average: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest: Option<MonthlyTrendPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest: Option<MonthlyTrendPoint>,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Coarse direction of a trend series.
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Spend, change, and budget utilization for one category.
pub struct CategoryPerformance {
    pub category_name: String,
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub average_transaction: Decimal,
    pub previous_period_spent: Decimal,
    pub change_amount: Decimal,
    pub change_percent: f64,
    pub percent_of_total: f64,
    pub budget_allocated: Decimal,
    pub budget_remaining: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_used_percent: Option<f64>,
    pub budget_status: BudgetStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Classifies budget utilization for a category.
pub enum BudgetStatus {
    Under,
    Near,
    Over,
    NoBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::Under => "under",
            BudgetStatus::Near => "near",
            BudgetStatus::Over => "over",
            BudgetStatus::NoBudget => "no-budget",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Summary statistics across a category performance report.
pub struct PerformanceStats {
    pub total_categories: usize,
    pub over_budget_count: usize,
    pub average_spending: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_improved: Option<CategoryPerformance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_increased: Option<CategoryPerformance>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Closed set of sort strategies for performance rows.
pub enum SortKey {
    #[default]
    Amount,
    Name,
    Budget,
    Change,
}

impl SortKey {
    /// Maps a caller-supplied token to a strategy, defaulting to `Amount`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("amount") => SortKey::Amount,
            Some("name") => SortKey::Name,
            Some("budget") => SortKey::Budget,
            Some("change") => SortKey::Change,
            _ => SortKey::Amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Aggregate statistics for a month heatmap.
pub struct HeatmapStats {
    pub total_spent: Decimal,
    pub total_transactions: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_day: Option<DaySpending>,
    pub active_days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A short human-readable observation about spending behaviour.
pub struct SpendingInsight {
    pub kind: InsightKind,
    pub message: String,
    pub icon: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Tone of a spending insight.
pub enum InsightKind {
    Warning,
    Positive,
    Neutral,
    Suggestion,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsightKind::Warning => "warning",
            InsightKind::Positive => "positive",
            InsightKind::Neutral => "neutral",
            InsightKind::Suggestion => "suggestion",
        };
        f.write_str(label)
    }
}
