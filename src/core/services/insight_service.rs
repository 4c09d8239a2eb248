//! Human-readable observations derived from reports and performance rows.

use crate::domain::report::{
    BudgetStatus, CategoryPerformance, InsightKind, ReportSummary, SpendingInsight,
};

/// Insights are cut off after this many entries.
const MAX_INSIGHTS: usize = 7;
/// Period-over-period swings at or above this percentage get an insight.
const SWING_THRESHOLD: f64 = 15.0;

/// Turns aggregated figures into short spending observations.
pub struct InsightService;

impl InsightService {
    /// Builds the insight list for one report.
    ///
    /// Ordering is fixed: the period-over-period swing first, then one
    /// warning per over-budget category, then the highest category.
    pub fn insights(
        report: &ReportSummary,
        performances: &[CategoryPerformance],
    ) -> Vec<SpendingInsight> {
        tracing::debug!(
            change = report.comparison.percentage_change,
            rows = performances.len(),
            "Deriving spending insights."
        );
        let mut insights = Vec::new();

        let change = report.comparison.percentage_change;
        if change >= SWING_THRESHOLD {
            insights.push(SpendingInsight {
                kind: InsightKind::Warning,
                message: format!(
                    "Your spending increased by {change:.0}% compared to last period"
                ),
                icon: "trending-up".to_string(),
                amount: report.comparison.absolute_change,
            });
        } else if change <= -SWING_THRESHOLD {
            insights.push(SpendingInsight {
                kind: InsightKind::Positive,
                message: format!(
                    "You saved {:.0}% compared to last period",
                    change.abs()
                ),
                icon: "trending-down".to_string(),
                amount: report.comparison.absolute_change,
            });
        }

        for row in performances
            .iter()
            .filter(|row| row.budget_status == BudgetStatus::Over)
        {
            insights.push(SpendingInsight {
                kind: InsightKind::Warning,
                message: format!(
                    "You exceeded your {} budget by {}",
                    row.category_name,
                    row.budget_remaining.abs()
                ),
                icon: "alert-circle".to_string(),
                amount: row.total_spent,
            });
        }

        if let Some(top) = report.category_breakdown.first() {
            insights.push(SpendingInsight {
                kind: InsightKind::Neutral,
                message: format!(
                    "{} is your highest expense ({:.0}% of total)",
                    top.category_name, top.percent_of_total
                ),
                icon: "pie-chart".to_string(),
                amount: top.total,
            });
        }

        insights.truncate(MAX_INSIGHTS);
        insights
    }
}
