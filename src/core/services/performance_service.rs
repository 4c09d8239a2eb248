//! Per-category spending rows with budget utilization classification.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::budget::Budget;
use crate::domain::category::Category;
use crate::domain::common::{change_percent, percent_of, round_money};
use crate::domain::expense::Expense;
use crate::domain::report::{BudgetStatus, CategoryPerformance, PerformanceStats, SortKey};
use crate::domain::window::ReportWindow;

/// Budget usage at or above this percentage is classified as over.
const OVER_THRESHOLD: f64 = 100.0;
/// Budget usage at or above this percentage is classified as near.
const NEAR_THRESHOLD: f64 = 85.0;

/// Analyzes spending per category against allocations.
pub struct PerformanceService;

impl PerformanceService {
    /// Builds one performance row per known category, sorted by current
    /// spend descending.
    ///
    /// Uncategorized expenses count toward the window total used for
    /// share-of-total percentages but produce no row of their own.
    pub fn analyze(
        expenses: &[Expense],
        categories: &[Category],
        budgets: &[Budget],
        window: ReportWindow,
    ) -> Vec<CategoryPerformance> {
        tracing::debug!(
            start = %window.start,
            end = %window.end,
            "Analyzing category performance."
        );

        let mut current: HashMap<Uuid, (Decimal, usize)> = HashMap::new();
        let mut total_spent = Decimal::ZERO;
        for expense in expenses.iter().filter(|e| window.contains(e.date)) {
            total_spent += expense.amount;
            if let Some(category_id) = expense.category_id {
                let entry = current.entry(category_id).or_insert((Decimal::ZERO, 0));
                entry.0 += expense.amount;
                entry.1 += 1;
            }
        }

        let previous_window = window.preceding();
        let mut previous: HashMap<Uuid, Decimal> = HashMap::new();
        for expense in expenses.iter().filter(|e| previous_window.contains(e.date)) {
            if let Some(category_id) = expense.category_id {
                *previous.entry(category_id).or_insert(Decimal::ZERO) += expense.amount;
            }
        }

        // First matching active budget per category wins.
        let mut budget_map: HashMap<Uuid, &Budget> = HashMap::new();
        for budget in budgets.iter().filter(|b| b.is_active_on(window.end)) {
            budget_map.entry(budget.category_id).or_insert(budget);
        }

        let mut rows: Vec<CategoryPerformance> = categories
            .iter()
            .map(|category| {
                let (cat_total, count) = current
                    .get(&category.id)
                    .copied()
                    .unwrap_or((Decimal::ZERO, 0));
                let previous_spent = previous
                    .get(&category.id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let average_transaction = if count > 0 {
                    round_money(cat_total / Decimal::from(count as u64))
                } else {
                    Decimal::ZERO
                };

                let (budget_allocated, budget_remaining, budget_used_percent, budget_status) =
                    match budget_map.get(&category.id) {
                        Some(budget) if budget.amount > Decimal::ZERO => {
                            let used = percent_of(cat_total, budget.amount);
                            let status = if used >= OVER_THRESHOLD {
                                BudgetStatus::Over
                            } else if used >= NEAR_THRESHOLD {
                                BudgetStatus::Near
                            } else {
                                BudgetStatus::Under
                            };
                            (budget.amount, budget.amount - cat_total, Some(used), status)
                        }
                        _ => (Decimal::ZERO, Decimal::ZERO, None, BudgetStatus::NoBudget),
                    };

                CategoryPerformance {
                    category_name: category.name.clone(),
                    total_spent: cat_total,
                    transaction_count: count,
                    average_transaction,
                    previous_period_spent: previous_spent,
                    change_amount: cat_total - previous_spent,
                    change_percent: change_percent(previous_spent, cat_total),
                    percent_of_total: percent_of(cat_total, total_spent),
                    budget_allocated,
                    budget_remaining,
                    budget_used_percent,
                    budget_status,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        rows
    }

    /// Reorders rows in place according to the requested strategy.
    pub fn sort_rows(rows: &mut [CategoryPerformance], key: SortKey) {
        match key {
            SortKey::Amount => rows.sort_by(|a, b| b.total_spent.cmp(&a.total_spent)),
            SortKey::Name => rows.sort_by(|a, b| a.category_name.cmp(&b.category_name)),
            SortKey::Budget => rows.sort_by(|a, b| {
                let used_a = a.budget_used_percent.unwrap_or(-1.0);
                let used_b = b.budget_used_percent.unwrap_or(-1.0);
                used_b
                    .partial_cmp(&used_a)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Change => rows.sort_by(|a, b| {
                b.change_percent
                    .abs()
                    .partial_cmp(&a.change_percent.abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
    }

    /// Summary figures over a set of performance rows.
    pub fn stats(rows: &[CategoryPerformance]) -> PerformanceStats {
        let over_budget_count = rows
            .iter()
            .filter(|row| row.budget_status == BudgetStatus::Over)
            .count();
        let average_spending = if rows.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = rows.iter().map(|row| row.total_spent).sum();
            round_money(total / Decimal::from(rows.len() as u64))
        };
        let most_improved = rows
            .iter()
            .filter(|row| row.change_amount < Decimal::ZERO)
            .min_by(|a, b| a.change_amount.cmp(&b.change_amount))
            .cloned();
        let most_increased = rows
            .iter()
            .filter(|row| row.change_amount > Decimal::ZERO)
            .max_by(|a, b| a.change_amount.cmp(&b.change_amount))
            .cloned();

        PerformanceStats {
            total_categories: rows.len(),
            over_budget_count,
            average_spending,
            most_improved,
            most_increased,
        }
    }
}
