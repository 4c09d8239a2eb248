//! End-to-end checks of the reporting engine through its public API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use report_core::core::errors::ReportError;
use report_core::core::services::{
    HeatmapService, InsightService, PerformanceService, PeriodService, ReportService,
    TrendService,
};
use report_core::domain::{Budget, Category, Expense, ReportWindow, SpendLevel};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn expense(
    user_id: Uuid,
    description: &str,
    amount: Decimal,
    category_id: Option<Uuid>,
    day: NaiveDate,
) -> Expense {
    Expense::new(user_id, description, amount, category_id, day, date(2024, 12, 31)).unwrap()
}

#[test]
fn two_day_window_breaks_down_by_category() {
    let user_id = Uuid::new_v4();
    let cat_a = Category::new(user_id, "Category A");
    let cat_b = Category::new(user_id, "Category B");
    let expenses = vec![
        expense(user_id, "First", dec!(10.00), Some(cat_a.id), date(2024, 1, 1)),
        expense(user_id, "Second", dec!(20.00), Some(cat_a.id), date(2024, 1, 2)),
        expense(user_id, "Third", dec!(5.00), Some(cat_b.id), date(2024, 1, 2)),
    ];
    let window = ReportWindow::new(date(2024, 1, 1), date(2024, 1, 2)).unwrap();

    let report = ReportService::aggregate(
        &expenses,
        &[cat_a.clone(), cat_b.clone()],
        window,
        None,
    )
    .unwrap();

    assert_eq!(report.total_spent, dec!(35.00));
    assert_eq!(report.average_per_day, dec!(17.50));

    let breakdown = &report.category_breakdown;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category_name, "Category A");
    assert_eq!(breakdown[0].total, dec!(30.00));
    assert_eq!(breakdown[0].percent_of_total, 85.71);
    assert_eq!(breakdown[0].transaction_count, 2);
    assert_eq!(breakdown[1].category_name, "Category B");
    assert_eq!(breakdown[1].total, dec!(5.00));
    assert_eq!(breakdown[1].percent_of_total, 14.29);
}

#[test]
fn unspent_budget_reads_as_under_with_zero_usage() {
    let user_id = Uuid::new_v4();
    let cat_a = Category::new(user_id, "Category A");
    let budget = Budget::new(user_id, cat_a.id, dec!(100.00), date(2024, 6, 1)).unwrap();
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let rows = PerformanceService::analyze(&[], &[cat_a], &[budget], window);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].budget_status.to_string(), "under");
    assert_eq!(rows[0].budget_used_percent, Some(0.0));
    assert_eq!(rows[0].budget_remaining, dec!(100.00));
}

#[test]
fn spending_after_an_empty_period_is_a_full_increase() {
    let user_id = Uuid::new_v4();
    let expenses = vec![expense(user_id, "Only", dec!(50.00), None, date(2024, 6, 5))];
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let report = ReportService::aggregate(&expenses, &[], window, None).unwrap();

    assert_eq!(report.comparison.previous_total, Decimal::ZERO);
    assert_eq!(report.comparison.percentage_change, 100.0);
}

#[test]
fn all_zero_heatmap_month_is_entirely_level_none() {
    let map = HeatmapService::heatmap(&[], 2024, 6, date(2024, 6, 15));

    assert_eq!(map.len(), 30);
    assert!(map.values().all(|day| day.level == SpendLevel::None));
}

#[test]
fn range_limit_sits_at_exactly_seven_hundred_thirty_days() {
    let reference = date(2024, 6, 15);

    let too_large = ReportService::custom_report(
        &[],
        &[],
        Some(date(2022, 1, 1)),
        Some(date(2024, 1, 2)),
        None,
        reference,
    );
    assert!(matches!(too_large, Err(ReportError::RangeTooLarge)));

    let at_limit = ReportService::custom_report(
        &[],
        &[],
        Some(date(2022, 1, 1)),
        Some(date(2024, 1, 1)),
        None,
        reference,
    );
    assert!(at_limit.is_ok());
}

#[test]
fn breakdown_totals_conserve_the_window_total() {
    let user_id = Uuid::new_v4();
    let food = Category::new(user_id, "Food");
    let expenses = vec![
        expense(user_id, "A", dec!(33.33), Some(food.id), date(2024, 6, 1)),
        expense(user_id, "B", dec!(66.67), None, date(2024, 6, 2)),
        expense(user_id, "C", dec!(12.01), Some(food.id), date(2024, 6, 3)),
    ];
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let report = ReportService::aggregate(&expenses, &[food], window, None).unwrap();

    let breakdown_sum: Decimal = report
        .category_breakdown
        .iter()
        .map(|summary| summary.total)
        .sum();
    assert_eq!(breakdown_sum, report.total_spent);
}

#[test]
fn daily_trend_is_dense_for_any_window() {
    let user_id = Uuid::new_v4();
    let expenses = vec![expense(user_id, "Lone", dec!(9.99), None, date(2024, 2, 14))];
    let window = ReportWindow::new(date(2024, 2, 1), date(2024, 3, 15)).unwrap();

    let report = ReportService::aggregate(&expenses, &[], window, None).unwrap();

    assert_eq!(report.daily_trend.len(), window.days() as usize);
    assert_eq!(report.daily_trend.len(), 44);
}

#[test]
fn empty_window_yields_zeroes_instead_of_faults() {
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let report = ReportService::aggregate(&[], &[], window, None).unwrap();

    assert_eq!(report.total_spent, Decimal::ZERO);
    assert_eq!(report.average_per_day, Decimal::ZERO);
    assert_eq!(report.comparison.percentage_change, 0.0);
    assert!(report.category_breakdown.is_empty());
    assert!(report.top_expenses.is_empty());
}

#[test]
fn comparison_windows_abut_and_match_in_length() {
    let window = ReportWindow::new(date(2024, 3, 10), date(2024, 4, 20)).unwrap();

    let report = ReportService::aggregate(&[], &[], window, None).unwrap();

    let comparison = &report.comparison;
    assert_eq!(comparison.previous_end + chrono::Duration::days(1), window.start);
    assert_eq!(
        window.end - window.start,
        comparison.previous_end - comparison.previous_start
    );
}

#[test]
fn top_expenses_stay_sorted_and_bounded() {
    let user_id = Uuid::new_v4();
    let expenses: Vec<Expense> = (1..=15)
        .map(|index| {
            expense(
                user_id,
                "Entry",
                Decimal::from(index * 3),
                None,
                date(2024, 6, index as u32),
            )
        })
        .collect();
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let report = ReportService::aggregate(&expenses, &[], window, None).unwrap();

    assert_eq!(report.top_expenses.len(), 10);
    assert!(report
        .top_expenses
        .windows(2)
        .all(|pair| pair[0].amount >= pair[1].amount));
}

#[test]
fn report_json_omits_unset_optional_fields() {
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();
    let report = ReportService::aggregate(&[], &[], window, None).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("category_filter").is_none());
    assert_eq!(value["start_date"], "2024-06-01");
    assert_eq!(value["transaction_count"], 0);

    let round_trip: report_core::domain::ReportSummary =
        serde_json::from_value(value).unwrap();
    assert_eq!(round_trip.total_spent, report.total_spent);
}

#[test]
fn a_full_reporting_cycle_hangs_together() {
    let user_id = Uuid::new_v4();
    let food = Category::new(user_id, "Food");
    let transport = Category::new(user_id, "Transport");
    let categories = vec![food.clone(), transport.clone()];
    let budgets = vec![Budget::new(user_id, food.id, dec!(200.00), date(2024, 1, 1))
        .unwrap()
        .recurring()];

    let mut expenses = Vec::new();
    for month in 1..=6 {
        expenses.push(expense(
            user_id,
            "Groceries",
            dec!(180.00) + Decimal::from(month * 20),
            Some(food.id),
            date(2024, month, 10),
        ));
        expenses.push(expense(
            user_id,
            "Bus pass",
            dec!(40.00),
            Some(transport.id),
            date(2024, month, 3),
        ));
    }

    let reference = date(2024, 7, 5);
    let period = PeriodService::parse_or_default("LAST_MONTH");
    let window = PeriodService::resolve(period, reference);
    let report = ReportService::aggregate(&expenses, &categories, window, None).unwrap();
    let performances = PerformanceService::analyze(&expenses, &categories, &budgets, window);
    let insights = InsightService::insights(&report, &performances);

    assert_eq!(report.total_spent, dec!(340.00));
    assert_eq!(performances[0].category_name, "Food");
    assert_eq!(performances[0].budget_status.to_string(), "over");
    assert!(insights
        .iter()
        .any(|insight| insight.message.contains("exceeded your Food budget")));

    let months = TrendService::clamp_months(Some(6));
    let trend = TrendService::monthly_trend(&expenses, &categories, months, reference);
    let overview = TrendService::overview(&trend);
    assert_eq!(trend.len(), 6);
    assert_eq!(trend[5].total, dec!(340.00));
    assert_eq!(overview.direction.to_string(), "increasing");
}
