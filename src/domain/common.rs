//! Shared date arithmetic and guarded numeric helpers.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount half-up to two decimal places.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `part` as a percentage of `whole`, or 0 when `whole` is zero.
///
/// The ratio is rounded half-up to four decimal places before scaling, so
/// 30/35 reports as 85.71 rather than a long repeating fraction.
pub fn percent_of(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    let ratio = (part / whole).round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    (ratio * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

/// Percentage change from `previous` to `current`.
///
/// A zero previous total with new spending reports as 100 rather than a
/// division fault; two zero totals report as 0.
pub fn change_percent(previous: Decimal, current: Decimal) -> f64 {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            return 100.0;
        }
        return 0.0;
    }
    let ratio = ((current - previous) / previous)
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    (ratio * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let day = days_in_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(date.year(), date.month(), day).unwrap_or(date)
}

pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Full English weekday name used as a grouping key.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Short month-plus-year label, e.g. "Jan 2024".
pub fn month_label(date: NaiveDate) -> String {
    let name = match date.month() {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    };
    format!("{} {}", name, date.year())
}
