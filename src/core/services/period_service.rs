//! Resolution of named report periods and custom date ranges.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::core::errors::{ReportError, Result};
use crate::domain::common::{month_end, month_start, shift_month};
use crate::domain::window::ReportWindow;

/// Named reporting periods resolvable against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    ThisWeek,
    ThisMonth,
    LastMonth,
    Last3Months,
    Last6Months,
    ThisYear,
    LastYear,
}

impl FromStr for ReportPeriod {
    type Err = ReportError;

    fn from_str(token: &str) -> Result<Self> {
        match token.to_ascii_uppercase().as_str() {
            "THIS_WEEK" => Ok(ReportPeriod::ThisWeek),
            "THIS_MONTH" => Ok(ReportPeriod::ThisMonth),
            "LAST_MONTH" => Ok(ReportPeriod::LastMonth),
            "LAST_3_MONTHS" => Ok(ReportPeriod::Last3Months),
            "LAST_6_MONTHS" => Ok(ReportPeriod::Last6Months),
            "THIS_YEAR" => Ok(ReportPeriod::ThisYear),
            "LAST_YEAR" => Ok(ReportPeriod::LastYear),
            _ => Err(ReportError::InvalidPeriod(token.to_string())),
        }
    }
}

/// Turns period names and raw date inputs into report windows.
pub struct PeriodService;

impl PeriodService {
    /// Parses a period token, falling back to the current month.
    pub fn parse_or_default(token: &str) -> ReportPeriod {
        match token.parse() {
            Ok(period) => period,
            Err(_) => {
                tracing::warn!(token, "Unknown report period, defaulting to THIS_MONTH.");
                ReportPeriod::ThisMonth
            }
        }
    }

    /// Resolves a named period into an inclusive window ending relative
    /// to `reference`.
    pub fn resolve(period: ReportPeriod, reference: NaiveDate) -> ReportWindow {
        match period {
            ReportPeriod::ThisWeek => ReportWindow {
                start: reference
                    - Duration::days(i64::from(reference.weekday().num_days_from_monday())),
                end: reference,
            },
            ReportPeriod::ThisMonth => ReportWindow {
                start: month_start(reference),
                end: reference,
            },
            ReportPeriod::LastMonth => {
                let prior = shift_month(reference, -1);
                ReportWindow {
                    start: month_start(prior),
                    end: month_end(prior),
                }
            }
            ReportPeriod::Last3Months => ReportWindow {
                start: month_start(shift_month(reference, -3)),
                end: month_end(shift_month(reference, -1)),
            },
            ReportPeriod::Last6Months => ReportWindow {
                start: month_start(shift_month(reference, -6)),
                end: month_end(shift_month(reference, -1)),
            },
            ReportPeriod::ThisYear => ReportWindow {
                start: NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference),
                end: reference,
            },
            ReportPeriod::LastYear => {
                let year = reference.year() - 1;
                ReportWindow {
                    start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(reference),
                    end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(reference),
                }
            }
        }
    }

    /// Builds a custom window from optional bounds.
    ///
    /// A missing end defaults to the reference date. A missing start
    /// defaults to the earliest recorded expense, or to the first day of
    /// the end month when no expenses exist yet.
    pub fn custom_window(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        earliest: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> Result<ReportWindow> {
        let end = end.unwrap_or(reference);
        let start = start
            .or(earliest)
            .unwrap_or_else(|| month_start(end));
        ReportWindow::new(start, end)
    }
}
