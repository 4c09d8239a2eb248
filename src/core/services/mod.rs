//! Stateless reporting services.
//!
//! Every service is a unit struct with associated functions that take
//! expense, category, and budget slices plus an explicit reference date,
//! so callers stay in control of storage and clocks.

pub mod heatmap_service;
pub mod insight_service;
pub mod performance_service;
pub mod period_service;
pub mod report_service;
pub mod trend_service;

pub use heatmap_service::HeatmapService;
pub use insight_service::InsightService;
pub use performance_service::PerformanceService;
pub use period_service::{PeriodService, ReportPeriod};
pub use report_service::ReportService;
pub use trend_service::TrendService;
