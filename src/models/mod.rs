//! Core data models for the shift pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod date_range;
mod schedule;
mod shift;
mod time_card;

pub use calculation_result::{
    DailyTotal, DashboardSummary, EarningsComparison, MonthlyTotal, PayBreakdown, PayReport,
    PayTotals, ScheduleSummary, WeekdayHours,
};
pub use date_range::{DateRange, ReportPeriod};
pub use schedule::{ScheduleEntry, ScheduleKind};
pub use shift::ShiftInterval;
pub(crate) use shift::MILLIS_PER_HOUR;
pub use time_card::{TimeCard, TimeCardStatus};
