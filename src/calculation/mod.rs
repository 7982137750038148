//! Calculation logic for the shift pay engine.
//!
//! This module contains the rate table and night window, clock-hour
//! segmentation of shifts, the per-shift pay breakdown, and aggregation of
//! breakdowns into reports, schedule summaries and dashboards.

mod aggregation;
mod hour_segments;
mod rates;
mod shift_pay;

pub use aggregation::{
    compare_earnings, hours_by_weekday, monthly_history, sum_breakdowns, summarize_dashboard,
    summarize_schedule, summarize_schedule_day, summarize_time_cards,
};
pub use hour_segments::{HourSegment, HourSplit, hour_segments, segment_by_hour, split_hours};
pub use rates::{
    NIGHT_END_HOUR, NIGHT_RATE, NIGHT_START_HOUR, REGULAR_RATE, RateBand, rate_band_for,
};
pub use shift_pay::{breakdown_from_split, compute_interval_pay, compute_shift_pay};
