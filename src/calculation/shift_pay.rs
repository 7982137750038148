//! Shift pay calculation.
//!
//! This module turns a shift interval into a [`PayBreakdown`]: the interval is
//! split into regular and night time by [`split_hours`], each bucket is paid
//! at its own rate and rounded on its own, and hours are rounded to two
//! decimal places for display and storage.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PayResult;
use crate::models::{MILLIS_PER_HOUR, PayBreakdown, ShiftInterval};

use super::hour_segments::{HourSplit, split_hours};
use super::rates::RateBand;

/// Calculates regular and night hours and pay for one shift.
///
/// # Arguments
///
/// * `start` - When the shift started, on the local clock
/// * `end` - When the shift ended; must already be on the next day for
///   overnight shifts
///
/// # Returns
///
/// The [`PayBreakdown`] for the shift, or [`PayError::InvalidInterval`] if
/// `end <= start`. Day rollover is never inferred.
///
/// [`PayError::InvalidInterval`]: crate::error::PayError::InvalidInterval
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::compute_shift_pay;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let breakdown = compute_shift_pay(start, end).unwrap();
/// assert_eq!(breakdown.regular_hours, Decimal::ONE);
/// assert_eq!(breakdown.night_hours, Decimal::ONE);
/// assert_eq!(breakdown.regular_pay, 1000);
/// assert_eq!(breakdown.night_pay, 1250);
/// assert_eq!(breakdown.total_pay, 2250);
///
/// assert!(compute_shift_pay(end, start).is_err());
/// ```
pub fn compute_shift_pay(start: NaiveDateTime, end: NaiveDateTime) -> PayResult<PayBreakdown> {
    let interval = ShiftInterval::new(start, end)?;
    Ok(compute_interval_pay(&interval))
}

/// Calculates the breakdown of an already validated interval.
pub fn compute_interval_pay(interval: &ShiftInterval) -> PayBreakdown {
    breakdown_from_split(&split_hours(interval))
}

/// Converts an unrounded split into a rounded [`PayBreakdown`].
///
/// Negative buckets are clamped to zero, so a degenerate split still yields a
/// well-formed breakdown.
pub fn breakdown_from_split(split: &HourSplit) -> PayBreakdown {
    let regular_millis = non_negative_millis(split.regular);
    let night_millis = non_negative_millis(split.night);

    let regular_pay = pay_for(regular_millis, RateBand::Regular.hourly_rate());
    let night_pay = pay_for(night_millis, RateBand::Night.hourly_rate());

    PayBreakdown {
        total_hours: hours_2dp(regular_millis + night_millis),
        regular_hours: hours_2dp(regular_millis),
        night_hours: hours_2dp(night_millis),
        regular_pay,
        night_pay,
        total_pay: regular_pay + night_pay,
    }
}

fn non_negative_millis(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().max(0)
}

/// Hours as a decimal rounded half away from zero to two places.
fn hours_2dp(millis: i64) -> Decimal {
    (Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `round(hours * rate)` computed exactly from milliseconds, halves rounded up.
fn pay_for(millis: i64, rate: i64) -> i64 {
    let per_hour = i128::from(MILLIS_PER_HOUR);
    let scaled = i128::from(millis) * i128::from(rate);
    let rounded = (scaled + per_hour / 2) / per_hour;
    i64::try_from(rounded).unwrap_or(i64::MAX)
}
