//! Shift interval model.
//!
//! This module defines [`ShiftInterval`], the validated `(start, end)` pair
//! of local wall-clock instants that every pay calculation consumes.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::error::{PayError, PayResult};

/// Number of milliseconds in one hour.
pub(crate) const MILLIS_PER_HOUR: i64 = 3_600_000;

/// A single contiguous work session on a local wall clock.
///
/// Construction guarantees `end > start`. No timezone conversion is performed
/// and the interval never infers a day rollover: an overnight session must be
/// built with its end already on the following day.
///
/// # Example
///
/// ```
/// use shift_pay::models::ShiftInterval;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-16 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let interval = ShiftInterval::new(start, end).unwrap();
/// assert_eq!(interval.duration().num_hours(), 6);
///
/// // Inverted intervals are rejected rather than rolled over.
/// assert!(ShiftInterval::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShiftInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ShiftInterval {
    /// Creates an interval, rejecting `end <= start` with
    /// [`PayError::InvalidInterval`].
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> PayResult<Self> {
        if end <= start {
            return Err(PayError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from a calendar date and two clock times.
    ///
    /// The caller states whether the end time belongs to the following day.
    /// When `ends_next_day` is `false` both times are placed on `date`, so an
    /// end time earlier than the start time is an [`PayError::InvalidInterval`].
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay::models::ShiftInterval;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
    ///
    /// let overnight = ShiftInterval::from_clock_times(date, start, end, true).unwrap();
    /// assert_eq!(overnight.end().date(), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
    ///
    /// assert!(ShiftInterval::from_clock_times(date, start, end, false).is_err());
    /// ```
    pub fn from_clock_times(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        ends_next_day: bool,
    ) -> PayResult<Self> {
        let start = date.and_time(start_time);
        let end_date = if ends_next_day {
            date.checked_add_days(Days::new(1))
                .ok_or(PayError::InvalidInterval {
                    start,
                    end: date.and_time(end_time),
                })?
        } else {
            date
        };
        Self::new(start, end_date.and_time(end_time))
    }

    /// Returns the start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the elapsed time between start and end.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
