//! Schedule entry model.
//!
//! Schedule entries are planned calendar events stored as a date plus two
//! clock times. Only work entries contribute to pay previews.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::PayResult;

use super::ShiftInterval;

/// The kind of a calendar event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// A planned work shift.
    #[default]
    Work,
    /// A meeting.
    Meeting,
    /// Break time.
    Break,
    /// A day off.
    Holiday,
    /// Anything else.
    Other,
}

/// A planned calendar event.
///
/// # Example
///
/// ```
/// use shift_pay::models::{ScheduleEntry, ScheduleKind};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = ScheduleEntry {
///     id: "sch_001".to_string(),
///     title: "Late shift".to_string(),
///     description: None,
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
///     ends_next_day: true,
///     kind: ScheduleKind::Work,
/// };
///
/// let interval = entry.interval().unwrap();
/// assert_eq!(interval.duration().num_hours(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// Short title shown on the calendar.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// The date the entry starts on.
    pub date: NaiveDate,
    /// Clock time the entry starts.
    pub start_time: NaiveTime,
    /// Clock time the entry ends.
    pub end_time: NaiveTime,
    /// Whether `end_time` falls on the day after `date`.
    #[serde(default)]
    pub ends_next_day: bool,
    /// The kind of event.
    #[serde(default, rename = "type")]
    pub kind: ScheduleKind,
}

impl ScheduleEntry {
    /// Returns true for work shifts.
    pub fn is_work(&self) -> bool {
        self.kind == ScheduleKind::Work
    }

    /// Resolves the entry to a concrete interval.
    pub fn interval(&self) -> PayResult<ShiftInterval> {
        ShiftInterval::from_clock_times(
            self.date,
            self.start_time,
            self.end_time,
            self.ends_next_day,
        )
    }
}
