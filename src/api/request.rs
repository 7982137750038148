//! Request types for the shift pay API.
//!
//! This module defines the JSON request structures for the shift pay,
//! report, schedule, time card and dashboard endpoints.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PayError, PayResult};
use crate::models::{DateRange, ReportPeriod, ScheduleEntry, TimeCard, TimeCardStatus};

/// Number of months in the dashboard history when a request names none.
pub const DEFAULT_HISTORY_MONTHS: u32 = 6;

/// Request body for the `/shift-pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayRequest {
    /// When the shift started.
    pub start: NaiveDateTime,
    /// When the shift ended; already on the next day for overnight shifts.
    pub end: NaiveDateTime,
}

/// A time card as submitted by a client.
///
/// Clients never send a breakdown: pay is always recomputed from the
/// recorded times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeCardRequest {
    /// Unique identifier for the time card.
    pub id: String,
    /// Reporting date; defaults to the date of `time_in`.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// When work started.
    pub time_in: NaiveDateTime,
    /// When work ended.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// Lifecycle state; inferred from `time_out` when omitted.
    #[serde(default)]
    pub status: Option<TimeCardStatus>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<TimeCardRequest> for TimeCard {
    type Error = PayError;

    fn try_from(req: TimeCardRequest) -> PayResult<Self> {
        let date = req.date.unwrap_or_else(|| req.time_in.date());

        match (req.status, req.time_out) {
            (Some(TimeCardStatus::Active), Some(_)) => Err(PayError::InvalidTimeCard {
                id: req.id,
                message: "an active time card cannot have a time_out".to_string(),
            }),
            (Some(TimeCardStatus::Completed), None) => Err(PayError::InvalidTimeCard {
                id: req.id,
                message: "a completed time card requires a time_out".to_string(),
            }),
            (_, Some(time_out)) => {
                TimeCard::historical(req.id, date, req.time_in, time_out, req.notes)
            }
            (_, None) => {
                let mut card = TimeCard::clock_in(req.id, req.time_in, req.notes);
                card.date = date;
                Ok(card)
            }
        }
    }
}

/// Request body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The time cards to report on.
    pub time_cards: Vec<TimeCardRequest>,
    /// First day to include.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day to include.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Preset window, used only when neither bound is given.
    #[serde(default)]
    pub period: Option<ReportPeriod>,
    /// Reference date for `period`; defaults to today on the local clock.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl ReportRequest {
    /// Resolves the optional bounds or preset period into a date range.
    ///
    /// Explicit bounds win over `period`. A missing bound is left open; no
    /// bounds and no period means no filter.
    pub fn range(&self) -> PayResult<Option<DateRange>> {
        match (self.start_date, self.end_date, self.period) {
            (None, None, None) => Ok(None),
            (None, None, Some(period)) => Ok(Some(period.range_for(resolve_as_of(self.as_of)))),
            (start, end, _) => DateRange::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )
            .map(Some),
        }
    }
}

/// Request body for the `/schedules/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummaryRequest {
    /// The schedule entries to summarise.
    pub entries: Vec<ScheduleEntry>,
    /// Entries after this date are ignored.
    pub as_of: NaiveDate,
}

/// Request body for the `/schedules/day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDayRequest {
    /// The schedule entries to look through.
    pub entries: Vec<ScheduleEntry>,
    /// The day to total.
    pub date: NaiveDate,
}

/// Request body for the `/time-cards/clock-out` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    /// The active card to close.
    pub time_card: TimeCardRequest,
    /// When work ended.
    pub time_out: NaiveDateTime,
    /// Replacement notes; existing notes are kept when omitted.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for the `/time-cards/amend` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmendTimeCardRequest {
    /// The card to correct.
    pub time_card: TimeCardRequest,
    /// New time in, if it changes.
    #[serde(default)]
    pub time_in: Option<NaiveDateTime>,
    /// New time out, if it changes.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
}

/// Request body for the `/dashboard` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// The user's time cards.
    pub time_cards: Vec<TimeCardRequest>,
    /// Reference date; defaults to today on the local clock.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Length of the monthly history.
    #[serde(default = "default_history_months")]
    pub months: u32,
}

impl DashboardRequest {
    /// The reference date, falling back to today.
    pub fn as_of(&self) -> NaiveDate {
        resolve_as_of(self.as_of)
    }
}

fn default_history_months() -> u32 {
    DEFAULT_HISTORY_MONTHS
}

fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}
