//! Time card model and lifecycle.
//!
//! A time card is opened when a user clocks in and completed when they clock
//! out, or created already completed when a past session is back-filled.
//! Every completed card carries the [`PayBreakdown`] of its interval.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::compute_shift_pay;
use crate::error::{PayError, PayResult};

use super::PayBreakdown;

/// Whether a time card is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCardStatus {
    /// Clocked in, no time out yet.
    #[default]
    Active,
    /// Clocked out; the breakdown reflects the recorded interval.
    Completed,
}

/// A recorded work session.
///
/// # Example
///
/// ```
/// use shift_pay::models::{TimeCard, TimeCardStatus};
/// use chrono::NaiveDateTime;
///
/// let time_in = NaiveDateTime::parse_from_str("2026-01-15 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let time_out = NaiveDateTime::parse_from_str("2026-01-15 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let mut card = TimeCard::clock_in("tc_001", time_in, None);
/// assert_eq!(card.status, TimeCardStatus::Active);
///
/// card.clock_out(time_out, None).unwrap();
/// assert_eq!(card.status, TimeCardStatus::Completed);
/// assert_eq!(card.breakdown.total_pay, 2250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCard {
    /// Unique identifier for the time card.
    pub id: String,
    /// The calendar date the card is reported under.
    pub date: NaiveDate,
    /// When work started.
    pub time_in: NaiveDateTime,
    /// When work ended; `None` while the card is active.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// Lifecycle state.
    pub status: TimeCardStatus,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Hours and pay for the recorded interval; all zero while active.
    #[serde(default)]
    pub breakdown: PayBreakdown,
}

impl TimeCard {
    /// Opens an active time card at `now`.
    pub fn clock_in(id: impl Into<String>, now: NaiveDateTime, notes: Option<String>) -> Self {
        Self {
            id: id.into(),
            date: now.date(),
            time_in: now,
            time_out: None,
            status: TimeCardStatus::Active,
            notes,
            breakdown: PayBreakdown::default(),
        }
    }

    /// Closes an active time card at `now` and computes its pay.
    ///
    /// Existing notes are kept unless new ones are supplied. Fails with
    /// [`PayError::InvalidTimeCard`] if the card is already completed and with
    /// [`PayError::InvalidInterval`] if `now` is not after the time in.
    pub fn clock_out(&mut self, now: NaiveDateTime, notes: Option<String>) -> PayResult<()> {
        if self.status != TimeCardStatus::Active {
            return Err(PayError::InvalidTimeCard {
                id: self.id.clone(),
                message: "time card is not active".to_string(),
            });
        }

        self.breakdown = compute_shift_pay(self.time_in, now)?;
        self.time_out = Some(now);
        self.status = TimeCardStatus::Completed;
        if notes.is_some() {
            self.notes = notes;
        }
        Ok(())
    }

    /// Creates an already completed card for a past session.
    ///
    /// `time_out` must already be on the correct calendar day for overnight
    /// sessions.
    pub fn historical(
        id: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveDateTime,
        time_out: NaiveDateTime,
        notes: Option<String>,
    ) -> PayResult<Self> {
        let breakdown = compute_shift_pay(time_in, time_out)?;
        Ok(Self {
            id: id.into(),
            date,
            time_in,
            time_out: Some(time_out),
            status: TimeCardStatus::Completed,
            notes,
            breakdown,
        })
    }

    /// Replaces the time in and/or time out.
    ///
    /// When the card has a time out afterwards, its pay is recomputed and it
    /// becomes completed. The card is left untouched if the new interval is
    /// invalid.
    pub fn amend_times(
        &mut self,
        time_in: Option<NaiveDateTime>,
        time_out: Option<NaiveDateTime>,
    ) -> PayResult<()> {
        let new_time_in = time_in.unwrap_or(self.time_in);
        let new_time_out = time_out.or(self.time_out);

        if let Some(out) = new_time_out {
            self.breakdown = compute_shift_pay(new_time_in, out)?;
            self.time_out = Some(out);
            self.status = TimeCardStatus::Completed;
        }
        self.time_in = new_time_in;
        Ok(())
    }

    /// Returns true once the card has been clocked out.
    pub fn is_completed(&self) -> bool {
        self.status == TimeCardStatus::Completed
    }
}
