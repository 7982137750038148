//! Reporting date range model.
//!
//! This module contains the [`DateRange`] type used to select which time
//! cards contribute to a report, and the [`ReportPeriod`] presets that
//! resolve to one.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PayError, PayResult};

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use shift_pay::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> PayResult<Self> {
        if end_date < start_date {
            return Err(PayError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The seven days leading up to and including `today`.
    pub fn last_week(today: NaiveDate) -> Self {
        let start_date = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
        Self {
            start_date,
            end_date: today,
        }
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start_date = date.with_day(1).unwrap_or(date);
        let end_date = start_date
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self {
            start_date,
            end_date,
        }
    }

    /// The calendar year containing `date`.
    pub fn year_of(date: NaiveDate) -> Self {
        let start_date = date.with_ordinal(1).unwrap_or(date);
        let end_date = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A preset reporting window relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// From seven days before the reference date through the reference date.
    Weekly,
    /// The calendar month of the reference date.
    Monthly,
    /// The calendar year of the reference date.
    Yearly,
}

impl ReportPeriod {
    /// Resolves the preset against `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
    /// let range = ReportPeriod::Monthly.range_for(date);
    /// assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    /// assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    /// ```
    pub fn range_for(self, date: NaiveDate) -> DateRange {
        match self {
            ReportPeriod::Weekly => DateRange::last_week(date),
            ReportPeriod::Monthly => DateRange::month_of(date),
            ReportPeriod::Yearly => DateRange::year_of(date),
        }
    }
}
