//! Calculation result models for the shift pay engine.
//!
//! This module contains the [`PayBreakdown`] produced for a single shift and
//! the aggregate structures built from many breakdowns: [`PayTotals`],
//! [`PayReport`] with its [`DailyTotal`] rollups, [`ScheduleSummary`] and the
//! month-centred [`DashboardSummary`].

use std::iter::Sum;
use std::ops::AddAssign;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateRange;

/// The split of one shift into regular and night hours and their pay.
///
/// Hour fields are rounded to two decimal places. Pay fields are whole
/// currency units, each bucket rounded on its own, so `total_pay` always
/// equals `regular_pay + night_pay` exactly.
///
/// The [`Default`] value is the all-zero breakdown.
///
/// # Example
///
/// ```
/// use shift_pay::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown::default();
/// assert_eq!(breakdown.total_hours, Decimal::ZERO);
/// assert_eq!(breakdown.total_pay, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Hours worked outside the night window.
    pub regular_hours: Decimal,
    /// Hours worked inside the night window.
    pub night_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: i64,
    /// Pay for night hours.
    pub night_pay: i64,
    /// Sum of regular and night pay.
    pub total_pay: i64,
}

/// Field-wise sums over a set of [`PayBreakdown`]s.
///
/// # Example
///
/// ```
/// use shift_pay::models::{PayBreakdown, PayTotals};
/// use rust_decimal::Decimal;
///
/// let shift = PayBreakdown {
///     total_hours: Decimal::new(2, 0),
///     regular_hours: Decimal::ONE,
///     night_hours: Decimal::ONE,
///     regular_pay: 1000,
///     night_pay: 1250,
///     total_pay: 2250,
/// };
///
/// let totals: PayTotals = [shift, shift].iter().sum();
/// assert_eq!(totals.total_pay, 4500);
/// assert_eq!(totals.shift_count, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Number of breakdowns summed.
    pub shift_count: usize,
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Total regular hours.
    pub regular_hours: Decimal,
    /// Total night hours.
    pub night_hours: Decimal,
    /// Total regular pay.
    pub regular_pay: i64,
    /// Total night pay.
    pub night_pay: i64,
    /// Total pay.
    pub total_pay: i64,
}

impl AddAssign<&PayBreakdown> for PayTotals {
    fn add_assign(&mut self, breakdown: &PayBreakdown) {
        self.shift_count += 1;
        self.total_hours += breakdown.total_hours;
        self.regular_hours += breakdown.regular_hours;
        self.night_hours += breakdown.night_hours;
        self.regular_pay += breakdown.regular_pay;
        self.night_pay += breakdown.night_pay;
        self.total_pay += breakdown.total_pay;
    }
}

impl<'a> Sum<&'a PayBreakdown> for PayTotals {
    fn sum<I: Iterator<Item = &'a PayBreakdown>>(iter: I) -> Self {
        iter.fold(PayTotals::default(), |mut totals, breakdown| {
            totals += breakdown;
            totals
        })
    }
}

/// Hours and earnings recorded against a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The date the time cards were recorded against.
    pub date: NaiveDate,
    /// Total hours worked on this date.
    pub hours: Decimal,
    /// Total pay earned on this date.
    pub earnings: i64,
    /// Regular pay earned on this date.
    pub regular_pay: i64,
    /// Night pay earned on this date.
    pub night_pay: i64,
}

/// An hours and earnings report over completed time cards.
///
/// # Example
///
/// ```
/// use shift_pay::models::{PayReport, PayTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = PayReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     range: None,
///     totals: PayTotals::default(),
///     days_worked: 0,
///     average_hours_per_day: Decimal::ZERO,
///     daily: vec![],
/// };
/// assert_eq!(report.totals.total_pay, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The date range the report was restricted to, if any.
    pub range: Option<DateRange>,
    /// Sums over every completed time card in range.
    pub totals: PayTotals,
    /// Number of completed time cards in range.
    pub days_worked: usize,
    /// Total hours divided by days worked, rounded to two decimal places.
    pub average_hours_per_day: Decimal,
    /// Per-date rollups in ascending date order.
    pub daily: Vec<DailyTotal>,
}

/// Totals over the work entries of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Entries dated after this day are not counted.
    pub as_of: NaiveDate,
    /// Number of distinct dates with at least one work entry.
    pub work_days: usize,
    /// Sums over every counted work entry.
    pub totals: PayTotals,
}

/// Earnings and hours for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Total pay earned in the month.
    pub earnings: i64,
    /// Total hours worked in the month.
    pub hours: Decimal,
}

/// Hours worked on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHours {
    /// The day of the week.
    pub weekday: Weekday,
    /// Total hours of the cards dated on this weekday.
    pub hours: Decimal,
}

/// Change in earnings between two periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsComparison {
    /// Earnings of the current period.
    pub current: i64,
    /// Earnings of the previous period.
    pub previous: i64,
    /// `current - previous`.
    pub difference: i64,
    /// Absolute change relative to `previous`, in percent to two decimal
    /// places. Zero when `previous` is not positive.
    pub percentage: Decimal,
    /// True when earnings did not go down.
    pub is_increase: bool,
}

/// Overview of one month of time cards with its trends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The reference date.
    pub as_of: NaiveDate,
    /// The calendar month containing `as_of`.
    pub month: DateRange,
    /// Sums over the completed cards of the month.
    pub totals: PayTotals,
    /// Whether any card dated in the month is still open.
    pub active_time_card: bool,
    /// This month's earnings against last month's.
    pub comparison: EarningsComparison,
    /// This month's hours per weekday, Sunday first.
    pub weekday_hours: Vec<WeekdayHours>,
    /// This month's per-date rollups in ascending date order.
    pub daily: Vec<DailyTotal>,
    /// One entry per month, oldest first, ending with the current month.
    pub monthly_history: Vec<MonthlyTotal>,
}
