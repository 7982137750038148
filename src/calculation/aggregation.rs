//! Aggregation of shift breakdowns into reports and summaries.
//!
//! Every aggregate here is a plain field-wise sum of per-shift
//! [`PayBreakdown`]s, so results do not depend on input order.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Months, NaiveDate, Utc, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::error::PayResult;
use crate::models::{
    DailyTotal, DashboardSummary, DateRange, EarningsComparison, MonthlyTotal, PayBreakdown,
    PayReport, PayTotals, ScheduleEntry, ScheduleSummary, TimeCard, WeekdayHours,
};

use super::shift_pay::compute_interval_pay;

/// Sums any number of breakdowns field by field.
pub fn sum_breakdowns<'a, I>(breakdowns: I) -> PayTotals
where
    I: IntoIterator<Item = &'a PayBreakdown>,
{
    breakdowns.into_iter().sum()
}

/// Builds an hours and earnings report from time cards.
///
/// Only completed cards count. When `range` is given, only cards whose
/// `date` falls inside it count.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::summarize_time_cards;
/// use shift_pay::models::TimeCard;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let time_in = parse("2026-01-15 09:00:00");
/// let time_out = parse("2026-01-15 17:00:00");
///
/// let cards = vec![
///     TimeCard::historical("tc_1", date, time_in, time_out, None).unwrap(),
///     TimeCard::clock_in("tc_2", parse("2026-01-16 09:00:00"), None),
/// ];
///
/// let report = summarize_time_cards(&cards, None);
/// assert_eq!(report.days_worked, 1);
/// assert_eq!(report.totals.total_pay, 8000);
/// ```
pub fn summarize_time_cards(cards: &[TimeCard], range: Option<DateRange>) -> PayReport {
    let counted = completed_in(cards, range);

    let totals = sum_breakdowns(counted.iter().map(|card| &card.breakdown));
    let days_worked = counted.len();

    let average_hours_per_day = if days_worked > 0 {
        (totals.total_hours / Decimal::from(days_worked))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    PayReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        range,
        totals,
        days_worked,
        average_hours_per_day,
        daily: daily_totals(&counted),
    }
}

/// Compares two periods' earnings.
///
/// `percentage` is the absolute change relative to `previous`, rounded to two
/// decimal places, and zero when `previous` is not positive.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::compare_earnings;
/// use rust_decimal::Decimal;
///
/// let comparison = compare_earnings(90_000, 120_000);
/// assert_eq!(comparison.difference, -30_000);
/// assert_eq!(comparison.percentage, Decimal::new(25, 0));
/// assert!(!comparison.is_increase);
/// ```
pub fn compare_earnings(current: i64, previous: i64) -> EarningsComparison {
    let difference = current - previous;
    let percentage = if previous > 0 {
        (Decimal::from(difference) * Decimal::ONE_HUNDRED / Decimal::from(previous))
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    EarningsComparison {
        current,
        previous,
        difference,
        percentage,
        is_increase: difference >= 0,
    }
}

/// Hours of the completed cards per day of the week, Sunday first.
///
/// Always returns seven entries; cards count under the weekday of their
/// `date`.
pub fn hours_by_weekday(cards: &[TimeCard]) -> Vec<WeekdayHours> {
    weekday_totals(&completed_in(cards, None))
}

/// Earnings and hours of the completed cards for each of the `months`
/// calendar months ending with the month of `as_of`, oldest first.
pub fn monthly_history(cards: &[TimeCard], as_of: NaiveDate, months: u32) -> Vec<MonthlyTotal> {
    (0..months)
        .rev()
        .filter_map(|back| as_of.checked_sub_months(Months::new(back)))
        .map(|day| {
            let month = DateRange::month_of(day);
            let totals = sum_breakdowns(
                completed_in(cards, Some(month))
                    .into_iter()
                    .map(|card| &card.breakdown),
            );
            MonthlyTotal {
                month_start: month.start_date,
                earnings: totals.total_pay,
                hours: totals.total_hours,
            }
        })
        .collect()
}

/// Builds the month overview for `as_of` from a user's time cards.
///
/// Totals, weekday hours and daily rollups cover the completed cards dated in
/// the month of `as_of`. Earnings are compared against the previous calendar
/// month, and the history spans `months` months.
pub fn summarize_dashboard(
    cards: &[TimeCard],
    as_of: NaiveDate,
    months: u32,
) -> DashboardSummary {
    let month = DateRange::month_of(as_of);
    let counted = completed_in(cards, Some(month));
    let totals = sum_breakdowns(counted.iter().map(|card| &card.breakdown));

    let previous_earnings = as_of
        .checked_sub_months(Months::new(1))
        .map(|day| {
            completed_in(cards, Some(DateRange::month_of(day)))
                .iter()
                .map(|card| card.breakdown.total_pay)
                .sum::<i64>()
        })
        .unwrap_or(0);

    DashboardSummary {
        as_of,
        month,
        totals,
        active_time_card: cards
            .iter()
            .any(|card| !card.is_completed() && month.contains(card.date)),
        comparison: compare_earnings(totals.total_pay, previous_earnings),
        weekday_hours: weekday_totals(&counted),
        daily: daily_totals(&counted),
        monthly_history: monthly_history(cards, as_of, months),
    }
}

/// Summarises the work entries of a schedule up to and including `as_of`.
///
/// Non-work entries and entries dated after `as_of` are ignored. Fails if a
/// counted entry does not resolve to a valid interval.
pub fn summarize_schedule(
    entries: &[ScheduleEntry],
    as_of: NaiveDate,
) -> PayResult<ScheduleSummary> {
    let counted: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|entry| entry.is_work() && entry.date <= as_of)
        .collect();

    let totals = pay_for_entries(&counted)?;
    let work_days = counted
        .iter()
        .map(|entry| entry.date)
        .collect::<BTreeSet<_>>()
        .len();

    Ok(ScheduleSummary {
        as_of,
        work_days,
        totals,
    })
}

/// Totals for the work entries scheduled on a single date.
pub fn summarize_schedule_day(
    entries: &[ScheduleEntry],
    date: NaiveDate,
) -> PayResult<PayTotals> {
    let counted: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|entry| entry.is_work() && entry.date == date)
        .collect();

    pay_for_entries(&counted)
}

fn completed_in(cards: &[TimeCard], range: Option<DateRange>) -> Vec<&TimeCard> {
    cards
        .iter()
        .filter(|card| card.is_completed())
        .filter(|card| range.is_none_or(|r| r.contains(card.date)))
        .collect()
}

fn daily_totals(cards: &[&TimeCard]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
    for card in cards {
        let entry = by_date.entry(card.date).or_insert_with(|| DailyTotal {
            date: card.date,
            hours: Decimal::ZERO,
            earnings: 0,
            regular_pay: 0,
            night_pay: 0,
        });
        entry.hours += card.breakdown.total_hours;
        entry.earnings += card.breakdown.total_pay;
        entry.regular_pay += card.breakdown.regular_pay;
        entry.night_pay += card.breakdown.night_pay;
    }
    by_date.into_values().collect()
}

fn weekday_totals(cards: &[&TimeCard]) -> Vec<WeekdayHours> {
    let mut hours = [Decimal::ZERO; 7];
    for card in cards {
        hours[card.date.weekday().num_days_from_sunday() as usize] += card.breakdown.total_hours;
    }

    std::iter::successors(Some(Weekday::Sun), |day| Some(day.succ()))
        .zip(hours)
        .map(|(weekday, hours)| WeekdayHours { weekday, hours })
        .collect()
}

fn pay_for_entries(entries: &[&ScheduleEntry]) -> PayResult<PayTotals> {
    let breakdowns = entries
        .iter()
        .map(|entry| entry.interval().map(|interval| compute_interval_pay(&interval)))
        .collect::<PayResult<Vec<_>>>()?;
    Ok(sum_breakdowns(&breakdowns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayError;
    use crate::models::ScheduleKind;
    use chrono::{NaiveDateTime, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn completed_card(
        id: &str,
        date: &str,
        time_in: &str,
        out_date: &str,
        time_out: &str,
    ) -> TimeCard {
        TimeCard::historical(
            id,
            make_date(date),
            make_datetime(date, time_in),
            make_datetime(out_date, time_out),
            None,
        )
        .unwrap()
    }

    fn create_entry(
        date: &str,
        start: &str,
        end: &str,
        ends_next_day: bool,
        kind: ScheduleKind,
    ) -> ScheduleEntry {
        ScheduleEntry {
            id: format!("sch_{}_{}", date, start),
            title: "Shift".to_string(),
            description: None,
            date: make_date(date),
            start_time: make_time(start),
            end_time: make_time(end),
            ends_next_day,
            kind,
        }
    }

    #[test]
    fn test_report_counts_only_completed_cards() {
        let cards = vec![
            completed_card("tc_1", "2026-01-12", "09:00:00", "2026-01-12", "17:00:00"),
            TimeCard::clock_in("tc_2", make_datetime("2026-01-13", "09:00:00"), None),
        ];

        let report = summarize_time_cards(&cards, None);

        assert_eq!(report.days_worked, 1);
        assert_eq!(report.totals.shift_count, 1);
        assert_eq!(report.totals.total_pay, 8000);
    }

    #[test]
    fn test_report_totals_and_average() {
        let cards = vec![
            completed_card("tc_1", "2026-01-12", "09:00:00", "2026-01-12", "17:00:00"),
            completed_card("tc_2", "2026-01-13", "21:00:00", "2026-01-13", "23:00:00"),
            completed_card("tc_3", "2026-01-14", "23:00:00", "2026-01-15", "05:00:00"),
        ];

        let report = summarize_time_cards(&cards, None);

        assert_eq!(report.totals.total_hours, dec("16"));
        assert_eq!(report.totals.regular_hours, dec("9"));
        assert_eq!(report.totals.night_hours, dec("7"));
        assert_eq!(report.totals.regular_pay, 9000);
        assert_eq!(report.totals.night_pay, 8750);
        assert_eq!(report.totals.total_pay, 17750);
        assert_eq!(report.days_worked, 3);
        assert_eq!(report.average_hours_per_day, dec("5.33"));
    }

    #[test]
    fn test_report_respects_date_range() {
        let cards = vec![
            completed_card("tc_1", "2026-01-31", "09:00:00", "2026-01-31", "17:00:00"),
            completed_card("tc_2", "2026-02-01", "09:00:00", "2026-02-01", "12:00:00"),
        ];

        let february = DateRange::month_of(make_date("2026-02-10"));
        let report = summarize_time_cards(&cards, Some(february));

        assert_eq!(report.days_worked, 1);
        assert_eq!(report.totals.total_pay, 3000);
        assert_eq!(report.range.unwrap().start_date, make_date("2026-02-01"));
    }

    #[test]
    fn test_overnight_card_reported_under_its_start_date() {
        let cards = vec![completed_card(
            "tc_1",
            "2026-01-14",
            "23:00:00",
            "2026-01-15",
            "05:00:00",
        )];

        let range = DateRange::new(make_date("2026-01-15"), make_date("2026-01-15")).unwrap();
        let report = summarize_time_cards(&cards, Some(range));

        assert_eq!(report.days_worked, 0);
    }

    #[test]
    fn test_daily_rollups_merge_same_date_and_sort() {
        let cards = vec![
            completed_card("tc_1", "2026-01-13", "09:00:00", "2026-01-13", "12:00:00"),
            completed_card("tc_2", "2026-01-12", "09:00:00", "2026-01-12", "17:00:00"),
            completed_card("tc_3", "2026-01-13", "13:00:00", "2026-01-13", "15:30:00"),
        ];

        let report = summarize_time_cards(&cards, None);

        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily[0].date, make_date("2026-01-12"));
        assert_eq!(report.daily[0].hours, dec("8"));
        assert_eq!(report.daily[0].earnings, 8000);
        assert_eq!(report.daily[1].date, make_date("2026-01-13"));
        assert_eq!(report.daily[1].hours, dec("5.5"));
        assert_eq!(report.daily[1].earnings, 5500);
    }

    #[test]
    fn test_daily_rollups_split_regular_and_night_pay() {
        let cards = vec![
            completed_card("tc_1", "2026-01-12", "20:00:00", "2026-01-12", "23:00:00"),
            completed_card("tc_2", "2026-01-12", "05:00:00", "2026-01-12", "07:00:00"),
        ];

        let report = summarize_time_cards(&cards, None);

        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily[0].regular_pay, 3000);
        assert_eq!(report.daily[0].night_pay, 2500);
        assert_eq!(report.daily[0].earnings, 5500);
    }

    #[test]
    fn test_empty_report() {
        let report = summarize_time_cards(&[], None);

        assert_eq!(report.days_worked, 0);
        assert_eq!(report.average_hours_per_day, Decimal::ZERO);
        assert_eq!(report.totals, PayTotals::default());
        assert!(report.daily.is_empty());
    }

    #[test]
    fn test_report_is_order_independent() {
        let mut cards = vec![
            completed_card("tc_1", "2026-01-12", "09:00:00", "2026-01-12", "17:00:00"),
            completed_card("tc_2", "2026-01-13", "21:10:00", "2026-01-14", "01:20:00"),
            completed_card("tc_3", "2026-01-14", "05:45:00", "2026-01-14", "08:15:00"),
        ];

        let forward = summarize_time_cards(&cards, None);
        cards.reverse();
        let backward = summarize_time_cards(&cards, None);

        assert_eq!(forward.totals, backward.totals);
        assert_eq!(forward.daily, backward.daily);
    }

    #[test]
    fn test_schedule_summary_counts_past_work_entries_only() {
        let entries = vec![
            create_entry("2026-01-12", "09:00:00", "17:00:00", false, ScheduleKind::Work),
            create_entry("2026-01-12", "18:00:00", "19:00:00", false, ScheduleKind::Meeting),
            create_entry("2026-01-13", "22:00:00", "06:00:00", true, ScheduleKind::Work),
            create_entry("2026-01-20", "09:00:00", "17:00:00", false, ScheduleKind::Work),
        ];

        let summary = summarize_schedule(&entries, make_date("2026-01-13")).unwrap();

        assert_eq!(summary.work_days, 2);
        assert_eq!(summary.totals.shift_count, 2);
        assert_eq!(summary.totals.regular_hours, dec("8"));
        assert_eq!(summary.totals.night_hours, dec("8"));
        assert_eq!(summary.totals.total_pay, 8000 + 10000);
    }

    #[test]
    fn test_schedule_summary_counts_distinct_days() {
        let entries = vec![
            create_entry("2026-01-12", "06:00:00", "10:00:00", false, ScheduleKind::Work),
            create_entry("2026-01-12", "18:00:00", "22:00:00", false, ScheduleKind::Work),
        ];

        let summary = summarize_schedule(&entries, make_date("2026-01-31")).unwrap();

        assert_eq!(summary.work_days, 1);
        assert_eq!(summary.totals.total_hours, dec("8"));
    }

    #[test]
    fn test_schedule_summary_rejects_inverted_work_entry() {
        let entries = vec![create_entry(
            "2026-01-12",
            "22:00:00",
            "06:00:00",
            false,
            ScheduleKind::Work,
        )];

        let result = summarize_schedule(&entries, make_date("2026-01-31"));

        assert!(matches!(result, Err(PayError::InvalidInterval { .. })));
    }

    #[test]
    fn test_schedule_summary_ignores_inverted_non_work_entry() {
        let entries = vec![create_entry(
            "2026-01-12",
            "22:00:00",
            "06:00:00",
            false,
            ScheduleKind::Holiday,
        )];

        let summary = summarize_schedule(&entries, make_date("2026-01-31")).unwrap();

        assert_eq!(summary.work_days, 0);
        assert_eq!(summary.totals, PayTotals::default());
    }

    #[test]
    fn test_schedule_day_totals() {
        let entries = vec![
            create_entry("2026-01-12", "20:00:00", "23:30:00", false, ScheduleKind::Work),
            create_entry("2026-01-13", "09:00:00", "17:00:00", false, ScheduleKind::Work),
            create_entry("2026-01-12", "12:00:00", "13:00:00", false, ScheduleKind::Break),
        ];

        let totals = summarize_schedule_day(&entries, make_date("2026-01-12")).unwrap();

        assert_eq!(totals.shift_count, 1);
        assert_eq!(totals.regular_hours, dec("2"));
        assert_eq!(totals.night_hours, dec("1.5"));
        assert_eq!(totals.total_pay, 2000 + 1875);
    }

    #[test]
    fn test_compare_earnings_increase() {
        let comparison = compare_earnings(150_000, 120_000);

        assert_eq!(comparison.difference, 30_000);
        assert_eq!(comparison.percentage, dec("25"));
        assert!(comparison.is_increase);
    }

    #[test]
    fn test_compare_earnings_rounds_percentage() {
        let comparison = compare_earnings(2000, 3000);

        assert_eq!(comparison.difference, -1000);
        assert_eq!(comparison.percentage, dec("33.33"));
        assert!(!comparison.is_increase);
    }

    #[test]
    fn test_compare_earnings_without_previous_month() {
        let comparison = compare_earnings(8000, 0);

        assert_eq!(comparison.difference, 8000);
        assert_eq!(comparison.percentage, Decimal::ZERO);
        assert!(comparison.is_increase);

        assert!(compare_earnings(0, 0).is_increase);
    }

    #[test]
    fn test_hours_by_weekday_starts_on_sunday() {
        let cards = vec![
            // 2026-01-11 is a Sunday
            completed_card("tc_1", "2026-01-11", "09:00:00", "2026-01-11", "13:00:00"),
            completed_card("tc_2", "2026-01-17", "09:00:00", "2026-01-17", "11:30:00"),
            completed_card("tc_3", "2026-01-18", "10:00:00", "2026-01-18", "11:00:00"),
            TimeCard::clock_in("tc_4", make_datetime("2026-01-12", "09:00:00"), None),
        ];

        let weekdays = hours_by_weekday(&cards);

        assert_eq!(weekdays.len(), 7);
        assert_eq!(weekdays[0].weekday, Weekday::Sun);
        assert_eq!(weekdays[0].hours, dec("5"));
        assert_eq!(weekdays[1].weekday, Weekday::Mon);
        assert_eq!(weekdays[1].hours, Decimal::ZERO);
        assert_eq!(weekdays[6].weekday, Weekday::Sat);
        assert_eq!(weekdays[6].hours, dec("2.5"));
    }

    #[test]
    fn test_monthly_history_is_oldest_first() {
        let cards = vec![
            completed_card("tc_1", "2025-11-03", "09:00:00", "2025-11-03", "17:00:00"),
            completed_card("tc_2", "2026-01-05", "09:00:00", "2026-01-05", "12:00:00"),
            completed_card("tc_3", "2026-01-31", "22:00:00", "2026-02-01", "02:00:00"),
            completed_card("tc_4", "2025-06-30", "09:00:00", "2025-06-30", "17:00:00"),
        ];

        let history = monthly_history(&cards, make_date("2026-01-20"), 6);

        let starts: Vec<NaiveDate> = history.iter().map(|month| month.month_start).collect();
        assert_eq!(
            starts,
            vec![
                make_date("2025-08-01"),
                make_date("2025-09-01"),
                make_date("2025-10-01"),
                make_date("2025-11-01"),
                make_date("2025-12-01"),
                make_date("2026-01-01"),
            ]
        );
        assert_eq!(history[3].earnings, 8000);
        assert_eq!(history[4].earnings, 0);
        assert_eq!(history[5].earnings, 3000 + 5000);
        assert_eq!(history[5].hours, dec("7"));
    }

    #[test]
    fn test_monthly_history_clamps_month_end() {
        let history = monthly_history(&[], make_date("2026-03-31"), 2);

        assert_eq!(history[0].month_start, make_date("2026-02-01"));
        assert_eq!(history[1].month_start, make_date("2026-03-01"));
    }

    #[test]
    fn test_dashboard_summarises_current_month() {
        let cards = vec![
            completed_card("tc_1", "2025-12-10", "09:00:00", "2025-12-10", "19:00:00"),
            completed_card("tc_2", "2026-01-05", "09:00:00", "2026-01-05", "17:00:00"),
            completed_card("tc_3", "2026-01-06", "21:00:00", "2026-01-06", "23:00:00"),
            TimeCard::clock_in("tc_4", make_datetime("2026-01-07", "09:00:00"), None),
        ];

        let dashboard = summarize_dashboard(&cards, make_date("2026-01-20"), 6);

        assert_eq!(dashboard.month.start_date, make_date("2026-01-01"));
        assert_eq!(dashboard.month.end_date, make_date("2026-01-31"));
        assert_eq!(dashboard.totals.shift_count, 2);
        assert_eq!(dashboard.totals.total_pay, 8000 + 2250);
        assert!(dashboard.active_time_card);

        assert_eq!(dashboard.comparison.current, 10250);
        assert_eq!(dashboard.comparison.previous, 10000);
        assert_eq!(dashboard.comparison.percentage, dec("2.5"));
        assert!(dashboard.comparison.is_increase);

        assert_eq!(dashboard.daily.len(), 2);
        assert_eq!(dashboard.daily[1].regular_pay, 1000);
        assert_eq!(dashboard.daily[1].night_pay, 1250);

        // 2026-01-05 is a Monday and 2026-01-06 a Tuesday
        assert_eq!(dashboard.weekday_hours[1].hours, dec("8"));
        assert_eq!(dashboard.weekday_hours[2].hours, dec("2"));

        assert_eq!(dashboard.monthly_history.len(), 6);
        assert_eq!(dashboard.monthly_history[4].earnings, 10000);
    }

    #[test]
    fn test_dashboard_without_cards() {
        let dashboard = summarize_dashboard(&[], make_date("2026-01-20"), 3);

        assert_eq!(dashboard.totals, PayTotals::default());
        assert!(!dashboard.active_time_card);
        assert_eq!(dashboard.comparison.percentage, Decimal::ZERO);
        assert!(dashboard.daily.is_empty());
        assert_eq!(dashboard.weekday_hours.len(), 7);
        assert_eq!(dashboard.monthly_history.len(), 3);
    }
}
