//! Clock-hour segmentation of shift intervals.
//!
//! The night window wraps midnight and a long shift may enter it more than
//! once, so intervals are walked one clock hour at a time: each segment runs
//! from the cursor to the next top of the hour (or the end of the shift) and
//! takes the rate band of the hour it starts in. Segments are produced
//! lazily, so folding a long interval does not allocate.

use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::ShiftInterval;

use super::rates::{RateBand, rate_band_for};

/// A slice of a shift lying within a single clock hour.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::{HourSegment, RateBand};
/// use chrono::NaiveDateTime;
///
/// let segment = HourSegment {
///     start_time: NaiveDateTime::parse_from_str("2026-01-15 22:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-15 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     band: RateBand::Night,
/// };
/// assert_eq!(segment.duration().num_minutes(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSegment {
    /// The start time of this segment.
    pub start_time: NaiveDateTime,
    /// The end time of this segment.
    pub end_time: NaiveDateTime,
    /// The rate band of the hour the segment starts in.
    pub band: RateBand,
}

impl HourSegment {
    /// Returns the length of the segment.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// Unrounded regular and night time for an interval.
///
/// Buckets are whole milliseconds, so `regular + night` equals the walked
/// interval exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourSplit {
    /// Time outside the night window.
    pub regular: TimeDelta,
    /// Time inside the night window.
    pub night: TimeDelta,
}

impl HourSplit {
    /// Returns `regular + night`.
    pub fn total(&self) -> TimeDelta {
        self.regular + self.night
    }
}

/// Splits a shift at every clock-hour boundary.
///
/// Both ends are truncated to millisecond precision first.
///
/// # Behavior
///
/// - Segments are contiguous and ordered chronologically
/// - The first segment starts at the shift start, the last ends at the shift end
/// - No segment crosses a top of the hour
/// - Each segment is labelled with the band of its starting hour
///
/// # Example
///
/// ```
/// use shift_pay::calculation::{segment_by_hour, RateBand};
/// use shift_pay::models::ShiftInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = ShiftInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-15 21:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-15 22:45:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// )
/// .unwrap();
///
/// let segments = segment_by_hour(&interval);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].band, RateBand::Regular);
/// assert_eq!(segments[0].duration().num_minutes(), 30);
/// assert_eq!(segments[1].band, RateBand::Night);
/// assert_eq!(segments[1].duration().num_minutes(), 45);
/// ```
pub fn segment_by_hour(interval: &ShiftInterval) -> Vec<HourSegment> {
    hour_segments(interval).collect()
}

/// Lazily yields the same segments as [`segment_by_hour`].
///
/// Memory use is constant however long the interval is.
pub fn hour_segments(interval: &ShiftInterval) -> impl Iterator<Item = HourSegment> + use<> {
    let shift_end = interval.end().trunc_subsecs(3);
    let first_start = interval.start().trunc_subsecs(3);

    std::iter::successors(segment_from(first_start, shift_end), move |previous| {
        segment_from(previous.end_time, shift_end)
    })
}

/// Folds the hour segments of a shift into regular and night buckets.
pub fn split_hours(interval: &ShiftInterval) -> HourSplit {
    hour_segments(interval).fold(HourSplit::default(), |mut split, segment| {
        let millis = TimeDelta::milliseconds(segment.duration().num_milliseconds());
        match segment.band {
            RateBand::Regular => split.regular += millis,
            RateBand::Night => split.night += millis,
        }
        split
    })
}

/// The segment starting at `cursor`, or `None` once the shift end is reached.
fn segment_from(cursor: NaiveDateTime, shift_end: NaiveDateTime) -> Option<HourSegment> {
    if cursor >= shift_end {
        return None;
    }
    let end_time = next_hour_boundary(cursor)
        .map_or(shift_end, |boundary| boundary.min(shift_end));
    Some(HourSegment {
        start_time: cursor,
        end_time,
        band: rate_band_for(cursor.hour()),
    })
}

/// The top of the hour strictly after `t`, or `None` past the end of the calendar.
fn next_hour_boundary(t: NaiveDateTime) -> Option<NaiveDateTime> {
    t.date()
        .and_hms_opt(t.hour(), 0, 0)
        .and_then(|hour_start| hour_start.checked_add_signed(TimeDelta::hours(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_interval(start: (&str, &str), end: (&str, &str)) -> ShiftInterval {
        ShiftInterval::new(make_datetime(start.0, start.1), make_datetime(end.0, end.1)).unwrap()
    }

    #[test]
    fn test_aligned_shift_has_one_segment_per_hour() {
        let interval = make_interval(("2026-01-15", "09:00:00"), ("2026-01-15", "17:00:00"));

        let segments = segment_by_hour(&interval);

        assert_eq!(segments.len(), 8);
        assert!(segments.iter().all(|s| s.duration() == TimeDelta::hours(1)));
        assert!(segments.iter().all(|s| s.band == RateBand::Regular));
    }

    #[test]
    fn test_unaligned_start_and_end_produce_partial_segments() {
        let interval = make_interval(("2026-01-15", "17:55:00"), ("2026-01-15", "19:10:00"));

        let segments = segment_by_hour(&interval);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].duration(), TimeDelta::minutes(5));
        assert_eq!(segments[1].duration(), TimeDelta::hours(1));
        assert_eq!(segments[2].duration(), TimeDelta::minutes(10));
    }

    #[test]
    fn test_segments_are_contiguous_and_cover_interval() {
        let interval = make_interval(("2026-01-15", "20:17:31"), ("2026-01-16", "07:42:09"));

        let segments = segment_by_hour(&interval);

        assert_eq!(segments.first().unwrap().start_time, interval.start());
        assert_eq!(segments.last().unwrap().end_time, interval.end());
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
        }
    }

    #[test]
    fn test_no_segment_crosses_top_of_hour() {
        let interval = make_interval(("2026-01-15", "21:45:00"), ("2026-01-16", "06:15:00"));

        for segment in segment_by_hour(&interval) {
            let last_instant = segment.end_time - TimeDelta::milliseconds(1);
            assert_eq!(segment.start_time.hour(), last_instant.hour());
            assert_eq!(segment.start_time.date(), last_instant.date());
        }
    }

    #[test]
    fn test_midnight_crossing_bands() {
        let interval = make_interval(("2026-01-15", "21:00:00"), ("2026-01-16", "07:00:00"));

        let bands: Vec<RateBand> = segment_by_hour(&interval).iter().map(|s| s.band).collect();

        let mut expected = vec![RateBand::Regular];
        expected.extend(std::iter::repeat_n(RateBand::Night, 8));
        expected.push(RateBand::Regular);
        assert_eq!(bands, expected);
    }

    #[test]
    fn test_split_sums_to_duration() {
        let interval = make_interval(("2026-01-15", "20:17:31"), ("2026-01-16", "07:42:09"));

        let split = split_hours(&interval);

        assert_eq!(split.total(), interval.duration());
    }

    #[test]
    fn test_split_of_double_wrapping_shift() {
        // 30 hours entering the night window twice: 8h the first night, 4h the second.
        let interval = make_interval(("2026-01-15", "20:00:00"), ("2026-01-17", "02:00:00"));

        let split = split_hours(&interval);

        assert_eq!(split.night, TimeDelta::hours(12));
        assert_eq!(split.regular, TimeDelta::hours(18));
    }

    #[test]
    fn test_sub_millisecond_precision_is_truncated() {
        let start = make_datetime("2026-01-15", "09:00:00") + TimeDelta::nanoseconds(1_500_000);
        let end = make_datetime("2026-01-15", "10:00:00") + TimeDelta::nanoseconds(999_999);
        let interval = ShiftInterval::new(start, end).unwrap();

        let split = split_hours(&interval);

        assert_eq!(split.regular, TimeDelta::hours(1) - TimeDelta::milliseconds(1));
        assert_eq!(split.night, TimeDelta::zero());
    }

    #[test]
    fn test_lazy_segments_match_collected_segments() {
        let interval = make_interval(("2026-01-15", "20:17:31"), ("2026-01-17", "07:42:09"));

        let lazy: Vec<HourSegment> = hour_segments(&interval).collect();

        assert_eq!(lazy, segment_by_hour(&interval));
    }

    #[test]
    fn test_lazy_segments_can_be_consumed_partially() {
        // Only the first few segments of a very long interval are ever built.
        let interval = make_interval(("2026-01-15", "21:30:00"), ("2126-01-15", "00:00:00"));

        let first: Vec<HourSegment> = hour_segments(&interval).take(2).collect();

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].duration(), TimeDelta::minutes(30));
        assert_eq!(first[1].band, RateBand::Night);
    }

    #[test]
    fn test_interval_within_one_millisecond_has_no_segments() {
        let start = make_datetime("2026-01-15", "09:00:00");
        let interval = ShiftInterval::new(start, start + TimeDelta::nanoseconds(10)).unwrap();

        assert!(segment_by_hour(&interval).is_empty());
        assert_eq!(split_hours(&interval), HourSplit::default());
    }
}
