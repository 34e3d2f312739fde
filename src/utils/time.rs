//! Time utilities: wall-clock parsing, day/time composition, hour conversion.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::errors::{AppError, AppResult};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Parse a wall-clock time string as UTC.
///
/// Accepts either a full RFC 3339 instant (only its time-of-day is kept) or a
/// bare `HH:MM[:SS[.fff]]` clock string. Returns `None` for anything else;
/// chrono has no `Invalid Date` value to carry forward, so rejection is the
/// closest equivalent of the upstream behavior.
pub fn parse_time_utc(t: &str) -> Option<NaiveTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&Utc).time());
    }

    for fmt in ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(t, fmt) {
            return Some(time);
        }
    }

    None
}

/// Compose `day`'s calendar date with the time-of-day of `time_str`
/// interpreted as UTC.
///
/// Used to align a scheduled shift's start/end time onto the calendar date it
/// occurs on.
pub fn combine_day_and_time_utc(day: NaiveDate, time_str: &str) -> AppResult<DateTime<Utc>> {
    let time = parse_time_utc(time_str).ok_or_else(|| AppError::InvalidTime(time_str.into()))?;
    Ok(day.and_time(time).and_utc())
}

/// Same composition, taking the shift day as a full instant. Any time-of-day
/// embedded in `day` is discarded; only its calendar date survives.
pub fn shift_day_and_time_utc(day: DateTime<Utc>, time_str: &str) -> AppResult<DateTime<Utc>> {
    combine_day_and_time_utc(day.date_naive(), time_str)
}

/// Millisecond → hour division used by the worked-hours totals.
pub fn ms_to_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR
}
