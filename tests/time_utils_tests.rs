use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};

use shiftsheet::errors::AppError;
use shiftsheet::utils::formatting::{format_elapsed, hours2fixed};
use shiftsheet::utils::time::{combine_day_and_time_utc, ms_to_hours, shift_day_and_time_utc};
use shiftsheet::{adjust_for_floating_point_error, adjust_with_threshold};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn combines_day_with_bare_clock_time() {
    let instant = combine_day_and_time_utc(day(), "14:30").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2025, 9, 1, 14, 30, 0).unwrap());
}

#[test]
fn combines_day_with_seconds_precision() {
    let instant = combine_day_and_time_utc(day(), "06:15:42").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2025, 9, 1, 6, 15, 42).unwrap());
}

#[test]
fn full_timestamp_contributes_only_its_time_of_day() {
    // The date half of the time string is discarded; the target day wins.
    let instant = combine_day_and_time_utc(day(), "2020-01-05T08:15:30Z").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2025, 9, 1, 8, 15, 30).unwrap());
}

#[test]
fn invalid_time_string_is_an_error() {
    let err = combine_day_and_time_utc(day(), "sometime after lunch").unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
}

#[test]
fn shift_day_embedded_time_is_ignored() {
    // Shift day arrives as a full instant; only its calendar date survives.
    let shift_day = Utc.with_ymd_and_hms(2025, 9, 1, 23, 45, 0).unwrap();
    let instant = shift_day_and_time_utc(shift_day, "06:00").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2025, 9, 1, 6, 0, 0).unwrap());
}

#[test]
fn noise_below_threshold_snaps_to_zero() {
    assert_eq!(adjust_for_floating_point_error(0.0009), 0.0);
    assert_eq!(adjust_for_floating_point_error(-0.0009), 0.0);
    assert_eq!(adjust_for_floating_point_error(0.0), 0.0);
}

#[test]
fn values_at_or_above_threshold_pass_through() {
    assert_eq!(adjust_for_floating_point_error(0.001), 0.001);
    assert_eq!(adjust_for_floating_point_error(-0.25), -0.25);
    assert_eq!(adjust_for_floating_point_error(5.0), 5.0);
}

#[test]
fn custom_threshold_is_honored() {
    assert_eq!(adjust_with_threshold(0.4, 0.5), 0.0);
    assert_eq!(adjust_with_threshold(0.6, 0.5), 0.6);
}

#[test]
fn milliseconds_convert_to_fractional_hours() {
    assert_eq!(ms_to_hours(3_600_000), 1.0);
    assert_eq!(ms_to_hours(5_400_000), 1.5);
    assert_eq!(ms_to_hours(0), 0.0);
}

#[test]
fn elapsed_renders_hours_and_minutes() {
    assert_eq!(format_elapsed(TimeDelta::minutes(180)), "03h 00m");
    assert_eq!(format_elapsed(TimeDelta::minutes(450)), "07h 30m");
    // Sub-minute remainders truncate.
    assert_eq!(format_elapsed(TimeDelta::seconds(450 * 60 + 45)), "07h 30m");
}

#[test]
fn hours_render_with_two_decimals() {
    assert_eq!(hours2fixed(6.0), "6.00");
    assert_eq!(hours2fixed(7.5), "7.50");
    assert_eq!(hours2fixed(-1.0), "-1.00");
}
