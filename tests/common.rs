#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use shiftsheet::models::{FacilityDetails, JobDetails, Punch, PunchKind, ShiftDetails, Timesheet};

/// All fixtures live on the same calendar day.
pub const FIXTURE_YEAR: i32 = 2025;
pub const FIXTURE_MONTH: u32 = 9;
pub const FIXTURE_DAY: u32 = 1;

/// Instant on the fixture day at the given wall-clock time (UTC).
pub fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(FIXTURE_YEAR, FIXTURE_MONTH, FIXTURE_DAY, hour, min, 0)
        .unwrap()
}

pub fn punch_in(id: &str, timestamp: DateTime<Utc>) -> Punch {
    Punch::new(id, PunchKind::In, timestamp)
}

pub fn punch_out(id: &str, timestamp: DateTime<Utc>) -> Punch {
    Punch::new(id, PunchKind::Out, timestamp)
}

pub fn timesheet(punches: Vec<Punch>) -> Timesheet {
    Timesheet::new("ts-1", punches)
}

pub fn job(total_hours: f64, lunch_break_minutes: i64) -> JobDetails {
    JobDetails {
        id: "job-1".into(),
        uid: "JOB-0001".into(),
        title: "Registered Nurse".into(),
        total_hours,
        lunch_break_minutes,
        facility: FacilityDetails {
            id: "fac-1".into(),
            name: "Riverside Care Center".into(),
            timezone: "America/Chicago".into(),
        },
    }
}

pub fn shift() -> ShiftDetails {
    ShiftDetails {
        id: "shift-1".into(),
        day: at(0, 0),
        start_time: "09:00".into(),
        end_time: "17:00".into(),
    }
}
