use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Facility the job belongs to. The timezone is an IANA identifier copied
/// through to the summary so renderers can localize; the core never
/// interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDetails {
    pub id: String,
    pub name: String,
    pub timezone: String,
}

/// Scheduling context of the job a timesheet was worked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub id: String,
    pub uid: String,
    pub title: String,
    /// Total scheduled hours for one shift of this job.
    pub total_hours: f64,
    /// Unpaid lunch break, subtracted once per timesheet.
    pub lunch_break_minutes: i64,
    pub facility: FacilityDetails,
}

/// One scheduled work period of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDetails {
    pub id: String,
    /// Calendar day of the shift. May carry an embedded time-of-day, which
    /// the day/time composition helpers deliberately ignore.
    pub day: DateTime<Utc>,
    /// Wall-clock start time, interpreted as UTC.
    pub start_time: String,
    /// Wall-clock end time, interpreted as UTC.
    pub end_time: String,
}
