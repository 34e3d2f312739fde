use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::{JobDetails, ShiftDetails};
use super::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::utils::formatting::hours2fixed;

/// Flat per-shift attendance record derived from one timesheet.
///
/// Context fields are copied through from the job/shift/facility records;
/// attendance and totals are derived by the calculator. Absent attendance
/// fields stay `None` or empty strings, never sentinel values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTimesheetSummary {
    pub timesheet_id: String,

    // ---------------------------
    // Shift / job / facility context (copied through)
    // ---------------------------
    pub shift_id: String,
    pub shift_day: DateTime<Utc>,
    pub shift_start_time: String,
    pub shift_end_time: String,
    pub job_id: String,
    pub job_uid: String,
    pub job_title: String,
    pub facility_id: String,
    pub facility_name: String,
    pub facility_timezone: String,
    pub lunch_break_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    // ---------------------------
    // Derived attendance
    // ---------------------------
    /// Raw timestamp of the earliest punch, empty if the timesheet has none.
    pub first_timestamp: String,
    /// First punch-in ever seen in the timesheet (sticky).
    pub in_time: Option<DateTime<Utc>>,
    /// Punch-out of the most recently closed pair, or `None` while an open
    /// punch-in is outstanding.
    pub out_time: Option<DateTime<Utc>>,
    pub in_id: String,
    pub out_id: String,
    pub in_timestamp_raw: String,
    pub out_timestamp_raw: String,

    // ---------------------------
    // Derived totals
    // ---------------------------
    /// Worked hours net of lunch, 2 decimals; empty while still clocked in
    /// with no recorded out-time.
    pub total_worked_hours: String,
    /// Scheduled hours from the job, 2 decimals. Reported even for a
    /// timesheet with zero punches.
    pub scheduled_hours: String,
    /// Worked minus scheduled, corrected toward zero for float noise.
    pub difference_hours: f64,
}

impl ShiftTimesheetSummary {
    /// Summary skeleton with the context copied through and every derived
    /// field at its "no punches" value.
    pub fn from_context(timesheet: &Timesheet, job: &JobDetails, shift: &ShiftDetails) -> Self {
        Self {
            timesheet_id: timesheet.id.clone(),
            shift_id: shift.id.clone(),
            shift_day: shift.day,
            shift_start_time: shift.start_time.clone(),
            shift_end_time: shift.end_time.clone(),
            job_id: job.id.clone(),
            job_uid: job.uid.clone(),
            job_title: job.title.clone(),
            facility_id: job.facility.id.clone(),
            facility_name: job.facility.name.clone(),
            facility_timezone: job.facility.timezone.clone(),
            lunch_break_minutes: job.lunch_break_minutes,
            note: timesheet.note.clone(),
            first_timestamp: String::new(),
            in_time: None,
            out_time: None,
            in_id: String::new(),
            out_id: String::new(),
            in_timestamp_raw: String::new(),
            out_timestamp_raw: String::new(),
            total_worked_hours: String::new(),
            scheduled_hours: hours2fixed(job.total_hours),
            difference_hours: 0.0,
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
