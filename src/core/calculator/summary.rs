use log::warn;

use crate::core::calculator::pairing::sort_punches;
use crate::core::calculator::rounding::adjust_for_floating_point_error;
use crate::models::job::{JobDetails, ShiftDetails};
use crate::models::punch::{Punch, PunchKind};
use crate::models::summary::ShiftTimesheetSummary;
use crate::models::timesheet::Timesheet;
use crate::telemetry::Telemetry;
use crate::utils::formatting::hours2fixed;
use crate::utils::time::ms_to_hours;

/// Reduce one timesheet plus its job/shift context to a flat summary record.
///
/// The scan keeps the first punch-in ever seen as `in_time` (sticky) and the
/// punch-out of the most recently closed pair as `out_time`; an outstanding
/// punch-in invalidates any previously recorded out-time until a new
/// punch-out closes it. Lunch is subtracted once per timesheet, not per pair.
pub fn process_punch_pairs_with_data(
    timesheet: &Timesheet,
    job: &JobDetails,
    shift: &ShiftDetails,
) -> ShiftTimesheetSummary {
    let mut summary = ShiftTimesheetSummary::from_context(timesheet, job, shift);

    // A timesheet with no punches still reports what should have been worked.
    if timesheet.punches.is_empty() {
        return summary;
    }

    let sorted = sort_punches(timesheet.punches.clone());
    summary.first_timestamp = sorted[0].timestamp_raw();

    let mut open_in: Option<&Punch> = None;
    let mut total_worked_ms: i64 = 0;

    for punch in &sorted {
        match punch.kind {
            PunchKind::In => {
                // in_time sticks to the first punch-in found; out_time is
                // invalid while a punch-in is outstanding.
                if summary.in_time.is_none() {
                    summary.in_time = Some(punch.timestamp);
                }
                summary.out_time = None;
                open_in = Some(punch);
            }
            PunchKind::Out => match open_in.take() {
                Some(in_punch) => {
                    total_worked_ms += (punch.timestamp - in_punch.timestamp).num_milliseconds();
                    summary.out_time = Some(punch.timestamp);
                    // Last closed pair wins for the id/raw fields.
                    summary.in_id = in_punch.id.clone();
                    summary.in_timestamp_raw = in_punch.timestamp_raw();
                    summary.out_id = punch.id.clone();
                    summary.out_timestamp_raw = punch.timestamp_raw();
                }
                None => {
                    Telemetry::global().record_orphan_punch_out();
                    warn!(
                        "timesheet {}: ignoring orphan punch-out {}",
                        timesheet.id, punch.id
                    );
                }
            },
        }
    }

    // Currently clocked in with no recorded out-time: point the id/raw fields
    // at the open punch-in and leave the out side empty.
    if summary.out_time.is_none()
        && let Some(in_punch) = open_in
    {
        summary.in_id = in_punch.id.clone();
        summary.in_timestamp_raw = in_punch.timestamp_raw();
        summary.out_id.clear();
        summary.out_timestamp_raw.clear();
    }

    let worked_hours = ms_to_hours(total_worked_ms);
    let lunch_hours = job.lunch_break_minutes as f64 / 60.0;
    let total_worked_hours = worked_hours - lunch_hours;

    if summary.out_time.is_some() {
        summary.total_worked_hours = hours2fixed(total_worked_hours);
    }
    summary.scheduled_hours = hours2fixed(job.total_hours);
    summary.difference_hours = adjust_for_floating_point_error(total_worked_hours - job.total_hours);

    summary
}
