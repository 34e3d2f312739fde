use crate::core::calculator::{pairing, summary};
use crate::models::job::{JobDetails, ShiftDetails};
use crate::models::punch::Punch;
use crate::models::summary::ShiftTimesheetSummary;
use crate::models::timesheet::Timesheet;

pub struct Core;

impl Core {
    /// Sort and pair raw punches in one call; pairs come back
    /// most-recent-first.
    pub fn build_punch_pairs(punches: Vec<Punch>) -> Vec<pairing::PunchPair> {
        let sorted = pairing::sort_punches(punches);
        pairing::create_punch_pairs_with_total_time(&sorted)
    }

    /// Reduce one timesheet with its scheduling context to the flat
    /// per-shift summary.
    pub fn build_shift_summary(
        timesheet: &Timesheet,
        job: &JobDetails,
        shift: &ShiftDetails,
    ) -> ShiftTimesheetSummary {
        summary::process_punch_pairs_with_data(timesheet, job, shift)
    }
}
