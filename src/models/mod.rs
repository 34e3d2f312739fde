pub mod job;
pub mod punch;
pub mod summary;
pub mod timesheet;

pub use job::{FacilityDetails, JobDetails, ShiftDetails};
pub use punch::{GeoPoint, Punch, PunchKind};
pub use summary::ShiftTimesheetSummary;
pub use timesheet::Timesheet;
