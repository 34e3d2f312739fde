//! shiftsheet library root.
//! Reconciles raw clock punches against job/shift scheduling context:
//! pairing, worked/scheduled hour totals, and the flat per-shift summary
//! consumed by display layers.

pub mod core;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod utils;

pub use crate::core::calculator::pairing::{
    PunchPair, create_punch_pairs_with_total_time, sort_punches,
};
pub use crate::core::calculator::rounding::{adjust_for_floating_point_error, adjust_with_threshold};
pub use crate::core::calculator::summary::process_punch_pairs_with_data;
pub use crate::core::logic::Core;
pub use crate::models::{
    FacilityDetails, GeoPoint, JobDetails, Punch, PunchKind, ShiftDetails, ShiftTimesheetSummary,
    Timesheet,
};
