pub mod formatting;
pub mod time;

pub use formatting::{format_elapsed, hours2fixed};
pub use time::{combine_day_and_time_utc, ms_to_hours, shift_day_and_time_utc};
