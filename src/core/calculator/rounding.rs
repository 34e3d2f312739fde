/// Default tolerance below which an hour difference is treated as float noise
/// from the repeated millisecond → hour divisions.
pub const FP_NOISE_THRESHOLD: f64 = 0.001;

/// Snap `value` to 0 when its magnitude is below the default threshold,
/// otherwise return it unchanged.
pub fn adjust_for_floating_point_error(value: f64) -> f64 {
    adjust_with_threshold(value, FP_NOISE_THRESHOLD)
}

pub fn adjust_with_threshold(value: f64, threshold: f64) -> f64 {
    if value.abs() < threshold { 0.0 } else { value }
}
