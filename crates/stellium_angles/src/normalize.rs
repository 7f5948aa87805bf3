//! Angle normalization helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Negative input and input >= 360 wrap around identically; exact
/// multiples of 360 reduce to 0. Idempotent.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A negative remainder smaller than one ulp of 360 makes r + 360.0
    // round to exactly 360.0; fold that back onto the origin.
    if r < 360.0 { r } else { 0.0 }
}

/// Normalize a time-of-day angle to [0, 24) hours.
///
/// Used for sidereal time, which wraps on a 24-hour circle.
pub fn normalize_hours_24(hours: f64) -> f64 {
    let r = hours % 24.0;
    let r = if r < 0.0 { r + 24.0 } else { r };
    if r < 24.0 { r } else { 0.0 }
}
