//! Delta-T (TT − UT) approximation.
//!
//! Piecewise polynomial fit covering the years this engine realistically
//! serves. Accuracy is a few seconds of time, which shifts sidereal
//! time by well under the 0.01° tolerance of the chart points.
//!
//! Sources: Espenak & Meeus, "Five Millennium Canon of Solar Eclipses"
//! polynomial expressions (1986–2005 branch); NASA eclipse-site
//! extrapolation for 2005–2050; long-range parabola elsewhere.

use crate::julian::{SECONDS_PER_DAY, jd_to_year};

/// Delta-T at a given Julian Date, in days.
///
/// The provider contract trades in days so the correction can be added
/// directly to a Julian Date.
pub fn delta_t_days(jd: f64) -> f64 {
    delta_t_seconds(jd_to_year(jd)) / SECONDS_PER_DAY
}

/// Delta-T for a fractional Gregorian year, in seconds.
fn delta_t_seconds(year: f64) -> f64 {
    if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let t5 = t4 * t;
        63.86 + 0.3345 * t - 0.060374 * t2 + 0.0017275 * t3 + 0.000651814 * t4
            + 0.00002373599 * t5
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        // Long-range parabola, valid far outside the fitted spans.
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}
