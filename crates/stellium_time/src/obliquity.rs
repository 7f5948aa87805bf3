//! Mean obliquity of the ecliptic.
//!
//! IAU 2006 precession polynomial for ε_A, the angle between Earth's
//! equatorial and orbital planes. Varies by about 47″ per century.
//!
//! Source: IERS Conventions 2010, Eq. 5.40. Public domain.

use std::f64::consts::PI;

use crate::julian::J2000_JD;

/// Arcseconds to radians conversion factor.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Mean obliquity of the ecliptic at a given TT Julian Date, in radians.
///
/// ε_A = 84381.406″ − 46.836769″·T − 0.0001831″·T² + 0.00200340″·T³
///       − 0.000000576″·T⁴ − 0.0000000434″·T⁵
/// where T = Julian centuries of TT since J2000.0.
///
/// At J2000.0 this is 23.4392794° ≈ 0.4090926 rad.
pub fn mean_obliquity_rad(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let eps_arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5;

    eps_arcsec * ARCSEC_TO_RAD
}
