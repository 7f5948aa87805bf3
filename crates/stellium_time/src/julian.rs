//! Julian Date constants and calendar conversion.
//!
//! Source: Fliegel & Van Flandern (1968) for the Gregorian day-number
//! formula. Public domain.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Julian Date from a Gregorian calendar date and time-of-day.
///
/// Fliegel & Van Flandern integer day number, plus the time of day as
/// a day fraction. The JD starts at noon, hence the -0.5 offset.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;

    let jdn = d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045;

    let day_fraction =
        (hour as f64 * 3600.0 + minute as f64 * 60.0 + second) / SECONDS_PER_DAY;

    jdn as f64 - 0.5 + day_fraction
}

/// Fractional Gregorian year of a Julian Date (e.g. 2000.5).
///
/// Good enough for selecting a Delta-T polynomial branch; not a
/// calendar conversion.
pub fn jd_to_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1, 12, 0, 0.0);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn j2000_midnight() {
        let jd = calendar_to_jd(2000, 1, 1, 0, 0, 0.0);
        assert!((jd - 2_451_544.5).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn known_date_2024() {
        // 2024-01-15 12:00 UT = JD 2460325.0
        let jd = calendar_to_jd(2024, 1, 15, 12, 0, 0.0);
        assert!((jd - 2_460_325.0).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn day_fraction() {
        let jd = calendar_to_jd(2000, 1, 1, 18, 0, 0.0);
        assert!((jd - (J2000_JD + 0.25)).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn year_at_epoch() {
        assert!((jd_to_year(J2000_JD) - 2000.0).abs() < 1e-12);
        assert!((jd_to_year(J2000_JD + 365.25) - 2001.0).abs() < 1e-12);
    }
}
