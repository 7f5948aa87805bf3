//! Degrees-minutes-seconds decomposition and formatting.
//!
//! `deg_to_dms` decomposes exactly (seconds keep their full fractional
//! part); rounding to two decimals happens at format time via
//! [`Dms::rounded`], which carries a seconds value that rounds to 60.00
//! into the minutes (and, if needed, degrees) field instead of printing
//! the malformed `59'60.00"`. A carry past 359° wraps to 0°; a carry
//! onto an intermediate boundary (30°0'0.00" for an in-sign value just
//! under the cusp) is kept, since the sign label was classified from
//! the unrounded longitude.

use std::fmt::{Display, Formatter};

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Dms {
    /// Round seconds to two decimal places, carrying overflow upward.
    ///
    /// 10°59'59.999" rounds to 11°0'0.00", not 10°59'60.00".
    pub fn rounded(self) -> Dms {
        let mut seconds = (self.seconds * 100.0).round() / 100.0;
        let mut minutes = self.minutes as u16;
        let mut degrees = self.degrees;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        // A longitude just under the full circle carries to the origin,
        // never to a 360-degree reading.
        if degrees >= 360 {
            degrees -= 360;
        }
        Dms {
            degrees,
            minutes: minutes as u8,
            seconds,
        }
    }
}

impl Display for Dms {
    /// Formats as `D°M'S.SS"` with carry-corrected rounding.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let r = self.rounded();
        write!(f, "{}\u{b0}{}'{:.2}\"", r.degrees, r.minutes, r.seconds)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value. The caller reduces
/// `deg` to its display range first (360 for a full longitude, 30
/// within a sign); whole degrees are stored in a `u16`.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn known_value() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn exact_minutes() {
        let d = deg_to_dms(10.5);
        assert_eq!(d.degrees, 10);
        assert_eq!(d.minutes, 30);
        assert!(d.seconds.abs() < 0.01);
    }

    #[test]
    fn round_trip_within_hundredth_arcsec() {
        // Round-trip error bound: 1/360000 deg = 0.01 arcsec.
        for &x in &[0.0, 0.0123, 13.0435654, 29.9999, 123.456789, 359.999997] {
            let back = dms_to_deg(&deg_to_dms(x));
            assert!((back - x).abs() < 1.0 / 360_000.0, "x={x}, back={back}");
        }
    }

    #[test]
    fn display_two_decimals() {
        let s = deg_to_dms(313.0435654178748).to_string();
        assert_eq!(s, "313\u{b0}2'36.84\"");
    }

    #[test]
    fn rounding_carry_seconds_to_minutes() {
        // Raw decomposition of this value gives 10 deg 59' 59.999",
        // which rounds to 60.00" — the legacy formatter emitted
        // "10°59'60.00\"" here. The corrected behavior carries.
        let raw = deg_to_dms(10.0 + 59.0 / 60.0 + 59.999 / 3600.0);
        assert_eq!(raw.degrees, 10);
        assert_eq!(raw.minutes, 59);
        assert!((raw.seconds * 100.0).round() / 100.0 >= 60.0);

        let r = raw.rounded();
        assert_eq!(r.degrees, 11);
        assert_eq!(r.minutes, 0);
        assert!(r.seconds.abs() < 1e-10);
        assert_eq!(raw.to_string(), "11\u{b0}0'0.00\"");
    }

    #[test]
    fn rounding_carry_minutes_to_degrees() {
        // In-sign boundary carry keeps the 30 reading; the sign label
        // is classified from the unrounded longitude.
        let d = Dms {
            degrees: 29,
            minutes: 59,
            seconds: 59.996,
        };
        let r = d.rounded();
        assert_eq!(r.degrees, 30);
        assert_eq!(r.minutes, 0);
        assert!(r.seconds.abs() < 1e-10);
    }

    #[test]
    fn rounding_carry_wraps_full_circle() {
        let d = deg_to_dms(359.0 + 59.0 / 60.0 + 59.999 / 3600.0);
        assert_eq!(d.to_string(), "0\u{b0}0'0.00\"");
        let r = d.rounded();
        assert_eq!(r.degrees, 0);
        assert_eq!(r.minutes, 0);
    }

    #[test]
    fn rounding_no_carry_below_threshold() {
        let d = Dms {
            degrees: 5,
            minutes: 10,
            seconds: 59.994,
        };
        let r = d.rounded();
        assert_eq!(r.degrees, 5);
        assert_eq!(r.minutes, 10);
        assert!((r.seconds - 59.99).abs() < 1e-10);
    }

    #[test]
    fn negative_input_abs() {
        let d = deg_to_dms(-23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
    }
}
