//! Time-axis formulas for chart-point derivation.
//!
//! This crate provides:
//! - Julian Date <-> calendar conversion
//! - Earth Rotation Angle and Greenwich Mean Sidereal Time
//! - Mean obliquity of the ecliptic (IAU 2006)
//! - Delta-T (TT - UT) approximation polynomials
//!
//! All implementations derive from public IAU/IERS standards and
//! published astronomical polynomials.

pub mod deltat;
pub mod julian;
pub mod obliquity;
pub mod sidereal;

pub use deltat::delta_t_days;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_year};
pub use obliquity::mean_obliquity_rad;
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad};
