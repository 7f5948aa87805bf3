//! Midheaven and Vertex derivation.
//!
//! Standard spherical astronomy formulas (Meeus, "Astronomical
//! Algorithms", Ch. 13; Montenbruck & Pfleger). All trigonometry runs
//! in radians; degrees are converted at the boundary and results are
//! normalized to [0, 360).
//!
//! The Ascendant is deliberately absent here: its formula depends on
//! the house-system choice, which lives behind the provider boundary.

use stellium_angles::normalize_360;

use crate::error::ChartError;

/// Latitudes closer than this to the equator or a pole are rejected
/// for Vertex computation (cot φ blows up or vanishes).
const LATITUDE_EPSILON_DEG: f64 = 1e-6;

/// Ecliptic longitude of the Midheaven, in degrees [0, 360).
///
/// `MC = atan2(sin RAMC, cos RAMC · cos ε)`
pub fn mc_longitude_deg(ramc_deg: f64, obliquity_rad: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let mc = f64::atan2(ramc.sin(), ramc.cos() * obliquity_rad.cos());
    normalize_360(mc.to_degrees())
}

/// Ecliptic longitude of the Vertex, in degrees [0, 360).
///
/// `raw = atan2(cos RAMC, sin ε · cot φ − cos ε · sin RAMC)`, then the
/// result is rotated by +180°. The rotation corrects the formula's
/// natural quadrant to the conventional Vertex definition and must not
/// be removed.
///
/// Rejects latitudes within [`LATITUDE_EPSILON_DEG`] of the equator or
/// a pole, where cot φ is infinite or the geometry degenerates.
pub fn vertex_longitude_deg(
    ramc_deg: f64,
    obliquity_rad: f64,
    latitude_deg: f64,
) -> Result<f64, ChartError> {
    if !latitude_deg.is_finite() {
        return Err(ChartError::InvalidAngle("latitude must be finite"));
    }
    if latitude_deg.abs() < LATITUDE_EPSILON_DEG {
        return Err(ChartError::DegenerateGeometry(
            "Vertex undefined at the equator",
        ));
    }
    if latitude_deg.abs() > 90.0 - LATITUDE_EPSILON_DEG {
        return Err(ChartError::DegenerateGeometry(
            "Vertex undefined at the poles",
        ));
    }

    let ramc = ramc_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let cot_phi = 1.0 / phi.tan();

    let numerator = ramc.cos();
    let denominator = obliquity_rad.sin() * cot_phi - obliquity_rad.cos() * ramc.sin();
    let raw = f64::atan2(numerator, denominator);

    Ok(normalize_360(normalize_360(raw.to_degrees()) + 180.0))
}
