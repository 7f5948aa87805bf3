//! Local sidereal time and RAMC from the provider boundary.
//!
//! Chain: JD → JD + ΔT → Greenwich sidereal time → add east longitude
//! → reduce to [0, 24) hours. RAMC is the same angle in degrees.

use stellium_angles::{normalize_360, normalize_hours_24};

use crate::error::ChartError;
use crate::provider::EphemerisProvider;

/// Local Sidereal Time in hours, [0, 24).
///
/// `LST = (GST(jd + ΔT(jd)) + longitude/15) mod 24`, with the observer
/// longitude in east-positive degrees.
pub fn local_sidereal_hours(
    provider: &dyn EphemerisProvider,
    jd: f64,
    longitude_east_deg: f64,
) -> Result<f64, ChartError> {
    if !jd.is_finite() || !longitude_east_deg.is_finite() {
        return Err(ChartError::InvalidAngle(
            "sidereal time inputs must be finite",
        ));
    }
    let delta_t = provider.delta_t_days(jd)?;
    let gst = provider.sidereal_time_hours(jd + delta_t)?;
    Ok(normalize_hours_24(gst + longitude_east_deg / 15.0))
}

/// Right Ascension of the Meridian in degrees, [0, 360).
///
/// `RAMC = (LST × 15) mod 360`.
pub fn ramc_deg(lst_hours: f64) -> f64 {
    normalize_360(lst_hours * 15.0)
}
