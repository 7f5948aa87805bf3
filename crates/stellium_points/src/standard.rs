//! Built-in provider backed by the formulas in `stellium_time`.
//!
//! Covers everything except planetary positions: obliquity (IAU 2006),
//! sidereal time (ERA + Capitaine polynomial), Delta-T, and the
//! horizon/meridian angles. Raw planetary longitudes still have to come
//! from a real ephemeris; [`StandardEphemeris::raw_longitude`] always
//! fails, and callers supply longitudes through the observation
//! context instead.

use stellium_angles::normalize_360;
use stellium_time::{delta_t_days, gmst_hours, mean_obliquity_rad};

use crate::derive::{mc_longitude_deg, vertex_longitude_deg};
use crate::error::ChartError;
use crate::provider::{EphemerisProvider, HouseAngles, HouseSystem};
use crate::sidereal::{local_sidereal_hours, ramc_deg};

/// Formula-backed ephemeris provider (no data files).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEphemeris;

impl StandardEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for StandardEphemeris {
    fn raw_longitude(&self, _jd: f64, body: &str) -> Result<f64, ChartError> {
        Err(ChartError::Provider(format!(
            "no planetary ephemeris built in (requested {body}); \
             supply raw longitudes in the observation context"
        )))
    }

    fn obliquity_rad(&self, jd: f64) -> Result<f64, ChartError> {
        if !jd.is_finite() {
            return Err(ChartError::InvalidAngle("Julian Day must be finite"));
        }
        Ok(mean_obliquity_rad(jd))
    }

    fn sidereal_time_hours(&self, jd_ut: f64) -> Result<f64, ChartError> {
        if !jd_ut.is_finite() {
            return Err(ChartError::InvalidAngle("Julian Day must be finite"));
        }
        Ok(gmst_hours(jd_ut))
    }

    fn delta_t_days(&self, jd: f64) -> Result<f64, ChartError> {
        if !jd.is_finite() {
            return Err(ChartError::InvalidAngle("Julian Day must be finite"));
        }
        Ok(delta_t_days(jd))
    }

    /// Horizon and meridian angles from spherical astronomy.
    ///
    /// Ascendant (Meeus Ch. 13):
    /// `Asc = atan2(−cos RAMC, sin RAMC·cos ε + tan φ·sin ε)`.
    /// The Ascendant angle itself is house-system independent, so both
    /// supported systems return the same `HouseAngles`; the system
    /// choice matters only to implementations that also compute
    /// intermediate cusps.
    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        _system: HouseSystem,
    ) -> Result<HouseAngles, ChartError> {
        let lst = local_sidereal_hours(self, jd, longitude_deg)?;
        let ramc = ramc_deg(lst);
        let eps = mean_obliquity_rad(jd);

        let r = ramc.to_radians();
        let phi = latitude_deg.to_radians();
        let asc = f64::atan2(-r.cos(), r.sin() * eps.cos() + phi.tan() * eps.sin());

        Ok(HouseAngles {
            ascendant_deg: normalize_360(asc.to_degrees()),
            midheaven_deg: mc_longitude_deg(ramc, eps),
            vertex_deg: vertex_longitude_deg(ramc, eps, latitude_deg)?,
        })
    }
}
