//! Injected ephemeris capability.
//!
//! The astronomical-formula core never talks to an ephemeris library
//! directly; everything it needs from one comes through this trait, so
//! the core stays testable with deterministic fixtures. Implementations
//! may wrap a native ephemeris, a web service, or the built-in
//! [`crate::StandardEphemeris`].

use crate::error::ChartError;

/// House-system choice for the Ascendant computation.
///
/// Only the Ascendant depends on this; MC and Vertex are house-system
/// independent and always come from the canonical deriver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
}

impl HouseSystem {
    /// Compact code for interop (matches the Swiss-style letter codes).
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::WholeSign => 'W',
        }
    }
}

/// Angular cusps returned by a house-system computation.
///
/// All values are tropical ecliptic longitudes in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseAngles {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    pub vertex_deg: f64,
}

/// External ephemeris boundary.
///
/// Every method is a single call with one success/failure outcome; the
/// core does not retry, schedule, or time out. Errors propagate as
/// [`ChartError::Provider`] tagged with the failing point.
pub trait EphemerisProvider: Send + Sync {
    /// Tropical ecliptic longitude of a body, in degrees.
    fn raw_longitude(&self, jd: f64, body: &str) -> Result<f64, ChartError>;

    /// Obliquity of the ecliptic, in radians (≈ 0.409 at J2000).
    fn obliquity_rad(&self, jd: f64) -> Result<f64, ChartError>;

    /// Greenwich sidereal time at a UT Julian Date, in hours [0, 24).
    fn sidereal_time_hours(&self, jd_ut: f64) -> Result<f64, ChartError>;

    /// Delta-T (TT − UT) at a Julian Date, in days.
    fn delta_t_days(&self, jd: f64) -> Result<f64, ChartError>;

    /// House cusps and angles for an observer.
    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, ChartError>;
}
