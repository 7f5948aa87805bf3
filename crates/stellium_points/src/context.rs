//! Input context and result types for chart computation.

use std::collections::BTreeMap;

use crate::assemble::PointRecord;
use crate::error::ChartError;

/// One observation: an instant, an observer, and the raw planetary
/// longitudes supplied by the caller's ephemeris.
///
/// Read-only per call; the engine borrows it and holds no state across
/// calls. `BTreeMap` keeps iteration deterministic, so identical
/// contexts always produce identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationContext {
    /// Julian Day (UT) of the observation.
    pub jd: f64,
    /// Observer geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Observer longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Tropical ecliptic longitudes keyed by body name ("sun", "moon", ...).
    pub raw_longitudes: BTreeMap<String, f64>,
}

impl ObservationContext {
    pub fn new(jd: f64, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            jd,
            latitude_deg,
            longitude_deg,
            raw_longitudes: BTreeMap::new(),
        }
    }

    /// Add a raw body longitude (builder style).
    pub fn with_body(mut self, name: &str, longitude_deg: f64) -> Self {
        self.raw_longitudes.insert(name.to_string(), longitude_deg);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        if !self.jd.is_finite() {
            return Err(ChartError::InvalidAngle("Julian Day must be finite"));
        }
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidAngle(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() {
            return Err(ChartError::InvalidAngle("longitude must be finite"));
        }
        Ok(())
    }
}

/// What to do when a single point fails during assembly.
///
/// The engine never picks `Partial` on its own; omitting failed points
/// is an explicit caller decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyPolicy {
    /// Abort the whole computation on the first failing point, naming it.
    #[default]
    FailFast,
    /// Keep computing; failed points land in [`ChartOutcome::failures`].
    Partial,
}

/// Result of a chart computation: computed points plus any per-point
/// failures (non-empty only under [`AssemblyPolicy::Partial`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOutcome {
    pub points: BTreeMap<String, PointRecord>,
    pub failures: BTreeMap<String, ChartError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_bodies() {
        let ctx = ObservationContext::new(2_451_545.0, 32.0, 34.0)
            .with_body("sun", 280.0)
            .with_body("moon", 10.0);
        assert_eq!(ctx.raw_longitudes.len(), 2);
        assert_eq!(ctx.raw_longitudes["sun"], 280.0);
    }

    #[test]
    fn validate_accepts_normal_context() {
        assert!(ObservationContext::new(2_451_545.0, 51.5, -0.12)
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        assert!(ObservationContext::new(f64::NAN, 0.0, 0.0).validate().is_err());
        assert!(ObservationContext::new(2_451_545.0, 91.0, 0.0)
            .validate()
            .is_err());
        assert!(ObservationContext::new(2_451_545.0, 45.0, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn default_policy_is_fail_fast() {
        assert_eq!(AssemblyPolicy::default(), AssemblyPolicy::FailFast);
    }
}
