//! Error types for chart-point derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart-point derivation and assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Non-finite angle reached the core (NaN or infinite input).
    InvalidAngle(&'static str),
    /// Latitude at the equator or a pole makes the Vertex cotangent
    /// term unusable.
    DegenerateGeometry(&'static str),
    /// A derived point was requested without its required inputs
    /// (e.g. Fortune without Sun and Moon longitudes).
    MissingDependency(&'static str),
    /// The external ephemeris provider failed; the message names the
    /// failing call. Never retried here.
    Provider(String),
    /// A failure tagged with the chart point it belongs to.
    Point {
        name: String,
        error: Box<ChartError>,
    },
}

impl ChartError {
    /// Wrap an error with the name of the point it occurred on.
    pub fn for_point(name: &str, error: ChartError) -> Self {
        Self::Point {
            name: name.to_string(),
            error: Box::new(error),
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAngle(msg) => write!(f, "invalid angle: {msg}"),
            Self::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {msg}"),
            Self::MissingDependency(msg) => write!(f, "missing dependency: {msg}"),
            Self::Provider(msg) => write!(f, "provider failure: {msg}"),
            Self::Point { name, error } => write!(f, "point {name}: {error}"),
        }
    }
}

impl Error for ChartError {}
