//! Chart-point derivation engine.
//!
//! Turns {Julian Day, observer location, raw planetary longitudes}
//! into rendered chart points: the supplied bodies plus Ascendant,
//! Midheaven, Vertex, and Part of Fortune, each normalized, classified
//! into a zodiac sign, and formatted as DMS.
//!
//! The ephemeris boundary is the injected [`EphemerisProvider`] trait;
//! [`StandardEphemeris`] implements everything except planetary
//! positions from public IAU formulas. The engine itself is purely
//! functional — no cross-call state — so independent requests can run
//! concurrently without locking.

pub mod assemble;
pub mod chart;
pub mod context;
pub mod derive;
pub mod error;
pub mod fortune;
pub mod provider;
pub mod sidereal;
pub mod standard;

pub use assemble::{PointRecord, assemble_point};
pub use chart::{POINT_AC, POINT_FORTUNE, POINT_MC, POINT_VERTEX, compute_chart_points};
pub use context::{AssemblyPolicy, ChartOutcome, ObservationContext};
pub use derive::{mc_longitude_deg, vertex_longitude_deg};
pub use error::ChartError;
pub use fortune::{fortune_longitude, is_day_chart};
pub use provider::{EphemerisProvider, HouseAngles, HouseSystem};
pub use sidereal::{local_sidereal_hours, ramc_deg};
pub use standard::StandardEphemeris;
