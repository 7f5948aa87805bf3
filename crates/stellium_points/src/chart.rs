//! Chart computation: one call from observation context to rendered
//! points.
//!
//! Shared quantities (sidereal time, obliquity) are computed once and
//! fed to every formula. Per-point failures are handled according to
//! the caller's [`AssemblyPolicy`]; failures of the shared quantities
//! fail the whole call since nothing downstream is computable.

use std::collections::BTreeMap;

use crate::assemble::{PointRecord, assemble_point};
use crate::context::{AssemblyPolicy, ChartOutcome, ObservationContext};
use crate::derive::{mc_longitude_deg, vertex_longitude_deg};
use crate::error::ChartError;
use crate::fortune::{fortune_longitude, is_day_chart};
use crate::provider::{EphemerisProvider, HouseSystem};
use crate::sidereal::{local_sidereal_hours, ramc_deg};

/// Ascendant point name.
pub const POINT_AC: &str = "AC";
/// Midheaven point name.
pub const POINT_MC: &str = "MC";
/// Vertex point name.
pub const POINT_VERTEX: &str = "Vertex";
/// Part of Fortune point name.
pub const POINT_FORTUNE: &str = "Fortune";

/// Body names the Fortune formula requires in the raw-longitude map.
const BODY_SUN: &str = "sun";
const BODY_MOON: &str = "moon";

/// Record one point according to the assembly policy.
fn record(
    policy: AssemblyPolicy,
    points: &mut BTreeMap<String, PointRecord>,
    failures: &mut BTreeMap<String, ChartError>,
    name: &str,
    result: Result<PointRecord, ChartError>,
) -> Result<(), ChartError> {
    match result {
        Ok(rec) => {
            points.insert(name.to_string(), rec);
            Ok(())
        }
        Err(e) => match policy {
            AssemblyPolicy::FailFast => Err(e),
            AssemblyPolicy::Partial => {
                failures.insert(name.to_string(), e);
                Ok(())
            }
        },
    }
}

/// Compute every chart point for one observation.
///
/// Output is keyed by point name: each raw body from the context plus
/// `AC`, `MC`, `Vertex`, and `Fortune`. Deterministic: the same context
/// and provider always produce an identical outcome.
pub fn compute_chart_points(
    provider: &dyn EphemerisProvider,
    ctx: &ObservationContext,
    house_system: HouseSystem,
    policy: AssemblyPolicy,
) -> Result<ChartOutcome, ChartError> {
    ctx.validate()?;

    // Shared quantities, computed once.
    let lst = local_sidereal_hours(provider, ctx.jd, ctx.longitude_deg)?;
    let ramc = ramc_deg(lst);
    let eps = provider.obliquity_rad(ctx.jd)?;

    let mut points = BTreeMap::new();
    let mut failures = BTreeMap::new();

    // Raw planetary longitudes pass straight through to assembly.
    for (name, &lon) in &ctx.raw_longitudes {
        record(policy, &mut points, &mut failures, name, assemble_point(name, lon))?;
    }

    // Ascendant comes from the house-system computation; the core only
    // normalizes and classifies it.
    let ascendant = match provider.houses(ctx.jd, ctx.latitude_deg, ctx.longitude_deg, house_system)
    {
        Ok(houses) => {
            record(
                policy,
                &mut points,
                &mut failures,
                POINT_AC,
                assemble_point(POINT_AC, houses.ascendant_deg),
            )?;
            Some(houses.ascendant_deg)
        }
        Err(e) => {
            record(
                policy,
                &mut points,
                &mut failures,
                POINT_AC,
                Err(ChartError::for_point(POINT_AC, e)),
            )?;
            None
        }
    };

    // MC and Vertex always come from the canonical deriver.
    record(
        policy,
        &mut points,
        &mut failures,
        POINT_MC,
        assemble_point(POINT_MC, mc_longitude_deg(ramc, eps)),
    )?;

    record(
        policy,
        &mut points,
        &mut failures,
        POINT_VERTEX,
        vertex_longitude_deg(ramc, eps, ctx.latitude_deg)
            .map_err(|e| ChartError::for_point(POINT_VERTEX, e))
            .and_then(|v| assemble_point(POINT_VERTEX, v)),
    )?;

    // Fortune needs AC, Sun, and Moon.
    let fortune = match (
        ascendant,
        ctx.raw_longitudes.get(BODY_SUN),
        ctx.raw_longitudes.get(BODY_MOON),
    ) {
        (Some(asc), Some(&sun), Some(&moon)) => {
            let day = is_day_chart(sun, asc);
            assemble_point(POINT_FORTUNE, fortune_longitude(asc, sun, moon, day))
        }
        _ => Err(ChartError::for_point(
            POINT_FORTUNE,
            ChartError::MissingDependency("Fortune requires AC, sun, and moon"),
        )),
    };
    record(policy, &mut points, &mut failures, POINT_FORTUNE, fortune)?;

    Ok(ChartOutcome { points, failures })
}
