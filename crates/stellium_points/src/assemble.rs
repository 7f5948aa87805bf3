//! Point assembly: longitude → normalized, classified, formatted record.

use serde::Serialize;
use stellium_angles::{ZodiacSign, deg_to_dms, normalize_360};

use crate::error::ChartError;

/// Fully rendered chart point.
///
/// Built once per point, never mutated. Serializes to the wire shape
/// the calling service exposes (one record per point name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    /// Zodiac sign containing the longitude.
    pub sign: ZodiacSign,
    /// DMS of the longitude within its sign (longitude mod 30).
    pub dms_in_sign: String,
    /// DMS of the full longitude.
    pub dms_full: String,
    /// Normalized decimal longitude, [0, 360).
    pub longitude_deg: f64,
}

/// Normalize, classify, and format one chart point.
///
/// `name` tags any failure with the offending point, so FailFast
/// callers see which entry broke the assembly.
pub fn assemble_point(name: &str, raw_longitude_deg: f64) -> Result<PointRecord, ChartError> {
    if !raw_longitude_deg.is_finite() {
        return Err(ChartError::for_point(
            name,
            ChartError::InvalidAngle("longitude must be finite"),
        ));
    }
    let longitude_deg = normalize_360(raw_longitude_deg);
    let sign = ZodiacSign::from_longitude(longitude_deg).ok_or_else(|| {
        ChartError::for_point(name, ChartError::InvalidAngle("longitude escaped normalization"))
    })?;
    let in_sign = longitude_deg - sign.index() as f64 * 30.0;

    Ok(PointRecord {
        sign,
        dms_in_sign: deg_to_dms(in_sign).to_string(),
        dms_full: deg_to_dms(longitude_deg).to_string(),
        longitude_deg,
    })
}
