//! Zodiac sign classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees
//! each, starting from Aries at 0 degrees. Classification is a pure
//! stateless lookup; callers must normalize longitudes to [0, 360)
//! first, and out-of-range input is reported as `None` rather than
//! clamped or wrapped.

use serde::Serialize;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign at a given 0-based index, `None` for index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }

    /// Classify a pre-normalized ecliptic longitude.
    ///
    /// Each sign spans exactly 30 degrees: Aries = [0, 30),
    /// Taurus = [30, 60), etc. The input must already be in [0, 360);
    /// anything outside (including NaN) yields `None`.
    pub fn from_longitude(longitude_deg: f64) -> Option<Self> {
        if !(0.0..360.0).contains(&longitude_deg) {
            return None;
        }
        Self::from_index((longitude_deg / 30.0).floor() as u8)
    }
}
