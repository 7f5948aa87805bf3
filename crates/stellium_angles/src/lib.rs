//! Pure angle arithmetic for ecliptic longitudes.
//!
//! This crate provides:
//! - Modulo-360 / modulo-24 normalization
//! - Degrees-minutes-seconds decomposition and formatting
//! - Zodiac sign classification (12 signs of 30 degrees each)
//!
//! Everything here is pure math: finite floats in, values out. Input
//! validation (rejecting NaN/infinity) is the caller's concern.

pub mod dms;
pub mod normalize;
pub mod zodiac;

pub use dms::{Dms, deg_to_dms, dms_to_deg};
pub use normalize::{normalize_360, normalize_hours_24};
pub use zodiac::{ALL_SIGNS, ZodiacSign};
