//! # Constants and type definitions for Passwatch
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `passwatch` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants (AU, Earth radii, WGS84 flattening)
//! - Time constants (J2000.0 epoch, Julian century, seconds per day)
//! - Default scan parameters (72 h window, 20 s step) and the civil-twilight threshold
//! - Unit type aliases used across the crate
//!
//! Distances are in **kilometers** everywhere in this crate, angles exchanged through public
//! APIs are in **degrees** unless the type alias says [`Radian`].

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// MJD epoch of J2000.0
pub const T2000: f64 = 51544.5;

/// Earth mean radius in kilometers, used as the radius of the shadow cylinder
pub const EARTH_MEAN_RADIUS: Kilometer = 6371.0;

/// Earth equatorial radius in kilometers (WGS84)
pub const EARTH_MAJOR_AXIS: Kilometer = 6378.137;

/// Earth flattening (WGS84)
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// First eccentricity squared of the WGS84 ellipsoid
pub const EARTH_ECC2: f64 = EARTH_FLATTENING * (2.0 - EARTH_FLATTENING);

/// Sun altitude below which the sky counts as dark (end of civil twilight)
pub const CIVIL_TWILIGHT: Degree = -6.0;

/// Default length of the scan window, in hours
pub const DEFAULT_WINDOW_HOURS: f64 = 72.0;

/// Default sampling step of the scan, in seconds
pub const DEFAULT_STEP_SECONDS: Second = 20.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in seconds
pub type Second = f64;
/// Julian Date (days, UTC)
pub type JulianDay = f64;
