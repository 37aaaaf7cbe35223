//! # Sun geometry
//!
//! Two independent Sun computations feed the pass scanner, and they are kept apart on purpose:
//! they live in different frames and need different precision.
//!
//! - [`ephemeris`] – Sun position vector in the Earth-centered **inertial** frame from a
//!   closed-form low-precision solar model. Used by the shadow test.
//! - [`illumination`] – Binary sunlit / shadowed classification of a satellite against a
//!   **cylindrical** Earth shadow (umbra only).
//! - [`altitude`] – The [`SolarAltitude`](crate::sun::altitude::SolarAltitude) seam giving the
//!   **observer-local** Sun elevation used for the civil-twilight darkness test, plus a default
//!   implementation.
//!
//! ## Precision
//!
//! The ephemeris is good to roughly 0.01° in ecliptic longitude. That is plenty for a sunlit /
//! shadow decision and for a twilight threshold, and nowhere near astrometric quality.
pub mod altitude;
pub mod ephemeris;
pub mod illumination;
