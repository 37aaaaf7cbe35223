//! # Ground observer
//!
//! This module defines [`Observer`](crate::observers::Observer), the immutable ground site a pass
//! scan is computed for, and the geometry derived from it.
//!
//! ## Frames & conventions
//!
//! - Latitude / longitude: **geodetic degrees** on the WGS84 ellipsoid, longitude east positive.
//! - Height: **kilometers** above the ellipsoid.
//! - [`Observer::ecef_position`](crate::observers::Observer::ecef_position): Earth-fixed Cartesian
//!   position in **kilometers**.
//!
//! ## Validation
//!
//! [`Observer::new`](crate::observers::Observer::new) is the caller-side validation of the site
//! coordinates. The pass scanner itself does not re-validate: an `Observer` assembled field by field
//! is taken at face value.
//!
//! ## See also
//! ------------
//! * [`crate::topocentric::SezTransform`] – Uses the ECEF position to build look angles.
//! * [`crate::passes::scanner::PassScanner`] – Consumes an `Observer` for each scan.
use nalgebra::Vector3;

use crate::constants::{Degree, Kilometer, EARTH_ECC2, EARTH_MAJOR_AXIS};
use crate::passwatch_errors::PasswatchError;

/// Geodetic ground site.
///
/// Units
/// -----
/// * `latitude`: degrees, `[-90, 90]`.
/// * `longitude`: degrees east of Greenwich, `[-180, 180]`.
/// * `height`: kilometers above the WGS84 ellipsoid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Observer {
    /// Geodetic latitude in **degrees**.
    pub latitude: Degree,

    /// Geodetic longitude in **degrees** east of Greenwich.
    pub longitude: Degree,

    /// Height above the ellipsoid in **kilometers**.
    pub height: Kilometer,

    /// Optional human-readable site name.
    pub name: Option<String>,
}

impl Observer {
    /// Build a validated observer.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in degrees.
    /// * `longitude`: geodetic longitude in degrees (east positive).
    /// * `height`: height above the ellipsoid in kilometers.
    /// * `name`: optional site label.
    ///
    /// Return
    /// ----------
    /// * The [`Observer`], or a [`PasswatchError`] naming the offending coordinate.
    ///
    /// Errors
    /// ----------
    /// * [`PasswatchError::InvalidLatitude`] if `latitude` is NaN or outside `[-90, 90]`.
    /// * [`PasswatchError::InvalidLongitude`] if `longitude` is NaN or outside `[-180, 180]`.
    /// * [`PasswatchError::InvalidObserverHeight`] if `height` is not finite.
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        height: Kilometer,
        name: Option<String>,
    ) -> Result<Self, PasswatchError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PasswatchError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PasswatchError::InvalidLongitude(longitude));
        }
        if !height.is_finite() {
            return Err(PasswatchError::InvalidObserverHeight(height));
        }

        Ok(Observer {
            latitude,
            longitude,
            height,
            name,
        })
    }

    /// Observer at sea level, without a name.
    pub fn at_sea_level(latitude: Degree, longitude: Degree) -> Result<Self, PasswatchError> {
        Observer::new(latitude, longitude, 0.0, None)
    }

    /// Earth-fixed (ECEF) position of the site on the WGS84 ellipsoid, in kilometers.
    pub fn ecef_position(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.longitude.to_radians().sin_cos();

        // prime vertical radius of curvature
        let n = EARTH_MAJOR_AXIS / (1.0 - EARTH_ECC2 * sin_lat * sin_lat).sqrt();

        Vector3::new(
            (n + self.height) * cos_lat * cos_lon,
            (n + self.height) * cos_lat * sin_lon,
            (n * (1.0 - EARTH_ECC2) + self.height) * sin_lat,
        )
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lat_hemi = if self.latitude < 0.0 { 'S' } else { 'N' };
        let lon_hemi = if self.longitude < 0.0 { 'W' } else { 'E' };
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(
            f,
            "({:.4}°{lat_hemi}, {:.4}°{lon_hemi}, {:.3} km)",
            self.latitude.abs(),
            self.longitude.abs(),
            self.height
        )
    }
}
