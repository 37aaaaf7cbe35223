//! # Topocentric look angles
//!
//! Conversion of an inertial target position into the azimuth / elevation seen by a ground
//! [`Observer`].
//!
//! The pass scanner depends only on the [`LookAngleTransform`] trait. This module ships the
//! reference [`SezTransform`] (rotation by sidereal time, then projection on the local
//! South-East-Zenith basis), and any `Fn(&Observer, &Vector3<f64>, Radian) -> LookAngle`
//! closure can stand in for it, e.g. to replay recorded look angles in tests.
//!
//! ```text
//! ECI --(Rz(θ), θ = GMST)--> ECF --(- observer ECEF)--> range --(SEZ basis)--> (az, el)
//! ```
use nalgebra::Vector3;

use crate::constants::{Degree, Radian};
use crate::conversion::normalize_azimuth;
use crate::observers::Observer;

/// Azimuth / elevation of a target as seen from an observer.
///
/// Units
/// -----
/// * `azimuth`: degrees clockwise from north. Transforms are expected to return `[0, 360)`, the
///   scanner normalizes again anyway.
/// * `elevation`: degrees above the horizon, raw geometric value (negative below the horizon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngle {
    pub azimuth: Degree,
    pub elevation: Degree,
}

impl LookAngle {
    pub fn new(azimuth: Degree, elevation: Degree) -> Self {
        LookAngle { azimuth, elevation }
    }

    /// `true` when the target is strictly above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Observer-relative transform from an inertial position to look angles.
///
/// Arguments
/// -----------------
/// * `observer`: the ground site.
/// * `position_eci`: target position in kilometers, Earth-centered inertial frame.
/// * `sidereal_angle`: Earth rotation angle at the sample instant, in radians.
pub trait LookAngleTransform {
    fn look_angle(
        &self,
        observer: &Observer,
        position_eci: &Vector3<f64>,
        sidereal_angle: Radian,
    ) -> LookAngle;
}

impl<F> LookAngleTransform for F
where
    F: Fn(&Observer, &Vector3<f64>, Radian) -> LookAngle,
{
    fn look_angle(
        &self,
        observer: &Observer,
        position_eci: &Vector3<f64>,
        sidereal_angle: Radian,
    ) -> LookAngle {
        self(observer, position_eci, sidereal_angle)
    }
}

/// Rotate an Earth-centered inertial vector into the Earth-fixed frame.
///
/// Arguments
/// -----------------
/// * `eci`: vector in the inertial frame.
/// * `sidereal_angle`: rotation angle about the z-axis (GMST), radians.
///
/// Return
/// ----------
/// * The same vector expressed in the Earth-fixed frame.
pub fn eci_to_ecf(eci: &Vector3<f64>, sidereal_angle: Radian) -> Vector3<f64> {
    let (sin_t, cos_t) = sidereal_angle.sin_cos();
    Vector3::new(
        eci.x * cos_t + eci.y * sin_t,
        -eci.x * sin_t + eci.y * cos_t,
        eci.z,
    )
}

/// Reference look-angle transform on the local South-East-Zenith basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SezTransform;

impl LookAngleTransform for SezTransform {
    fn look_angle(
        &self,
        observer: &Observer,
        position_eci: &Vector3<f64>,
        sidereal_angle: Radian,
    ) -> LookAngle {
        let range = eci_to_ecf(position_eci, sidereal_angle) - observer.ecef_position();

        let (sin_lat, cos_lat) = observer.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = observer.longitude.to_radians().sin_cos();

        let south = sin_lat * cos_lon * range.x + sin_lat * sin_lon * range.y - cos_lat * range.z;
        let east = -sin_lon * range.x + cos_lon * range.y;
        let zenith = cos_lat * cos_lon * range.x + cos_lat * sin_lon * range.y + sin_lat * range.z;

        let norm = range.norm();
        let elevation = if norm > 0.0 {
            (zenith / norm).clamp(-1.0, 1.0).asin().to_degrees()
        } else {
            90.0
        };

        LookAngle {
            azimuth: normalize_azimuth(east.atan2(-south).to_degrees()),
            elevation,
        }
    }
}
