use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::{Degree, Radian, AU, RADSEC};
use crate::time::julian_centuries;

/// Geometric solar coordinates in the mean ecliptic frame of date.
///
/// Units
/// -----
/// * `longitude`: true ecliptic longitude in degrees, `[0, 360)`.
/// * `distance`: Sun–Earth distance in astronomical units.
/// * `obliquity`: mean obliquity of the ecliptic in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    pub longitude: Degree,
    pub distance: f64,
    pub obliquity: Radian,
}

/// Mean obliquity of the ecliptic (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// Cubic polynomial evaluated with Horner's method, coefficients in arcseconds:
///
/// ```text
/// ε = ((ob3 * t + ob2) * t + ob1) * t + ob0;
/// ```
pub fn mean_obliquity(t: f64) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.00059 * RADSEC;
    let ob3 = 0.001813 * RADSEC;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Low-precision solar coordinates for a time in Julian centuries since J2000.0.
///
/// The model is the classical closed form:
///
/// 1. mean longitude `L0` and mean anomaly `M` as quadratics in `t`, reduced mod 360°,
/// 2. equation of center `C` as a three-term sine series in `M`,
/// 3. true longitude `L0 + C` and true anomaly `ν = M + C`,
/// 4. orbital eccentricity as a quadratic in `t`, distance `R = a(1 - e²) / (1 + e·cos ν)`.
///
/// Arguments
/// -----------------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ----------
/// * The [`SolarCoordinates`] at `t`.
pub fn solar_coordinates(t: f64) -> SolarCoordinates {
    let l0 = (280.46646 + t * (36_000.76983 + t * 0.000_3032)).rem_euclid(360.0);
    let m = (357.52911 + t * (35_999.05029 - t * 0.000_1537)).rem_euclid(360.0);
    let m_rad = m.to_radians();

    let c = (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m_rad.sin()
        + (0.019_993 - t * 0.000_101) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let longitude = (l0 + c).rem_euclid(360.0);
    let true_anomaly = (m + c).rem_euclid(360.0).to_radians();

    let e = 0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7);
    let distance = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SolarCoordinates {
        longitude,
        distance,
        obliquity: mean_obliquity(t),
    }
}

/// Sun position vector in the Earth-centered inertial frame, in kilometers.
///
/// The ecliptic longitude / distance pair from [`solar_coordinates`] is rotated about the
/// x-axis by the obliquity (ecliptic latitude of the Sun taken as zero). The result is
/// recomputed on every call; nothing is cached.
///
/// Arguments
/// -----------------
/// * `epoch`: the instant (converted to a UTC Julian day internally).
///
/// Return
/// ----------
/// * `(x, y, z)` in km, equatorial inertial frame.
///
/// See also
/// ------------
/// * [`crate::sun::illumination::is_sunlit`] – Main consumer of this vector.
pub fn sun_position(epoch: &Epoch) -> Vector3<f64> {
    let coords = solar_coordinates(julian_centuries(epoch));

    let r = coords.distance * AU;
    let (sin_lon, cos_lon) = coords.longitude.to_radians().sin_cos();
    let (sin_eps, cos_eps) = coords.obliquity.sin_cos();

    Vector3::new(
        r * cos_lon,
        r * cos_eps * sin_lon,
        r * sin_eps * sin_lon,
    )
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use crate::constants::RADEG;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_obliquity_j2000() {
        assert_abs_diff_eq!(mean_obliquity(0.0) / RADEG, 23.439_291, epsilon = 1e-6);
        // decreases by ~47" per century
        assert!(mean_obliquity(1.0) < mean_obliquity(0.0));
    }

    #[test]
    fn test_solar_coordinates_j2000() {
        let coords = solar_coordinates(0.0);
        assert_abs_diff_eq!(coords.longitude, 280.37, epsilon = 0.02);
        assert_abs_diff_eq!(coords.distance, 0.98333, epsilon = 1e-4);
    }

    #[test]
    fn test_sun_near_march_equinox() {
        // 2024-03-20 03:06 UTC
        let epoch = Epoch::from_gregorian_utc_hms(2024, 3, 20, 3, 6, 0);
        let sun = sun_position(&epoch);
        let declination = (sun.z / sun.norm()).asin().to_degrees();
        let right_ascension = sun.y.atan2(sun.x).to_degrees();
        assert_abs_diff_eq!(declination, 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(right_ascension, 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(sun.norm() / AU, 0.996, epsilon = 0.002);
    }

    #[test]
    fn test_sun_near_june_solstice() {
        // 2024-06-20 20:51 UTC
        let epoch = Epoch::from_gregorian_utc_hms(2024, 6, 20, 20, 51, 0);
        let sun = sun_position(&epoch);
        let declination = (sun.z / sun.norm()).asin().to_degrees();
        assert_abs_diff_eq!(declination, 23.44, epsilon = 0.05);
        assert_abs_diff_eq!(sun.x / sun.norm(), 0.0, epsilon = 2e-3);
        assert!(sun.y > 0.0);
    }

    #[test]
    fn test_sun_position_is_deterministic() {
        let epoch = Epoch::from_gregorian_utc_hms(2031, 11, 2, 17, 45, 12);
        assert_eq!(sun_position(&epoch), sun_position(&epoch));
    }
}
