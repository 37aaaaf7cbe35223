use nalgebra::Vector3;

use crate::constants::{Kilometer, EARTH_MEAN_RADIUS};

/// Whether a satellite is lit by the Sun, using a cylindrical Earth shadow.
///
/// The shadow is an infinite cylinder of radius [`EARTH_MEAN_RADIUS`] extending from the Earth
/// away from the Sun. No penumbra, no oblateness.
///
/// Arguments
/// -----------------
/// * `satellite`: satellite position, km, Earth-centered inertial frame.
/// * `sun`: Sun position at the same instant, same frame (see
///   [`sun_position`](crate::sun::ephemeris::sun_position)).
///
/// Return
/// ----------
/// * `true` if the satellite is sunlit, `false` if it sits inside the shadow cylinder.
pub fn is_sunlit(satellite: &Vector3<f64>, sun: &Vector3<f64>) -> bool {
    // sun-facing hemisphere: the Earth cannot be in the way
    if satellite.dot(sun) > 0.0 {
        return true;
    }

    shadow_axis_distance(satellite, sun) > EARTH_MEAN_RADIUS
}

/// Distance from the satellite to the Earth–Sun line, in kilometers.
fn shadow_axis_distance(satellite: &Vector3<f64>, sun: &Vector3<f64>) -> Kilometer {
    let sun_norm = sun.norm();
    if sun_norm == 0.0 {
        return satellite.norm();
    }
    let sun_dir = sun / sun_norm;
    let parallel = satellite.dot(&sun_dir);
    (satellite - parallel * sun_dir).norm()
}

#[cfg(test)]
mod illumination_test {
    use super::*;
    use crate::constants::AU;

    #[test]
    fn test_sun_facing_side_is_always_lit() {
        let sun = Vector3::new(AU, 0.0, 0.0);
        for &r in &[1.0, 100.0, 6371.0, 7000.0, 42_164.0] {
            assert!(is_sunlit(&Vector3::new(r, 0.0, 0.0), &sun));
            assert!(is_sunlit(&Vector3::new(r * 0.1, r, -r), &sun));
        }
    }

    #[test]
    fn test_behind_earth_is_shadowed() {
        let sun = Vector3::new(AU, 0.0, 0.0);
        assert!(!is_sunlit(&Vector3::new(-6771.0, 0.0, 0.0), &sun));
        assert!(!is_sunlit(&Vector3::new(-42_164.0, 3000.0, 3000.0), &sun));
    }

    #[test]
    fn test_night_side_outside_cylinder_is_lit() {
        let sun = Vector3::new(0.0, AU, 0.0);
        // behind the Earth but 7000 km off the shadow axis
        assert!(is_sunlit(&Vector3::new(7000.0, -500.0, 0.0), &sun));
        assert!(is_sunlit(&Vector3::new(0.0, -20_000.0, 6400.0), &sun));
        assert!(!is_sunlit(&Vector3::new(0.0, -20_000.0, 6300.0), &sun));
    }

    #[test]
    fn test_terminator_plane() {
        // dot product exactly zero falls through to the cylinder test
        let sun = Vector3::new(AU, 0.0, 0.0);
        assert!(is_sunlit(&Vector3::new(0.0, 6771.0, 0.0), &sun));
        assert!(!is_sunlit(&Vector3::new(0.0, 6000.0, 0.0), &sun));
    }
}
