#![allow(dead_code)]

use hifitime::{Epoch, Unit};
use nalgebra::Vector3;
use passwatch::constants::{Degree, Radian};
use passwatch::observers::Observer;
use passwatch::passes::scanner::PassScanner;
use passwatch::passes::Pass;
use passwatch::propagator::SatelliteState;
use passwatch::scan_config::ScanConfig;
use passwatch::sun::ephemeris::sun_position;
use passwatch::topocentric::LookAngle;
use tracing_subscriber::EnvFilter;

pub const STEP: f64 = 20.0;

/// Earth gravitational parameter, km³/s².
pub const GM_EARTH: f64 = 398_600.4418;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn t0() -> Epoch {
    Epoch::from_gregorian_utc_hms(2025, 1, 10, 18, 0, 0)
}

/// Index of the sample taken at `epoch` in a replay scan starting at [`t0`].
pub fn sample_index(epoch: &Epoch) -> usize {
    ((*epoch - t0()).to_seconds() / STEP).round() as usize
}

/// Propagator placing the satellite either on the sunward side of the Earth (sunlit) or right
/// behind it (in the shadow). `None` entries are propagation gaps.
pub fn lit_source(sunlit: Vec<Option<bool>>) -> impl Fn(&Epoch) -> Option<SatelliteState> {
    move |epoch: &Epoch| {
        sunlit.get(sample_index(epoch)).copied().flatten().map(|lit| {
            let sun = sun_position(epoch).normalize() * 7000.0;
            SatelliteState::from_position(if lit { sun } else { -sun })
        })
    }
}

/// Scanner replaying an elevation profile, one value per sample.
///
/// The sample index travels to the look-angle closure through the sidereal angle. The azimuth of
/// sample `i` is `10·i` degrees, the Sun is at −30° on `dark` samples and +10° otherwise.
pub fn replay_scanner(
    elevations: Vec<Degree>,
    dark: Vec<bool>,
) -> PassScanner<
    impl Fn(&Epoch) -> Radian,
    impl Fn(&Observer, &Vector3<f64>, Radian) -> LookAngle,
    impl Fn(&Epoch, Degree, Degree) -> Degree,
> {
    let samples = elevations.len();
    PassScanner::new(
        |epoch: &Epoch| sample_index(epoch) as f64,
        move |_: &Observer, _: &Vector3<f64>, index: Radian| {
            let elevation = elevations.get(index as usize).copied().unwrap_or(-90.0);
            LookAngle::new(10.0 * index, elevation)
        },
        move |epoch: &Epoch, _: Degree, _: Degree| {
            if dark.get(sample_index(epoch)).copied().unwrap_or(false) {
                -30.0
            } else {
                10.0
            }
        },
    )
    .with_config(
        ScanConfig::new((STEP * samples as f64) * Unit::Second, STEP * Unit::Second).unwrap(),
    )
}

/// Circular orbit propagated analytically from its ascending node at `epoch0`.
pub fn circular_orbit(
    radius: f64,
    inclination: Degree,
    ascending_node: Degree,
    epoch0: Epoch,
) -> impl Fn(&Epoch) -> Option<SatelliteState> {
    let mean_motion = (GM_EARTH / radius.powi(3)).sqrt();
    let (sin_i, cos_i) = inclination.to_radians().sin_cos();
    let (sin_o, cos_o) = ascending_node.to_radians().sin_cos();

    move |epoch: &Epoch| {
        let u = mean_motion * (*epoch - epoch0).to_seconds();
        let (sin_u, cos_u) = u.sin_cos();
        let (x, y, z) = (cos_u, sin_u * cos_i, sin_u * sin_i);
        let position = Vector3::new(x * cos_o - y * sin_o, x * sin_o + y * cos_o, z) * radius;

        let speed = radius * mean_motion;
        let (vx, vy, vz) = (-sin_u, cos_u * cos_i, cos_u * sin_i);
        let velocity = Vector3::new(vx * cos_o - vy * sin_o, vx * sin_o + vy * cos_o, vz) * speed;

        Some(SatelliteState::new(position, velocity))
    }
}

/// Checks every structural property a finalized pass list must satisfy.
pub fn assert_pass_invariants(passes: &[Pass]) {
    for pair in passes.windows(2) {
        assert!(pair[0].start < pair[1].start, "passes out of order");
        assert!(pair[0].end <= pair[1].start, "overlapping passes");
    }

    for pass in passes {
        assert!(pass.start <= pass.peak_time && pass.peak_time <= pass.end);
        assert_eq!(pass.duration, (pass.end - pass.start).to_seconds());
        assert!(pass.score <= 100);
        for azimuth in [pass.start_azimuth, pass.peak_azimuth, pass.end_azimuth] {
            assert!((0.0..360.0).contains(&azimuth), "azimuth {azimuth}");
        }

        assert_eq!(pass.visible, !pass.visible_segments.is_empty());
        for segment in &pass.visible_segments {
            let end = segment.end.expect("segment left open");
            assert!(pass.start <= segment.start && segment.start <= end && end <= pass.end);
        }
        for pair in pass.visible_segments.windows(2) {
            let previous_end = pair[0].end.unwrap();
            assert!(previous_end <= pair[1].start, "overlapping segments");
        }
    }
}
