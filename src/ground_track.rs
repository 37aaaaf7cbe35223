//! # Ground track
//!
//! Sub-satellite points over time, and their segmentation into polylines that can be drawn on
//! an equirectangular map.
//!
//! A track crossing the antimeridian jumps from about +180° to about −180° between two samples.
//! Drawn naively, that jump becomes a line across the whole map. [`segment_ground_track`] cuts
//! the track wherever two consecutive longitudes differ by more than 180°.
//!
//! ```text
//!  lon:  170  175  179 | -178 -173 -168
//!        └─ segment 1 ─┘ └─ segment 2 ─┘
//! ```
//!
//! Concatenating the segments always gives back the input, in order.
use hifitime::{Duration, Epoch};
use nalgebra::Vector3;

use crate::constants::{Degree, EARTH_ECC2, EARTH_MAJOR_AXIS};
use crate::conversion::normalize_longitude;
use crate::propagator::StateSource;
use crate::scan_config::ScanConfig;
use crate::time::SiderealTime;
use crate::topocentric::eci_to_ecf;

/// Geodetic `(latitude, longitude)` pair in degrees.
pub type LatLon = (Degree, Degree);

/// Sample of the sub-satellite trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTrackPoint {
    pub latitude: Degree,
    pub longitude: Degree,
    pub time: Epoch,
}

impl GroundTrackPoint {
    pub fn lat_lon(&self) -> LatLon {
        (self.latitude, self.longitude)
    }
}

/// Split a chronological `(lat, lon)` sequence at antimeridian crossings.
///
/// Arguments
/// -----------------
/// * `points`: samples in chronological order.
///
/// Return
/// ----------
/// * The polyline segments. A jump `|lon[i] - lon[i-1]| > 180` starts a new segment at point
///   `i`; an empty or single-point input yields one segment holding that input.
pub fn segment_ground_track(points: &[LatLon]) -> Vec<Vec<LatLon>> {
    split_at_antimeridian(points, |&(_, lon)| lon)
}

/// Same as [`segment_ground_track`], keeping the timestamps.
pub fn segment_track_points(points: &[GroundTrackPoint]) -> Vec<Vec<GroundTrackPoint>> {
    split_at_antimeridian(points, |p| p.longitude)
}

fn split_at_antimeridian<P, F>(points: &[P], longitude: F) -> Vec<Vec<P>>
where
    P: Clone,
    F: Fn(&P) -> Degree,
{
    let mut segments = Vec::new();
    let mut current: Vec<P> = Vec::new();
    let mut previous: Option<Degree> = None;

    for point in points {
        let lon = longitude(point);
        if previous.is_some_and(|prev| (lon - prev).abs() > 180.0) {
            segments.push(std::mem::take(&mut current));
        }
        current.push(point.clone());
        previous = Some(lon);
    }

    segments.push(current);
    segments
}

/// Geodetic latitude / longitude (WGS84) below an Earth-fixed position.
///
/// Arguments
/// -----------------
/// * `ecf`: position in kilometers, Earth-fixed frame.
///
/// Return
/// ----------
/// * `(latitude, longitude)` in degrees, longitude in `[-180, 180)`.
pub fn subpoint(ecf: &Vector3<f64>) -> LatLon {
    let p = ecf.x.hypot(ecf.y);
    let longitude = normalize_longitude(ecf.y.atan2(ecf.x).to_degrees());

    // fixed-point iteration on the geodetic latitude, converges in a few steps for LEO to GEO
    let mut lat = ecf.z.atan2(p * (1.0 - EARTH_ECC2));
    for _ in 0..5 {
        let sin_lat = lat.sin();
        let n = EARTH_MAJOR_AXIS / (1.0 - EARTH_ECC2 * sin_lat * sin_lat).sqrt();
        lat = (ecf.z + EARTH_ECC2 * n * sin_lat).atan2(p);
    }

    (lat.to_degrees(), longitude)
}

/// Sample the ground track over the window and step of `config`.
///
/// Samples for which the propagator has no state are skipped, as in the pass scanner.
///
/// Arguments
/// -----------------
/// * `source`: the satellite propagator.
/// * `sidereal`: Earth rotation angle provider.
/// * `start`: first sampled instant.
/// * `config`: window and step.
pub fn sample_ground_track<P, T>(
    source: &P,
    sidereal: &T,
    start: Epoch,
    config: &ScanConfig,
) -> Vec<GroundTrackPoint>
where
    P: StateSource + ?Sized,
    T: SiderealTime + ?Sized,
{
    let step = config.step_seconds();
    (0..config.sample_count())
        .map(|i| start + Duration::from_seconds(step * i as f64))
        .filter_map(|time| {
            let state = source.state_at(&time)?;
            let ecf = eci_to_ecf(&state.position, sidereal.sidereal_angle(&time));
            let (latitude, longitude) = subpoint(&ecf);
            Some(GroundTrackPoint {
                latitude,
                longitude,
                time,
            })
        })
        .collect()
}
