use std::env;

use hifitime::{Epoch, Unit};
use nalgebra::Vector3;
use passwatch::conversion::{format_azimuth, format_duration};
use passwatch::ground_track::{sample_ground_track, segment_track_points};
use passwatch::passes::display::PassTableExt;
use passwatch::passes::{describe_visibility, rank_passes, visible_passes};
use passwatch::time::MeanSiderealTime;
use passwatch::{Observer, PassScanner, PasswatchError, SatelliteState, ScanConfig};
use tracing_subscriber::EnvFilter;

const GM_EARTH: f64 = 398_600.4418;

/// Stand-in propagator: circular orbit of an ISS-like satellite, ascending node crossed at `epoch0`.
fn iss_like_orbit(epoch0: Epoch) -> impl Fn(&Epoch) -> Option<SatelliteState> {
    let radius: f64 = 6_778.0;
    let mean_motion = (GM_EARTH / radius.powi(3)).sqrt();
    let (sin_i, cos_i) = 51.64_f64.to_radians().sin_cos();

    move |epoch: &Epoch| {
        let (sin_u, cos_u) = (mean_motion * (*epoch - epoch0).to_seconds()).sin_cos();
        Some(SatelliteState::from_position(
            Vector3::new(cos_u, sin_u * cos_i, sin_u * sin_i) * radius,
        ))
    }
}

/// Print the predicted passes of the demo satellite over a site.
///
/// Usage:
///   pass_report [LAT] [LON] [HEIGHT_KM]
/// Example:
///   RUST_LOG=passwatch=debug cargo run --example pass_report -- 48.85 2.35 0.035
fn main() -> Result<(), PasswatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<f64> = env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let observer = Observer::new(
        args.first().copied().unwrap_or(48.85),
        args.get(1).copied().unwrap_or(2.35),
        args.get(2).copied().unwrap_or(0.035),
        Some("Site".into()),
    )?;

    let start = Epoch::from_gregorian_utc_hms(2025, 10, 1, 0, 0, 0);
    let satellite = iss_like_orbit(start);

    let scanner = PassScanner::with_defaults();
    let passes = scanner.compute_passes(&satellite, &observer, start);
    println!(
        "{} passes over {observer} in the next {} h",
        passes.len(),
        scanner.config().window_seconds() / 3600.0
    );
    println!("{}", passes.table());

    if let Some(best) = rank_passes(&passes).first() {
        println!(
            "Best pass: {} at {:.1}°, {}, rising {} / setting {}, {}",
            best.peak_time,
            best.max_elevation,
            format_duration(best.duration),
            format_azimuth(best.start_azimuth),
            format_azimuth(best.end_azimuth),
            describe_visibility(best)
        );
    }
    println!("{} naked-eye passes", visible_passes(&passes).count());

    let track_config = ScanConfig::new(3 * Unit::Hour, 30 * Unit::Second)?;
    let track = sample_ground_track(&satellite, &MeanSiderealTime, start, &track_config);
    let segments = segment_track_points(&track);
    println!(
        "Ground track: {} points in {} map segments over {} h",
        track.len(),
        segments.len(),
        track_config.window_seconds() / 3600.0
    );

    Ok(())
}
