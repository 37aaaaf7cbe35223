use hifitime::{Epoch, Unit};
use passwatch::conversion::{compass_point, format_azimuth, format_duration};
use passwatch::ground_track::{sample_ground_track, segment_track_points};
use passwatch::observers::Observer;
use passwatch::passes::display::PassTableExt;
use passwatch::passes::scanner::{compute_passes, PassScanner};
use passwatch::scan_config::ScanConfig;
use passwatch::time::MeanSiderealTime;

mod common;
use common::{assert_pass_invariants, circular_orbit, init_tracing};

fn start() -> Epoch {
    Epoch::from_gregorian_utc_hms(2025, 3, 2, 12, 0, 0)
}

fn grenoble() -> Observer {
    Observer::new(45.19, 5.72, 0.21, Some("Grenoble".into())).unwrap()
}

/// Low Earth orbit at about 400 km with a 51.6° inclination.
fn leo() -> impl Fn(&Epoch) -> Option<passwatch::SatelliteState> {
    circular_orbit(6778.0, 51.6, 120.0, start())
}

#[test]
fn test_leo_passes_over_three_days() {
    init_tracing();
    let source = leo();
    let observer = grenoble();
    let passes = compute_passes(&source, &observer, start());

    assert!(passes.len() >= 6, "only {} passes", passes.len());
    assert!(passes.len() < 60);
    assert_pass_invariants(&passes);

    let scanner = PassScanner::with_defaults();
    let window_end = start() + 72 * Unit::Hour;
    for pass in &passes {
        assert!(pass.max_elevation > 0.0 && pass.max_elevation <= 90.0);
        // no pass of a 400 km orbit lasts longer than a quarter of an hour
        assert!(pass.duration <= 15.0 * 60.0, "duration {}", pass.duration);

        let peak = scanner
            .look_angle_at(&source, &observer, &pass.peak_time)
            .unwrap();
        assert_eq!(peak.elevation, pass.max_elevation);
        assert_eq!(peak.azimuth, pass.peak_azimuth);

        let rise = scanner
            .look_angle_at(&source, &observer, &pass.start)
            .unwrap();
        assert!(rise.elevation > 0.0);
        assert_eq!(rise.azimuth, pass.start_azimuth);

        if pass.start > start() {
            let before = scanner
                .look_angle_at(&source, &observer, &(pass.start - 20 * Unit::Second))
                .unwrap();
            assert!(before.elevation <= 0.0);
        }
        if pass.end < window_end {
            let set = scanner
                .look_angle_at(&source, &observer, &pass.end)
                .unwrap();
            assert!(set.elevation <= 0.0);
            assert_eq!(set.azimuth, pass.end_azimuth);
        }
    }
}

#[test]
fn test_shorter_window_is_a_prefix() {
    let source = leo();
    let observer = grenoble();
    let full = compute_passes(&source, &observer, start());

    let config = ScanConfig::from_json(r#"{"window_hours": 12}"#).unwrap();
    assert_eq!(config.sample_count(), 2160);
    let window_end = start() + config.window();
    let short = PassScanner::with_defaults()
        .with_config(config)
        .compute_passes(&source, &observer, start());

    assert!(!short.is_empty());
    for pass in short.iter().filter(|pass| pass.end < window_end) {
        assert!(full.contains(pass));
    }
}

#[test]
fn test_empty_window() {
    let scanner = PassScanner::with_defaults()
        .with_config(ScanConfig::new(0 * Unit::Second, 20 * Unit::Second).unwrap());
    assert!(scanner
        .compute_passes(&leo(), &grenoble(), start())
        .is_empty());
}

#[test]
fn test_pass_table_rendering() {
    let passes = compute_passes(&leo(), &grenoble(), start());
    let table = passes.table().ranked().to_string();

    assert!(table.contains("Start (UTC)"));
    assert!(table.contains("Brightness"));
    assert_eq!(
        table.lines().filter(|line| line.contains("2025-03-")).count(),
        passes.len()
    );
}

#[test]
fn test_formatting_literals() {
    assert!(format_azimuth(90.0).contains('E'));
    assert_eq!(format_azimuth(90.0), "90° E");
    assert_eq!(compass_point(225.0), "SW");
    assert_eq!(format_duration(45.0), "45s");
    assert_eq!(format_duration(320.0), "5m 20s");
}

#[test]
fn test_leo_ground_track() {
    let config = ScanConfig::new(6 * Unit::Hour, 1 * Unit::Minute).unwrap();
    let track = sample_ground_track(&leo(), &MeanSiderealTime, start(), &config);
    assert_eq!(track.len(), 360);

    for point in &track {
        assert!(point.latitude.abs() <= 52.0, "latitude {}", point.latitude);
        assert!((-180.0..180.0).contains(&point.longitude));
    }

    let segments = segment_track_points(&track);
    // about four revolutions, one antimeridian crossing each
    assert!(segments.len() >= 3);
    for segment in &segments {
        for pair in segment.windows(2) {
            assert!((pair[1].longitude - pair[0].longitude).abs() <= 180.0);
        }
    }

    let flat: Vec<_> = segments.into_iter().flatten().collect();
    assert_eq!(flat, track);
}
