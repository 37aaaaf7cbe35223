use crate::constants::{Degree, Second};

/// Labels of the 16-point compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wrap an azimuth into `[0, 360)`.
///
/// Arguments
/// ---------
/// * `azimuth`: any finite angle in degrees
///
/// Return
/// ----------
/// * the same direction expressed in `[0, 360)`
pub fn normalize_azimuth(azimuth: Degree) -> Degree {
    let wrapped = azimuth.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap a longitude into `[-180, 180)`.
pub fn normalize_longitude(longitude: Degree) -> Degree {
    let wrapped = normalize_azimuth(longitude + 180.0) - 180.0;
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// 16-point compass label of an azimuth (e.g. `"NNE"`).
pub fn compass_point(azimuth: Degree) -> &'static str {
    let sector = (normalize_azimuth(azimuth) / 22.5).round() as usize % 16;
    COMPASS_POINTS[sector]
}

/// Human-readable azimuth, e.g. `"90° E"` or `"247° WSW"`.
pub fn format_azimuth(azimuth: Degree) -> String {
    let az = normalize_azimuth(azimuth);
    // 359.6 rounds to 360 in the label, print it as north
    let whole = az.round() as u32 % 360;
    format!("{whole}° {}", compass_point(az))
}

/// Human-readable duration, e.g. `"5m 20s"`, `"45s"` or `"1h 02m"`.
///
/// Negative and non-finite durations are shown as `"0s"`.
pub fn format_duration(seconds: Second) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };

    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    match (h, m) {
        (0, 0) => format!("{s}s"),
        (0, _) => format!("{m}m {s:02}s"),
        _ => format!("{h}h {m:02}m"),
    }
}
