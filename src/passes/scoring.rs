//! # Pass scoring and brightness labels
//!
//! Pure heuristics turning the geometry of a pass into something a person can rank:
//!
//! | term | weight | saturates at |
//! |---|---|---|
//! | elevation `min(el / 90, 1)` | 50 | 90° |
//! | duration `min(d / 600, 1)` | 30 | 10 minutes |
//! | darkness `clamp((-sun - 6) / 12, 0, 1)` | 20 | Sun at −18° |
//!
//! The brightness label uses the composite `el·0.7 + darkness·30` against the thresholds
//! 70 / 50 / 30. None of this is photometry: there is no magnitude model behind the labels.
use std::fmt;

use crate::constants::{Degree, Second};

/// Qualitative naked-eye brightness of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Brightness {
    Dim,
    Moderate,
    Bright,
    VeryBright,
}

impl Brightness {
    /// Display label, one of `"Very bright"`, `"Bright"`, `"Moderate"`, `"Dim"`.
    pub fn label(&self) -> &'static str {
        match self {
            Brightness::VeryBright => "Very bright",
            Brightness::Bright => "Bright",
            Brightness::Moderate => "Moderate",
            Brightness::Dim => "Dim",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sky darkness in `[0, 1]`: 0 at civil twilight (−6°) or brighter, 1 from astronomical
/// night (−18°) down.
pub fn darkness(sun_altitude: Degree) -> f64 {
    ((-sun_altitude - 6.0) / 12.0).clamp(0.0, 1.0)
}

/// Score of a pass in `[0, 100]`.
///
/// Arguments
/// -----------------
/// * `max_elevation`: peak elevation of the pass, degrees.
/// * `duration`: rise-to-set duration, seconds.
/// * `sun_altitude`: observer-local Sun elevation at peak, degrees.
///
/// Return
/// ----------
/// * The rounded weighted sum of the elevation, duration and darkness terms. Out-of-range inputs
///   (negative elevation or duration) are clamped into `[0, 100]` after rounding.
pub fn score_pass(max_elevation: Degree, duration: Second, sun_altitude: Degree) -> u8 {
    let elevation_term = (max_elevation / 90.0).min(1.0) * 50.0;
    let duration_term = (duration / 600.0).min(1.0) * 30.0;
    let darkness_term = darkness(sun_altitude) * 20.0;

    // NaN saturates to 0 in the cast
    (elevation_term + duration_term + darkness_term)
        .round()
        .clamp(0.0, 100.0) as u8
}

/// Brightness label from peak elevation and Sun altitude at peak.
pub fn estimate_brightness(max_elevation: Degree, sun_altitude: Degree) -> Brightness {
    let composite = max_elevation * 0.7 + darkness(sun_altitude) * 30.0;

    if composite > 70.0 {
        Brightness::VeryBright
    } else if composite > 50.0 {
        Brightness::Bright
    } else if composite > 30.0 {
        Brightness::Moderate
    } else {
        Brightness::Dim
    }
}
