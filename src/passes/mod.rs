//! # Satellite passes
//!
//! A [`Pass`](crate::passes::Pass) is one rise-to-set interval of a satellite above the horizon of
//! a ground observer, together with the parts of that interval during which the satellite can be
//! seen with the naked eye.
//!
//! ## Submodules
//!
//! - [`scanner`] – The rise/set state machine producing passes from a time-stepped simulation.
//! - [`scoring`] – Score and brightness heuristics attached to every finalized pass.
//! - [`display`] – Tabular rendering of a pass list (`comfy-table`).
//!
//! ## Invariants of a finalized pass
//!
//! - `start ≤ peak_time ≤ end`.
//! - `max_elevation` is at least the elevation of every sample taken in `[start, end]`.
//! - `visible_segments` are disjoint, ordered by start, contained in `[start, end]`, and all
//!   closed.
//! - `visible == !visible_segments.is_empty()` for passes produced by the scanner.
//! - `score ∈ [0, 100]`, azimuths in `[0, 360)`.
//!
//! A pass is never mutated once the scanner hands it out.
//!
//! ## See also
//! ------------
//! * [`compute_passes`](crate::passes::scanner::compute_passes) – Entry point with default settings.
//! * [`describe_visibility`](crate::passes::describe_visibility) – Human-readable visibility summary.
pub mod display;
pub mod scanner;
pub mod scoring;

use std::cmp::Reverse;

use hifitime::Epoch;
use itertools::Itertools;

use crate::constants::{Degree, Second};
use crate::passes::scoring::Brightness;

/// Minimum length of the first visible segment for a pass to count as visible "for most" of it.
const MOSTLY_VISIBLE: Second = 4.0 * 60.0;

/// Sub-interval `[start, end)` of a pass during which the satellite is sunlit over a dark sky.
///
/// `end` is `None` only while the scanner still has the segment open; every segment of a
/// finalized [`Pass`] is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySegment {
    pub start: Epoch,
    pub end: Option<Epoch>,
}

impl VisibilitySegment {
    pub(crate) fn open(start: Epoch) -> Self {
        VisibilitySegment { start, end: None }
    }

    pub(crate) fn close(self, end: Epoch) -> Self {
        VisibilitySegment {
            start: self.start,
            end: Some(end),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    /// Length of the segment in seconds, `None` while it is still open.
    pub fn duration(&self) -> Option<Second> {
        self.end.map(|end| (end - self.start).to_seconds())
    }
}

/// One rise-to-set interval of a satellite for a given observer.
///
/// Units
/// -----
/// * azimuths: degrees in `[0, 360)`, clockwise from north.
/// * `max_elevation`: degrees.
/// * `duration`: seconds, `end - start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    pub start: Epoch,
    pub end: Epoch,
    pub start_azimuth: Degree,
    pub end_azimuth: Degree,
    pub peak_time: Epoch,
    pub peak_azimuth: Degree,
    pub max_elevation: Degree,
    pub visible: bool,
    pub visible_segments: Vec<VisibilitySegment>,
    pub duration: Second,
    pub score: u8,
    pub brightness: Brightness,
}

impl Pass {
    /// Total time spent visible, summed over closed segments.
    pub fn visible_duration(&self) -> Second {
        self.visible_segments
            .iter()
            .filter_map(VisibilitySegment::duration)
            .sum()
    }

    /// `true` when `epoch` falls inside `[start, end]`.
    pub fn contains(&self, epoch: &Epoch) -> bool {
        self.start <= *epoch && *epoch <= self.end
    }
}

/// Human-readable visibility summary of a pass.
///
/// Return
/// ----------
/// * `"Not visible (daylight or shadowed)"` when the pass is not visible,
/// * `"Visible briefly"` when it is flagged visible without any recorded segment,
/// * `"Visible for most of pass"` when the first segment lasts at least 4 minutes,
/// * `"Visible in part of pass"` otherwise.
pub fn describe_visibility(pass: &Pass) -> &'static str {
    if !pass.visible {
        return "Not visible (daylight or shadowed)";
    }

    match pass.visible_segments.first() {
        None => "Visible briefly",
        Some(segment) if segment.duration().is_some_and(|d| d >= MOSTLY_VISIBLE) => {
            "Visible for most of pass"
        }
        Some(_) => "Visible in part of pass",
    }
}

/// Passes ordered best first: descending score, earlier start on ties.
pub fn rank_passes(passes: &[Pass]) -> Vec<&Pass> {
    passes
        .iter()
        .sorted_by_key(|pass| (Reverse(pass.score), pass.start))
        .collect()
}

/// Passes with at least one naked-eye visible segment, in chronological order.
pub fn visible_passes(passes: &[Pass]) -> impl Iterator<Item = &Pass> {
    passes.iter().filter(|pass| pass.visible)
}
