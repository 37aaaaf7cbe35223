//! # Pass scanner
//!
//! Time-stepped rise/set state machine. Starting from an instant, the scanner samples the
//! satellite every `step` over `window` (see [`ScanConfig`]), converts each inertial state into
//! look angles, and emits one [`Pass`] per rise-to-set interval.
//!
//! ```text
//!                el > 0                      el ≤ 0
//!  OutsidePass ─────────▶ InPass(tracker) ─────────▶ OutsidePass   (pass finalized)
//!                          │   ▲
//!                          └───┘ el > 0: peak tracking, visibility segments
//!
//!  window end while InPass ─▶ pass finalized with end = start + window
//! ```
//!
//! ## Collaborators
//!
//! Everything the scanner needs from the outside world is injected:
//!
//! | seam | default |
//! |---|---|
//! | [`StateSource`] (per call) | none, the caller's propagator |
//! | [`SiderealTime`] | [`MeanSiderealTime`] |
//! | [`LookAngleTransform`] | [`SezTransform`] |
//! | [`SolarAltitude`] | [`LowPrecisionSolarAltitude`] |
//!
//! The Sun vector for the shadow test always comes from
//! [`sun_position`](crate::sun::ephemeris::sun_position), recomputed per sample.
//!
//! ## Edge policies
//!
//! - A sample for which the propagator returns `None` is skipped entirely: no transition, no
//!   peak update, an open pass stays open.
//! - Elevation exactly 0° is below the horizon.
//! - A pass with a single sample above the horizon is still emitted.
//! - A pass still open when the window ends is finalized at the window end, with the last known
//!   azimuth as `end_azimuth`.
//!
//! The scanner holds no state between calls: identical inputs give identical pass lists.
use hifitime::{Duration, Epoch};
use nalgebra::Vector3;
use tracing::{debug, trace};

use crate::constants::Degree;
use crate::conversion::normalize_azimuth;
use crate::observers::Observer;
use crate::passes::scoring::{estimate_brightness, score_pass};
use crate::passes::{Pass, VisibilitySegment};
use crate::propagator::StateSource;
use crate::scan_config::ScanConfig;
use crate::sun::altitude::{LowPrecisionSolarAltitude, SolarAltitude};
use crate::sun::ephemeris::sun_position;
use crate::sun::illumination::is_sunlit;
use crate::time::{MeanSiderealTime, SiderealTime};
use crate::topocentric::{LookAngle, LookAngleTransform, SezTransform};

/// Accumulated data of the pass currently above the horizon.
#[derive(Debug, Clone)]
struct PassTracker {
    start: Epoch,
    start_azimuth: Degree,
    peak_time: Epoch,
    peak_azimuth: Degree,
    max_elevation: Degree,
    last_azimuth: Degree,
    visible: bool,
    open_segment: Option<VisibilitySegment>,
    segments: Vec<VisibilitySegment>,
}

impl PassTracker {
    fn rise(epoch: Epoch, look: &LookAngle) -> Self {
        PassTracker {
            start: epoch,
            start_azimuth: look.azimuth,
            peak_time: epoch,
            peak_azimuth: look.azimuth,
            max_elevation: look.elevation,
            last_azimuth: look.azimuth,
            visible: false,
            open_segment: None,
            segments: Vec::new(),
        }
    }

    fn track(mut self, epoch: Epoch, look: &LookAngle) -> Self {
        if look.elevation > self.max_elevation {
            self.max_elevation = look.elevation;
            self.peak_time = epoch;
            self.peak_azimuth = look.azimuth;
        }
        self.last_azimuth = look.azimuth;
        self
    }

    /// Open or close the visibility segment depending on the current sample.
    fn observe(mut self, epoch: Epoch, visible_now: bool) -> Self {
        match (self.open_segment, visible_now) {
            (None, true) => {
                self.visible = true;
                self.open_segment = Some(VisibilitySegment::open(epoch));
            }
            (Some(_), false) => self.close_segment(epoch),
            _ => {}
        }
        self
    }

    fn close_segment(&mut self, epoch: Epoch) {
        if let Some(segment) = self.open_segment.take() {
            self.segments.push(segment.close(epoch));
        }
    }

    fn finish(mut self, end: Epoch, end_azimuth: Degree, sun_altitude_at_peak: Degree) -> Pass {
        self.close_segment(end);
        let duration = (end - self.start).to_seconds();

        Pass {
            start: self.start,
            end,
            start_azimuth: self.start_azimuth,
            end_azimuth,
            peak_time: self.peak_time,
            peak_azimuth: self.peak_azimuth,
            max_elevation: self.max_elevation,
            visible: self.visible,
            visible_segments: self.segments,
            duration,
            score: score_pass(self.max_elevation, duration, sun_altitude_at_peak),
            brightness: estimate_brightness(self.max_elevation, sun_altitude_at_peak),
        }
    }
}

/// State threaded through the sampling loop.
#[derive(Debug)]
enum ScanState {
    OutsidePass,
    InPass(PassTracker),
}

/// Pass predictor with injected collaborators.
///
/// Arguments (type parameters)
/// -----------------
/// * `T`: [`SiderealTime`] used to rotate inertial states into the Earth-fixed frame.
/// * `L`: [`LookAngleTransform`] producing azimuth / elevation.
/// * `S`: [`SolarAltitude`] used for the civil-twilight darkness test and for scoring.
///
/// Example
/// -------
/// ```rust,no_run
/// use hifitime::{Epoch, Unit};
/// use passwatch::observers::Observer;
/// use passwatch::passes::scanner::PassScanner;
/// use passwatch::propagator::SatelliteState;
/// use passwatch::scan_config::ScanConfig;
///
/// # fn propagate(_: &Epoch) -> Option<SatelliteState> { None }
/// let observer = Observer::new(45.76, 4.84, 0.2, Some("Lyon".into()))?;
/// let scanner = PassScanner::with_defaults()
///     .with_config(ScanConfig::new(24 * Unit::Hour, 10 * Unit::Second)?);
/// let passes = scanner.compute_passes(&propagate, &observer, Epoch::now()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PassScanner<T = MeanSiderealTime, L = SezTransform, S = LowPrecisionSolarAltitude> {
    sidereal: T,
    look_angles: L,
    solar_altitude: S,
    config: ScanConfig,
}

impl PassScanner {
    /// Scanner wired with the reference collaborators and the default configuration.
    pub fn with_defaults() -> Self {
        PassScanner::new(MeanSiderealTime, SezTransform, LowPrecisionSolarAltitude)
    }
}

impl Default for PassScanner {
    fn default() -> Self {
        PassScanner::with_defaults()
    }
}

impl<T, L, S> PassScanner<T, L, S>
where
    T: SiderealTime,
    L: LookAngleTransform,
    S: SolarAltitude,
{
    /// Build a scanner from its collaborators, with the default 72 h / 20 s configuration.
    pub fn new(sidereal: T, look_angles: L, solar_altitude: S) -> Self {
        PassScanner {
            sidereal,
            look_angles,
            solar_altitude,
            config: ScanConfig::default(),
        }
    }

    /// Replace the scan window and step.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Look angles of the satellite at `epoch`, azimuth normalized into `[0, 360)`.
    ///
    /// Return
    /// ----------
    /// * `None` if the propagator has no state for `epoch`.
    pub fn look_angle_at<P>(
        &self,
        source: &P,
        observer: &Observer,
        epoch: &Epoch,
    ) -> Option<LookAngle>
    where
        P: StateSource + ?Sized,
    {
        source
            .state_at(epoch)
            .map(|state| self.look_angle(observer, &state.position, epoch))
    }

    /// Predict every pass of the satellite over `observer` in `[start, start + window)`.
    ///
    /// Arguments
    /// -----------------
    /// * `source`: the satellite propagator, queried once per sample.
    /// * `observer`: the ground site, taken as is (no validation here).
    /// * `start`: first sampled instant.
    ///
    /// Return
    /// ----------
    /// * The finalized passes, strictly ordered by `start`. Propagation gaps never surface as
    ///   errors: they are skipped.
    pub fn compute_passes<P>(&self, source: &P, observer: &Observer, start: Epoch) -> Vec<Pass>
    where
        P: StateSource + ?Sized,
    {
        let step = self.config.step_seconds();
        let samples = self.config.sample_count();
        debug!(%observer, %start, samples, step, "starting pass scan");

        let mut passes = Vec::new();
        let mut gaps = 0usize;
        let mut state = ScanState::OutsidePass;

        for i in 0..samples {
            let epoch = start + Duration::from_seconds(step * i as f64);

            let Some(satellite) = source.state_at(&epoch) else {
                trace!(%epoch, "no satellite state, sample skipped");
                gaps += 1;
                continue;
            };
            let look = self.look_angle(observer, &satellite.position, &epoch);

            state = match state {
                ScanState::OutsidePass if look.is_above_horizon() => {
                    let visible = self.is_visible(observer, &satellite.position, &epoch);
                    ScanState::InPass(PassTracker::rise(epoch, &look).observe(epoch, visible))
                }
                ScanState::OutsidePass => ScanState::OutsidePass,
                ScanState::InPass(tracker) if look.is_above_horizon() => {
                    let visible = self.is_visible(observer, &satellite.position, &epoch);
                    ScanState::InPass(tracker.track(epoch, &look).observe(epoch, visible))
                }
                ScanState::InPass(tracker) => {
                    passes.push(self.finalize(tracker, epoch, look.azimuth, observer));
                    ScanState::OutsidePass
                }
            };
        }

        if let ScanState::InPass(tracker) = state {
            let end = start + self.config.window();
            let end_azimuth = tracker.last_azimuth;
            passes.push(self.finalize(tracker, end, end_azimuth, observer));
        }

        debug!(passes = passes.len(), gaps, "pass scan complete");
        passes
    }

    fn look_angle(&self, observer: &Observer, position: &Vector3<f64>, epoch: &Epoch) -> LookAngle {
        let raw = self.look_angles.look_angle(
            observer,
            position,
            self.sidereal.sidereal_angle(epoch),
        );
        LookAngle {
            azimuth: normalize_azimuth(raw.azimuth),
            elevation: raw.elevation,
        }
    }

    /// Sunlit satellite over a dark sky.
    fn is_visible(&self, observer: &Observer, position: &Vector3<f64>, epoch: &Epoch) -> bool {
        is_sunlit(position, &sun_position(epoch))
            && self
                .solar_altitude
                .is_dark(epoch, observer.latitude, observer.longitude)
    }

    fn finalize(
        &self,
        tracker: PassTracker,
        end: Epoch,
        end_azimuth: Degree,
        observer: &Observer,
    ) -> Pass {
        let sun_altitude = self.solar_altitude.solar_altitude(
            &tracker.peak_time,
            observer.latitude,
            observer.longitude,
        );
        let pass = tracker.finish(end, end_azimuth, sun_altitude);
        debug!(
            start = %pass.start,
            end = %pass.end,
            max_elevation = pass.max_elevation,
            visible = pass.visible,
            score = pass.score,
            "pass finalized"
        );
        pass
    }
}

/// Predict passes with the reference collaborators and the default 72 h / 20 s scan.
///
/// See also
/// ------------
/// * [`PassScanner`] – To inject collaborators or change the window and step.
pub fn compute_passes<P>(source: &P, observer: &Observer, start: Epoch) -> Vec<Pass>
where
    P: StateSource + ?Sized,
{
    PassScanner::with_defaults().compute_passes(source, observer, start)
}
