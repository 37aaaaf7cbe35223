//! # Scan configuration
//!
//! [`ScanConfig`] holds the two knobs of a pass scan: the length of the time window and the
//! sampling step. Both are validated once, at construction or deserialization, so the scanner
//! can loop without further checks.
//!
//! ## Serialized form
//!
//! ```json
//! { "window_hours": 72.0, "step_seconds": 20.0 }
//! ```
//!
//! Both fields are optional and default to 72 h and 20 s. An invalid configuration (zero or
//! negative step, negative window, non-finite values) cannot be deserialized.
use hifitime::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{Second, DEFAULT_STEP_SECONDS, DEFAULT_WINDOW_HOURS};
use crate::passwatch_errors::PasswatchError;

/// Validated time window and step of a pass scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScanConfig", into = "RawScanConfig")]
pub struct ScanConfig {
    window: Duration,
    step: Duration,
}

/// Human-unit mirror of [`ScanConfig`] used by serde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct RawScanConfig {
    window_hours: f64,
    step_seconds: f64,
}

impl Default for RawScanConfig {
    fn default() -> Self {
        RawScanConfig {
            window_hours: DEFAULT_WINDOW_HOURS,
            step_seconds: DEFAULT_STEP_SECONDS,
        }
    }
}

impl TryFrom<RawScanConfig> for ScanConfig {
    type Error = PasswatchError;

    fn try_from(raw: RawScanConfig) -> Result<Self, Self::Error> {
        ScanConfig::new(
            Duration::from_seconds(raw.window_hours * 3600.0),
            Duration::from_seconds(raw.step_seconds),
        )
    }
}

impl From<ScanConfig> for RawScanConfig {
    fn from(config: ScanConfig) -> Self {
        RawScanConfig {
            window_hours: config.window_seconds() / 3600.0,
            step_seconds: config.step_seconds(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            window: Duration::from_seconds(DEFAULT_WINDOW_HOURS * 3600.0),
            step: Duration::from_seconds(DEFAULT_STEP_SECONDS),
        }
    }
}

impl ScanConfig {
    /// Build a validated configuration.
    ///
    /// Arguments
    /// -----------------
    /// * `window`: total scanned time span from the start instant.
    /// * `step`: spacing between two consecutive samples.
    ///
    /// Errors
    /// ----------
    /// * [`PasswatchError::InvalidScanStep`] if `step` is not strictly positive.
    /// * [`PasswatchError::InvalidScanWindow`] if `window` is negative.
    pub fn new(window: Duration, step: Duration) -> Result<Self, PasswatchError> {
        let step_s = step.to_seconds();
        if !step_s.is_finite() || step_s <= 0.0 {
            return Err(PasswatchError::InvalidScanStep(step_s));
        }
        let window_s = window.to_seconds();
        if !window_s.is_finite() || window_s < 0.0 {
            return Err(PasswatchError::InvalidScanWindow(window_s));
        }
        Ok(ScanConfig { window, step })
    }

    /// Parse a JSON configuration, see the module documentation for the layout.
    pub fn from_json(json: &str) -> Result<Self, PasswatchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn window_seconds(&self) -> Second {
        self.window.to_seconds()
    }

    pub fn step_seconds(&self) -> Second {
        self.step.to_seconds()
    }

    /// Number of samples `t_i = start + i·step` with `t_i < start + window`.
    pub fn sample_count(&self) -> usize {
        (self.window_seconds() / self.step_seconds()).ceil() as usize
    }
}
