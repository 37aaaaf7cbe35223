//! # Satellite state seam
//!
//! Orbital propagation (SGP4 or equivalent) is outside this crate. The pass scanner pulls
//! inertial states through the [`StateSource`] trait; a sample for which the propagator has
//! no answer (end of element-set validity, decayed orbit, numerical failure) is reported as
//! `None` and silently skipped by the scanner.
//!
//! Any `Fn(&Epoch) -> Option<SatelliteState>` closure is a [`StateSource`], which keeps
//! adapters around third-party propagators to a one-liner.
use hifitime::Epoch;
use nalgebra::Vector3;

/// Inertial state of a satellite at one instant.
///
/// Units
/// -----
/// * `position`: kilometers, Earth-centered inertial frame.
/// * `velocity`: kilometers per second, same frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl SatelliteState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        SatelliteState { position, velocity }
    }

    /// State with a known position and an unknown (zero) velocity.
    pub fn from_position(position: Vector3<f64>) -> Self {
        SatelliteState {
            position,
            velocity: Vector3::zeros(),
        }
    }
}

/// Provider of satellite states over time.
pub trait StateSource {
    /// Inertial state at `epoch`, or `None` when propagation is unavailable for that instant.
    fn state_at(&self, epoch: &Epoch) -> Option<SatelliteState>;
}

impl<F> StateSource for F
where
    F: Fn(&Epoch) -> Option<SatelliteState>,
{
    fn state_at(&self, epoch: &Epoch) -> Option<SatelliteState> {
        self(epoch)
    }
}
