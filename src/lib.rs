//! # passwatch
//!
//! Visible-pass prediction for Earth-orbiting satellites.
//!
//! Given a propagator ([`propagator::StateSource`]), a ground [`observers::Observer`] and a start
//! instant, [`passes::scanner::compute_passes`] samples the satellite over a time window and
//! returns every rise-to-set [`passes::Pass`], annotated with the intervals during which the
//! satellite is sunlit over a dark sky, a 0–100 quality score and a brightness class.
//!
//! Orbit propagation itself is out of scope: the crate only consumes inertial positions.
pub mod constants;
pub mod conversion;
pub mod ground_track;
pub mod observers;
pub mod passes;
pub mod passwatch_errors;
pub mod propagator;
pub mod scan_config;
pub mod sun;
pub mod time;
pub mod topocentric;

pub use observers::Observer;
pub use passes::scanner::{compute_passes, PassScanner};
pub use passes::Pass;
pub use passwatch_errors::PasswatchError;
pub use propagator::{SatelliteState, StateSource};
pub use scan_config::ScanConfig;
