//! # Time helpers and sidereal time
//!
//! Thin layer over [`hifitime::Epoch`] providing the handful of time quantities the pass
//! engine needs:
//!
//! - [`julian_day`] / [`julian_centuries`] – inputs of the low-precision solar model,
//! - [`gmst`] / [`gmst_mjd`] – Greenwich Mean Sidereal Time (IAU 1982 polynomial),
//! - [`SiderealTime`] – the seam through which the pass scanner obtains the ECI ↔ ECF
//!   rotation angle. [`MeanSiderealTime`] is the default implementation, and any
//!   `Fn(&Epoch) -> Radian` closure can be injected instead.
//!
//! UT1 is approximated by UTC: the sub-second difference is far below what a 20 s
//! sampling step can resolve.
use hifitime::Epoch;

use crate::constants::{
    JulianDay, Radian, DAYS_PER_JULIAN_CENTURY, DPI, JD_J2000, SECONDS_PER_DAY, T2000,
};

/// Julian Date (UTC) of an epoch.
pub fn julian_day(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// Julian centuries elapsed since J2000.0 for an epoch.
///
/// Arguments
/// -----------------
/// * `epoch`: the instant, any time scale (converted to UTC internally).
///
/// Return
/// ----------
/// * `T = (JD - 2451545.0) / 36525`, negative before J2000.0.
pub fn julian_centuries(epoch: &Epoch) -> f64 {
    (julian_day(epoch) - JD_J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982/2000 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT1
///    in seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
pub fn gmst_mjd(tjm: f64) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / DAYS_PER_JULIAN_CENTURY;

    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    // fract() of a negative MJD is negative, use the distance to the floor instead
    let h = (tjm - itjm) * DPI;
    (gmst0 + h * RAP).rem_euclid(DPI)
}

/// GMST in radians at `epoch`, UT1 approximated by UTC.
pub fn gmst(epoch: &Epoch) -> Radian {
    gmst_mjd(epoch.to_mjd_utc_days())
}

/// UTC calendar date and time of an epoch, `"YYYY-MM-DD HH:MM:SS"`.
pub fn fmt_utc(epoch: &Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02}:{ss:02}")
}

/// UTC time of day of an epoch, `"HH:MM:SS"`.
pub fn fmt_utc_time(epoch: &Epoch) -> String {
    let (_, _, _, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{hh:02}:{mm:02}:{ss:02}")
}

/// Source of the Earth rotation angle used to rotate inertial vectors into the Earth-fixed frame.
///
/// The pass scanner never reaches for a global sidereal-time routine: it receives an
/// implementation of this trait at construction time.
///
/// See also
/// ------------
/// * [`MeanSiderealTime`] – Default implementation based on [`gmst`].
/// * [`crate::topocentric::LookAngleTransform`] – Consumer of the angle.
pub trait SiderealTime {
    /// Rotation angle (radians) between the inertial and Earth-fixed frames at `epoch`.
    fn sidereal_angle(&self, epoch: &Epoch) -> Radian;
}

/// Greenwich Mean Sidereal Time from the IAU 1982 polynomial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanSiderealTime;

impl SiderealTime for MeanSiderealTime {
    fn sidereal_angle(&self, epoch: &Epoch) -> Radian {
        gmst(epoch)
    }
}

impl<F> SiderealTime for F
where
    F: Fn(&Epoch) -> Radian,
{
    fn sidereal_angle(&self, epoch: &Epoch) -> Radian {
        self(epoch)
    }
}
