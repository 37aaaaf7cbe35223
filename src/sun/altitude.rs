use hifitime::Epoch;

use crate::constants::{Degree, CIVIL_TWILIGHT};
use crate::observers::Observer;
use crate::sun::ephemeris::sun_position;
use crate::time::gmst;
use crate::topocentric::{LookAngleTransform, SezTransform};

/// Observer-local Sun elevation, the input of the sky-darkness test.
///
/// This is a separate seam from [`sun_position`]: callers with a better almanac can inject it
/// here without touching the inertial shadow test. Any
/// `Fn(&Epoch, Degree, Degree) -> Degree` closure implements it.
pub trait SolarAltitude {
    /// Sun elevation in degrees at `epoch` for a site at (`latitude`, `longitude`) in degrees.
    fn solar_altitude(&self, epoch: &Epoch, latitude: Degree, longitude: Degree) -> Degree;

    /// `true` once the Sun is below the civil-twilight limit.
    fn is_dark(&self, epoch: &Epoch, latitude: Degree, longitude: Degree) -> bool {
        self.solar_altitude(epoch, latitude, longitude) < CIVIL_TWILIGHT
    }
}

impl<F> SolarAltitude for F
where
    F: Fn(&Epoch, Degree, Degree) -> Degree,
{
    fn solar_altitude(&self, epoch: &Epoch, latitude: Degree, longitude: Degree) -> Degree {
        self(epoch, latitude, longitude)
    }
}

/// Sun elevation from the low-precision ephemeris seen through [`SezTransform`].
///
/// No refraction: near the horizon the value is about half a degree below what an observer
/// sees, which does not matter for a −6° threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowPrecisionSolarAltitude;

impl SolarAltitude for LowPrecisionSolarAltitude {
    fn solar_altitude(&self, epoch: &Epoch, latitude: Degree, longitude: Degree) -> Degree {
        let site = Observer {
            latitude,
            longitude,
            ..Observer::default()
        };
        SezTransform
            .look_angle(&site, &sun_position(epoch), gmst(epoch))
            .elevation
    }
}
