// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The ephemeris seam: what the calculators need to know about the Sun.
//!
//! Calculators only talk to the [`Ephemeris`] trait; [`SpaSun`] (see
//! [`crate::sun`]) is the default, and any other provider can be swapped in
//! through [`crate::Calculator::with_ephemeris`].
//!
//! [`SpaSun`]: crate::SpaSun

use qtty::Degrees;

use crate::error::Result;
use crate::geo::GeoPosition;
use crate::instant::Time;
use crate::scales::{JD, UT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent equatorial coordinates of date.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

/// Ecliptic coordinates of date, longitude in `[0°, 360°)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ecliptic {
    pub longitude: Degrees,
    pub latitude: Degrees,
}

/// Solar positions and transits for an observer.
///
/// Implementations must be pure: the same query always gives the same
/// answer, so a failed query is never worth retrying. They are shared
/// read-only between calls and threads.
pub trait Ephemeris {
    /// Apparent right ascension and declination of the Sun at `instant`.
    fn sun_equatorial(&self, instant: Time<UT>, observer: GeoPosition) -> Result<Equatorial>;

    /// First instant at or after `after` at which the Sun crosses the
    /// observer's meridian.
    fn next_meridian_transit(&self, after: Time<UT>, observer: GeoPosition) -> Result<Time<UT>>;

    /// Rotate equatorial coordinates of `epoch` into the ecliptic of the
    /// same epoch.
    fn equatorial_to_ecliptic(&self, position: Equatorial, epoch: Time<UT>) -> Ecliptic {
        equatorial_to_ecliptic(position, mean_obliquity(epoch.to::<JD>()))
    }

    /// Apparent ecliptic position of the Sun at `instant`.
    fn sun_ecliptic(&self, instant: Time<UT>, observer: GeoPosition) -> Result<Ecliptic> {
        let equatorial = self.sun_equatorial(instant, observer)?;
        Ok(self.equatorial_to_ecliptic(equatorial, instant))
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_equatorial(&self, instant: Time<UT>, observer: GeoPosition) -> Result<Equatorial> {
        (**self).sun_equatorial(instant, observer)
    }

    fn next_meridian_transit(&self, after: Time<UT>, observer: GeoPosition) -> Result<Time<UT>> {
        (**self).next_meridian_transit(after, observer)
    }

    fn equatorial_to_ecliptic(&self, position: Equatorial, epoch: Time<UT>) -> Ecliptic {
        (**self).equatorial_to_ecliptic(position, epoch)
    }
}

/// Mean obliquity of the ecliptic (Meeus eq. 22.2).
pub fn mean_obliquity(jd: Time<JD>) -> Degrees {
    let t = jd.julian_centuries().value();
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    Degrees::new(23.0 + (26.0 + arcsec / 60.0) / 60.0)
}

/// Equatorial → ecliptic rotation by `obliquity` (Meeus eq. 13.1–13.2).
pub fn equatorial_to_ecliptic(position: Equatorial, obliquity: Degrees) -> Ecliptic {
    let alpha = position.right_ascension.value().to_radians();
    let delta = position.declination.value().to_radians();
    let (sin_eps, cos_eps) = obliquity.value().to_radians().sin_cos();

    let lambda = (alpha.sin() * cos_eps + delta.tan() * sin_eps).atan2(alpha.cos());
    let beta = (delta.sin() * cos_eps - delta.cos() * sin_eps * alpha.sin()).asin();

    Ecliptic {
        longitude: Degrees::new(lambda.to_degrees().rem_euclid(360.0)),
        latitude: Degrees::new(beta.to_degrees()),
    }
}
