// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar ephemeris backed by the NREL Solar Position Algorithm.
//!
//! [`SpaSun`] answers every query through [`solar_positioning::spa`]
//! (Reda & Andreas 2003, ±0.0003° for the years −2000 to 6000), fed with this
//! crate's ΔT.
//!
//! - Meridian transits are the SPA's own (appendix A.2). They are evaluated on
//!   the equator at the observer's longitude: the SPA transit is geocentric,
//!   so latitude does not move it, and the equator never triggers the polar
//!   day/night shortcut.
//! - The SPA reports the Sun in horizontal coordinates. They are turned back
//!   into the apparent hour angle and declination at the observer, and the
//!   right ascension follows from the local mean sidereal time. Leaving out
//!   the equation of the equinoxes (< 1.2 s) and the solar parallax (< 9″)
//!   keeps the result within 0.01° of the geocentric apparent position.
//!
//! ## References
//! * Reda, I. & Andreas, A. (2003). *Solar Position Algorithm for Solar
//!   Radiation Applications*, NREL/TP-560-34302.
//! * Meeus, J. (1998). *Astronomical Algorithms*, eq. 12.4.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use qtty::Degrees;
use solar_positioning::{spa, SunriseResult};
use tracing::trace;

use crate::ephemeris::{Ephemeris, Equatorial};
use crate::error::{Error, Result};
use crate::geo::GeoPosition;
use crate::instant::Time;
use crate::scales::UT;

/// Years the SPA coefficients cover.
const VALID_YEARS: RangeInclusive<i32> = -2000..=6000;

/// Rise/set altitude handed to the SPA. The transit does not depend on it.
const STANDARD_HORIZON: f64 = -0.833;

/// UTC days, relative to the query, whose transits are candidates.
const SEARCH_DAYS: [i64; 3] = [-1, 0, 1];

/// The Sun per the NREL SPA. Stateless.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SpaSun;

impl SpaSun {
    /// Local apparent hour angle of the Sun, degrees in `(-180, 180]`.
    pub fn hour_angle(&self, instant: Time<UT>, observer: GeoPosition) -> Result<Degrees> {
        self.local_sun(instant, observer)
            .map(|(hour_angle, _)| Degrees::new(hour_angle))
    }

    /// Hour angle and declination of the Sun at the observer, in degrees.
    fn local_sun(&self, instant: Time<UT>, observer: GeoPosition) -> Result<(f64, f64)> {
        let latitude = observer.latitude().value();
        let position = spa::solar_position(
            spa_datetime(instant)?,
            latitude,
            wrap_signed(observer.longitude().value()),
            0.0,
            instant.delta_t().value(),
            None,
        )
        .map_err(|e| Error::Ephemeris(e.to_string()))?;

        // Azimuth is measured from north through east.
        let azimuth = position.azimuth().to_radians();
        let (sin_alt, cos_alt) = (90.0 - position.zenith_angle()).to_radians().sin_cos();
        let (sin_phi, cos_phi) = latitude.to_radians().sin_cos();

        let declination = (sin_phi * sin_alt + cos_phi * cos_alt * azimuth.cos()).asin();
        let hour_angle =
            (-cos_alt * azimuth.sin()).atan2(cos_phi * sin_alt - sin_phi * cos_alt * azimuth.cos());

        let (h, d) = (hour_angle.to_degrees(), declination.to_degrees());
        if !(h.is_finite() && d.is_finite()) {
            return Err(Error::Ephemeris(format!("non-finite solar position at {instant}")));
        }
        Ok((h, d))
    }

    /// SPA transit on the UTC day of `day`, at `longitude` east.
    fn transit_on(&self, day: DateTime<Utc>, longitude: f64, delta_t: f64) -> Option<Time<UT>> {
        let transit = match spa::sunrise_sunset(day, 0.0, longitude, delta_t, STANDARD_HORIZON) {
            Ok(SunriseResult::RegularDay { transit, .. })
            | Ok(SunriseResult::AllDay { transit })
            | Ok(SunriseResult::AllNight { transit }) => transit,
            Err(e) => {
                trace!(%day, error = %e, "SPA transit failed");
                return None;
            }
        };
        Some(Time::<UT>::from_utc(transit))
    }
}

impl Ephemeris for SpaSun {
    fn sun_equatorial(&self, instant: Time<UT>, observer: GeoPosition) -> Result<Equatorial> {
        let (hour_angle, declination) = self.local_sun(instant, observer)?;
        let local_sidereal = mean_sidereal_time(instant).value() + observer.longitude().value();
        Ok(Equatorial {
            right_ascension: Degrees::new((local_sidereal - hour_angle).rem_euclid(360.0)),
            declination: Degrees::new(declination),
        })
    }

    fn next_meridian_transit(&self, after: Time<UT>, observer: GeoPosition) -> Result<Time<UT>> {
        let not_found = || Error::TransitNotFound(after.value());

        let longitude = observer.longitude().value();
        if !longitude.is_finite() {
            return Err(not_found());
        }
        let longitude = wrap_signed(longitude);
        let start = spa_datetime(after)?;
        let delta_t = after.delta_t().value();

        let mut next: Option<Time<UT>> = None;
        for offset in SEARCH_DAYS {
            let Some(day) = start.checked_add_signed(TimeDelta::days(offset)) else {
                continue;
            };
            let Some(transit) = self.transit_on(day, longitude, delta_t) else {
                continue;
            };
            trace!(%day, jd_ut = transit.value(), "SPA transit candidate");
            if transit >= after && next.map_or(true, |best| transit < best) {
                next = Some(transit);
            }
        }
        next.ok_or_else(not_found)
    }
}

/// Greenwich mean sidereal time (Meeus eq. 12.4), degrees in `[0, 360)`.
pub fn mean_sidereal_time(instant: Time<UT>) -> Degrees {
    let d = instant.days_since_j2000();
    let t = instant.julian_centuries().value();
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + t * t * (0.000_387_933 - t / 38_710_000.0);
    Degrees::new(theta.rem_euclid(360.0))
}

/// The instant as a UTC timestamp inside the SPA's validity range.
fn spa_datetime(instant: Time<UT>) -> Result<DateTime<Utc>> {
    instant
        .to_utc()
        .filter(|utc| VALID_YEARS.contains(&utc.year()))
        .ok_or(Error::OutOfRange)
}

/// Wrap into `(-180, 180]`.
#[inline]
fn wrap_signed(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
