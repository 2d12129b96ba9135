// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year pillar: whole mean tropical years since 立春 2000.

use tracing::debug;

use super::epoch;
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::geo::GeoPosition;
use crate::moment::{self, Moment};
use crate::offset::TimeZoneOffset;
use crate::sexagenary::Pillar;
use crate::solar_time::true_solar_time;

/// Tropical year at J2000, days.
const TROPICAL_YEAR: f64 = 365.242_189_68;

/// Secular shortening of the tropical year, days per year elapsed.
const TROPICAL_YEAR_DRIFT: f64 = 6.16e-8;

/// Mean tropical year length after `days` days from the year epoch.
///
/// Evaluated at the midpoint of the span, which is what the first-order
/// drift term averages to.
pub fn mean_year_length(days: i64) -> f64 {
    TROPICAL_YEAR - TROPICAL_YEAR_DRIFT * (days as f64 / TROPICAL_YEAR / 2.0)
}

/// Year pillar for the civil `moment`.
///
/// `position` [`GeoPosition::ORIGIN`] means "no location": the civil clock is
/// used as-is. Any other position first moves the moment to true solar
/// time. Years turn at 立春, not 1 January.
pub fn year_pillar<E>(
    ephemeris: &E,
    moment: Moment,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<Pillar>
where
    E: Ephemeris + ?Sized,
{
    let moment = if position.is_origin() {
        moment
    } else {
        true_solar_time(ephemeris, moment, position, offset)?
    };
    Ok(from_solar_moment(moment))
}

/// Year pillar of a moment already on the clock the year count expects.
pub(crate) fn from_solar_moment(moment: Moment) -> Pillar {
    let epoch = epoch::YEAR;
    let days = moment::days_between(epoch.moment(), moment);
    let years = (days as f64 / mean_year_length(days)).floor() as i64;
    debug!(%moment, days, years, "year count");
    epoch.advance(years)
}
