// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! True (apparent) solar time.
//!
//! The observer's civil clock is shifted so that the Sun's meridian transit
//! falls at 12:00. The shift is measured on the day of the next transit and
//! applied unchanged to the input moment:
//!
//! ```text
//! true = moment + (noon(transit_local) − transit_local)
//! ```
//!
//! It absorbs both the observer's distance from the zone meridian (4 min per
//! degree) and the equation of time (up to ±16 min).

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::geo::GeoPosition;
use crate::instant::Time;
use crate::offset::TimeZoneOffset;
use crate::scales::UT;

/// True solar time at `position` for the civil `moment` read on a clock
/// running `offset` ahead of UTC.
///
/// ```rust
/// use bazi::{moment, true_solar_time, GeoPosition, SpaSun, TimeZoneOffset};
/// use chrono::Timelike;
///
/// let civil = moment::parse("2020-01-01 01:01:01").unwrap();
/// let solar = true_solar_time(
///     &SpaSun,
///     civil,
///     GeoPosition::REFERENCE,
///     TimeZoneOffset::CHINA,
/// )
/// .unwrap();
/// assert_eq!((solar.hour(), solar.minute()), (0, 43));
/// ```
pub fn true_solar_time<E>(
    ephemeris: &E,
    moment: NaiveDateTime,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<NaiveDateTime>
where
    E: Ephemeris + ?Sized,
{
    let delta = noon_correction(ephemeris, moment, position, offset)?;
    debug!(
        %moment,
        %position,
        %offset,
        delta_seconds = delta.num_milliseconds() as f64 / 1e3,
        "true solar time correction"
    );
    moment
        .checked_add_signed(delta)
        .ok_or(Error::OutOfRange)
}

/// `noon − transit` on the civil day of the next transit after `moment`.
fn noon_correction<E>(
    ephemeris: &E,
    moment: NaiveDateTime,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<TimeDelta>
where
    E: Ephemeris + ?Sized,
{
    let after = Time::<UT>::from_naive_utc(offset.to_utc(moment)?);
    let transit = ephemeris.next_meridian_transit(after, position)?;
    let transit_local = offset.to_local(transit.to_naive_utc()?)?;
    let noon = transit_local
        .date()
        .and_hms_opt(12, 0, 0)
        .ok_or(Error::OutOfRange)?;
    Ok(noon - transit_local)
}
