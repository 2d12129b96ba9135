// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour pillar: two-hour periods (時辰) of true solar time.
//!
//! Periods open at odd hours, 子 running from 23:00 to 01:00. The count of
//! elapsed periods is rounded from the hours since the epoch, then checked
//! against the period the true solar clock hour falls in.

use chrono::Timelike;
use tracing::debug;

use super::{epoch, Reconciled};
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::geo::GeoPosition;
use crate::moment::{self, Moment};
use crate::offset::TimeZoneOffset;
use crate::sexagenary::Pillar;
use crate::solar_time::true_solar_time;

const HOURS_PER_PERIOD: f64 = 2.0;

/// Hour pillar for the civil `moment` at `position`.
pub fn hour_pillar<E>(
    ephemeris: &E,
    moment: Moment,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<Pillar>
where
    E: Ephemeris + ?Sized,
{
    let solar = true_solar_time(ephemeris, moment, position, offset)?;
    Ok(from_solar_moment(solar))
}

/// Periods elapsed since the hour epoch at true solar time `solar`.
pub fn count_periods(solar: Moment) -> Reconciled {
    let hours = moment::hours_between(epoch::HOUR.moment(), solar);
    let estimated = (hours / HOURS_PER_PERIOD).round_ties_even() as i64;
    let clock_branch = (i64::from(solar.hour()) + 1) / 2;
    let reconciled = Reconciled::new(estimated, epoch::HOUR.branch_phase(), clock_branch);
    debug!(
        %solar,
        estimated,
        clock_branch,
        correction = reconciled.correction,
        "hour period count"
    );
    reconciled
}

pub(crate) fn from_solar_moment(solar: Moment) -> Pillar {
    epoch::HOUR.advance(count_periods(solar).count())
}
