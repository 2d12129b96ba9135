// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month pillar: solar months between the twelve major solar terms (節).
//!
//! A month opens each time the Sun's apparent ecliptic longitude crosses
//! `15° + 30°·k`; 立春 at 315° opens the 寅 month. Months are counted from
//! the month epoch with a mean length of one twelfth of a tropical year and
//! the count is snapped onto the branch the Sun's longitude indicates.
//!
//! The reading is made at the UTC instant of the civil moment, not on the
//! true solar clock.

use qtty::Degrees;
use tracing::debug;

use super::{epoch, year, Reconciled};
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::geo::GeoPosition;
use crate::instant::Time;
use crate::moment::{self, Moment};
use crate::offset::TimeZoneOffset;
use crate::scales::UT;
use crate::sexagenary::{Branch, Pillar};

/// Solar longitude of 清明, which opens the 辰 month.
const QINGMING_LONGITUDE: f64 = 15.0;

/// Width of a solar month in ecliptic longitude.
const MONTH_SPAN: f64 = 30.0;

/// Branch of the month 清明 opens.
const QINGMING_BRANCH: Branch = Branch::Chen;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Month branch implied by the Sun's apparent ecliptic longitude.
///
/// ```rust
/// use bazi::pillars::month::branch_at_longitude;
/// use bazi::Branch;
/// use qtty::Degrees;
///
/// assert_eq!(branch_at_longitude(Degrees::new(315.0)), Branch::Yin);
/// assert_eq!(branch_at_longitude(Degrees::new(14.9)), Branch::Mao);
/// ```
pub fn branch_at_longitude(longitude: Degrees) -> Branch {
    let sector = ((longitude.value() - QINGMING_LONGITUDE).rem_euclid(360.0) / MONTH_SPAN).floor();
    Branch::from_index(sector as i64 + QINGMING_BRANCH.index())
}

/// Month pillar for the civil `moment`.
pub fn month_pillar<E>(
    ephemeris: &E,
    moment: Moment,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<Pillar>
where
    E: Ephemeris + ?Sized,
{
    let months = count_months(ephemeris, moment, position, offset)?;
    Ok(epoch::MONTH.advance(months.count()))
}

/// Months elapsed since the month epoch, with the solar-longitude
/// correction applied.
pub fn count_months<E>(
    ephemeris: &E,
    moment: Moment,
    position: GeoPosition,
    offset: TimeZoneOffset,
) -> Result<Reconciled>
where
    E: Ephemeris + ?Sized,
{
    let utc = offset.to_utc(moment)?;
    let instant = Time::<UT>::from_naive_utc(utc);
    let longitude = ephemeris.sun_ecliptic(instant, position)?.longitude;
    let exact = branch_at_longitude(longitude);

    let days = moment::days_between(epoch::MONTH.moment(), utc);
    let mean_month = year::mean_year_length(days) / MONTHS_PER_YEAR;
    let estimated = (days as f64 / mean_month).floor() as i64;

    let reconciled = Reconciled::new(estimated, epoch::MONTH.branch_phase(), exact.index());
    debug!(
        %utc,
        longitude = longitude.value(),
        exact = %exact,
        estimated,
        correction = reconciled.correction,
        "month count"
    );
    Ok(reconciled)
}
