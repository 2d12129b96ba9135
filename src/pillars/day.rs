// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day pillar. Days turn at true solar midnight, not civil midnight.

use tracing::debug;

use super::epoch;
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::geo::GeoPosition;
use crate::moment::{self, Moment};
use crate::offset::TimeZoneOffset;
use crate::sexagenary::Pillar;
use crate::solar_time::true_solar_time;

/// Day pillar for the civil `moment` at `position`.
pub fn day_pillar<E>(
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

pub(crate) fn from_solar_moment(solar: Moment) -> Pillar {
    let days = moment::days_between(epoch::DAY.moment(), solar);
    debug!(%solar, days, "day count");
    epoch::DAY.advance(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun::SpaSun;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Moment {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn epoch_day_is_jia_xu() {
        // Civil noon at 0°E is ~11:56 true solar time.
        let pillar = day_pillar(
            &SpaSun,
            at(1900, 1, 1, 12, 0),
            GeoPosition::ORIGIN,
            TimeZoneOffset::UTC,
        )
        .unwrap();
        assert_eq!(pillar.to_string(), "甲戌");
    }

    #[test]
    fn known_days() {
        let cases = [
            (at(2000, 1, 1, 12, 0), "戊午"),
            (at(2024, 2, 10, 12, 0), "甲辰"),
            (at(2020, 1, 1, 0, 43), "癸卯"),
            (at(1899, 12, 31, 12, 0), "癸酉"),
        ];
        for (solar, expected) in cases {
            assert_eq!(from_solar_moment(solar).to_string(), expected, "{solar}");
        }
    }

    #[test]
    fn boundary_is_true_solar_midnight() {
        // Beijing is ~14 min behind the zone meridian: civil 00:05 is still
        // the previous true solar day.
        let beijing = |h, mi| {
            day_pillar(
                &SpaSun,
                at(2024, 2, 10, h, mi),
                GeoPosition::REFERENCE,
                TimeZoneOffset::CHINA,
            )
            .unwrap()
            .to_string()
        };
        assert_eq!(beijing(0, 5), "癸卯");
        assert_eq!(beijing(1, 0), "甲辰");
    }
}
