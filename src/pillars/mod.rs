// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The four calculators and the [`Calculator`] facade that bundles them.
//!
//! Every calculator is a pure function of the civil moment, the observer's
//! position, the clock offset and an [`Ephemeris`]. The year, day and hour
//! pillars are read on the true solar clock; the month pillar is read from
//! the Sun's ecliptic longitude at the UTC instant.
//!
//! The month and hour counts are estimated by dividing elapsed time by a
//! mean unit length, then snapped onto an independent exact reading (solar
//! longitude, clock hour) by a correction folded into `[-6, 6)`.

pub mod day;
pub mod epoch;
pub mod hour;
pub mod month;
pub mod year;

use std::str::FromStr;

use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::geo::GeoPosition;
use crate::moment::Moment;
use crate::offset::TimeZoneOffset;
use crate::sexagenary::Pillar;
use crate::solar_time;
use crate::sun::SpaSun;

pub use day::day_pillar;
pub use epoch::Epoch;
pub use hour::hour_pillar;
pub use month::month_pillar;
pub use year::year_pillar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fold a difference of branch indices into `[-6, 6)`.
///
/// ```rust
/// use bazi::pillars::fold_correction;
///
/// assert_eq!(fold_correction(11), -1);
/// assert_eq!(fold_correction(-13), -1);
/// assert_eq!(fold_correction(6), -6);
/// ```
#[inline]
pub fn fold_correction(raw: i64) -> i64 {
    let raw = raw.rem_euclid(12);
    if raw >= 6 {
        raw - 12
    } else {
        raw
    }
}

/// A mean-length count snapped onto an exact branch reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Units counted from the epoch by mean length alone.
    pub estimated: i64,
    /// Folded adjustment, always in `[-6, 6)`.
    pub correction: i64,
}

impl Reconciled {
    /// Snap `estimated` so that `estimated + phase` lands on `exact_branch`
    /// modulo 12.
    pub fn new(estimated: i64, phase: i64, exact_branch: i64) -> Self {
        Self {
            estimated,
            correction: fold_correction(exact_branch - (estimated + phase)),
        }
    }

    /// The corrected count.
    #[inline]
    pub fn count(&self) -> i64 {
        self.estimated + self.correction
    }
}

/// The year, month, day and hour pillars of one moment (八字).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The pillars in reading order.
    pub fn to_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Eight characters, year first.
impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}{}", self.year, self.month, self.day, self.hour)
    }
}

impl FromStr for FourPillars {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 8 {
            return Err(Error::InvalidPillar(s.to_string()));
        }
        let pillar = |i: usize| -> Result<Pillar> {
            chars[2 * i..2 * i + 2].iter().collect::<String>().parse()
        };
        Ok(Self {
            year: pillar(0)?,
            month: pillar(1)?,
            day: pillar(2)?,
            hour: pillar(3)?,
        })
    }
}

/// Pillar calculations for one observer and clock.
///
/// Holds everything a calculation needs besides the moment, so repeated
/// queries share one configuration. Nothing is read from the environment:
/// pass [`TimeZoneOffset::local`] explicitly to follow the host clock.
///
/// ```rust
/// use bazi::{moment, Calculator, TimeZoneOffset};
///
/// let calc = Calculator::new(TimeZoneOffset::CHINA);
/// let pillars = calc
///     .four_pillars(moment::parse("2020-01-01 01:01:01").unwrap())
///     .unwrap();
/// assert_eq!(pillars.to_string(), "己亥丙子癸卯壬子");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<E = SpaSun> {
    ephemeris: E,
    offset: TimeZoneOffset,
    position: GeoPosition,
}

impl Calculator<SpaSun> {
    /// Calculator at [`GeoPosition::REFERENCE`] with the SPA Sun.
    pub fn new(offset: TimeZoneOffset) -> Self {
        Self {
            ephemeris: SpaSun,
            offset,
            position: GeoPosition::REFERENCE,
        }
    }
}

impl<E: Ephemeris> Calculator<E> {
    pub fn with_position(self, position: GeoPosition) -> Self {
        Self { position, ..self }
    }

    pub fn with_offset(self, offset: TimeZoneOffset) -> Self {
        Self { offset, ..self }
    }

    /// Swap the ephemeris, keeping position and offset.
    pub fn with_ephemeris<F: Ephemeris>(self, ephemeris: F) -> Calculator<F> {
        Calculator {
            ephemeris,
            offset: self.offset,
            position: self.position,
        }
    }

    #[inline]
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    #[inline]
    pub fn offset(&self) -> TimeZoneOffset {
        self.offset
    }

    #[inline]
    pub fn position(&self) -> GeoPosition {
        self.position
    }

    pub fn true_solar_time(&self, moment: Moment) -> Result<Moment> {
        solar_time::true_solar_time(&self.ephemeris, moment, self.position, self.offset)
    }

    /// Year pillar read at the calculator's position.
    ///
    /// Use [`GeoPosition::ORIGIN`] as the position, or the free
    /// [`year_pillar`], to count years on the civil clock.
    pub fn year_pillar(&self, moment: Moment) -> Result<Pillar> {
        year_pillar(&self.ephemeris, moment, self.position, self.offset)
    }

    pub fn month_pillar(&self, moment: Moment) -> Result<Pillar> {
        month_pillar(&self.ephemeris, moment, self.position, self.offset)
    }

    pub fn day_pillar(&self, moment: Moment) -> Result<Pillar> {
        day_pillar(&self.ephemeris, moment, self.position, self.offset)
    }

    pub fn hour_pillar(&self, moment: Moment) -> Result<Pillar> {
        hour_pillar(&self.ephemeris, moment, self.position, self.offset)
    }

    /// All four pillars, sharing one true solar time evaluation.
    pub fn four_pillars(&self, moment: Moment) -> Result<FourPillars> {
        let solar = self.true_solar_time(moment)?;
        let year_clock = if self.position.is_origin() {
            moment
        } else {
            solar
        };
        Ok(FourPillars {
            year: year::from_solar_moment(year_clock),
            month: self.month_pillar(moment)?,
            day: day::from_solar_moment(solar),
            hour: hour::from_solar_moment(solar),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Equatorial;
    use crate::instant::Time;
    use crate::scales::UT;
    use chrono::NaiveDate;

    #[test]
    fn fold_stays_in_half_cycle() {
        for raw in -30..30 {
            let folded = fold_correction(raw);
            assert!((-6..6).contains(&folded));
            assert_eq!((raw - folded).rem_euclid(12), 0);
        }
    }

    #[test]
    fn reconciled_count_hits_the_exact_branch() {
        let r = Reconciled::new(297, 3, 0);
        assert_eq!(r.correction, 0);
        let r = Reconciled::new(-1, 3, 3);
        assert_eq!((r.correction, r.count()), (1, 0));
        let r = Reconciled::new(10, 0, 9);
        assert_eq!((r.correction, r.count()), (-1, 9));
    }

    #[test]
    fn four_pillars_text_round_trip() {
        let pillars: FourPillars = "己亥 丙子 癸卯 壬子".parse().unwrap();
        assert_eq!(pillars.to_string(), "己亥丙子癸卯壬子");
        assert_eq!(pillars.to_array()[3].to_string(), "壬子");
        assert!("己亥丙子癸卯".parse::<FourPillars>().is_err());
        assert!("己亥丙子癸卯壬丑".parse::<FourPillars>().is_err());
    }

    #[test]
    fn golden_example() {
        let moment = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(1, 1, 1)
            .unwrap();
        let calc = Calculator::new(TimeZoneOffset::CHINA);
        let pillars = calc.four_pillars(moment).unwrap();
        assert_eq!(pillars.to_string(), "己亥丙子癸卯壬子");
        assert_eq!(calc.year_pillar(moment).unwrap(), pillars.year);
        assert_eq!(calc.month_pillar(moment).unwrap(), pillars.month);
        assert_eq!(calc.day_pillar(moment).unwrap(), pillars.day);
        assert_eq!(calc.hour_pillar(moment).unwrap(), pillars.hour);
    }

    /// Never finds a transit.
    struct Broken;

    impl Ephemeris for Broken {
        fn sun_equatorial(&self, _: Time<UT>, _: GeoPosition) -> Result<Equatorial> {
            Err(Error::OutOfRange)
        }

        fn next_meridian_transit(&self, after: Time<UT>, _: GeoPosition) -> Result<Time<UT>> {
            Err(Error::TransitNotFound(after.value()))
        }
    }

    #[test]
    fn ephemeris_failures_are_atomic() {
        let moment = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let calc = Calculator::new(TimeZoneOffset::CHINA).with_ephemeris(Broken);
        assert!(matches!(calc.four_pillars(moment), Err(Error::TransitNotFound(_))));
        assert_eq!(calc.month_pillar(moment), Err(Error::OutOfRange));

        // At the origin the year pillar needs no ephemeris at all.
        let civil = calc.with_position(GeoPosition::ORIGIN);
        assert_eq!(civil.year_pillar(moment).unwrap().to_string(), "己亥");
    }

    #[test]
    fn builder_keeps_configuration() {
        let calc = Calculator::new(TimeZoneOffset::UTC)
            .with_position(GeoPosition::new(51.5, -0.1))
            .with_offset(TimeZoneOffset::from_hours(1.0))
            .with_ephemeris(SpaSun);
        assert_eq!(calc.offset().half_hours(), 2);
        assert_eq!(calc.position(), GeoPosition::new(51.5, -0.1));
        assert_eq!(*calc.ephemeris(), SpaSun);
    }
}
