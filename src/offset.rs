// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock-to-UTC offset of the observer.
//!
//! Every calculator takes the offset as an explicit input so that a result
//! depends only on its arguments. [`TimeZoneOffset::local`] and
//! [`TimeZoneOffset::local_at`] read the executing environment and are the
//! only impure entry points in the crate.

use chrono::{Local, NaiveDateTime, Offset, TimeDelta, TimeZone};
use qtty::Hours;
use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SECONDS_PER_STEP: i64 = 1_800;

/// Signed offset `local − UTC`, quantised to half hours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeZoneOffset {
    half_hours: i32,
}

impl TimeZoneOffset {
    pub const UTC: Self = Self { half_hours: 0 };

    /// China Standard Time, UTC+8.
    pub const CHINA: Self = Self { half_hours: 16 };

    /// Offset from a whole number of half-hour steps.
    pub const fn from_half_hours(half_hours: i32) -> Self {
        Self { half_hours }
    }

    /// Offset from fractional hours, rounded to the nearest half hour.
    ///
    /// Ties go away from zero: `floor(h/0.5 + 0.5)` for non-negative input,
    /// `ceil(h/0.5 − 0.5)` for negative input.
    ///
    /// ```rust
    /// use bazi::TimeZoneOffset;
    ///
    /// assert_eq!(TimeZoneOffset::from_hours(5.75).hours().value(), 6.0);
    /// assert_eq!(TimeZoneOffset::from_hours(-3.25).hours().value(), -3.5);
    /// ```
    pub fn from_hours(hours: f64) -> Self {
        let steps = if hours >= 0.0 {
            (hours / 0.5 + 0.5).floor()
        } else {
            (hours / 0.5 - 0.5).ceil()
        };
        Self {
            half_hours: steps as i32,
        }
    }

    /// Offset from seconds east of UTC, rounded like [`Self::from_hours`].
    pub fn from_seconds(seconds: i32) -> Self {
        Self::from_hours(f64::from(seconds) / 3_600.0)
    }

    /// Offset of the executing environment's local zone right now.
    pub fn local() -> Self {
        Self::from_seconds(Local::now().offset().local_minus_utc())
    }

    /// Offset the local zone had at the given civil moment.
    ///
    /// Unlike [`Self::local`] this is reproducible for historical moments;
    /// ambiguous readings take the earlier offset, skipped ones fall back to
    /// the current offset.
    pub fn local_at(moment: NaiveDateTime) -> Self {
        match Local.offset_from_local_datetime(&moment).earliest() {
            Some(offset) => Self::from_seconds(offset.fix().local_minus_utc()),
            None => Self::local(),
        }
    }

    #[inline]
    pub const fn half_hours(&self) -> i32 {
        self.half_hours
    }

    #[inline]
    pub fn hours(&self) -> Hours {
        Hours::new(f64::from(self.half_hours) * 0.5)
    }

    /// The offset as a chrono duration.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.half_hours) * SECONDS_PER_STEP)
    }

    /// Civil clock reading → UTC clock reading.
    ///
    /// Fails with [`Error::OutOfRange`] when the shift leaves chrono's range.
    #[inline]
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<NaiveDateTime> {
        local.checked_sub_signed(self.duration()).ok_or(Error::OutOfRange)
    }

    /// UTC clock reading → civil clock reading.
    #[inline]
    pub fn to_local(&self, utc: NaiveDateTime) -> Result<NaiveDateTime> {
        utc.checked_add_signed(self.duration()).ok_or(Error::OutOfRange)
    }
}

/// Accepts `+08:00`, `-05:30`, `8`, `-3.5`, `UTC+8`, `GMT-3:30` and `Z`.
impl FromStr for TimeZoneOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidOffset(s.to_string());
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("UTC")
            .or_else(|| trimmed.strip_prefix("GMT"))
            .unwrap_or(trimmed);
        if body.is_empty() || body == "Z" {
            return if trimmed.is_empty() {
                Err(invalid())
            } else {
                Ok(Self::UTC)
            };
        }

        let (sign, magnitude) = match body.as_bytes()[0] {
            b'-' => (-1.0, &body[1..]),
            b'+' => (1.0, &body[1..]),
            _ => (1.0, body),
        };
        let hours = match magnitude.split_once(':') {
            Some((h, m)) => {
                let h: u32 = h.parse().map_err(|_| invalid())?;
                let m: u32 = m.parse().map_err(|_| invalid())?;
                if m >= 60 {
                    return Err(invalid());
                }
                f64::from(h) + f64::from(m) / 60.0
            }
            None => {
                let h: f64 = magnitude.parse().map_err(|_| invalid())?;
                if !h.is_finite() || h < 0.0 {
                    return Err(invalid());
                }
                h
            }
        };
        if hours > 18.0 {
            return Err(invalid());
        }
        Ok(Self::from_hours(sign * hours))
    }
}

impl std::fmt::Display for TimeZoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.half_hours < 0 { '-' } else { '+' };
        let steps = self.half_hours.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", steps / 2, (steps % 2) * 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn rounds_half_steps_away_from_zero() {
        assert_eq!(TimeZoneOffset::from_hours(8.0).half_hours(), 16);
        assert_eq!(TimeZoneOffset::from_hours(5.75).half_hours(), 12);
        assert_eq!(TimeZoneOffset::from_hours(5.7).half_hours(), 11);
        assert_eq!(TimeZoneOffset::from_hours(-3.25).half_hours(), -7);
        assert_eq!(TimeZoneOffset::from_hours(-3.2).half_hours(), -6);
        assert_eq!(TimeZoneOffset::from_hours(0.2).half_hours(), 0);
        assert_eq!(TimeZoneOffset::from_hours(-0.2).half_hours(), 0);
    }

    #[test]
    fn from_seconds_matches_hours() {
        assert_eq!(TimeZoneOffset::from_seconds(8 * 3_600), TimeZoneOffset::CHINA);
        assert_eq!(
            TimeZoneOffset::from_seconds(-(9 * 3_600 + 1_800)),
            TimeZoneOffset::from_hours(-9.5)
        );
        // Nepal, UTC+5:45.
        assert_eq!(TimeZoneOffset::from_seconds(20_700).half_hours(), 12);
    }

    #[test]
    fn converts_clock_readings() {
        let local = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(1, 1, 1)
            .unwrap();
        let utc = TimeZoneOffset::CHINA.to_utc(local).unwrap();
        assert_eq!(
            utc,
            NaiveDate::from_ymd_opt(2019, 12, 31)
                .unwrap()
                .and_hms_opt(17, 1, 1)
                .unwrap()
        );
        assert_eq!(TimeZoneOffset::CHINA.to_local(utc).unwrap(), local);
    }

    #[test]
    fn shifts_past_chrono_range_fail() {
        let west = TimeZoneOffset::from_hours(-5.0);
        assert_eq!(
            TimeZoneOffset::CHINA.to_utc(NaiveDateTime::MIN),
            Err(Error::OutOfRange)
        );
        assert_eq!(west.to_utc(NaiveDateTime::MAX), Err(Error::OutOfRange));
        assert_eq!(west.to_local(NaiveDateTime::MIN), Err(Error::OutOfRange));
        assert_eq!(
            TimeZoneOffset::UTC.to_utc(NaiveDateTime::MAX),
            Ok(NaiveDateTime::MAX)
        );
    }

    #[test]
    fn parses_common_spellings() {
        let cases = [
            ("+08:00", 16),
            ("-05:30", -11),
            ("8", 16),
            ("-3.5", -7),
            ("UTC+8", 16),
            ("GMT-3:30", -7),
            ("UTC", 0),
            ("Z", 0),
        ];
        for (input, half_hours) in cases {
            let offset: TimeZoneOffset = input.parse().unwrap();
            assert_eq!(offset.half_hours(), half_hours, "{input}");
        }
    }

    #[test]
    fn rejects_malformed_offsets() {
        for bad in ["", "+", "eight", "+08:75", "+25", "--1", "1:2:3"] {
            assert_eq!(
                bad.parse::<TimeZoneOffset>(),
                Err(Error::InvalidOffset(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn display_is_iso_style() {
        assert_eq!(TimeZoneOffset::CHINA.to_string(), "+08:00");
        assert_eq!(TimeZoneOffset::from_hours(-9.5).to_string(), "-09:30");
        assert_eq!(TimeZoneOffset::UTC.to_string(), "+00:00");
    }

    #[test]
    fn local_offset_is_quantised() {
        let offset = TimeZoneOffset::local();
        assert!(offset.half_hours().abs() <= 36);
    }
}
