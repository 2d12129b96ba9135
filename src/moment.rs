// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil moments: zone-naive clock readings as seen by the observer.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// A civil, zone-naive timestamp.
pub type Moment = NaiveDateTime;

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Accepted layouts, tried in order. `%.f` also matches an empty fraction.
/// A failure reports the error of the last layout.
const LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parse `YYYY-MM-DD HH:MM:SS[.fff]` (a `T` separator is also accepted).
///
/// ```rust
/// let m = bazi::moment::parse("2020-01-01 01:01:01").unwrap();
/// assert_eq!(m.to_string(), "2020-01-01 01:01:01");
/// ```
pub fn parse(input: &str) -> Result<Moment> {
    let trimmed = input.trim();
    let [leading @ .., last] = LAYOUTS;
    leading
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map_or_else(|| NaiveDateTime::parse_from_str(trimmed, last), Ok)
        .map_err(|source| Error::InvalidMoment {
            input: input.to_string(),
            source,
        })
}

/// Whole days from `since` to `moment`, floored.
#[inline]
pub fn days_between(since: Moment, moment: Moment) -> i64 {
    (moment - since).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Fractional hours from `since` to `moment`.
#[inline]
pub fn hours_between(since: Moment, moment: Moment) -> f64 {
    (moment - since).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
