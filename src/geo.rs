// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer position on the Earth.

use qtty::Degrees;
use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic latitude and longitude of the observer, east and north positive.
///
/// Ranges are not validated: an out-of-range coordinate is handed to the
/// ephemeris as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoPosition {
    /// Beijing, Dongcheng (39.9°N, 116.4°E): the default reference location.
    pub const REFERENCE: Self = Self::new(39.9, 116.4);

    /// (0°, 0°). Passed to the year pillar it means "use civil time as-is".
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Position from decimal degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }

    /// Position from two angle strings, each decimal (`"39.9"`) or
    /// sexagesimal (`"39:54:00"`).
    ///
    /// ```rust
    /// use bazi::GeoPosition;
    ///
    /// let p = GeoPosition::parse("39:54", "116.4").unwrap();
    /// assert!((p.latitude().value() - 39.9).abs() < 1e-12);
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self {
            latitude: parse_degrees(latitude)?,
            longitude: parse_degrees(longitude)?,
        })
    }

    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// `true` for exactly (0°, 0°).
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.latitude.value() == 0.0 && self.longitude.value() == 0.0
    }
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Reads `"latitude,longitude"`.
impl FromStr for GeoPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidAngle(s.to_string()))?;
        Self::parse(lat, lon)
    }
}

impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.5},{:.5}",
            self.latitude.value(),
            self.longitude.value()
        )
    }
}

/// Parse a signed angle in decimal degrees or `d:m[:s]` sexagesimal form.
pub fn parse_degrees(input: &str) -> Result<Degrees> {
    let invalid = || Error::InvalidAngle(input.to_string());
    let trimmed = input.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total = 0.0;
    let mut unit = 1.0;
    for (i, field) in body.split(':').enumerate() {
        if i > 2 {
            return Err(invalid());
        }
        let value: f64 = field.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        total += value / unit;
        unit *= 60.0;
    }
    Ok(Degrees::new(sign * total))
}
