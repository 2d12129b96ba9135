// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Four Pillars (八字) from civil time
//!
//! This crate turns a civil clock reading, an observer position and the
//! clock's UTC offset into the sexagenary year, month, day and hour pillars.
//! The year, day and hour are read on true solar time; the month follows the
//! Sun's ecliptic longitude.
//!
//! # Core types
//!
//! - [`Calculator`]: one observer and clock, all pillar calculations.
//! - [`Pillar`]: a Stem-Branch pair; [`Stem`] and [`Branch`] are its halves.
//! - [`FourPillars`]: year, month, day and hour pillars of one moment.
//! - [`GeoPosition`]: observer latitude and longitude.
//! - [`TimeZoneOffset`]: civil clock offset from UTC, in half hours.
//! - [`Moment`]: a zone-naive civil clock reading.
//! - [`Ephemeris`]: what the calculators need from a solar ephemeris;
//!   [`SpaSun`] (NREL SPA) is the default.
//! - [`Time<S>`]: astronomical instant on a [`TimeScale`] ([`JD`] or [`UT`]).
//!
//! # Example
//!
//! ```rust
//! use bazi::{moment, Calculator, GeoPosition, TimeZoneOffset};
//!
//! let calc = Calculator::new(TimeZoneOffset::CHINA).with_position(GeoPosition::REFERENCE);
//! let birth = moment::parse("2020-01-01 01:01:01")?;
//!
//! assert_eq!(calc.four_pillars(birth)?.to_string(), "己亥丙子癸卯壬子");
//! # Ok::<(), bazi::Error>(())
//! ```
//!
//! # Purity
//!
//! Results depend only on the arguments. The clock offset is always an
//! input; [`TimeZoneOffset::local`] and [`TimeZoneOffset::local_at`] are
//! the helpers that read it from the host.

mod delta_t;
pub mod ephemeris;
mod error;
pub mod geo;
pub(crate) mod instant;
mod julian_date_ext;
pub mod moment;
pub mod offset;
pub mod pillars;
pub(crate) mod scales;
pub mod sexagenary;
pub mod solar_time;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use ephemeris::{Ecliptic, Ephemeris, Equatorial};
pub use error::{Error, Result};
pub use geo::GeoPosition;
pub use instant::{Time, TimeScale};
pub use moment::Moment;
pub use offset::TimeZoneOffset;
pub use pillars::{day_pillar, hour_pillar, month_pillar, year_pillar, Calculator, FourPillars};
pub use scales::{JD, UT};
pub use sexagenary::{Branch, Pillar, Stem};
pub use solar_time::true_solar_time;
pub use sun::SpaSun;
