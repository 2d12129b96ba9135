// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical instants tagged with their time scale.
//!
//! [`Time<S>`] stores a single [`Days`] quantity whose meaning is fixed at
//! compile time by the marker `S: TimeScale`.  The obliquity of the ecliptic
//! reads instants on the uniform TT axis ([`JD`](crate::JD)) while sidereal time
//! and meridian transits live on Earth-rotation time ([`UT`](crate::UT));
//! keeping the two apart in the type system means a ΔT correction can never
//! be forgotten or applied twice.

use chrono::{DateTime, NaiveDateTime, Utc};
use qtty::{Day, Days, Second, Seconds};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A scale names itself and converts its native day count to and from
/// **Julian Date in TT**, the canonical axis every conversion routes through.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// Convert an absolute JD(TT) back to this scale's native quantity.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`, layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw day count on this scale.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Re-express this instant on another scale, routing through JD(TT).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_days(T::from_jd_tt(S::to_jd_tt(self.quantity)))
    }

    /// Build an instant from a UTC timestamp.
    ///
    /// The timestamp is read as Universal Time; converting to a TT-based
    /// scale applies ΔT on the way.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use crate::scales::UT;
        let seconds = Seconds::new(datetime.timestamp() as f64)
            + Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let jd_ut = UNIX_EPOCH_JD + seconds.to::<Day>();
        Time::<UT>::from_days(jd_ut).to::<S>()
    }

    /// Convert back to a UTC timestamp.
    ///
    /// Returns `None` if the instant falls outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use crate::scales::UT;
        let jd_ut = self.to::<UT>().quantity();
        let seconds = (jd_ut - UNIX_EPOCH_JD).to::<Second>().value();
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor();
        let nanos = ((seconds - secs) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }

    /// Build an instant from a zone-naive clock reading already expressed
    /// in UTC.
    #[inline]
    pub fn from_naive_utc(moment: NaiveDateTime) -> Self {
        Self::from_utc(moment.and_utc())
    }

    /// Zone-naive UTC clock reading of this instant.
    pub fn to_naive_utc(&self) -> Result<NaiveDateTime> {
        self.to_utc()
            .map(|utc| utc.naive_utc())
            .ok_or(Error::OutOfRange)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
