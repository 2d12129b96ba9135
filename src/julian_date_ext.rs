// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian-date epochs and century counts for obliquity and sidereal time.

use qtty::{Centuries, Days};

use super::instant::{Time, TimeScale};

/// JD 2 451 545.0, the J2000.0 reference on any Julian-day axis.
const J2000_JD: f64 = 2_451_545.0;

impl<S: TimeScale> Time<S> {
    /// J2000.0 on this scale's own axis (2000-01-01T12:00 of the scale).
    pub const J2000: Self = Self::new(J2000_JD);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries elapsed since J2000.0 on this scale's axis.
    ///
    /// On [`JD`](crate::JD) this is the `T` of the obliquity; on
    /// [`UT`](crate::UT) it is the `T` of Greenwich sidereal time.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((*self - Self::J2000).value() / Self::JULIAN_CENTURY.value())
    }

    /// Days elapsed since J2000.0 on this scale's axis.
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        (*self - Self::J2000).value()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Time, JD, UT};

    #[test]
    fn j2000_is_zero_centuries() {
        assert_eq!(Time::<JD>::J2000.julian_centuries().value(), 0.0);
        assert_eq!(Time::<UT>::J2000.days_since_j2000(), 0.0);
    }

    #[test]
    fn one_century_later() {
        let t = Time::<JD>::new(2_451_545.0 + 36_525.0);
        assert!((t.julian_centuries().value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn centuries_are_negative_before_j2000() {
        let t = Time::<UT>::new(2_415_020.5);
        assert!((t.julian_centuries().value() + 0.999_986_3).abs() < 1e-6);
    }
}
