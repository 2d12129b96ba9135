// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): UT↔TT correction
//!
//! **ΔT = TT − UT** from the polynomial expressions of Espenak & Meeus
//! (*Five Millennium Canon of Solar Eclipses*, NASA/TP-2006-214141),
//! restricted to the spans this crate's epochs and typical inputs need
//! (1800–2150), with the Morrison & Stephenson (2004) long-term parabola
//! outside.
//!
//! The correction is applied automatically by the [`UT`](crate::UT) scale.
//! A one-minute error in ΔT moves the Sun by about 0.0007°, so the model
//! only has to be good to a few seconds for the pillars to be stable.
//!
//! ```rust
//! use bazi::{Time, UT};
//!
//! let ut = Time::<UT>::new(2_451_545.0);
//! let dt = ut.delta_t();
//! assert!((dt.value() - 63.9).abs() < 1.0);
//! ```

use super::instant::Time;
use super::scales::UT;
use qtty::{Days, Seconds, Simplify};

/// JD(UT) of 2000-01-01T00:00.
const JD_2000_JAN_0: Days = Days::new(2_451_544.5);

/// Mean Gregorian year.
const GREGORIAN_YEAR: Days = Days::new(365.2425);

// Coefficients run lowest order first; the k-th term is in s/yrᵏ.

#[rustfmt::skip]
const SINCE_1800: [Seconds; 8] = qtty::qtty_vec!(
    Seconds;
    13.72, -0.332447, 0.006_861_2, 0.004_111_6,
    -0.000_374_36, 0.000_012_127_2, -0.000_000_169_9, 0.000_000_000_875,
);

#[rustfmt::skip]
const SINCE_1860: [Seconds; 6] = qtty::qtty_vec!(
    Seconds;
    7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4, 0.000_004_288_6,
);

#[rustfmt::skip]
const SINCE_1900: [Seconds; 5] = qtty::qtty_vec!(
    Seconds;
    -2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197,
);

#[rustfmt::skip]
const SINCE_1920: [Seconds; 4] = qtty::qtty_vec!(Seconds; 21.20, 0.844_93, -0.076_100, 0.002_093_6);

/// Centred on 1950.
#[rustfmt::skip]
const AROUND_1950: [Seconds; 4] = qtty::qtty_vec!(Seconds; 29.07, 0.407, -0.004_291_845, 0.000_392_618_8);

/// Centred on 1975.
#[rustfmt::skip]
const AROUND_1975: [Seconds; 4] = qtty::qtty_vec!(Seconds; 45.45, 1.067, -0.003_846_154, -0.001_392_758);

/// Centred on 2000.
#[rustfmt::skip]
const AROUND_2000: [Seconds; 6] = qtty::qtty_vec!(
    Seconds;
    63.86, 0.3345, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99,
);

#[rustfmt::skip]
const SINCE_2005: [Seconds; 3] = qtty::qtty_vec!(Seconds; 62.92, 0.322_17, 0.005_589);

/// Parabola in centuries from 1820.
#[rustfmt::skip]
const LONG_TERM: [Seconds; 3] = qtty::qtty_vec!(Seconds; -20.0, 0.0, 32.0);

/// Per-year blend that joins the 2005–2050 span to the parabola at 2150.
const LONG_TERM_BLEND: Seconds = Seconds::new(0.5628);

/// Horner evaluation in `t`.
#[inline]
fn horner(t: f64, coeffs: &[Seconds]) -> Seconds {
    coeffs
        .iter()
        .rev()
        .fold(Seconds::new(0.0), |acc, &c| acc * t + c)
}

#[inline]
fn long_term(year: f64) -> Seconds {
    horner((year - 1820.0) / 100.0, &LONG_TERM)
}

/// ΔT for a decimal Gregorian year.
fn delta_t_for_year(year: f64) -> Seconds {
    match year {
        y if y < 1800.0 => long_term(y),
        y if y < 1860.0 => horner(y - 1800.0, &SINCE_1800),
        y if y < 1900.0 => horner(y - 1860.0, &SINCE_1860),
        y if y < 1920.0 => horner(y - 1900.0, &SINCE_1900),
        y if y < 1941.0 => horner(y - 1920.0, &SINCE_1920),
        y if y < 1961.0 => horner(y - 1950.0, &AROUND_1950),
        y if y < 1986.0 => horner(y - 1975.0, &AROUND_1975),
        y if y < 2005.0 => horner(y - 2000.0, &AROUND_2000),
        y if y < 2050.0 => horner(y - 2000.0, &SINCE_2005),
        y if y < 2150.0 => long_term(y) - LONG_TERM_BLEND * (2150.0 - y),
        y => long_term(y),
    }
}

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// Returns **ΔT** for a Julian Day on the **UT** axis.
#[inline]
pub(crate) fn delta_t_seconds(jd_ut: Days) -> Seconds {
    delta_t_for_year(2000.0 + days_ratio(jd_ut - JD_2000_JAN_0, GREGORIAN_YEAR))
}

impl Time<UT> {
    /// **ΔT = TT − UT** for this UT epoch.
    ///
    /// The same correction is applied when converting with `.to::<JD>()`.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds(self.quantity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Seconds, b: Seconds, tolerance: f64) -> bool {
        (a - b).abs() < Seconds::new(tolerance)
    }

    #[test]
    fn delta_t_2000() {
        assert!(close(delta_t_for_year(2000.0), Seconds::new(63.86), 1e-9));
    }

    #[test]
    fn delta_t_1900_is_near_zero() {
        // Observed ΔT at 1900.0 ≈ −2.8 s.
        assert!(close(delta_t_for_year(1900.0), Seconds::new(-2.79), 1e-9));
    }

    #[test]
    fn delta_t_1984() {
        // Observed ΔT at 1984.0 ≈ 53.8 s.
        assert!(close(delta_t_for_year(1984.0), Seconds::new(53.8), 1.0));
    }

    #[test]
    fn delta_t_2020_is_within_a_few_seconds_of_observed() {
        // Observed ΔT at 2020.0 ≈ 69.4 s; the 2005–2050 span runs ~2 s high.
        let dt = delta_t_for_year(2020.0);
        assert!(close(dt, Seconds::new(71.599), 1e-3), "{dt}");
        assert!(close(dt, Seconds::new(69.4), 3.0));
    }

    #[test]
    fn segments_join_without_jumps() {
        for boundary in [1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = delta_t_for_year(boundary - 1e-6);
            let after = delta_t_for_year(boundary);
            assert!(close(before, after, 2.0), "jump of {} at {boundary}", before - after);
        }
    }

    #[test]
    fn ancient_epochs_use_the_parabola() {
        let dt = delta_t_for_year(1000.0);
        assert!(close(dt, long_term(1000.0), 1e-9));
        assert!(dt > Seconds::new(1_500.0));
    }

    #[test]
    fn julian_day_maps_to_decimal_year() {
        let jan_0 = delta_t_seconds(JD_2000_JAN_0);
        assert!(close(jan_0, delta_t_for_year(2000.0), 1e-9));
    }

    #[test]
    fn convenience_method_matches_free_function() {
        let ut = Time::<UT>::new(2_451_545.0);
        assert_eq!(ut.delta_t(), delta_t_seconds(Days::new(2_451_545.0)));
    }
}
