// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale markers.
//!
//! | Marker | Axis | Used for |
//! |--------|------|----------|
//! | [`JD`] | Julian Date on TT | obliquity of the ecliptic |
//! | [`UT`] | Julian Date on UT | sidereal time, meridian transit, civil clocks |

use super::instant::TimeScale;
use qtty::{Day, Days};

/// Julian Date on the uniform TT axis, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time, the civil scale tied to Earth's rotation.
///
/// Converting to [`JD`] adds ΔT (see [`Time::<UT>::delta_t`](crate::Time::delta_t)); the inverse
/// solves `ut + ΔT(ut) = tt` by fixed-point iteration.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        ut_value + super::delta_t::delta_t_seconds(ut_value).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // dΔT/dJD is ~1e-8, three rounds are far below a microsecond.
        let mut ut = jd_tt;
        for _ in 0..3 {
            ut = jd_tt - super::delta_t::delta_t_seconds(ut).to::<Day>();
        }
        ut
    }
}
