// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference instants with a known Stem-Branch identity.
//!
//! Each calculator counts whole units (years, months, days, two-hour
//! periods) from its epoch and adds the epoch's own cycle position, so the
//! stem and branch phases below are read off the epoch's pillar rather than
//! written as literals.
//!
//! | Epoch | Civil instant | Pillar | Stem phase | Branch phase |
//! |-------|---------------|--------|-----------:|-------------:|
//! | [`YEAR`] | 2000-02-04 20:40:24 (立春) | 庚辰 | 6 | 4 |
//! | [`MONTH`] | 2000-03-05 14:42:40 (驚蟄) | 己卯 | 5 | 3 |
//! | [`DAY`] | 1900-01-01 00:00:00 | 甲戌 | 0 | 10 |
//! | [`HOUR`] | 1983-12-21 23:42:15 | 甲子 | 0 | 0 |

use chrono::{DateTime, TimeDelta, Utc};

use crate::moment::Moment;
use crate::sexagenary::{Branch, Pillar, Stem};

/// A civil instant paired with the pillar it is known to carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Epoch {
    /// Seconds from 1970-01-01 00:00:00 on the same naive clock.
    timestamp: i64,
    pillar: Pillar,
}

impl Epoch {
    const fn new(timestamp: i64, stem: Stem, branch: Branch) -> Self {
        Self {
            timestamp,
            pillar: Pillar { stem, branch },
        }
    }

    /// The epoch as a zone-naive clock reading.
    pub fn moment(&self) -> Moment {
        DateTime::<Utc>::UNIX_EPOCH.naive_utc() + TimeDelta::seconds(self.timestamp)
    }

    #[inline]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub const fn pillar(&self) -> Pillar {
        self.pillar
    }

    /// Stem index reached after zero elapsed units.
    #[inline]
    pub const fn stem_phase(&self) -> i64 {
        self.pillar.stem.index()
    }

    /// Branch index reached after zero elapsed units.
    #[inline]
    pub const fn branch_phase(&self) -> i64 {
        self.pillar.branch.index()
    }

    /// Pillar reached after `elapsed` units from this epoch.
    #[inline]
    pub fn advance(&self, elapsed: i64) -> Pillar {
        Pillar {
            stem: Stem::from_index(elapsed + self.stem_phase()),
            branch: Branch::from_index(elapsed + self.branch_phase()),
        }
    }
}

/// Start of spring (立春) 2000, a 庚辰 year.
pub const YEAR: Epoch = Epoch::new(949_696_824, Stem::Geng, Branch::Chen);

/// Awakening of insects (驚蟄) 2000, opening a 己卯 month.
pub const MONTH: Epoch = Epoch::new(952_267_360, Stem::Ji, Branch::Mao);

/// 1900-01-01, a 甲戌 day.
pub const DAY: Epoch = Epoch::new(-2_208_988_800, Stem::Jia, Branch::Xu);

/// Start of a 甲子 two-hour period on the winter solstice of 1983.
pub const HOUR: Epoch = Epoch::new(440_898_135, Stem::Jia, Branch::Zi);
