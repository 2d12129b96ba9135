// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Heavenly Stems, Earthly Branches and the 60-step cycle they form.

use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates the shared surface of a cyclic symbol enum.
macro_rules! cyclic_symbol {
    (
        $(#[$meta:meta])*
        $name:ident, $len:literal, [$(($variant:ident, $glyph:literal, $pinyin:literal)),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Cycle length.
            pub const COUNT: usize = $len;

            /// Every symbol, in cycle order.
            pub const ALL: [Self; $len] = [$(Self::$variant),+];

            /// Symbol at position `index` of the cycle, taken modulo its length.
            #[inline]
            pub fn from_index(index: i64) -> Self {
                Self::ALL[index.rem_euclid($len) as usize]
            }

            /// Position in `[0, COUNT)`.
            #[inline]
            pub const fn index(self) -> i64 {
                self as i64
            }

            /// The Chinese character.
            pub const fn as_char(self) -> char {
                match self {
                    $(Self::$variant => $glyph),+
                }
            }

            /// Pinyin with tone marks.
            pub const fn pinyin(self) -> &'static str {
                match self {
                    $(Self::$variant => $pinyin),+
                }
            }

            /// Symbol written as `c`, if any.
            pub fn from_char(c: char) -> Option<Self> {
                Self::ALL.into_iter().find(|symbol| symbol.as_char() == c)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }
    };
}

cyclic_symbol!(
    /// Heavenly Stem (天干).
    Stem, 10, [
        (Jia, '甲', "jiǎ"),
        (Yi, '乙', "yǐ"),
        (Bing, '丙', "bǐng"),
        (Ding, '丁', "dīng"),
        (Wu, '戊', "wù"),
        (Ji, '己', "jǐ"),
        (Geng, '庚', "gēng"),
        (Xin, '辛', "xīn"),
        (Ren, '壬', "rén"),
        (Gui, '癸', "guǐ"),
    ]
);

cyclic_symbol!(
    /// Earthly Branch (地支).
    Branch, 12, [
        (Zi, '子', "zǐ"),
        (Chou, '丑', "chǒu"),
        (Yin, '寅', "yín"),
        (Mao, '卯', "mǎo"),
        (Chen, '辰', "chén"),
        (Si, '巳', "sì"),
        (Wu, '午', "wǔ"),
        (Wei, '未', "wèi"),
        (Shen, '申', "shēn"),
        (You, '酉', "yǒu"),
        (Xu, '戌', "xū"),
        (Hai, '亥', "hài"),
    ]
);

/// A Stem-Branch pair (柱), one of the 60 steps of the sexagenary cycle.
///
/// Stem and branch advance in lockstep, so only pairs whose indices share
/// parity are reachable; [`Pillar::new`] rejects the other 60.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// 甲子, step 0 of the cycle.
    pub const JIA_ZI: Self = Self {
        stem: Stem::Jia,
        branch: Branch::Zi,
    };

    /// Pair `stem` with `branch`, or `None` for an unreachable combination.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        (stem.index() % 2 == branch.index() % 2).then_some(Self { stem, branch })
    }

    /// Pillar after `steps` steps of the cycle from 甲子 (any integer).
    ///
    /// ```rust
    /// use bazi::Pillar;
    ///
    /// assert_eq!(Pillar::from_cycle(16).to_string(), "庚辰");
    /// assert_eq!(Pillar::from_cycle(-1).to_string(), "癸亥");
    /// ```
    #[inline]
    pub fn from_cycle(steps: i64) -> Self {
        Self {
            stem: Stem::from_index(steps),
            branch: Branch::from_index(steps),
        }
    }

    /// Position in `[0, 60)`, the inverse of [`Pillar::from_cycle`].
    pub fn cycle_index(&self) -> i64 {
        // n ≡ s (mod 10), n ≡ b (mod 12): n = 6s − 5b (mod 60).
        (6 * self.stem.index() - 5 * self.branch.index()).rem_euclid(60)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPillar(s.to_string());
        let mut chars = s.trim().chars();
        let stem = chars.next().and_then(Stem::from_char).ok_or_else(invalid)?;
        let branch = chars.next().and_then(Branch::from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Self::new(stem, branch).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_covers_sixty_distinct_pillars() {
        let mut seen = std::collections::HashSet::new();
        for n in 0..60 {
            let pillar = Pillar::from_cycle(n);
            assert_eq!(pillar.cycle_index(), n);
            assert!(seen.insert(pillar));
        }
        assert_eq!(Pillar::from_cycle(60), Pillar::JIA_ZI);
    }

    #[test]
    fn negative_steps_wrap() {
        assert_eq!(Pillar::from_cycle(-60), Pillar::JIA_ZI);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
    }

    #[test]
    fn parity_mismatch_is_unreachable() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
        assert_eq!(Pillar::new(Stem::Jia, Branch::Zi), Some(Pillar::JIA_ZI));
    }

    #[test]
    fn parse_and_display() {
        for text in ["甲子", "庚辰", "己卯", "甲戌", "癸亥"] {
            let pillar: Pillar = text.parse().unwrap();
            assert_eq!(pillar.to_string(), text);
        }
        for bad in ["", "甲", "甲丑", "子甲", "甲子子", "ab"] {
            assert_eq!(
                bad.parse::<Pillar>(),
                Err(Error::InvalidPillar(bad.to_string()))
            );
        }
    }

    #[test]
    fn symbols_round_trip_through_chars() {
        for stem in Stem::ALL {
            assert_eq!(Stem::from_char(stem.as_char()), Some(stem));
        }
        for branch in Branch::ALL {
            assert_eq!(Branch::from_char(branch.as_char()), Some(branch));
        }
        assert_eq!(Branch::Chen.pinyin(), "chén");
        assert_eq!(Stem::COUNT * Branch::COUNT / 2, 60);
    }
}
