// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate-wide error type.

/// Errors produced while parsing inputs or evaluating a pillar.
///
/// Every failure is atomic: a calculation either yields its full result or
/// one of these variants, never a partially filled value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A latitude or longitude string is neither decimal nor sexagesimal.
    #[error("invalid angle `{0}`")]
    InvalidAngle(String),

    /// A time-zone offset string could not be read.
    #[error("invalid time zone offset `{0}`")]
    InvalidOffset(String),

    /// A civil date-time string could not be read.
    #[error("invalid moment `{input}`: {source}")]
    InvalidMoment {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A string is not one of the 60 reachable Stem-Branch pairs.
    #[error("invalid pillar `{0}`")]
    InvalidPillar(String),

    /// The ephemeris rejected a query, e.g. a latitude outside ±90°.
    #[error("ephemeris failure: {0}")]
    Ephemeris(String),

    /// The ephemeris could not locate a meridian transit.
    #[error("no meridian transit found after JD(UT) {0}")]
    TransitNotFound(f64),

    /// An instant fell outside chrono's representable range.
    #[error("instant outside the representable calendar range")]
    OutOfRange,
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
