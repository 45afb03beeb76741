use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies the daily puzzle: the UTC calendar date it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId(pub NaiveDate);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid puzzle id '{0}', expected YYYY-MM-DD")]
pub struct InvalidPuzzleId(pub String);

impl PuzzleId {
    pub fn today() -> Self {
        Self(today_utc())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for PuzzleId {
    type Err = InvalidPuzzleId;

    /// Only the zero-padded `YYYY-MM-DD` form is accepted,
    /// so that every puzzle has exactly one id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| InvalidPuzzleId(s.to_string()))?;
        let id = Self(date);
        if id.to_string() != s {
            return Err(InvalidPuzzleId(s.to_string()));
        }
        Ok(id)
    }
}

/// Current calendar date in UTC.
///
/// Everyone sees the same puzzle, switching at UTC midnight.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// What a puzzle looks like for a given day. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleView {
    pub puzzle_id: PuzzleId,
    pub reference: String,
    pub answer: String,
    /// false when the catalog had nothing for the day
    pub available: bool,
}

pub const NO_TRACK_ANSWER: &str = "No track available today";

impl PuzzleView {
    pub fn unavailable(puzzle_id: PuzzleId) -> Self {
        Self {
            puzzle_id,
            reference: String::new(),
            answer: NO_TRACK_ANSWER.to_string(),
            available: false,
        }
    }
}
