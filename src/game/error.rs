use thiserror::Error;

use crate::domain::puzzle::{InvalidPuzzleId, PuzzleId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidPuzzleId(#[from] InvalidPuzzleId),

    #[error("puzzle {0} is not available yet")]
    PuzzleNotYetAvailable(PuzzleId),

    #[error("no track available for puzzle {0}")]
    NoTrackAvailable(PuzzleId),

    #[error("missing field '{0}'")]
    MissingField(&'static str),
}
