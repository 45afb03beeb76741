use chrono::NaiveDate;

use crate::{
    catalog::Catalog,
    config::{Authority, GameConfig},
    domain::{
        outcome::GuessOutcome,
        puzzle::{PuzzleId, PuzzleView},
    },
    game::{error::GameError, grader, selector},
};

/// Main structure that implements the game: puzzle of the day and guess grading.
///
/// Holds no mutable state, so one instance is shared by all requests.
pub struct Game {
    catalog: Catalog,
    config: GameConfig,
}

/// A guess as sent by a client.
///
/// Which of `answer` / `puzzle_id` is needed depends on the configured authority.
#[derive(Debug, Default, Clone)]
pub struct GuessSubmission {
    pub guess: String,
    pub answer: Option<String>,
    pub puzzle_id: Option<String>,
    pub final_attempt: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GradedGuess {
    pub outcome: GuessOutcome,
    /// revealed once the game is over for this client
    pub answer: Option<String>,
}

impl Game {
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The puzzle of the given day. A gap in the catalog yields the "unavailable" view.
    pub fn puzzle_for(&self, id: PuzzleId) -> PuzzleView {
        match selector::select_for_date(id.date(), &self.catalog, self.config.fallback) {
            Some(record) => PuzzleView {
                puzzle_id: id,
                reference: record.reference.clone(),
                answer: record.answer.clone(),
                available: true,
            },
            None => PuzzleView::unavailable(id),
        }
    }

    /// The puzzle of a past day, or of today. Future puzzles stay hidden.
    pub fn replay(&self, puzzle_id: &str, today: NaiveDate) -> Result<PuzzleView, GameError> {
        let id = Self::released_puzzle(puzzle_id, today)?;
        Ok(self.puzzle_for(id))
    }

    pub fn grade_guess(
        &self,
        submission: GuessSubmission,
        today: NaiveDate,
    ) -> Result<GradedGuess, GameError> {
        match self.config.authority {
            Authority::Client => {
                let answer = submission
                    .answer
                    .ok_or(GameError::MissingField("answer"))?;
                let outcome = grader::grade(&submission.guess, &answer, self.config.grading);
                Ok(GradedGuess {
                    outcome,
                    answer: None,
                })
            }

            Authority::Server => {
                let puzzle_id = submission
                    .puzzle_id
                    .ok_or(GameError::MissingField("puzzleId"))?;
                let id = Self::released_puzzle(&puzzle_id, today)?;
                let view = self.puzzle_for(id);
                if !view.available {
                    return Err(GameError::NoTrackAvailable(id));
                }

                let outcome = grader::grade(&submission.guess, &view.answer, self.config.grading);
                // giving up only reveals puzzles that are no longer current
                let gave_up = submission.final_attempt && id.date() < today;
                let reveal = outcome == GuessOutcome::Correct || gave_up;
                Ok(GradedGuess {
                    outcome,
                    answer: reveal.then_some(view.answer),
                })
            }
        }
    }

    fn released_puzzle(puzzle_id: &str, today: NaiveDate) -> Result<PuzzleId, GameError> {
        let id = puzzle_id.parse::<PuzzleId>()?;
        if id.date() > today {
            return Err(GameError::PuzzleNotYetAvailable(id));
        }
        Ok(id)
    }
}
