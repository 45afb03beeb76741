use serde::{Deserialize, Serialize};

/// Classification of a guess, from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessOutcome {
    Correct,
    /// only the artist matched
    Artist,
    Incorrect,
}

impl GuessOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessOutcome::Correct => "correct",
            GuessOutcome::Artist => "artist",
            GuessOutcome::Incorrect => "incorrect",
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
