//! Guess grading

use serde::Deserialize;

use crate::domain::outcome::GuessOutcome;

/// Which tiers of matching are enabled
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GradingPolicy {
    ExactOnly,
    /// exact match, otherwise credit for naming the artist
    ExactPlusArtist,
}

const SEPARATOR: char = '-';

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Text after the last separator, trimmed. `None` when there is no separator.
fn artist_segment(s: &str) -> Option<&str> {
    s.rfind(SEPARATOR)
        .map(|pos| s[pos + SEPARATOR.len_utf8()..].trim())
}

/// Compares a guess against the canonical answer.
///
/// Both sides are trimmed and lowercased, nothing else.
/// The artist is whatever follows the last `-` of the answer;
/// a guess without `-` is taken as an artist guess as a whole.
pub fn grade(raw_guess: &str, correct_answer: &str, policy: GradingPolicy) -> GuessOutcome {
    let guess = normalize(raw_guess);
    let answer = normalize(correct_answer);

    if guess == answer {
        return GuessOutcome::Correct;
    }

    if policy == GradingPolicy::ExactPlusArtist {
        if let Some(artist) = artist_segment(&answer).filter(|a| !a.is_empty()) {
            let guessed = artist_segment(&guess).unwrap_or(guess.as_str());
            if guessed == artist {
                return GuessOutcome::Artist;
            }
        }
    }

    GuessOutcome::Incorrect
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::GradingPolicy::*;
    use crate::domain::outcome::GuessOutcome::*;

    const HOLOCENE: &str = "Holocene - Bon Iver";

    #[test]
    fn test_holocene_examples() {
        assert_eq!(grade("holocene - bon iver", HOLOCENE, ExactPlusArtist), Correct);
        assert_eq!(grade("bon iver", HOLOCENE, ExactPlusArtist), Artist);
        assert_eq!(grade("Bon Iver", HOLOCENE, ExactPlusArtist), Artist);
        assert_eq!(grade("holocene", HOLOCENE, ExactPlusArtist), Incorrect);
        assert_eq!(grade("taylor swift", HOLOCENE, ExactPlusArtist), Incorrect);
    }

    #[test]
    fn test_answer_always_matches_itself() {
        let answers = [
            HOLOCENE,
            "YMCA",
            "(You Make Me Feel Like) A Natural Woman - Aretha Franklin",
            "  spaced out  ",
            "Title -",
        ];
        for answer in answers {
            for policy in [ExactOnly, ExactPlusArtist] {
                assert_eq!(grade(answer, answer, policy), Correct, "{answer:?}");
            }
        }
    }

    #[test]
    fn test_case_and_outer_whitespace_do_not_matter() {
        let variants = [
            ("  HOLOCENE - BON IVER\n", HOLOCENE, Correct),
            ("holocene - bon iver", "\tholocene - bon iver  ", Correct),
            ("\n BON IVER ", HOLOCENE, Artist),
            ("bon iver", "  HOLOCENE - BON IVER ", Artist),
            ("  Holocene ", " holocene - bon iver", Incorrect),
        ];
        for (guess, answer, expected) in variants {
            assert_eq!(grade(guess, answer, ExactPlusArtist), expected, "{guess:?}");
        }
    }

    #[test]
    fn test_guess_with_wrong_title_but_right_artist() {
        assert_eq!(grade("Skinny Love - Bon Iver", HOLOCENE, ExactPlusArtist), Artist);
        assert_eq!(grade("Holocene - Bon", HOLOCENE, ExactPlusArtist), Incorrect);
    }

    #[test]
    fn test_artist_is_after_last_separator() {
        let answer = "Ob-La-Di, Ob-La-Da - The Beatles";
        assert_eq!(grade("the beatles", answer, ExactPlusArtist), Artist);
        assert_eq!(grade("La-Da - The Beatles", answer, ExactPlusArtist), Artist);
        assert_eq!(grade("la-da", answer, ExactPlusArtist), Incorrect);
    }

    #[test]
    fn test_no_separator_means_no_artist_tier() {
        assert_eq!(grade("ymca", "YMCA", ExactPlusArtist), Correct);
        assert_eq!(grade("village people", "YMCA", ExactPlusArtist), Incorrect);
        assert_eq!(grade("ymc", "YMCA", ExactPlusArtist), Incorrect);
        assert_eq!(grade("", "YMCA", ExactPlusArtist), Incorrect);
    }

    #[test]
    fn test_empty_artist_segment_never_matches() {
        assert_eq!(grade("", "Title -", ExactPlusArtist), Incorrect);
        assert_eq!(grade("other -", "Title -", ExactPlusArtist), Incorrect);
    }

    #[test]
    fn test_empty_guess_is_incorrect() {
        assert_eq!(grade("", HOLOCENE, ExactPlusArtist), Incorrect);
        assert_eq!(grade("   ", HOLOCENE, ExactOnly), Incorrect);
    }

    #[test]
    fn test_exact_only_never_credits_artist() {
        assert_eq!(grade("bon iver", HOLOCENE, ExactOnly), Incorrect);
        assert_eq!(grade("Skinny Love - Bon Iver", HOLOCENE, ExactOnly), Incorrect);
        assert_eq!(grade(" HOLOCENE - bon iver ", HOLOCENE, ExactOnly), Correct);
    }
}
