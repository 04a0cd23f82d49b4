//! Game records exported by the benchmark runner
//!
//! Loading, structural validation, and outcome re-verification of the
//! JSON records the Convergence benchmark writes, one object per
//! finished game.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::WordHistory;
use crate::outcome::Outcome;
use crate::wordlist;

/// Record error types
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("uneven word sequences: player 1 said {player1} words, player 2 said {player2}")]
    UnevenRounds { player1: usize, player2: usize },

    #[error("outcome win requires a converged word")]
    MissingConvergedWord,

    #[error("outcome {outcome} does not allow a converged word")]
    SpuriousConvergedWord { outcome: Outcome },

    #[error("recorded outcome is {recorded} but the word history plays out as {expected}")]
    OutcomeMismatch { recorded: Outcome, expected: Outcome },

    #[error("recorded round count is {recorded} but the word history implies {expected}")]
    RoundCountMismatch { recorded: u32, expected: u32 },

    #[error("word lists continue past the game's end ({outcome} in round {round})")]
    TrailingRounds { outcome: Outcome, round: u32 },

    #[error("converged word {recorded:?} does not match the final round ({actual:?})")]
    ConvergedWordMismatch { recorded: String, actual: String },

    #[error("round {round}: {word:?} is not a playable word")]
    UnplayableWord { round: u32, word: String },
}

/// One finished game, exactly as the benchmark runner exports it.
///
/// Immutable input data: the viewer never mutates a record, only
/// derives rounds from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Rounds played. One past the recorded word lists for
    /// `invalid_word` games, whose last word is never recorded.
    pub rounds: u32,
    pub converged_word: Option<String>,
    pub player1_model: String,
    pub player2_model: String,
    pub player1_words: Vec<String>,
    pub player2_words: Vec<String>,
    #[serde(default)]
    pub seed_word1: Option<String>,
    #[serde(default)]
    pub seed_word2: Option<String>,
    pub game_number: u32,
    pub timestamp: DateTime<Utc>,
}

impl GameRecord {
    /// Parse and structurally validate a single record object.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: GameRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Load a record from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Structural validation: even sequence lengths and outcome shape.
    ///
    /// Uneven word sequences are rejected outright; nothing downstream
    /// ever truncates one list to match the other.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.player1_words.len() != self.player2_words.len() {
            return Err(RecordError::UnevenRounds {
                player1: self.player1_words.len(),
                player2: self.player2_words.len(),
            });
        }
        match (self.outcome, &self.converged_word) {
            (Outcome::Win, None) => Err(RecordError::MissingConvergedWord),
            (outcome, Some(_)) if outcome != Outcome::Win => {
                Err(RecordError::SpuriousConvergedWord { outcome })
            }
            _ => Ok(()),
        }
    }

    /// Replay the recorded word lists under the game rules and check
    /// that the recorded outcome, round count, and converged word all
    /// agree with what actually happened.
    ///
    /// `invalid_word` games stop before the offending word is
    /// recorded, so for those only the implied round arithmetic is
    /// checked.
    pub fn verify(&self) -> Result<(), RecordError> {
        self.validate()?;

        let pairs = self.player1_words.iter().zip(self.player2_words.iter());
        for (i, (w1, w2)) in pairs.clone().enumerate() {
            for word in [w1, w2] {
                if !wordlist::is_playable(word) {
                    return Err(RecordError::UnplayableWord {
                        round: i as u32 + 1,
                        word: word.clone(),
                    });
                }
            }
        }

        let len = self.player1_words.len() as u32;
        let mut history = match (&self.seed_word1, &self.seed_word2) {
            (Some(s1), Some(s2)) => WordHistory::with_seeds(s1, s2),
            _ => WordHistory::new(),
        };

        // Rules in order, per round: a word either player already used
        // ends the game as repetition; a fresh matching pair is a win.
        let mut ended = None;
        for (w1, w2) in pairs {
            if history.contains(w1) || history.contains(w2) {
                history = history.add_round(w1, w2);
                ended = Some(Outcome::Repetition);
                break;
            }
            history = history.add_round(w1, w2);
            if history.is_converged() {
                ended = Some(Outcome::Win);
                break;
            }
        }

        match ended {
            Some(expected) => {
                if history.round() != len {
                    return Err(RecordError::TrailingRounds {
                        outcome: expected,
                        round: history.round(),
                    });
                }
                if self.outcome != expected {
                    return Err(RecordError::OutcomeMismatch {
                        recorded: self.outcome,
                        expected,
                    });
                }
                if self.rounds != len {
                    return Err(RecordError::RoundCountMismatch {
                        recorded: self.rounds,
                        expected: len,
                    });
                }
                if expected == Outcome::Win
                    && let (Some(recorded), Some(actual)) =
                        (self.converged_word.as_deref(), history.converged_word())
                    && recorded != actual
                {
                    return Err(RecordError::ConvergedWordMismatch {
                        recorded: recorded.to_string(),
                        actual: actual.to_string(),
                    });
                }
                Ok(())
            }
            // Nothing terminal inside the lists: either the game ran
            // out of rounds, or the next word never parsed.
            None => match self.outcome {
                Outcome::InvalidWord => {
                    if self.rounds != len + 1 {
                        return Err(RecordError::RoundCountMismatch {
                            recorded: self.rounds,
                            expected: len + 1,
                        });
                    }
                    Ok(())
                }
                Outcome::NonConvergence => {
                    if self.rounds != len {
                        return Err(RecordError::RoundCountMismatch {
                            recorded: self.rounds,
                            expected: len,
                        });
                    }
                    Ok(())
                }
                recorded => Err(RecordError::OutcomeMismatch {
                    recorded,
                    expected: Outcome::NonConvergence,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_game;

    const RUNNER_JSON: &str = r#"{
        "outcome": "win",
        "rounds": 2,
        "converged_word": "sand",
        "player1_model": "gemini/gemini-2.5-flash",
        "player2_model": "openai/gpt-5-mini",
        "player1_words": ["beach", "sand"],
        "player2_words": ["island", "sand"],
        "seed_word1": "ocean",
        "seed_word2": "desert",
        "game_number": 1,
        "timestamp": "2025-06-01T12:00:00+00:00"
    }"#;

    #[test]
    fn test_parse_runner_export() {
        let record = GameRecord::from_json(RUNNER_JSON).unwrap();
        assert_eq!(record.outcome, Outcome::Win);
        assert_eq!(record.rounds, 2);
        assert_eq!(record.converged_word.as_deref(), Some("sand"));
        assert_eq!(record.player1_words, ["beach", "sand"]);
        assert_eq!(record.seed_word2.as_deref(), Some("desert"));
        assert_eq!(record.game_number, 1);
        assert_eq!(record.timestamp.to_rfc3339(), "2025-06-01T12:00:00+00:00");
        record.verify().unwrap();
    }

    #[test]
    fn test_parse_without_seed_words() {
        let json = RUNNER_JSON
            .replace("\"seed_word1\": \"ocean\",", "")
            .replace("\"seed_word2\": \"desert\",", "");
        let record = GameRecord::from_json(&json).unwrap();
        assert_eq!(record.seed_word1, None);
        record.verify().unwrap();
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            GameRecord::from_json("{"),
            Err(RecordError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameRecord::load("does/not/exist.json"),
            Err(RecordError::Io(_))
        ));
    }

    #[test]
    fn test_uneven_sequences_rejected() {
        let mut record = sample_game();
        record.player2_words.pop();
        assert!(matches!(
            record.validate(),
            Err(RecordError::UnevenRounds {
                player1: 2,
                player2: 1
            })
        ));
    }

    #[test]
    fn test_win_requires_converged_word() {
        let mut record = sample_game();
        record.converged_word = None;
        assert!(matches!(
            record.validate(),
            Err(RecordError::MissingConvergedWord)
        ));
    }

    #[test]
    fn test_loss_forbids_converged_word() {
        let mut record = sample_game();
        record.outcome = Outcome::Repetition;
        assert!(matches!(
            record.validate(),
            Err(RecordError::SpuriousConvergedWord {
                outcome: Outcome::Repetition
            })
        ));
    }

    fn loss_record(outcome: Outcome, rounds: u32) -> GameRecord {
        GameRecord {
            outcome,
            rounds,
            converged_word: None,
            player1_words: vec!["apple".into(), "river".into()],
            player2_words: vec!["stone".into(), "cloud".into()],
            ..sample_game()
        }
    }

    #[test]
    fn test_verify_non_convergence() {
        loss_record(Outcome::NonConvergence, 2).verify().unwrap();
    }

    #[test]
    fn test_verify_invalid_word_round_arithmetic() {
        loss_record(Outcome::InvalidWord, 3).verify().unwrap();
        assert!(matches!(
            loss_record(Outcome::InvalidWord, 2).verify(),
            Err(RecordError::RoundCountMismatch {
                recorded: 2,
                expected: 3
            })
        ));
    }

    #[test]
    fn test_verify_repetition() {
        let mut record = loss_record(Outcome::Repetition, 2);
        // "apple" reappears in round 2
        record.player2_words[1] = "apple".into();
        record.verify().unwrap();
    }

    #[test]
    fn test_verify_seed_repetition() {
        let mut record = loss_record(Outcome::Repetition, 1);
        record.player1_words = vec!["ocean".into()];
        record.player2_words = vec!["stone".into()];
        record.verify().unwrap();
    }

    #[test]
    fn test_verify_detects_wrong_outcome() {
        assert!(matches!(
            loss_record(Outcome::Repetition, 2).verify(),
            Err(RecordError::OutcomeMismatch {
                recorded: Outcome::Repetition,
                expected: Outcome::NonConvergence
            })
        ));
    }

    #[test]
    fn test_verify_detects_trailing_rounds() {
        let mut record = sample_game();
        // converges in round 2, but a third round was recorded
        record.player1_words.push("dune".into());
        record.player2_words.push("wave".into());
        record.rounds = 3;
        assert!(matches!(
            record.verify(),
            Err(RecordError::TrailingRounds {
                outcome: Outcome::Win,
                round: 2
            })
        ));
    }

    #[test]
    fn test_verify_detects_wrong_round_count() {
        let mut record = sample_game();
        record.rounds = 5;
        assert!(matches!(
            record.verify(),
            Err(RecordError::RoundCountMismatch {
                recorded: 5,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_verify_detects_wrong_converged_word() {
        let mut record = sample_game();
        record.converged_word = Some("dune".into());
        assert!(matches!(
            record.verify(),
            Err(RecordError::ConvergedWordMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_unplayable_word() {
        let mut record = loss_record(Outcome::NonConvergence, 2);
        record.player1_words[0] = "two words".into();
        assert!(matches!(
            record.verify(),
            Err(RecordError::UnplayableWord { round: 1, .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = sample_game();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(GameRecord::from_json(&json).unwrap(), record);
    }
}
