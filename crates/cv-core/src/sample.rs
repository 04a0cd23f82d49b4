//! Built-in demo record
//!
//! The record shown when the viewer is started without a file. A plain
//! constructed value, injected like any other record.

use chrono::DateTime;

use crate::outcome::Outcome;
use crate::record::GameRecord;

/// A short won game: seeded with "ocean" and "desert", the players
/// converge on "sand" in two rounds.
pub fn sample_game() -> GameRecord {
    GameRecord {
        outcome: Outcome::Win,
        rounds: 2,
        converged_word: Some("sand".to_string()),
        player1_model: "gemini/gemini-2.5-flash".to_string(),
        player2_model: "openai/gpt-5-mini".to_string(),
        player1_words: vec!["beach".to_string(), "sand".to_string()],
        player2_words: vec!["island".to_string(), "sand".to_string()],
        seed_word1: Some("ocean".to_string()),
        seed_word2: Some("desert".to_string()),
        game_number: 1,
        // 2025-06-01T12:00:00Z
        timestamp: DateTime::from_timestamp(1_748_779_200, 0).unwrap_or_default(),
    }
}
