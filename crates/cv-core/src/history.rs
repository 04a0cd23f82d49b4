//! Word history of a game in progress
//!
//! Immutable value describing everything both players have said so
//! far. The benchmark runner builds one of these round by round; here
//! it is used to replay recorded games during verification.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Words said so far by both players, plus the optional seed words
/// each player was given before round one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHistory {
    round: u32,
    player1_words: Vec<String>,
    player2_words: Vec<String>,
    seed_word1: Option<String>,
    seed_word2: Option<String>,
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl WordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history whose seed words count as already used.
    pub fn with_seeds(seed_word1: &str, seed_word2: &str) -> Self {
        Self {
            seed_word1: Some(normalize(seed_word1)),
            seed_word2: Some(normalize(seed_word2)),
            ..Self::default()
        }
    }

    /// Rounds recorded so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player1_words(&self) -> &[String] {
        &self.player1_words
    }

    pub fn player2_words(&self) -> &[String] {
        &self.player2_words
    }

    /// Append one round. Words are stored the way players submit them:
    /// surrounding whitespace stripped, lowercased.
    #[must_use]
    pub fn add_round(&self, word1: &str, word2: &str) -> Self {
        let mut next = self.clone();
        next.round += 1;
        next.player1_words.push(normalize(word1));
        next.player2_words.push(normalize(word2));
        next
    }

    /// True iff both players' latest words exist and are equal.
    pub fn is_converged(&self) -> bool {
        match (self.player1_words.last(), self.player2_words.last()) {
            (Some(w1), Some(w2)) => w1 == w2,
            _ => false,
        }
    }

    /// The shared final word, when converged.
    pub fn converged_word(&self) -> Option<&str> {
        if self.is_converged() {
            self.player1_words.last().map(String::as_str)
        } else {
            None
        }
    }

    /// Every word used so far by either player, seed words included.
    pub fn all_words(&self) -> HashSet<&str> {
        self.player1_words
            .iter()
            .chain(self.player2_words.iter())
            .chain(self.seed_word1.iter())
            .chain(self.seed_word2.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether `word` has already been used by either player.
    pub fn contains(&self, word: &str) -> bool {
        self.all_words().contains(normalize(word).as_str())
    }
}
