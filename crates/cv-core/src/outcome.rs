//! Terminal classification of a finished game

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How a finished game ended.
///
/// The snake_case names are the wire format: benchmark records store
/// them verbatim and the failure banner reports them verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Both players produced the same word in the same round.
    Win,
    /// Ran out of rounds without matching.
    NonConvergence,
    /// A player repeated a word already used by either player.
    Repetition,
    /// A player produced a word that could not be parsed.
    InvalidWord,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}
