//! Per-round comparisons derived from a game record

use crate::record::GameRecord;

/// One revealed round: both words and whether they matched.
///
/// Derived from the record on every observation and never stored
/// anywhere; there is no iterator state to invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    pub player1_word: String,
    pub player2_word: String,
    /// Exact, case-sensitive equality of the two words.
    pub converged: bool,
}

/// Derive the ordered round sequence from a record.
///
/// A total zip of the two word sequences: the result is as long as the
/// shorter one, so this is safe to call on any record. Records with
/// uneven sequences are rejected before a viewer is built
/// ([`crate::Playback::new`]).
pub fn rounds(record: &GameRecord) -> Vec<Round> {
    record
        .player1_words
        .iter()
        .zip(record.player2_words.iter())
        .enumerate()
        .map(|(i, (w1, w2))| Round {
            number: i as u32 + 1,
            player1_word: w1.clone(),
            player2_word: w2.clone(),
            converged: w1 == w2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_game;

    #[test]
    fn test_derivation_matches_record() {
        let record = sample_game();
        let rounds = rounds(&record);
        assert_eq!(rounds.len(), record.player1_words.len());
        for (i, round) in rounds.iter().enumerate() {
            assert_eq!(round.number as usize, i + 1);
            assert_eq!(round.player1_word, record.player1_words[i]);
            assert_eq!(round.player2_word, record.player2_words[i]);
            assert_eq!(
                round.converged,
                record.player1_words[i] == record.player2_words[i]
            );
        }
    }

    #[test]
    fn test_sample_convergence_flags() {
        let derived = rounds(&sample_game());
        assert!(!derived[0].converged);
        assert!(derived[1].converged);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let mut record = sample_game();
        record.player1_words[1] = "Sand".to_string();
        let derived = rounds(&record);
        assert!(!derived[1].converged);
    }

    #[test]
    fn test_empty_sequences() {
        let mut record = sample_game();
        record.player1_words.clear();
        record.player2_words.clear();
        assert!(rounds(&record).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let record = sample_game();
        assert_eq!(rounds(&record), rounds(&record));
    }
}
