//! Playback state machine over a recorded game
//!
//! One cursor counting the revealed rounds, four total transitions,
//! and pure projections for everything the shell displays. Transitions
//! saturate at the bounds instead of failing; after construction
//! nothing here returns an error.

use strum::EnumIter;

use crate::outcome::Outcome;
use crate::record::{GameRecord, RecordError};
use crate::round::{self, Round};

/// The four viewer transitions, in footer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PlaybackCommand {
    Reset,
    StepBackward,
    StepForward,
    PlayAll,
}

/// What the verdict area shows for the current cursor.
///
/// Recomputed from playback state on every observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing revealed yet.
    NotStarted,
    /// Mid-playback; no banner.
    Revealing,
    /// All rounds revealed, outcome `win`.
    Won { word: String, rounds: u32 },
    /// All rounds revealed, any losing outcome (reported verbatim).
    Lost(Outcome),
}

/// Playback controller for one recorded game.
///
/// Owns the record it was built from (an injected value, never global
/// state) and the cursor. Independent viewers own independent cursors.
#[derive(Debug, Clone)]
pub struct Playback {
    record: GameRecord,
    cursor: usize,
}

impl Playback {
    /// Build a viewer over `record`, starting with nothing revealed.
    ///
    /// Records whose word sequences differ in length are rejected here
    /// rather than guessing which list to truncate.
    pub fn new(record: GameRecord) -> Result<Self, RecordError> {
        record.validate()?;
        Ok(Self { record, cursor: 0 })
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Rounds currently revealed, in `[0, round_count]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of derivable rounds.
    pub fn round_count(&self) -> usize {
        self.record.player1_words.len()
    }

    /// Reveal the next round; no-op once everything is revealed.
    pub fn step_forward(&mut self) {
        if self.cursor < self.round_count() {
            self.cursor += 1;
        }
    }

    /// Hide the latest revealed round; no-op at the start.
    pub fn step_backward(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn play_all(&mut self) {
        self.cursor = self.round_count();
    }

    /// Apply one command.
    pub fn apply(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Reset => self.reset(),
            PlaybackCommand::StepBackward => self.step_backward(),
            PlaybackCommand::StepForward => self.step_forward(),
            PlaybackCommand::PlayAll => self.play_all(),
        }
    }

    /// False exactly when `command` would be a no-op; drives control
    /// disabling in the shell.
    pub fn is_enabled(&self, command: PlaybackCommand) -> bool {
        match command {
            PlaybackCommand::Reset | PlaybackCommand::StepBackward => self.cursor > 0,
            PlaybackCommand::StepForward | PlaybackCommand::PlayAll => {
                self.cursor < self.round_count()
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.cursor > 0
    }

    /// True once every round is revealed, immediately so for empty
    /// records.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.round_count()
    }

    /// The revealed prefix of the derived rounds, recomputed per call.
    pub fn visible_rounds(&self) -> Vec<Round> {
        let mut rounds = round::rounds(&self.record);
        rounds.truncate(self.cursor);
        rounds
    }

    /// Presentation rule for the verdict area.
    pub fn verdict(&self) -> Verdict {
        if self.is_complete() {
            return match self.record.outcome {
                Outcome::Win => Verdict::Won {
                    // validate() guarantees a converged word for wins
                    word: self.record.converged_word.clone().unwrap_or_default(),
                    rounds: self.record.rounds,
                },
                outcome => Verdict::Lost(outcome),
            };
        }
        if self.cursor == 0 {
            Verdict::NotStarted
        } else {
            Verdict::Revealing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_game;

    fn playback() -> Playback {
        Playback::new(sample_game()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let playback = playback();
        assert_eq!(playback.cursor(), 0);
        assert!(!playback.is_playing());
        assert!(!playback.is_complete());
        assert!(playback.visible_rounds().is_empty());
        assert_eq!(playback.verdict(), Verdict::NotStarted);
    }

    #[test]
    fn test_step_forward_saturates() {
        let mut playback = playback();
        let total = playback.round_count();
        for _ in 0..total {
            playback.step_forward();
        }
        assert_eq!(playback.cursor(), total);
        playback.step_forward();
        assert_eq!(playback.cursor(), total);
    }

    #[test]
    fn test_step_backward_saturates() {
        let mut playback = playback();
        playback.step_backward();
        assert_eq!(playback.cursor(), 0);
        playback.step_forward();
        playback.step_backward();
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn test_reset_and_play_all() {
        let mut playback = playback();
        playback.play_all();
        assert!(playback.is_complete());
        assert_eq!(playback.cursor(), playback.round_count());
        playback.reset();
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn test_visible_rounds_is_prefix() {
        let mut playback = playback();
        playback.step_forward();
        let visible = playback.visible_rounds();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].number, 1);
        assert_eq!(visible[0].player1_word, "beach");
        assert_eq!(visible[0].player2_word, "island");
        assert!(!visible[0].converged);
    }

    #[test]
    fn test_full_playback_of_sample() {
        let mut playback = playback();
        playback.play_all();
        let visible = playback.visible_rounds();
        assert_eq!(visible.len(), 2);
        assert!(!visible[0].converged);
        assert!(visible[1].converged);
        assert_eq!(
            playback.verdict(),
            Verdict::Won {
                word: "sand".to_string(),
                rounds: 2
            }
        );
    }

    #[test]
    fn test_verdict_mid_playback() {
        let mut playback = playback();
        playback.step_forward();
        assert_eq!(playback.verdict(), Verdict::Revealing);
    }

    #[test]
    fn test_verdict_for_loss_reports_category() {
        let record = GameRecord {
            outcome: Outcome::NonConvergence,
            rounds: 2,
            converged_word: None,
            player1_words: vec!["apple".into(), "river".into()],
            player2_words: vec!["stone".into(), "cloud".into()],
            ..sample_game()
        };
        let mut playback = Playback::new(record).unwrap();
        playback.play_all();
        assert!(playback.visible_rounds().iter().all(|r| !r.converged));
        assert_eq!(playback.verdict(), Verdict::Lost(Outcome::NonConvergence));
    }

    #[test]
    fn test_enablement_tracks_boundaries() {
        let mut playback = playback();
        assert!(!playback.is_enabled(PlaybackCommand::Reset));
        assert!(!playback.is_enabled(PlaybackCommand::StepBackward));
        assert!(playback.is_enabled(PlaybackCommand::StepForward));
        assert!(playback.is_enabled(PlaybackCommand::PlayAll));

        playback.step_forward();
        assert!(playback.is_enabled(PlaybackCommand::Reset));
        assert!(playback.is_enabled(PlaybackCommand::PlayAll));

        playback.play_all();
        assert!(playback.is_enabled(PlaybackCommand::Reset));
        assert!(playback.is_enabled(PlaybackCommand::StepBackward));
        assert!(!playback.is_enabled(PlaybackCommand::StepForward));
        assert!(!playback.is_enabled(PlaybackCommand::PlayAll));
    }

    #[test]
    fn test_empty_record_is_complete_at_start() {
        let record = GameRecord {
            outcome: Outcome::InvalidWord,
            rounds: 1,
            converged_word: None,
            player1_words: vec![],
            player2_words: vec![],
            ..sample_game()
        };
        let playback = Playback::new(record).unwrap();
        assert_eq!(playback.cursor(), 0);
        assert!(playback.is_complete());
        assert!(!playback.is_playing());
        // complete wins over "not started" for the empty game
        assert_eq!(playback.verdict(), Verdict::Lost(Outcome::InvalidWord));
    }

    #[test]
    fn test_uneven_record_rejected() {
        let mut record = sample_game();
        record.player1_words.push("dune".into());
        assert!(Playback::new(record).is_err());
    }
}
