//! cv-core: Core game logic for the Convergence word game viewer
//!
//! This crate contains all game-domain logic with no terminal or
//! rendering dependencies: the record format exported by the benchmark
//! runner, per-round derivation, and the playback state machine the
//! viewer is built on. It is designed to be pure and testable.

pub mod history;
pub mod outcome;
pub mod playback;
pub mod record;
pub mod round;
pub mod sample;
pub mod wordlist;

pub use history::WordHistory;
pub use outcome::Outcome;
pub use playback::{Playback, PlaybackCommand, Verdict};
pub use record::{GameRecord, RecordError};
pub use round::{Round, rounds};
