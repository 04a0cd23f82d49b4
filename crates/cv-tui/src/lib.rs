//! cv-tui: Terminal viewer for recorded Convergence games
//!
//! Provides the terminal interface for stepping through one game.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use theme::Theme;
