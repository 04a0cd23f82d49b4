//! Input handling - convert key events to playback commands
//!
//! These are the transport bindings that map directly to a
//! PlaybackCommand. Mode switches (help, quit) are handled in app.rs.

use crossterm::event::{KeyCode, KeyEvent};
use cv_core::PlaybackCommand;

/// Convert a key event to a playback command.
pub fn key_to_command(key: KeyEvent) -> Option<PlaybackCommand> {
    match key.code {
        // Step forward: arrow, vi key, or space
        KeyCode::Right => Some(PlaybackCommand::StepForward),
        KeyCode::Char('l') => Some(PlaybackCommand::StepForward),
        KeyCode::Char(' ') => Some(PlaybackCommand::StepForward),

        // Step backward: arrow or vi key
        KeyCode::Left => Some(PlaybackCommand::StepBackward),
        KeyCode::Char('h') => Some(PlaybackCommand::StepBackward),

        // Jump to the start / the end
        KeyCode::Home => Some(PlaybackCommand::Reset),
        KeyCode::Char('r') => Some(PlaybackCommand::Reset),
        KeyCode::End => Some(PlaybackCommand::PlayAll),
        KeyCode::Char('a') => Some(PlaybackCommand::PlayAll),

        _ => None,
    }
}
