//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use cv_core::{Playback, PlaybackCommand, Verdict};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{ControlsWidget, MatchupWidget, RoundsWidget, VerdictWidget};

/// UI mode - what the app is currently displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal viewing
    Viewing,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Playback controller over the loaded record
    playback: Playback,

    /// Current UI mode
    mode: UiMode,

    /// Should quit
    should_quit: bool,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    /// Create a new application over a playback controller
    pub fn new(playback: Playback, theme: Theme) -> Self {
        Self {
            playback,
            mode: UiMode::Viewing,
            should_quit: false,
            theme,
        }
    }

    /// Get the playback controller
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Current UI mode
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns the command that was applied, if any
    pub fn handle_event(&mut self, event: Event) -> Option<PlaybackCommand> {
        if let Event::Key(key) = event {
            match self.mode {
                UiMode::Viewing => self.handle_viewing_input(key),
                UiMode::Help => {
                    self.handle_help_input(key);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Handle input in normal viewing mode
    fn handle_viewing_input(&mut self, key: KeyEvent) -> Option<PlaybackCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('?') => {
                self.mode = UiMode::Help;
                None
            }
            _ => {
                let command = key_to_command(key)?;
                self.playback.apply(command);
                Some(command)
            }
        }
    }

    /// Handle input while the help overlay is open
    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                self.mode = UiMode::Viewing;
            }
            _ => {}
        }
    }

    /// Render the full frame
    pub fn render(&self, frame: &mut Frame) {
        // Layout: matchup header, rounds, verdict, controls footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_matchup(frame, chunks[0]);
        self.render_rounds(frame, chunks[1]);
        self.render_verdict(frame, chunks[2]);
        frame.render_widget(ControlsWidget::new(&self.playback, &self.theme), chunks[3]);

        if self.mode == UiMode::Help {
            self.render_help(frame);
        }
    }

    fn render_matchup(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Convergence")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            MatchupWidget::new(self.playback.record(), &self.theme),
            inner,
        );
    }

    fn render_rounds(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            "Rounds {}/{}",
            self.playback.cursor(),
            self.playback.round_count()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = self.playback.visible_rounds();
        frame.render_widget(RoundsWidget::new(&visible, &self.theme), inner);
    }

    fn render_verdict(&self, frame: &mut Frame, area: Rect) {
        let verdict = self.playback.verdict();
        let border = match verdict {
            Verdict::Won { .. } => self.theme.good,
            Verdict::Lost(_) => self.theme.border_danger,
            _ => self.theme.border,
        };
        let block = Block::default()
            .title("Verdict")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(VerdictWidget::new(&verdict, &self.theme), inner);
    }

    /// Render help overlay
    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Playback:
  →  l  SPACE   Reveal the next round
  ←  h          Hide the latest round
  Home  r      Back to the start
  End   a      Reveal every round

Meta:
  ?    Toggle this help
  q    Quit

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }
}

/// Center a rect of the given percentage size inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::sample::sample_game;

    fn app() -> App {
        let playback = Playback::new(sample_game()).unwrap();
        App::new(playback, Theme::dark())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_step_keys_drive_playback() {
        let mut app = app();
        assert_eq!(
            app.handle_event(key(KeyCode::Right)),
            Some(PlaybackCommand::StepForward)
        );
        assert_eq!(app.playback().cursor(), 1);

        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.playback().cursor(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_mode_swallows_playback_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('?')));
        assert_eq!(app.mode(), UiMode::Help);

        assert_eq!(app.handle_event(key(KeyCode::Right)), None);
        assert_eq!(app.playback().cursor(), 0);

        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.mode(), UiMode::Viewing);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let mut app = app();
        assert_eq!(app.handle_event(Event::FocusGained), None);
        assert_eq!(app.playback().cursor(), 0);
    }
}
