//! Playback controls footer widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cv_core::{Playback, PlaybackCommand};
use strum::IntoEnumIterator;

use crate::theme::Theme;

fn label(command: PlaybackCommand) -> &'static str {
    match command {
        PlaybackCommand::Reset => "Home/r reset",
        PlaybackCommand::StepBackward => "←/h back",
        PlaybackCommand::StepForward => "→/Space step",
        PlaybackCommand::PlayAll => "End/a play all",
    }
}

/// Widget for the controls footer. Commands whose transition would be
/// a no-op are rendered dimmed.
pub struct ControlsWidget<'a> {
    playback: &'a Playback,
    theme: &'a Theme,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(playback: &'a Playback, theme: &'a Theme) -> Self {
        Self { playback, theme }
    }
}

impl Widget for ControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for command in PlaybackCommand::iter() {
            let style = if self.playback.is_enabled(command) {
                Style::default().fg(self.theme.text)
            } else {
                Style::default().fg(self.theme.text_dim)
            };
            spans.push(Span::styled(label(command), style));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            "? help   q quit",
            Style::default().fg(self.theme.accent),
        ));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
