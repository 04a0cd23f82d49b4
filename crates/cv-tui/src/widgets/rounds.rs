//! Revealed rounds widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cv_core::Round;

use crate::theme::Theme;

/// Widget for the revealed prefix of the round list. Rounds past the
/// cursor are never handed to this widget.
pub struct RoundsWidget<'a> {
    rounds: &'a [Round],
    theme: &'a Theme,
}

impl<'a> RoundsWidget<'a> {
    pub fn new(rounds: &'a [Round], theme: &'a Theme) -> Self {
        Self { rounds, theme }
    }
}

impl Widget for RoundsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.rounds.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "Nothing revealed yet",
                Style::default().fg(self.theme.text_muted),
            );
            return;
        }

        // Keep the latest revealed rounds on screen
        let skip = self.rounds.len().saturating_sub(area.height as usize);
        for (row, round) in self.rounds.iter().skip(skip).enumerate() {
            let (mark, style) = if round.converged {
                ("==", Style::default().fg(self.theme.good))
            } else {
                ("  ", Style::default().fg(self.theme.text))
            };
            let line = format!(
                "{:>3}. {:<18} {} {:<18}",
                round.number, round.player1_word, mark, round.player2_word
            );
            buf.set_string(area.x, area.y + row as u16, &line, style);
        }
    }
}
