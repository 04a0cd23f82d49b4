//! Matchup header widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cv_core::GameRecord;

use crate::theme::Theme;

/// Widget for the game header: matchup, seed words, metadata.
pub struct MatchupWidget<'a> {
    record: &'a GameRecord,
    theme: &'a Theme,
}

impl<'a> MatchupWidget<'a> {
    pub fn new(record: &'a GameRecord, theme: &'a Theme) -> Self {
        Self { record, theme }
    }
}

impl Widget for MatchupWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let r = self.record;

        // Line 1: game number and the two models
        let line1 = format!(
            "Game #{}  {}  vs  {}",
            r.game_number, r.player1_model, r.player2_model
        );

        // Line 2: seeds (when the game had them) and timestamp
        let mut line2 = match (&r.seed_word1, &r.seed_word2) {
            (Some(s1), Some(s2)) => format!("seeds: {} / {}", s1, s2),
            _ => "no seed words".to_string(),
        };
        line2.push_str(&format!(
            "   played {}",
            r.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));

        buf.set_string(
            area.x,
            area.y,
            &line1,
            Style::default().fg(self.theme.header),
        );
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                &line2,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
