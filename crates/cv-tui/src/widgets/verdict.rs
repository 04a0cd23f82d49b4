//! Verdict banner widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cv_core::Verdict;

use crate::theme::Theme;

/// Widget for the verdict area below the round list.
///
/// Shows a neutral note before playback starts, nothing mid-playback,
/// and the game's outcome once every round is revealed.
pub struct VerdictWidget<'a> {
    verdict: &'a Verdict,
    theme: &'a Theme,
}

impl<'a> VerdictWidget<'a> {
    pub fn new(verdict: &'a Verdict, theme: &'a Theme) -> Self {
        Self { verdict, theme }
    }
}

impl Widget for VerdictWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let (text, style) = match self.verdict {
            Verdict::NotStarted => (
                "Not started".to_string(),
                Style::default().fg(self.theme.text_muted),
            ),
            Verdict::Revealing => return,
            Verdict::Won { word, rounds } => (
                format!("Converged on \"{}\" in {} rounds", word, rounds),
                Style::default().fg(self.theme.good),
            ),
            Verdict::Lost(outcome) => (
                format!("Failed: {}", outcome),
                Style::default().fg(self.theme.bad),
            ),
        };

        buf.set_string(area.x, area.y, &text, style);
    }
}
