//! Widgets for the viewer screen

mod controls;
mod matchup;
mod rounds;
mod verdict;

pub use controls::ControlsWidget;
pub use matchup::MatchupWidget;
pub use rounds::RoundsWidget;
pub use verdict::VerdictWidget;
