//! Completed screen

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use super::{button, heading, is_activate, text, ScreenAction, StepScreen};
use crate::onboarding::StepId;

/// Final screen; "Go to Dashboard" flips the completion modal
#[derive(Debug, Default)]
pub struct CompletedScreen;

impl CompletedScreen {
    pub fn new() -> Self {
        Self
    }
}

impl StepScreen for CompletedScreen {
    fn step(&self) -> StepId {
        StepId::Completed
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = heading(StepId::Completed);
        lines.push(text(
            "Your Flowva library is ready to use. We'll take you to your dashboard now \
             where you can start organizing your tools and tracking your productivity.",
        ));
        lines.push(Line::from(""));
        lines.push(button("Go to Dashboard", true, true));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if is_activate(key) {
            ScreenAction::ToggleModal
        } else {
            ScreenAction::Ignored
        }
    }

    fn hints(&self) -> &'static str {
        " Enter:Go to Dashboard  Esc:Quit "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screens::test_keys::*;

    #[test]
    fn test_enter_toggles_modal() {
        let mut screen = CompletedScreen::new();
        assert_eq!(screen.handle_key(enter()), ScreenAction::ToggleModal);
        assert_eq!(screen.handle_key(down()), ScreenAction::Ignored);
    }
}
