//! Welcome screen

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use super::{button, heading, is_activate, text, ScreenAction, StepScreen};
use crate::onboarding::{StepAnswer, StepId};

/// Introductory screen with a single "Let's Go" action
#[derive(Debug, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn new() -> Self {
        Self
    }
}

impl StepScreen for WelcomeScreen {
    fn step(&self) -> StepId {
        StepId::Welcome
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = heading(StepId::Welcome);
        lines.push(text(
            "Your smart library for organizing tools, tracking usage, and turning \
             productivity into rewards. Let's set up your digital library in 2 minutes.",
        ));
        lines.push(Line::from(""));
        lines.push(button("Let's Go", true, true));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if is_activate(key) {
            ScreenAction::Advance(StepAnswer::Welcome)
        } else {
            ScreenAction::Ignored
        }
    }

    fn hints(&self) -> &'static str {
        " Enter:Let's Go  ?:Help  Esc:Quit "
    }
}
