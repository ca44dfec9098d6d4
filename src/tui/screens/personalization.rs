//! Personalization screen

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use super::{button, checkbox, error, heading, is_activate, section, text, FocusRing, ScreenAction, StepScreen};
use crate::onboarding::catalog::Goal;
use crate::onboarding::steps::PersonalizationForm;
use crate::onboarding::{StepAnswer, StepId};

/// Screen state for the Personalization step
#[derive(Debug, Default)]
pub struct PersonalizationScreen {
    form: PersonalizationForm,
    focus: FocusRing,
}

impl PersonalizationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &PersonalizationForm {
        &self.form
    }

    fn target_count() -> usize {
        Goal::ALL.len() + 1
    }
}

impl StepScreen for PersonalizationScreen {
    fn step(&self) -> StepId {
        StepId::Personalization
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let focused = self.focus.index(Self::target_count());

        let mut lines = heading(StepId::Personalization);
        lines.push(text("This helps us personalize your dashboard and features."));
        lines.push(Line::from(""));
        lines.push(section("Select your goals. Please select at least one option"));
        for (i, goal) in Goal::ALL.iter().enumerate() {
            lines.push(checkbox(goal.label(), self.form.is_selected(*goal), focused == i));
        }
        if let Some(msg) = self.form.error() {
            lines.push(Line::from(""));
            lines.push(error(msg));
        }
        lines.push(Line::from(""));
        lines.push(button("Continue", focused == Goal::ALL.len(), true));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let len = Self::target_count();
        if self.focus.handle_nav(key, len) {
            return ScreenAction::Handled;
        }
        if !is_activate(key) {
            return ScreenAction::Ignored;
        }

        match Goal::ALL.get(self.focus.index(len)) {
            Some(goal) => {
                self.form.toggle(*goal);
                ScreenAction::Handled
            }
            None => match self.form.submit() {
                Ok(goals) => ScreenAction::Advance(StepAnswer::Personalization(goals)),
                Err(_) => ScreenAction::Handled,
            },
        }
    }

    fn hints(&self) -> &'static str {
        " ↑/↓:Move  Space:Toggle  ?:Help  Esc:Quit "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::steps::personalization::GOAL_REQUIRED;
    use crate::tui::screens::test_keys::*;

    #[test]
    fn test_continue_without_goal_shows_error() {
        let mut screen = PersonalizationScreen::new();
        screen.handle_key(up());
        assert_eq!(screen.handle_key(enter()), ScreenAction::Handled);
        assert_eq!(screen.form().error(), Some(GOAL_REQUIRED));

        let rendered: Vec<String> = screen.lines().iter().map(|l| l.to_string()).collect();
        assert!(rendered.iter().any(|l| l.contains(GOAL_REQUIRED)));
    }

    #[test]
    fn test_select_and_continue() {
        let mut screen = PersonalizationScreen::new();
        screen.handle_key(down());
        screen.handle_key(space());
        screen.handle_key(up());
        screen.handle_key(up());
        assert_eq!(
            screen.handle_key(enter()),
            ScreenAction::Advance(StepAnswer::Personalization(vec![Goal::ToolUsage]))
        );
        assert!(screen.form().error().is_none());
    }

    #[test]
    fn test_deselect_returns_to_empty() {
        let mut screen = PersonalizationScreen::new();
        screen.handle_key(space());
        screen.handle_key(space());
        assert!(!screen.form().has_selection());
    }
}
