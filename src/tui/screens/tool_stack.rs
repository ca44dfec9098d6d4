//! Tool stack screen
//!
//! Nine tools laid out in a three-column grid, then "Continue" and "Skip".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use super::{button, checkbox_span, heading, is_activate, text, FocusRing, ScreenAction, StepScreen};
use crate::onboarding::catalog::TOOLS;
use crate::onboarding::steps::ToolStackForm;
use crate::onboarding::StepId;

const COLUMNS: usize = 3;

/// Screen state for the ToolStack step
#[derive(Debug, Default)]
pub struct ToolStackScreen {
    form: ToolStackForm,
    focus: FocusRing,
}

impl ToolStackScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ToolStackForm {
        &self.form
    }

    fn continue_index() -> usize {
        TOOLS.len()
    }

    fn skip_index() -> usize {
        TOOLS.len() + 1
    }

    fn target_count() -> usize {
        TOOLS.len() + 2
    }
}

impl StepScreen for ToolStackScreen {
    fn step(&self) -> StepId {
        StepId::ToolStack
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let focused = self.focus.index(Self::target_count());

        let mut lines = heading(StepId::ToolStack);
        lines.push(text(
            "Which tools are part of your workflow? We'll pre-load and organize them in your library.",
        ));
        lines.push(Line::from(""));

        for (row, chunk) in TOOLS.chunks(COLUMNS).enumerate() {
            let mut spans = vec![Span::raw("   ")];
            for (col, tool) in chunk.iter().enumerate() {
                let index = row * COLUMNS + col;
                let label = format!("{} {}", tool.icon, tool.name);
                let cell = checkbox_span(&label, self.form.is_selected(tool.name), focused == index);
                let pad = 18usize.saturating_sub(label.chars().count() + 4);
                spans.push(cell);
                spans.push(Span::raw(" ".repeat(pad + 2)));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(text("You can always add more tools later in your library settings."));
        lines.push(Line::from(""));
        lines.push(button("Continue", focused == Self::continue_index(), true));
        lines.push(button(
            "Skip – I'll add them later",
            focused == Self::skip_index(),
            false,
        ));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let len = Self::target_count();
        if self.focus.handle_nav(key, len) {
            return ScreenAction::Handled;
        }

        match key.code {
            KeyCode::Right => {
                self.focus.next(len);
                return ScreenAction::Handled;
            }
            KeyCode::Left => {
                self.focus.prev(len);
                return ScreenAction::Handled;
            }
            _ => {}
        }
        if !is_activate(key) {
            return ScreenAction::Ignored;
        }

        let index = self.focus.index(len);
        if index == Self::continue_index() {
            ScreenAction::Advance(self.form.continue_answer())
        } else if index == Self::skip_index() {
            ScreenAction::Advance(self.form.skip_answer())
        } else {
            self.form.toggle(index);
            ScreenAction::Handled
        }
    }

    fn hints(&self) -> &'static str {
        " ←/→/↑/↓:Move  Space:Toggle  ?:Help  Esc:Quit "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{Response, StepAnswer};
    use crate::tui::screens::test_keys::*;

    #[test]
    fn test_toggling_twice_restores_selection() {
        let mut screen = ToolStackScreen::new();
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(space());
        assert_eq!(screen.form().selected(), vec!["Trello"]);
        screen.handle_key(space());
        assert!(screen.form().selected().is_empty());
    }

    #[test]
    fn test_continue_carries_selection() {
        let mut screen = ToolStackScreen::new();
        screen.handle_key(space());
        screen.handle_key(up());
        screen.handle_key(up());
        assert_eq!(
            screen.handle_key(enter()),
            ScreenAction::Advance(StepAnswer::ToolStack(Response::Answered(vec!["Notion"])))
        );
    }

    #[test]
    fn test_skip_discards_selection() {
        let mut screen = ToolStackScreen::new();
        screen.handle_key(space());
        screen.handle_key(up());
        assert_eq!(
            screen.handle_key(enter()),
            ScreenAction::Advance(StepAnswer::ToolStack(Response::Skipped))
        );
    }

    #[test]
    fn test_grid_has_three_rows() {
        let screen = ToolStackScreen::new();
        let grid_rows = screen
            .lines()
            .iter()
            .filter(|l| l.to_string().contains("[ ]"))
            .count();
        assert_eq!(grid_rows, 3);
    }
}
