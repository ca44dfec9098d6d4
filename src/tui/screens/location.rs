//! Location screen
//!
//! A dropdown country picker followed by "Continue" and "Skip this step".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::{button, heading, is_activate, radio, section, text, FocusRing, ScreenAction, StepScreen};
use crate::onboarding::catalog::COUNTRIES;
use crate::onboarding::steps::LocationForm;
use crate::onboarding::StepId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Select,
    Country(usize),
    Continue,
    Skip,
}

/// Screen state for the Location step
#[derive(Debug, Default)]
pub struct LocationScreen {
    form: LocationForm,
    focus: FocusRing,
}

impl LocationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LocationForm {
        &self.form
    }

    fn targets(&self) -> Vec<Target> {
        let mut targets = vec![Target::Select];
        if self.form.is_open() {
            targets.extend((0..COUNTRIES.len()).map(Target::Country));
        }
        targets.push(Target::Continue);
        targets.push(Target::Skip);
        targets
    }

    fn focused(&self) -> Target {
        let targets = self.targets();
        targets[self.focus.index(targets.len())]
    }

    fn toggle_dropdown(&mut self) {
        self.form.toggle_open();
        if self.form.is_open() {
            // Land on the current choice, or the first option
            let current = self
                .form
                .selected()
                .and_then(|c| COUNTRIES.iter().position(|o| o.code == c.code))
                .unwrap_or(0);
            self.focus.set(1 + current);
        } else {
            self.focus.set(0);
        }
    }
}

impl StepScreen for LocationScreen {
    fn step(&self) -> StepId {
        StepId::Location
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let focused = self.focused();

        let mut lines = heading(StepId::Location);
        lines.push(text(
            "This helps us personalize tool suggestions, currencies, and rewards for you.",
        ));
        lines.push(Line::from(""));
        lines.push(section("Country"));

        let arrow = if self.form.is_open() { "▴" } else { "▾" };
        let select_style = if focused == Target::Select {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if self.form.selected().is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(
                if focused == Target::Select { " › " } else { "   " },
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{:<28} {}", self.form.display(), arrow), select_style),
        ]));

        if self.form.is_open() {
            for (i, country) in COUNTRIES.iter().enumerate() {
                let chosen = self.form.selected().map(|c| c.code) == Some(country.code);
                let mut line = radio(country.name, chosen, focused == Target::Country(i));
                line.spans.insert(0, Span::raw("  "));
                lines.push(line);
            }
        }

        lines.push(Line::from(""));
        lines.push(button("Continue", focused == Target::Continue, true));
        lines.push(button("Skip this step", focused == Target::Skip, false));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let len = self.targets().len();
        if self.focus.handle_nav(key, len) {
            return ScreenAction::Handled;
        }

        if key.code == KeyCode::Esc && self.form.is_open() {
            self.form.close();
            self.focus.set(0);
            return ScreenAction::Handled;
        }
        if !is_activate(key) {
            return ScreenAction::Ignored;
        }

        match self.focused() {
            Target::Select => self.toggle_dropdown(),
            Target::Country(index) => {
                self.form.select(index);
                self.focus.set(0);
            }
            Target::Continue => return ScreenAction::Advance(self.form.continue_answer()),
            Target::Skip => return ScreenAction::Advance(self.form.skip_answer()),
        }
        ScreenAction::Handled
    }
}
