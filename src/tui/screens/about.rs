//! About screen
//!
//! Description radio group, work checkboxes, and the "Others" note field.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use super::{
    button, checkbox, error, heading, is_activate, radio, section, text, FocusRing, ScreenAction,
    StepScreen,
};
use crate::onboarding::catalog::{Description, WorkType};
use crate::onboarding::steps::AboutForm;
use crate::onboarding::{StepAnswer, StepId};
use crate::tui::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Description(Description),
    Work(WorkType),
    Others,
    OthersNote,
    Continue,
}

/// Screen state for the About step
#[derive(Debug)]
pub struct AboutScreen {
    form: AboutForm,
    note: TextInput,
    focus: FocusRing,
}

impl AboutScreen {
    pub fn new() -> Self {
        Self {
            form: AboutForm::new(),
            note: TextInput::new().placeholder("Please specify"),
            focus: FocusRing::default(),
        }
    }

    pub fn form(&self) -> &AboutForm {
        &self.form
    }

    fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = Description::ALL
            .iter()
            .map(|d| Target::Description(*d))
            .collect();
        targets.extend(WorkType::STANDARD.iter().map(|w| Target::Work(*w)));
        targets.push(Target::Others);
        if self.form.others_selected() {
            targets.push(Target::OthersNote);
        }
        targets.push(Target::Continue);
        targets
    }

    fn focused(&self) -> Target {
        let targets = self.targets();
        targets[self.focus.index(targets.len())]
    }

    fn submit(&mut self) -> ScreenAction {
        match self.form.submit() {
            Ok(answers) => ScreenAction::Advance(StepAnswer::About(answers)),
            Err(_) => ScreenAction::Handled,
        }
    }

    fn edit_note(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Char(c) => self.note.insert(c),
            KeyCode::Backspace => self.note.backspace(),
            KeyCode::Delete => self.note.delete(),
            KeyCode::Left => self.note.move_left(),
            KeyCode::Right => self.note.move_right(),
            KeyCode::Home => self.note.move_start(),
            KeyCode::End => self.note.move_end(),
            _ => return ScreenAction::Ignored,
        }
        self.form.set_others_note(self.note.value());
        ScreenAction::Handled
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StepScreen for AboutScreen {
    fn step(&self) -> StepId {
        StepId::About
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let focused = self.focused();
        let errors = self.form.errors();

        let mut lines = heading(StepId::About);
        lines.push(text(
            "Help us tailor your library by telling us a bit about yourself.",
        ));
        lines.push(Line::from(""));

        lines.push(section("What best describes you? Please select an option"));
        if let Some(msg) = &errors.description {
            lines.push(error(msg));
        }
        for description in Description::ALL {
            lines.push(radio(
                description.label(),
                self.form.description() == Some(description),
                focused == Target::Description(description),
            ));
        }
        lines.push(Line::from(""));

        lines.push(section(
            "What kind of work do you do? Please select at least one option",
        ));
        if let Some(msg) = &errors.work {
            lines.push(error(msg));
        }
        for work in WorkType::STANDARD {
            lines.push(checkbox(
                work.label(),
                self.form.is_work_selected(work),
                focused == Target::Work(work),
            ));
        }
        lines.push(checkbox(
            WorkType::Others.label(),
            self.form.others_selected(),
            focused == Target::Others,
        ));
        if self.form.others_selected() {
            let mut spans = vec![Span::raw("       ")];
            spans.extend(self.note.spans(focused == Target::OthersNote));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(button("Continue", focused == Target::Continue, true));
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let len = self.targets().len();
        if self.focus.handle_nav(key, len) {
            return ScreenAction::Handled;
        }

        let target = self.focused();
        if target == Target::OthersNote {
            return self.edit_note(key);
        }
        if !is_activate(key) {
            return ScreenAction::Ignored;
        }

        match target {
            Target::Description(description) => self.form.select_description(description),
            Target::Work(work) => self.form.toggle_work(work),
            Target::Others => {
                self.form.toggle_others();
                if !self.form.others_selected() {
                    self.note.clear();
                }
            }
            Target::Continue => return self.submit(),
            Target::OthersNote => {}
        }
        ScreenAction::Handled
    }

    fn captures_text(&self) -> bool {
        self.focused() == Target::OthersNote
    }

    fn hints(&self) -> &'static str {
        if self.captures_text() {
            " Type to edit  ↑/↓:Move  Enter:Continue "
        } else {
            " ↑/↓:Move  Space:Select  ?:Help  Esc:Quit "
        }
    }
}
