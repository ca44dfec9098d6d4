//! Step screens
//!
//! One screen per onboarding step. A screen owns its form and focus, turns
//! key presses into form updates, and reports back to the app through a
//! [`ScreenAction`]. Screens are created fresh by [`for_step`] whenever a
//! step becomes active.

pub mod about;
pub mod completed;
pub mod location;
pub mod personalization;
pub mod tool_stack;
pub mod welcome;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::onboarding::{StepAnswer, StepId};

/// What the app should do after a screen handled a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// The screen did not use the key
    Ignored,
    /// The screen updated its own state
    Handled,
    /// Validation passed; record the answer and move on
    Advance(StepAnswer),
    /// Flip the completion modal
    ToggleModal,
}

/// A single step of the wizard as shown in the terminal
pub trait StepScreen {
    /// The step this screen renders
    fn step(&self) -> StepId;

    /// Body content, top to bottom
    fn lines(&self) -> Vec<Line<'static>>;

    /// React to a key press
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction;

    /// Whether printable keys are currently going into a text field
    fn captures_text(&self) -> bool {
        false
    }

    /// Key hints for the status bar
    fn hints(&self) -> &'static str {
        " ↑/↓:Move  Space/Enter:Select  ?:Help  Esc:Quit "
    }
}

/// Build the screen for a step
pub fn for_step(step: StepId) -> Box<dyn StepScreen> {
    match step {
        StepId::Welcome => Box::new(welcome::WelcomeScreen::new()),
        StepId::About => Box::new(about::AboutScreen::new()),
        StepId::Location => Box::new(location::LocationScreen::new()),
        StepId::ToolStack => Box::new(tool_stack::ToolStackScreen::new()),
        StepId::Personalization => Box::new(personalization::PersonalizationScreen::new()),
        StepId::Completed => Box::new(completed::CompletedScreen::new()),
    }
}

/// Focus position within a screen's list of focusable items
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    /// Current index, clamped to `len`
    pub fn index(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index(len) + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index(len) + len - 1) % len;
        }
    }

    /// Handle focus navigation keys; returns true if the key moved focus
    pub fn handle_nav(&mut self, key: KeyEvent, len: usize) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.next(len);
                true
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.prev(len);
                true
            }
            _ => false,
        }
    }
}

/// Whether the key activates the focused item
pub fn is_activate(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Step title followed by a blank line
pub fn heading(step: StepId) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// Plain explanatory text
pub fn text(content: &'static str) -> Line<'static> {
    Line::from(Span::styled(content, Style::default().fg(Color::White)))
}

/// Question or group label
pub fn section(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Inline validation message
pub fn error(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", message),
        Style::default().fg(Color::Red),
    ))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn pointer(focused: bool) -> Span<'static> {
    Span::styled(
        if focused { " › " } else { "   " },
        Style::default().fg(Color::Cyan),
    )
}

/// Span for a checkbox, used directly by grid layouts
pub fn checkbox_span(label: &str, checked: bool, focused: bool) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Span::styled(format!("{} {}", mark, label), focus_style(focused))
}

pub fn checkbox(label: &str, checked: bool, focused: bool) -> Line<'static> {
    Line::from(vec![pointer(focused), checkbox_span(label, checked, focused)])
}

pub fn radio(label: &str, selected: bool, focused: bool) -> Line<'static> {
    let mark = if selected { "(•)" } else { "( )" };
    Line::from(vec![
        pointer(focused),
        Span::styled(format!("{} {}", mark, label), focus_style(focused)),
    ])
}

/// An action button; secondary buttons are dimmed when not focused
pub fn button(label: &str, focused: bool, primary: bool) -> Line<'static> {
    let style = if focused {
        focus_style(true)
    } else if primary {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![pointer(focused), Span::styled(format!("[ {} ]", label), style)])
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn enter() -> KeyEvent {
        key(KeyCode::Enter)
    }

    pub fn space() -> KeyEvent {
        key(KeyCode::Char(' '))
    }

    pub fn down() -> KeyEvent {
        key(KeyCode::Down)
    }

    pub fn up() -> KeyEvent {
        key(KeyCode::Up)
    }

    pub fn char(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }
}
