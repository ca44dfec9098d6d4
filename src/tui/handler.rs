//! Event handler for the TUI
//!
//! Routes keyboard events to the help overlay, the completion modal, or the
//! active step screen, in that order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::screens::ScreenAction;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) => Ok(()),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Any key closes help
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    if app.modal.is_visible() {
        handle_modal_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::PageUp => {
            app.scroll_up();
            return Ok(());
        }
        KeyCode::PageDown => {
            app.scroll_down();
            return Ok(());
        }
        _ => {}
    }

    let action = app.screen.handle_key(key);
    if action == ScreenAction::Ignored {
        handle_global_key(app, key);
    } else {
        app.apply(action);
    }

    Ok(())
}

/// Keys the active screen did not use
fn handle_global_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') if !app.screen.captures_text() => app.quit(),
        KeyCode::Char('?') if !app.screen.captures_text() => app.toggle_help(),
        _ => {}
    }
}

/// Keys while the completion modal is shown
fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') | KeyCode::Char('O') => {
            app.acknowledge_modal();
        }
        KeyCode::PageUp => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_down();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::onboarding::StepId;
    use crossterm::event::KeyEvent;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn walk_to(app: &mut App, step: StepId) {
        // Welcome
        press(app, KeyCode::Enter);
        if step == StepId::About {
            return;
        }
        // About: Freelance, Design, Continue
        press(app, KeyCode::Char(' '));
        for _ in 0..4 {
            press(app, KeyCode::Down);
        }
        press(app, KeyCode::Char(' '));
        for _ in 0..5 {
            press(app, KeyCode::Up);
        }
        press(app, KeyCode::Enter);
        if step == StepId::Location {
            return;
        }
        // Location: Skip
        press(app, KeyCode::Up);
        press(app, KeyCode::Enter);
        if step == StepId::ToolStack {
            return;
        }
        // ToolStack: Continue
        press(app, KeyCode::Up);
        press(app, KeyCode::Up);
        press(app, KeyCode::Enter);
        if step == StepId::Personalization {
            return;
        }
        // Personalization: first goal, Continue
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Up);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_full_walkthrough() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        walk_to(&mut app, StepId::Completed);

        assert_eq!(app.current_step(), StepId::Completed);
        assert_eq!(app.flow.progress_percentage(), 100.0);
        let summary = app.flow.summary();
        assert!(summary.about.is_some());
        assert!(summary.location.as_ref().unwrap().is_skipped());
        assert!(!summary.tools.as_ref().unwrap().is_skipped());
        assert_eq!(summary.goals.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_each_unconditional_advance_moves_one_step() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        walk_to(&mut app, StepId::Location);
        let before = app.flow.current_step_index();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.flow.current_step_index(), before + 1);
        assert_eq!(app.current_step(), StepId::ToolStack);
    }

    #[test]
    fn test_invalid_about_does_not_advance() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        walk_to(&mut app, StepId::About);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_step(), StepId::About);
    }

    #[test]
    fn test_modal_cycle_on_completed_step() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        walk_to(&mut app, StepId::Completed);

        press(&mut app, KeyCode::Enter);
        assert!(app.flow.modal_visible());
        assert!(app.scroll_lock.is_locked());

        // Scrolling and screen keys are swallowed by the modal
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.body_scroll, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        assert!(!app.flow.modal_visible());
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.current_step(), StepId::Completed);
    }

    #[test]
    fn test_help_toggle_and_close() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Enter);
        assert!(!app.show_help);
        assert_eq!(app.current_step(), StepId::Welcome);
    }

    #[test]
    fn test_question_mark_is_typed_into_note() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        walk_to(&mut app, StepId::About);
        for _ in 0..8 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q'));

        assert!(!app.show_help);
        assert!(!app.should_quit);

        // Pick a description, then submit from Continue
        for _ in 0..9 {
            press(&mut app, KeyCode::Up);
        }
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), StepId::Location);
        let about = app.flow.summary().about.as_ref().unwrap();
        assert_eq!(about.others, "?q");
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&settings);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
