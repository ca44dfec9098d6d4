//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::error::FlowvaError;
use crate::onboarding::OnboardingSummary;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive wizard and return what was collected
pub fn run_tui(settings: &Settings) -> Result<OnboardingSummary> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, settings);
    finish(result, restore_terminal())
}

/// Combine the loop result with the restore result, loop error first
fn finish(
    result: Result<OnboardingSummary>,
    restored: Result<()>,
) -> Result<OnboardingSummary> {
    let summary = result?;
    restored?;
    Ok(summary)
}

fn event_loop(terminal: &mut Tui, settings: &Settings) -> Result<OnboardingSummary> {
    let mut app = App::new(settings);
    let events = EventHandler::new(settings.tick_rate());
    tracing::info!(session = %app.flow.summary().session_id, "onboarding started");

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events
            .next()
            .map_err(|_| FlowvaError::Tui("terminal event stream closed".into()))?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        step = %app.current_step(),
        complete = app.flow.is_complete(),
        "onboarding finished"
    );
    Ok(app.flow.summary().clone())
}
