//! TUI Views module
//!
//! Draws the wizard card for the active step, the status bar, and any
//! overlay on top.

pub mod progress;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::dialogs;
use super::layout::WizardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = WizardLayout::new(frame.area());

    render_header(frame, app, layout.header);
    progress::render(frame, app, layout.progress);
    render_body(frame, app, layout.body);
    status_bar::render(frame, app, layout.status_bar);

    if app.modal.is_visible() {
        dialogs::completion::render(frame);
    }
    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Flowva",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  Step {} of {}",
                app.flow.current_step_index() + 1,
                app.flow.total_steps()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let lines = app.screen.lines();
    app.clamp_scroll(lines.len(), inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.body_scroll, 0));

    frame.render_widget(paragraph, area);
}
