//! Help dialog
//!
//! Shows keyboard shortcuts for the active step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::onboarding::StepId;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app.current_step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the given step
fn get_help_lines(step: StepId) -> Vec<Line<'static>> {
    let mut lines = vec![
        title_line("Global Keys"),
        Line::from(""),
        key_line("↑/↓ Tab", "Move between options"),
        key_line("Space/Enter", "Select, toggle, or press"),
        key_line("PgUp/PgDn", "Scroll the step"),
        key_line("?", "Show/hide help"),
        key_line("Esc", "Close dropdown, or quit"),
        key_line("Ctrl+c", "Quit"),
        Line::from(""),
        title_line(step.title()),
        Line::from(""),
    ];

    match step {
        StepId::Welcome => {
            lines.push(key_line("Enter", "Start setting up your library"));
        }
        StepId::About => {
            lines.push(Line::from("Pick one description and at least one kind of work."));
            lines.push(Line::from("Checking \"Others\" opens a note field; type to fill it."));
            lines.push(Line::from("Unchecking \"Others\" clears the note."));
        }
        StepId::Location => {
            lines.push(key_line("Enter", "Open/close the country list"));
            lines.push(Line::from("Picking a country replaces the previous choice."));
            lines.push(Line::from("Skip records that you chose not to answer."));
        }
        StepId::ToolStack => {
            lines.push(key_line("←/→", "Move across the grid"));
            lines.push(Line::from("Skip records that you chose not to answer."));
        }
        StepId::Personalization => {
            lines.push(Line::from("Select at least one goal to continue."));
        }
        StepId::Completed => {
            lines.push(key_line("Enter", "Go to dashboard"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn title_line(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
