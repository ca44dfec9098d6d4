//! Status bar view
//!
//! Shows the current step, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Step: ", Style::default().fg(Color::White)),
        Span::styled(
            app.current_step().name(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.scroll_lock.is_locked() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("scroll locked", Style::default().fg(Color::DarkGray)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.settings.show_key_hints {
        let hints = if app.modal.is_visible() {
            " Enter:OK "
        } else {
            app.screen.hints()
        };

        // Right-align the hints
        let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding_len = (area.width as usize)
            .saturating_sub(left_len)
            .saturating_sub(hints.chars().count());

        spans.push(Span::raw(" ".repeat(padding_len.max(1))));
        spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
