//! Progress bar view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

use crate::tui::app::App;

/// Render the progress bar for the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let percentage = app.flow.progress_percentage();

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio((percentage / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", percentage));

    frame.render_widget(gauge, area);
}
