//! Layout definitions for the TUI
//!
//! The wizard is a centered card: header, progress bar, step body, and a
//! status bar along the bottom of the terminal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum width of the wizard card
const CARD_WIDTH: u16 = 84;

/// Layout regions for the TUI
pub struct WizardLayout {
    /// Title line with the step counter
    pub header: Rect,
    /// Progress bar
    pub progress: Rect,
    /// Step content
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Card
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let card = centered_columns(CARD_WIDTH, vertical[0]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Min(3),    // Body
            ])
            .split(card);

        Self {
            header: chunks[0],
            progress: chunks[1],
            body: chunks[3],
            status_bar: vertical[1],
        }
    }
}

/// Horizontally center a column of at most `width` cells
fn centered_columns(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
