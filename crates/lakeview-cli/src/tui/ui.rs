//! UI rendering for the TUI.

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::App;
use super::components::{banner, details, tabs, tree};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let banner_height = if app.banner().is_some() { 3 } else { 0 };

    // Main layout: tabs, banner, content, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Page tabs
            Constraint::Length(banner_height), // Offline banner
            Constraint::Min(5),                // Tree and details
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    tabs::render(app, frame, chunks[0]);
    banner::render(app, frame, chunks[1]);
    render_main_content(app, frame, chunks[2]);
    render_status_bar(app, frame, chunks[3]);
}

/// Render the tree and the details pane side by side.
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Tree
            Constraint::Percentage(55), // Details
        ])
        .split(area);

    tree::render(app, frame, chunks[0]);
    details::render(app, frame, chunks[1]);
}

/// Render the status bar.
fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let keys = "[j/k] Move  [Enter] Select  [Esc] Clear  [s] Star  [Tab] All/Starred  [h/l] Page  [o] Offline  [q] Quit";

    let status = match &app.status_message {
        Some(message) => format!("{}  |  {}", keys, message),
        None => keys.to_string(),
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
