//! Page-type button bar.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs as RataTabs},
};

use crate::tui::app::App;

/// Render the page-type buttons for the current selection.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let buttons = app.page_buttons();
    let titles: Vec<&str> = buttons
        .iter()
        .map(|b| app.messages.t(b.label_key))
        .collect();
    let selected = buttons
        .iter()
        .position(|b| b.page_type == app.selected_page)
        .unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .title(" Lakeview ")
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}
