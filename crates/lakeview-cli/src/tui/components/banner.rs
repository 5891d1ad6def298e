//! Offline banner.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use lakeview_core::BannerAppearance;

use crate::tui::app::App;

/// Render the banner, if the network status calls for one.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(banner) = app.banner() else {
        return;
    };

    let color = match banner.appearance {
        BannerAppearance::Info => Color::Cyan,
        BannerAppearance::Warning => Color::Yellow,
    };

    let paragraph = Paragraph::new(banner.text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}
