//! Details pane for the selected node.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use lakeview_core::{is_node_expandable, node::format_full_path, PageType, ResourceNode};

use crate::tui::app::App;

/// Render the page selected in the tab bar for the selected node.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = app
        .page_buttons()
        .into_iter()
        .find(|b| b.page_type == app.selected_page)
        .map(|b| app.messages.t(b.label_key))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {} ", page))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match app.selected_node() {
        Some(node) => page_lines(app, node),
        None => vec![Line::styled(
            app.messages.t("Resource.Details.None"),
            Style::default().fg(Color::DarkGray),
        )],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn page_lines<'a>(app: &'a App, node: &'a ResourceNode) -> Vec<Line<'a>> {
    match app.selected_page {
        PageType::Default => vec![
            Line::styled(
                node.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            field("Type", node.entity_type.display_name().to_string()),
            field("Class", node.entity_type.class().display_name().to_string()),
            field("Path", node.id()),
            field(
                "Expandable",
                is_node_expandable(node, app.options.stop_at_datasets).to_string(),
            ),
            field("Children", node.children.len().to_string()),
            field("Starred", app.tree_state.is_starred(&node.id()).to_string()),
        ],
        PageType::Wiki => vec![Line::raw(format!("No wiki content for {}.", node.name))],
        PageType::Graph => node
            .full_path
            .iter()
            .enumerate()
            .map(|(depth, _)| {
                let ancestor = format_full_path(&node.full_path[..=depth]);
                Line::raw(format!("{}└ {}", "  ".repeat(depth), ancestor))
            })
            .collect(),
        PageType::Reflections => vec![Line::raw("No reflections defined.")],
        PageType::History => vec![Line::raw("No saved versions.")],
    }
}
