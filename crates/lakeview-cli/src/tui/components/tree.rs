//! Resource tree component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use lakeview_core::{EntityClass, StarredTab, VisibleRow};

use crate::tui::app::App;

/// Render the flattened resource tree.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let tab_key = match app.options.starred_tab {
        StarredTab::All => "Resource.Tree.All",
        StarredTab::Starred => "Resource.Tree.Starred",
    };

    let block = Block::default()
        .title(format!(" {} ", app.messages.t(tab_key)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows = app.rows();
    if rows.is_empty() {
        let empty = Paragraph::new(app.messages.t("Resource.Tree.Empty"))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = app.tree_state.selected();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(app, row, selected == Some(row.id.as_str()))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_line<'a>(app: &'a App, row: &VisibleRow<'a>, is_selected: bool) -> Line<'a> {
    let marker = match (row.expandable, row.expanded) {
        (true, true) => "▾ ",
        (true, false) => "▸ ",
        (false, _) => "  ",
    };

    let name_style = match row.node.entity_type.class() {
        EntityClass::Container => Style::default().fg(Color::Cyan),
        EntityClass::Dataset => Style::default().fg(Color::Green),
        EntityClass::Leaf => Style::default().fg(Color::White),
    };
    let name_style = if is_selected {
        name_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        name_style
    };

    let mut spans = vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
    ];
    if row.starred {
        spans.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(row.node.name.as_str(), name_style));
    if row.loading {
        spans.push(Span::styled(
            format!(" {}", app.messages.t("Resource.Tree.Loading")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}
