//! Application state and main event loop.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tracing::{info, warn};

use lakeview_core::{
    handle_selected_node_change, offline_banner, page_type_buttons, Banner, CatalogError,
    CatalogSource, Config, Messages, NetworkStatus, PageButtonOptions, PageType, PageTypeButton,
    ResourceNode, TreeOptions, TreeState, VisibleRow,
};

use super::event::{Event, EventHandler};
use super::ui;

/// Main application state.
pub struct App {
    /// Catalog the tree loads from
    catalog: Box<dyn CatalogSource>,
    /// Loaded part of the catalog
    pub roots: Vec<ResourceNode>,
    /// Expansion, selection and stars
    pub tree_state: TreeState,
    /// Traversal options and the All/Starred tab
    pub options: TreeOptions,
    /// Index of the highlighted row
    pub cursor: usize,
    /// Currently selected page of the details pane
    pub selected_page: PageType,
    /// Whether the wiki page button is offered
    pub show_wiki: bool,
    /// Reachability signal driving the offline banner
    pub network: NetworkStatus,
    pub messages: Messages,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    tick_rate: Duration,
}

impl App {
    /// Create a new app instance with the catalog's top level loaded.
    pub fn new(
        config: &Config,
        catalog: Box<dyn CatalogSource>,
        network: NetworkStatus,
    ) -> Result<Self, CatalogError> {
        let roots = catalog.load_roots()?;
        Ok(Self {
            catalog,
            roots,
            tree_state: TreeState::new(),
            options: config.tree_options(),
            cursor: 0,
            selected_page: PageType::Default,
            show_wiki: config.ui.show_wiki,
            network,
            messages: Messages::for_locale(&config.ui.locale),
            status_message: None,
            should_quit: false,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        })
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut events = EventHandler::new(self.tick_rate);

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Tick) | Some(Event::Resize) => {}
                None => break,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Rows currently visible in the tree.
    pub fn rows(&self) -> Vec<VisibleRow<'_>> {
        self.tree_state.visible_rows(&self.roots, &self.options)
    }

    /// The selected node, looked up in the loaded tree.
    pub fn selected_node(&self) -> Option<&ResourceNode> {
        let id = self.tree_state.selected()?;
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Page buttons for the current selection.
    ///
    /// Only datasets have lineage, reflections and history.
    pub fn page_buttons(&self) -> Vec<PageTypeButton> {
        let is_dataset = self
            .selected_node()
            .is_some_and(|n| n.entity_type.is_dataset());
        page_type_buttons(&PageButtonOptions {
            show_wiki: self.show_wiki,
            is_new_query: !is_dataset,
        })
    }

    pub fn banner(&self) -> Option<Banner> {
        offline_banner(self.network, &self.messages)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at_cursor(),
            KeyCode::Esc => self.clear_selection(),
            KeyCode::Char('s') => self.toggle_star_at_cursor(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.options.starred_tab = self.options.starred_tab.toggle();
                self.cursor = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => self.cycle_page(1),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_page(-1),
            KeyCode::Char('o') => {
                self.network = self.network.toggle();
                info!(available = self.network.is_available(), "network status toggled");
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Route a selection on the highlighted row.
    fn select_at_cursor(&mut self) {
        let (node, expanded) = match self.rows().get(self.cursor) {
            Some(row) => (row.node.clone(), row.expanded),
            None => return,
        };

        handle_selected_node_change(Some(&node), expanded, &self.options, &mut self.tree_state);
        self.load_pending_children();
        self.clamp_cursor();
        self.ensure_page_available();
    }

    fn clear_selection(&mut self) {
        handle_selected_node_change(None, false, &self.options, &mut self.tree_state);
        self.ensure_page_available();
    }

    /// Fetch children for nodes the store marked as loading.
    fn load_pending_children(&mut self) {
        for id in self.tree_state.pending_loads() {
            let path = match self.roots.iter().find_map(|root| root.find(&id)) {
                Some(node) => node.full_path.clone(),
                None => {
                    self.tree_state.finish_loading(&id);
                    continue;
                }
            };

            match self.catalog.load_children(&path) {
                Ok(children) => {
                    info!(id = %id, count = children.len(), "loaded children");
                    lakeview_core::graft_children(&mut self.roots, &path, children);
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "failed to load children");
                    self.tree_state.collapse(&id);
                    self.status_message = Some(format!("Failed to load {}: {}", id, e));
                }
            }
            self.tree_state.finish_loading(&id);
        }
    }

    fn toggle_star_at_cursor(&mut self) {
        let id = match self.rows().get(self.cursor) {
            Some(row) => row.id.clone(),
            None => return,
        };
        let starred = self.tree_state.toggle_star(&id);
        self.status_message = Some(if starred {
            format!("Starred {}", id)
        } else {
            format!("Unstarred {}", id)
        });
        self.clamp_cursor();
    }

    fn cycle_page(&mut self, delta: isize) {
        let buttons = self.page_buttons();
        let current = buttons
            .iter()
            .position(|b| b.page_type == self.selected_page)
            .unwrap_or(0);
        let len = buttons.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.selected_page = buttons[next].page_type;
    }

    /// Fall back to the data page when the current one is no longer offered.
    fn ensure_page_available(&mut self) {
        if !self
            .page_buttons()
            .iter()
            .any(|b| b.page_type == self.selected_page)
        {
            self.selected_page = PageType::Default;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lakeview_core::{FileCatalog, StarredTab};

    const SNAPSHOT: &str = r#"[
        { "type": "SPACE", "name": "Sales", "children": [
            { "type": "VIRTUAL_DATASET", "name": "orders", "children": [
                { "type": "UNKNOWN", "name": "order_id" }
            ] },
            { "type": "FILE", "name": "notes.txt" }
        ] },
        { "type": "HOME", "name": "alice" }
    ]"#;

    pub(crate) fn test_app(config: &Config) -> App {
        let catalog = FileCatalog::from_json("mem", SNAPSHOT).unwrap();
        App::new(config, Box::new(catalog), NetworkStatus::Online).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_enter_expands_and_loads_children() {
        let mut app = test_app(&Config::default());
        assert_eq!(app.rows().len(), 2);

        press(&mut app, KeyCode::Enter);

        assert!(app.tree_state.is_node_expanded("Sales"));
        assert!(app.tree_state.pending_loads().is_empty());
        let names: Vec<_> = app.rows().iter().map(|r| r.node.name.clone()).collect();
        assert_eq!(names, vec!["Sales", "orders", "notes.txt", "alice"]);
    }

    #[test]
    fn test_stop_at_datasets_selects_without_expanding() {
        let mut config = Config::default();
        config.tree.stop_at_datasets = true;
        let mut app = test_app(&config);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tree_state.selected(), Some("Sales.orders"));
        assert!(!app.tree_state.is_node_expanded("Sales.orders"));
        assert_eq!(app.rows().len(), 4);
    }

    #[test]
    fn test_dataset_selection_offers_all_pages() {
        let mut app = test_app(&Config::default());
        assert_eq!(app.page_buttons().len(), 2);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page_buttons().len(), 5);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_page, PageType::History);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tree_state.selected(), None);
        assert_eq!(app.selected_page, PageType::Default);
    }

    #[test]
    fn test_star_and_starred_tab() {
        let mut app = test_app(&Config::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.tree_state.is_starred("alice"));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.options.starred_tab, StarredTab::Starred);
        let rows = app.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "alice");
    }

    #[test]
    fn test_offline_toggle_shows_banner() {
        let mut app = test_app(&Config::default());
        assert!(app.banner().is_none());
        press(&mut app, KeyCode::Char('o'));
        assert!(app.banner().is_some());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = test_app(&Config::default());
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, 1);
        for _ in 0..5 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.cursor, 0);
    }
}
