//! Terminal browser for the resource catalog.
//!
//! Provides an interactive terminal UI with:
//! - Page-type tabs for the selected dataset
//! - The resource tree, with All and Starred views
//! - A details pane and an offline banner

mod app;
mod components;
mod event;
mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use lakeview_core::{CatalogSource, Config, NetworkStatus};

/// Run the TUI application.
pub async fn run(
    config: Config,
    catalog: Box<dyn CatalogSource>,
    network: NetworkStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load before touching the terminal so errors print normally
    let mut app = App::new(&config, catalog, network)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(selected) = app.tree_state.selected_path() {
        println!("{}", selected);
    }

    result
}
