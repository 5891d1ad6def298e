mod tui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use lakeview_core::logging::{init_logging, Terminal};
use lakeview_core::{
    is_node_expandable, CatalogSource, Config, EntityType, FileCatalog, NetworkStatus, ResourceNode,
    TreeState,
};

#[derive(Parser)]
#[command(name = "lakeview")]
#[command(about = "Browse a data-lake resource catalog", long_about = None)]
struct Cli {
    /// Config file (defaults to ./lakeview.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TreeArgs {
    /// Catalog snapshot (JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Treat datasets as leaves
    #[arg(long)]
    stop_at_datasets: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser
    Browse {
        #[command(flatten)]
        tree: TreeArgs,

        /// Start with the offline banner shown
        #[arg(long)]
        offline: bool,

        /// Hide the wiki page button
        #[arg(long)]
        no_wiki: bool,
    },
    /// Print the catalog tree
    Tree {
        #[command(flatten)]
        tree: TreeArgs,

        /// Expand every expandable node
        #[arg(long)]
        expand_all: bool,

        /// Print rows as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show how entity type tags are classified
    Classify {
        /// Wire type tags, matched exactly, e.g. FOLDER VIRTUAL_DATASET
        #[arg(required = true)]
        types: Vec<String>,

        #[arg(long)]
        stop_at_datasets: bool,
    },
    /// Print the default configuration
    Config,
}

impl TreeArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = path.clone();
        }
        if self.stop_at_datasets {
            config.tree.stop_at_datasets = true;
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().wrap_err("Failed to load config"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Browse {
            tree,
            offline,
            no_wiki,
        } => {
            tree.apply(&mut config);
            if no_wiki {
                config.ui.show_wiki = false;
            }
            init_logging(&config.logging, Terminal::Owned)?;

            let catalog = FileCatalog::open(&config.catalog.path)?;
            tui::run(config, Box::new(catalog), NetworkStatus::from_available(!offline))
                .await
                .map_err(|e| eyre!("{}", e))?;
        }
        Commands::Tree {
            tree,
            expand_all,
            json,
        } => {
            tree.apply(&mut config);
            init_logging(&config.logging, Terminal::Shared)?;

            let catalog = FileCatalog::open(&config.catalog.path)?;
            print_tree(&config, &catalog, expand_all, json)?;
        }
        Commands::Classify {
            types,
            stop_at_datasets,
        } => {
            for tag in types {
                let entity_type = EntityType::from_tag(&tag);
                let node = ResourceNode::new(entity_type, [tag.as_str()]);
                println!(
                    "{:<32} {:<10} expandable={}",
                    entity_type.tag(),
                    entity_type.class().display_name(),
                    is_node_expandable(&node, stop_at_datasets)
                );
            }
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(())
}

fn print_tree(config: &Config, catalog: &FileCatalog, expand_all: bool, json: bool) -> Result<()> {
    let options = config.tree_options();
    let mut state = TreeState::new();
    let roots = if expand_all {
        let roots = catalog.snapshot().to_vec();
        state.expand_all(&roots, options.stop_at_datasets);
        roots
    } else {
        catalog.load_roots()?
    };

    for row in state.visible_rows(&roots, &options) {
        if json {
            let line = serde_json::json!({
                "id": row.id,
                "type": row.node.entity_type,
                "depth": row.depth,
                "expandable": row.expandable,
            });
            println!("{}", line);
        } else {
            let marker = if row.expandable { "+" } else { "-" };
            println!(
                "{}{} {} [{}]",
                "  ".repeat(row.depth),
                marker,
                row.node.name,
                row.node.entity_type.display_name()
            );
        }
    }
    Ok(())
}
