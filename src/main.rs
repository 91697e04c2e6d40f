use std::path::PathBuf;

use clap::Parser;

use nodegraph::config::load_config;
use nodegraph::graph::store::EdgeStore;
use nodegraph::http::serve;
use nodegraph::observability::init_logging;

/// Node relationship service — directed edge storage with tree
/// reconstruction over HTTP.
#[derive(Debug, Parser)]
#[command(name = "nodegraph", version, about)]
struct Cli {
    /// Path to a YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database path (overrides the config file).
    #[arg(long)]
    db: Option<String>,

    /// Bind address, e.g. 0.0.0.0:8080 (overrides the config file).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    tracing::info!(db_path = %config.db_path, "opening edge store");
    let store = EdgeStore::open(&config.db_path)?;

    serve(store, &config.bind_addr).await
}
