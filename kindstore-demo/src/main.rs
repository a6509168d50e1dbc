//! kindstore demo
//!
//! Declares a small catalogue (books, movies, songs) and runs typed store
//! calls against it. Every call is checked at compile time against the kind
//! it names.
//!
//! Usage:
//!   kindstore-demo --verbose --json

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kindstore_store::{Store, StoreConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "kindstore-demo")]
#[command(about = "Kind-keyed store walkthrough")]
struct Args {
    /// Path to a TOML store config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every kind's entities as JSON at the end
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = args
        .config
        .as_deref()
        .map(StoreConfig::load_from)
        .unwrap_or_default();
    info!(?config, "Starting walkthrough");
    let store = Store::with_config(config);

    kindstore_demo::run(&store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&kindstore_demo::dump(&store)?)?);
    }

    Ok(())
}
