//! # loopboard-cli
//!
//! CLI for inspecting and demoing loopboard shared puzzle state.
//!
//! ## Commands
//!
//! - `show`: render a seeded board as text
//! - `demo`: run two scripted concurrent sessions and show convergence
//! - `keys`: dump the store key layout for a grid
//!
//! ## Example
//!
//! ```bash
//! # Render the default 1x1 board
//! loopboard show
//!
//! # Render a board file
//! loopboard show --board board.toml
//!
//! # Watch two sessions edit one board
//! loopboard demo
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{demo, keys, show};

/// CLI for inspecting and demoing loopboard shared puzzle state.
#[derive(Parser, Debug)]
#[command(name = "loopboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board definition file (TOML); defaults to a blank 1x1 board
    #[arg(long, global = true)]
    board: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the seeded board as text
    Show,

    /// Run two scripted sessions against one shared board
    Demo,

    /// Dump the store key layout for a grid
    Keys {
        /// Row count
        #[arg(long, default_value = "1")]
        rows: u32,

        /// Column count
        #[arg(long, default_value = "1")]
        cols: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = config::load_seed(cli.board.as_deref())?;

    match cli.command {
        Commands::Show => show::run(seed),
        Commands::Demo => demo::run(seed).await,
        Commands::Keys { rows, cols } => keys::run(rows, cols),
    }
}
