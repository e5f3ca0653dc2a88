//! WordWar CLI - Command-line interface
//!
//! Commands:
//! - play: Interactive game on the terminal
//! - render: Write an SVG snapshot of a board
//! - serve: Start the browser backend

mod game_args;
mod play;
mod render_cmd;
mod server;
mod svg;
mod text;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wordwar")]
#[command(about = "Two-player word placement on a hexagonal board")]
struct Cli {
    /// Random seed for the letter bag
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Game configuration JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the terminal
    Play(play::PlayArgs),
    /// Write an SVG snapshot of a board
    Render(render_cmd::RenderArgs),
    /// Start the browser backend
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr; stdout carries the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.config.as_deref();

    match cli.command {
        Commands::Play(args) => play::run(args, file, cli.seed),
        Commands::Render(args) => render_cmd::run(args, file, cli.seed),
        Commands::Serve(args) => server::run(args, file, cli.seed),
    }
}
