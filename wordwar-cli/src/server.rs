//! Server command - start the browser backend
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to wordwar-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use wordwar_server::{run_server, ServerConfig};

use crate::game_args::GameArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Directory containing the canvas front end
    #[arg(long, default_value = "wordwar/web")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub game: GameArgs,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
pub fn run(args: ServerArgs, file: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let config = configure_server(&args, file, seed)?;

    tracing::info!("Starting WordWar server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs, file: Option<&Path>, seed: Option<u64>) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
        game: args.game.to_config(file, seed)?,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that static directory exists
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!("Static path exists but is not a directory: {}", path.display());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
