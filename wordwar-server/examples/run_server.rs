//! Example to run the WordWar server standalone
//!
//! Run with: cargo run -p wordwar-server --example run_server

use wordwar_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting WordWar server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/index.html", config.port);

    run_server(config).await
}
