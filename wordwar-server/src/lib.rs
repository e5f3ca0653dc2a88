//! WordWar Server - HTTP backend for the browser board
//!
//! This crate provides the web backend:
//! - REST API for pointer, keyboard and rack actions
//! - Draw lists following the board's render contract
//! - Static file serving for the canvas front end
//!
//! One server hosts one local game session.

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use wordwar_core::GameConfig;

pub use routes::board::DrawCall;
pub use routes::play::PlayResponse;
pub use state::{ApiError, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "wordwar/web".to_string(),
            game: GameConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Full board for the first paint
        .route("/api/board", get(routes::board::get_board))
        // Racks and bag
        .route("/api/letters", get(routes::letters::get_letters))
        // Input events
        .route("/api/click", post(routes::play::click))
        .route("/api/key", post(routes::play::key))
        .route("/api/mode", post(routes::play::set_mode))
        .route("/api/lift", post(routes::play::lift))
        .route("/api/cancel", post(routes::play::cancel))
        .route("/api/draw", post(routes::play::draw_letters))
        .route("/api/resize", post(routes::play::resize))
        .route("/api/reset", post(routes::play::reset))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.game.clone())?);
    let router = create_router(&config, state);

    tracing::info!("WordWar Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);
    tracing::info!(
        "Board side length {}, rack size {}",
        config.game.side_length,
        config.game.rack_size
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
