//! Server state management
//!
//! The single game session shared by all handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use wordwar_core::{Game, GameConfig, GameError};

/// Server-wide shared state
pub struct ServerState {
    pub game: RwLock<Game>,
}

impl ServerState {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            game: RwLock::new(Game::new(config)?),
        })
    }

    pub fn read_game(&self) -> Result<RwLockReadGuard<'_, Game>, ApiError> {
        self.game.read().map_err(|_| ApiError::poisoned())
    }

    pub fn write_game(&self) -> Result<RwLockWriteGuard<'_, Game>, ApiError> {
        self.game.write().map_err(|_| ApiError::poisoned())
    }
}

/// Error answered to the client as `{ "error": ... }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl ToString) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    fn poisoned() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "game state unavailable".to_string(),
        }
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::bad_request(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
