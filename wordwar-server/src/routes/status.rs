//! Status endpoint - liveness plus a glance at the running game

use crate::state::{ApiError, ServerState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use wordwar_core::ActionMode;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub side_length: u32,
    pub letters_on_board: usize,
    pub bag: usize,
    pub mode: ActionMode,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Result<Json<StatusResponse>, ApiError> {
    let game = state.read_game()?;

    Ok(Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        side_length: game.board().side_length(),
        letters_on_board: game.board().letters_on_board(),
        bag: game.pool().bag_len(),
        mode: game.mode(),
    }))
}
