//! Racks and bag endpoint

use crate::state::{ApiError, ServerState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use wordwar_core::{FloatingPiece, LetterSnapshot};

#[derive(Serialize)]
pub struct LettersInfo {
    #[serde(flatten)]
    pub letters: LetterSnapshot,
    pub floating: Option<FloatingPiece>,
    pub total: usize,
}

/// Get both racks, the bag size and the piece being dragged
pub async fn get_letters(State(state): State<Arc<ServerState>>) -> Result<Json<LettersInfo>, ApiError> {
    let game = state.read_game()?;
    Ok(Json(LettersInfo {
        letters: game.pool().snapshot(),
        floating: game.floating(),
        total: game.letter_count(),
    }))
}
