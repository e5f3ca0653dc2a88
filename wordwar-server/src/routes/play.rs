//! Input endpoints - clicks, keys and rack actions
//!
//! Every handler applies one transition to the game and answers with what
//! changed plus the fields the canvas has to repaint. Stray input (a click on
//! an occupied field, a letter missing from the rack) is not an error: the
//! response carries `ignored` and nothing changes.

use crate::routes::board::DrawCall;
use crate::state::{ApiError, ServerState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wordwar_core::{
    ActionMode, Color, FloatingPiece, Game, GameError, KeyInput, LetterSnapshot, Outcome, RecordingSurface,
};

/// Answer to every input event
#[derive(Serialize)]
pub struct PlayResponse {
    pub outcome: Option<Outcome>,
    pub ignored: Option<String>,
    pub mode: ActionMode,
    pub floating: Option<FloatingPiece>,
    /// The canvas must be wiped before drawing
    pub cleared: bool,
    pub draws: Vec<DrawCall>,
    pub letters: LetterSnapshot,
}

/// Turn a transition result into a response, flushing pending repaints
fn respond(game: &mut Game, result: Result<Outcome, GameError>) -> Result<Json<PlayResponse>, ApiError> {
    let (outcome, ignored) = match result {
        Ok(outcome) => {
            tracing::debug!("{:?}", outcome);
            (Some(outcome), None)
        }
        Err(e) if e.is_silent() => {
            tracing::debug!("Ignored input: {}", e);
            (None, Some(e.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut surface = RecordingSurface::default();
    game.render(&mut surface);

    Ok(Json(PlayResponse {
        outcome,
        ignored,
        mode: game.mode(),
        floating: game.floating(),
        cleared: surface.cleared,
        draws: surface.into_views().into_iter().map(DrawCall::from).collect(),
        letters: game.pool().snapshot(),
    }))
}

#[derive(Deserialize)]
pub struct ClickRequest {
    pub x: f64,
    pub y: f64,
}

/// Click on the canvas, in canvas pixels
pub async fn click(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ClickRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    let result = game.click(req.x, req.y);
    respond(&mut game, result)
}

#[derive(Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

/// Key press; keys the game does not use change nothing
pub async fn key(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    let result = match KeyInput::parse(&req.key) {
        Some(input) => game.key(input),
        None => Ok(Outcome::Unchanged),
    };
    respond(&mut game, result)
}

#[derive(Deserialize)]
pub struct ModeRequest {
    pub mode: ActionMode,
}

/// Switch the action mode
pub async fn set_mode(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ModeRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    game.set_mode(req.mode);
    respond(&mut game, Ok(Outcome::Unchanged))
}

#[derive(Deserialize)]
pub struct LiftRequest {
    pub color: String,
    pub letter: char,
}

/// Pick a tile up from a rack
pub async fn lift(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<LiftRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let color: Color = req.color.parse()?;
    let mut game = state.write_game()?;
    let result = game.lift(color, req.letter);
    respond(&mut game, result)
}

/// Drop the floating piece and the active field
pub async fn cancel(State(state): State<Arc<ServerState>>) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    let outcome = game.cancel();
    respond(&mut game, Ok(outcome))
}

/// Refill both racks from the bag
pub async fn draw_letters(State(state): State<Arc<ServerState>>) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    let drawn = game.draw_letters();
    tracing::info!("Drew {} letters, {} left in the bag", drawn, game.pool().bag_len());
    respond(&mut game, Ok(Outcome::Unchanged))
}

#[derive(Deserialize)]
pub struct ResizeRequest {
    pub width: f64,
    pub height: f64,
}

/// Lay the board out for a new canvas size
pub async fn resize(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ResizeRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    game.resize(req.width, req.height)?;
    respond(&mut game, Ok(Outcome::Unchanged))
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub side_length: u32,
}

/// Start a new game on a board of the given size
pub async fn reset(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let mut game = state.write_game()?;
    game.reset(req.side_length)?;
    tracing::info!("New game with side length {}", req.side_length);
    if game.rack_shortfall() > 0 {
        tracing::warn!("Not enough letters to fill both racks");
    }
    respond(&mut game, Ok(Outcome::Unchanged))
}
