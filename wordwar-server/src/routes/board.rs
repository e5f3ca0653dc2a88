//! Board endpoint - everything needed for a full repaint

use crate::state::{ApiError, ServerState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use wordwar_core::{ActionMode, Coord, FieldStyle, FieldView, FloatingPiece, Layout};

/// One field to paint, with its palette resolved
#[derive(Clone, Debug, Serialize)]
pub struct DrawCall {
    #[serde(flatten)]
    pub view: FieldView,
    pub style: FieldStyle,
}

impl From<FieldView> for DrawCall {
    fn from(view: FieldView) -> Self {
        let style = view.style();
        Self { view, style }
    }
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub side_length: u32,
    pub canvas: [f64; 2],
    pub layout: Layout,
    pub mode: ActionMode,
    pub active: Option<Coord>,
    pub floating: Option<FloatingPiece>,
    pub fields: Vec<DrawCall>,
}

/// Get every visible field of the board
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Result<Json<BoardInfo>, ApiError> {
    let game = state.read_game()?;
    let board = game.board();

    Ok(Json(BoardInfo {
        side_length: board.side_length(),
        canvas: [game.config().canvas_width, game.config().canvas_height],
        layout: *board.layout(),
        mode: game.mode(),
        active: board.active(),
        floating: game.floating(),
        fields: board
            .visible_fields()
            .map(|(coord, field)| DrawCall::from(FieldView::new(coord, field)))
            .collect(),
    }))
}
