//! WordWar Core - Board model and play rules
//!
//! This crate provides the core game logic for WordWar:
//! - Geometry (hexagon polygons, hit testing, canvas layout)
//! - Board fields and the hexagon-shaped board
//! - Letter bag and player racks
//! - Game controller (activation protocol, placement, floating pieces)
//! - Render contract for drawing surfaces

pub mod geometry;
pub mod field;
pub mod board;
pub mod letters;
pub mod game;
pub mod render;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use geometry::{hexagon_boundary, contains_point, Layout, Point};
pub use field::{Color, FieldKind, HexField};
pub use board::{Coord, Damage, HexBoard, MAX_SIDE_LENGTH};
pub use letters::{LetterPool, LetterSnapshot, LETTER_DISTRIBUTION, TOTAL_LETTERS};
pub use game::{ActionMode, FloatingPiece, Game, KeyInput, Outcome, PlayState};
pub use render::{FieldStyle, FieldView, RecordingSurface, Surface};
pub use config::GameConfig;
pub use error::GameError;
