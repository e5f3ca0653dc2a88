//! Game controller - turns clicks and key presses into board and rack changes
//!
//! Play has no turns. Whoever acts picks a color through the action mode (for
//! key presses) or by lifting a tile from a rack (for drag and drop).

use crate::board::{Coord, HexBoard};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::field::{Color, FieldKind};
use crate::letters::LetterPool;
use crate::render::Surface;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// INPUT TYPES
// ============================================================================

/// What a click on the board does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMode {
    /// Click activates a field; key presses are ignored
    #[default]
    Select,
    /// Click activates a field; key presses play black letters
    PlayBlack,
    /// Click activates a field; key presses play white letters
    PlayWhite,
    /// Click sends the field's letter back to the bag
    ReturnToBag,
    /// Click sends the field's letter back to the rack of its color
    ReturnToRack,
}

impl ActionMode {
    /// Color that key presses play in, if any
    pub fn play_color(self) -> Option<Color> {
        match self {
            ActionMode::PlayBlack => Some(Color::Black),
            ActionMode::PlayWhite => Some(Color::White),
            _ => None,
        }
    }
}

impl FromStr for ActionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(ActionMode::Select),
            "black" | "play_black" => Ok(ActionMode::PlayBlack),
            "white" | "play_white" => Ok(ActionMode::PlayWhite),
            "bag" | "return_to_bag" => Ok(ActionMode::ReturnToBag),
            "rack" | "return_to_rack" => Ok(ActionMode::ReturnToRack),
            other => Err(format!("unknown action mode '{}'", other)),
        }
    }
}

/// A key press the game reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Escape,
    Backspace,
}

impl KeyInput {
    /// Parse a key name as sent by a browser or typed on a terminal
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" | "esc" => Some(KeyInput::Escape),
            "Backspace" => Some(KeyInput::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(KeyInput::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

/// A tile lifted from a rack and not yet placed. The tile stays in the rack
/// until it lands on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingPiece {
    pub letter: char,
    pub color: Color,
}

/// Where the play protocol stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    FieldActive(Coord),
    FloatingDrag(FloatingPiece),
}

/// What an input event changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Activated { coord: Coord },
    Placed { coord: Coord, color: Color, letter: char },
    ReturnedToBag { coord: Coord, letter: char },
    ReturnedToRack { coord: Coord, color: Color, letter: char },
    Lifted { piece: FloatingPiece },
    Cancelled,
    /// Click outside every field
    Missed,
    Unchanged,
}

// ============================================================================
// GAME
// ============================================================================

/// One game: board, letters, floating piece and action mode
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: HexBoard,
    pool: LetterPool,
    floating: Option<FloatingPiece>,
    mode: ActionMode,
}

impl Game {
    /// Build the board, fill the bag and deal both racks (black first)
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut board = HexBoard::new(config.side_length);
        board.relayout(config.canvas_width, config.canvas_height);

        let mut pool = match config.seed {
            Some(seed) => LetterPool::with_seed(config.rack_size, seed),
            None => LetterPool::new(config.rack_size),
        };
        pool.refill(Color::Black);
        pool.refill(Color::White);

        Ok(Self {
            config,
            board,
            pool,
            floating: None,
            mode: ActionMode::default(),
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn floating(&self) -> Option<FloatingPiece> {
        self.floating
    }

    pub fn state(&self) -> PlayState {
        match (self.floating, self.board.active()) {
            (Some(piece), _) => PlayState::FloatingDrag(piece),
            (None, Some(coord)) => PlayState::FieldActive(coord),
            (None, None) => PlayState::Idle,
        }
    }

    /// Tiles in the bag, both racks and on the board
    pub fn letter_count(&self) -> usize {
        self.pool.total() + self.board.letters_on_board()
    }

    /// Tiles missing from the racks because the bag ran dry
    pub fn rack_shortfall(&self) -> usize {
        [Color::Black, Color::White]
            .iter()
            .map(|&c| self.pool.target_rack_size().saturating_sub(self.pool.rack(c).len()))
            .sum()
    }

    // ========================================================================
    // PLAY PROTOCOL
    // ========================================================================

    pub fn set_mode(&mut self, mode: ActionMode) {
        self.mode = mode;
    }

    /// Play a tile of `color` onto the active field.
    ///
    /// Fails without changing anything if no field is active or the rack has
    /// no such letter.
    pub fn play_letter(&mut self, color: Color, letter: char) -> Result<Outcome, GameError> {
        let letter = letter.to_ascii_uppercase();
        let coord = self.board.active().ok_or(GameError::NoActiveField)?;
        if !self.pool.rack_contains(color, letter) {
            return Err(GameError::LetterUnavailable { color, letter });
        }

        self.board.place_letter(coord, color, letter)?;
        self.pool.remove_from_rack(color, letter);
        self.board.deactivate();
        Ok(Outcome::Placed { coord, color, letter })
    }

    /// Pick a tile up from a rack to drop it on the board with the next click
    pub fn lift(&mut self, color: Color, letter: char) -> Result<Outcome, GameError> {
        let letter = letter.to_ascii_uppercase();
        if !self.pool.rack_contains(color, letter) {
            return Err(GameError::LetterUnavailable { color, letter });
        }

        self.board.deactivate();
        let piece = FloatingPiece { letter, color };
        self.floating = Some(piece);
        Ok(Outcome::Lifted { piece })
    }

    /// Drop the floating piece and the active field
    pub fn cancel(&mut self) -> Outcome {
        let had_piece = self.floating.take().is_some();
        let had_field = self.board.deactivate().is_some();
        if had_piece || had_field {
            Outcome::Cancelled
        } else {
            Outcome::Unchanged
        }
    }

    /// Handle a click at canvas pixel `(x, y)`.
    ///
    /// A floating piece dropped on a Neutral field is played there. Otherwise
    /// the action mode decides. A click beside the board drops the floating
    /// piece.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Outcome, GameError> {
        self.board.deactivate();

        let Some(coord) = self.board.field_at(x, y) else {
            self.floating = None;
            return Ok(Outcome::Missed);
        };

        if let Some(piece) = self.floating {
            if self.board.kind(coord) == FieldKind::Neutral {
                self.floating = None;
                return self.drop_piece(coord, piece);
            }
        }

        match self.mode {
            ActionMode::ReturnToBag => self.return_to_bag(coord),
            ActionMode::ReturnToRack => self.return_to_rack(coord),
            ActionMode::Select | ActionMode::PlayBlack | ActionMode::PlayWhite => {
                self.board.activate(coord)?;
                Ok(Outcome::Activated { coord })
            }
        }
    }

    /// Activate `coord` and play the floating piece there in one step
    fn drop_piece(&mut self, coord: Coord, piece: FloatingPiece) -> Result<Outcome, GameError> {
        if !self.pool.rack_contains(piece.color, piece.letter) {
            return Err(GameError::LetterUnavailable {
                color: piece.color,
                letter: piece.letter,
            });
        }
        self.board.activate(coord)?;
        self.play_letter(piece.color, piece.letter)
    }

    /// Handle a key press
    pub fn key(&mut self, key: KeyInput) -> Result<Outcome, GameError> {
        match key {
            KeyInput::Letter(c) if c.is_ascii_alphabetic() => match self.mode.play_color() {
                Some(color) => self.play_letter(color, c),
                None => Ok(Outcome::Unchanged),
            },
            KeyInput::Letter(_) => Ok(Outcome::Unchanged),
            KeyInput::Escape | KeyInput::Backspace => Ok(self.cancel()),
        }
    }

    /// Put the letter on `coord` back into the bag
    pub fn return_to_bag(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        if !self.board.kind(coord).is_visible() {
            return Err(GameError::IllegalTarget(coord));
        }
        match self.board.clear_field(coord)? {
            Some(letter) => {
                self.pool.return_to_bag(letter);
                Ok(Outcome::ReturnedToBag { coord, letter })
            }
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Put the letter on `coord` back into the rack of the color it was
    /// played in
    pub fn return_to_rack(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        let Some(color) = self.board.kind(coord).color() else {
            return match self.board.kind(coord) {
                FieldKind::Invisible => Err(GameError::IllegalTarget(coord)),
                _ => Ok(Outcome::Unchanged),
            };
        };
        match self.board.clear_field(coord)? {
            Some(letter) => {
                self.pool.return_to_rack(color, letter);
                Ok(Outcome::ReturnedToRack { coord, color, letter })
            }
            None => Ok(Outcome::Unchanged),
        }
    }

    /// End of a move: cancel whatever is in progress and refill both racks
    /// (white first). Returns the number of tiles drawn.
    pub fn draw_letters(&mut self) -> usize {
        self.cancel();
        self.pool.refill(Color::White) + self.pool.refill(Color::Black)
    }

    /// Highlight a field
    pub fn set_glow(&mut self, coord: Coord, glow: bool) -> Result<(), GameError> {
        self.board.set_glow(coord, glow)
    }

    // ========================================================================
    // BOARD LIFECYCLE
    // ========================================================================

    /// Start over on a new board with fresh letters, keeping rack size,
    /// canvas and action mode
    pub fn reset(&mut self, side_length: u32) -> Result<(), GameError> {
        let config = GameConfig {
            side_length,
            ..self.config.clone()
        };
        let mode = self.mode;
        *self = Game::new(config)?;
        self.mode = mode;
        Ok(())
    }

    /// Lay the board out on a canvas of a new size
    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) -> Result<(), GameError> {
        let config = GameConfig {
            canvas_width,
            canvas_height,
            ..self.config.clone()
        };
        config.validate()?;
        self.board.relayout(canvas_width, canvas_height);
        self.config = config;
        Ok(())
    }

    /// Paint every field changed since the last render
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        self.board.render(surface)
    }

    /// Repaint everything on the next render
    pub fn invalidate(&mut self) {
        self.board.invalidate();
    }
}
