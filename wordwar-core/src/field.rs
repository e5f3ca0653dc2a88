//! Board fields and player colors

use crate::error::GameError;
use crate::geometry::{contains_point, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// One-letter tag ("B" / "W")
    pub fn tag(self) -> &'static str {
        match self {
            Color::Black => "B",
            Color::White => "W",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Accepts the one-letter tags and the full names, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(GameError::InvalidColor(s.to_string())),
        }
    }
}

/// Field classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Black,   // Occupied by a black letter
    White,   // Occupied by a white letter
    Neutral, // Empty and playable
    Invisible, // Outside the board shape, never drawn
}

impl FieldKind {
    pub fn is_visible(self) -> bool {
        self != FieldKind::Invisible
    }

    /// Color of the letter occupying the field, if any
    pub fn color(self) -> Option<Color> {
        match self {
            FieldKind::Black => Some(Color::Black),
            FieldKind::White => Some(Color::White),
            FieldKind::Neutral | FieldKind::Invisible => None,
        }
    }
}

impl From<Color> for FieldKind {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => FieldKind::Black,
            Color::White => FieldKind::White,
        }
    }
}

/// One hexagonal cell of the board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexField {
    pub center: Point,
    pub radius: f64,
    pub kind: FieldKind,
    pub letter: Option<char>,
    pub active: bool,
    /// Highlight flag for guiding players; nothing in the rules sets it.
    pub glow: bool,
}

impl HexField {
    pub fn new(center: Point, radius: f64, kind: FieldKind) -> Self {
        Self {
            center,
            radius,
            kind,
            letter: None,
            active: false,
            glow: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.kind.is_visible()
    }

    /// Hit test in canvas pixels. Invisible fields never contain anything.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.is_visible() && contains_point(self.center, self.radius, x, y)
    }
}
