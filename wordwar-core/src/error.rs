//! Error taxonomy for board and play operations

use crate::board::Coord;
use crate::field::Color;

/// Failure of a board or play operation. Board operations and rack moves
/// change nothing when they fail; `Game::click` drops the active field before
/// it resolves the target, so a failed click still leaves no field active.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Color tag other than black/white. Only arises from malformed input.
    #[error("unknown color '{0}'")]
    InvalidColor(String),

    /// Field is Invisible, off the board, or not in the state the action needs.
    #[error("field {0} is not a legal target")]
    IllegalTarget(Coord),

    #[error("letter '{letter}' is not in the {color} rack")]
    LetterUnavailable { color: Color, letter: char },

    #[error("no field is active")]
    NoActiveField,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Errors a player can trigger with a stray click or key press.
    /// Front ends ignore these instead of reporting them.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            GameError::IllegalTarget(_) | GameError::LetterUnavailable { .. } | GameError::NoActiveField
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_errors() {
        assert!(GameError::IllegalTarget(Coord::new(0, 0)).is_silent());
        assert!(GameError::NoActiveField.is_silent());
        assert!(GameError::LetterUnavailable { color: Color::Black, letter: 'Q' }.is_silent());
        assert!(!GameError::InvalidColor("R".to_string()).is_silent());
        assert!(!GameError::InvalidConfig("side length".to_string()).is_silent());
    }

    #[test]
    fn test_messages() {
        let err = GameError::LetterUnavailable { color: Color::White, letter: 'Z' };
        assert_eq!(err.to_string(), "letter 'Z' is not in the white rack");
        assert_eq!(GameError::IllegalTarget(Coord::new(3, 4)).to_string(), "field (3, 4) is not a legal target");
    }
}
