use std::path::PathBuf;

use crate::rules::ForbiddenMove;

/// Rejected placement or undo. Every variant is recoverable: the engine
/// state is unchanged and the caller decides what to do next.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({x}, {y}) is outside the board")]
    InvalidPosition { x: i32, y: i32 },

    #[error("position ({x}, {y}) is already occupied")]
    PositionOccupied { x: u8, y: u8 },

    #[error("the game is already finished")]
    GameFinished,

    #[error("forbidden move at ({x}, {y}): {reason}")]
    ForbiddenMove { x: u8, y: u8, reason: ForbiddenMove },

    #[error("no moves to undo")]
    NoMoves,

    #[error("unsupported board size {size}")]
    InvalidBoardSize { size: usize },
}

impl GameError {
    /// Stable reason code for UI and test consumption
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidPosition { .. } => "INVALID_POSITION",
            GameError::PositionOccupied { .. } => "POSITION_OCCUPIED",
            GameError::GameFinished => "GAME_FINISHED",
            GameError::ForbiddenMove { .. } => "FORBIDDEN_MOVE",
            GameError::NoMoves => "NO_MOVES",
            GameError::InvalidBoardSize { .. } => "INVALID_BOARD_SIZE",
        }
    }

    /// The violated forbidden rule, if this is a forbidden-move rejection
    pub fn forbidden(&self) -> Option<ForbiddenMove> {
        match self {
            GameError::ForbiddenMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when restoring a saved game.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported board size {0}")]
    BoardSize(usize),

    #[error("board snapshot does not match board size {size}")]
    BoardShape { size: usize },

    #[error("move #{index} cannot be replayed: {source}")]
    IllegalMove { index: usize, source: GameError },

    #[error("move #{index} was recorded for {recorded:?} but {expected:?} was to move")]
    WrongPlayer {
        index: usize,
        recorded: crate::Stone,
        expected: crate::Stone,
    },

    #[error("board snapshot disagrees with replayed moves at ({x}, {y})")]
    BoardMismatch { x: usize, y: usize },

    #[error("saved {0} disagrees with replayed moves")]
    StateMismatch(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_codes() {
        assert_eq!(GameError::InvalidPosition { x: -1, y: 0 }.code(), "INVALID_POSITION");
        assert_eq!(GameError::PositionOccupied { x: 1, y: 1 }.code(), "POSITION_OCCUPIED");
        assert_eq!(GameError::GameFinished.code(), "GAME_FINISHED");
        assert_eq!(GameError::NoMoves.code(), "NO_MOVES");
        assert_eq!(GameError::InvalidBoardSize { size: 30 }.code(), "INVALID_BOARD_SIZE");
    }

    #[test]
    fn test_forbidden_error_display() {
        let err = GameError::ForbiddenMove {
            x: 7,
            y: 7,
            reason: ForbiddenMove::DoubleThree { open_threes: 2 },
        };
        assert_eq!(err.code(), "FORBIDDEN_MOVE");
        assert_eq!(
            err.to_string(),
            "forbidden move at (7, 7): double three (2 open threes)"
        );
        assert_eq!(err.forbidden(), Some(ForbiddenMove::DoubleThree { open_threes: 2 }));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be in 5..=25".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be in 5..=25"
        );
    }
}
