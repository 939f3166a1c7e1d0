//! Saved game records
//!
//! A [`GameRecord`] is a JSON snapshot of a [`Game`]: the move history plus
//! the board and state fields derived from it. Loading never trusts the
//! snapshot. The moves are replayed through [`Game::place_piece`] and every
//! saved field must agree with the replayed game.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::RecordError;
use crate::game::{Game, Move};
use crate::rules::WinLine;

/// Format version written into new records
pub const RECORD_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub version: String,
    /// Milliseconds since the Unix epoch at save time
    #[serde(default)]
    pub timestamp: u64,
    pub board_size: usize,
    pub current_player: Stone,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Stone>,
    #[serde(default)]
    pub win_line: Option<WinLine>,
    #[serde(default)]
    pub move_count: usize,
    pub moves: Vec<Move>,
    /// Row-major cells, `board[y][x]`
    pub board: Vec<Vec<Stone>>,
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Game {
    /// Snapshot the game for saving
    pub fn to_record(&self) -> GameRecord {
        let state = self.state();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64);
        GameRecord {
            version: RECORD_VERSION.to_string(),
            timestamp,
            board_size: self.board().size(),
            current_player: state.current_player,
            game_over: state.game_over,
            winner: state.winner,
            win_line: state.win_line,
            move_count: state.move_count,
            moves: self.moves().to_vec(),
            board: self.board().rows(),
        }
    }

    /// Rebuild a game by replaying the record's moves.
    ///
    /// Fails if the board shape is wrong, a move is illegal or out of turn,
    /// or the saved board and state disagree with the replay.
    pub fn from_record(record: &GameRecord) -> Result<Game, RecordError> {
        let size = record.board_size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(RecordError::BoardSize(size));
        }
        if record.board.len() != size || record.board.iter().any(|row| row.len() != size) {
            return Err(RecordError::BoardShape { size });
        }

        let mut game = Game::new(size);
        for (index, mv) in record.moves.iter().enumerate() {
            let expected = game.current_player();
            if mv.player != expected {
                return Err(RecordError::WrongPlayer {
                    index,
                    recorded: mv.player,
                    expected,
                });
            }
            game.place_piece(mv.x as i32, mv.y as i32)
                .map_err(|source| RecordError::IllegalMove { index, source })?;
        }

        let replayed = game.board().rows();
        for (y, (saved, replayed)) in record.board.iter().zip(&replayed).enumerate() {
            if let Some(x) = saved.iter().zip(replayed).position(|(a, b)| a != b) {
                return Err(RecordError::BoardMismatch { x, y });
            }
        }

        let state = game.state();
        if record.current_player != state.current_player {
            return Err(RecordError::StateMismatch("currentPlayer"));
        }
        if record.game_over != state.game_over {
            return Err(RecordError::StateMismatch("gameOver"));
        }
        if record.winner != state.winner {
            return Err(RecordError::StateMismatch("winner"));
        }
        if record.win_line != state.win_line {
            return Err(RecordError::StateMismatch("winLine"));
        }
        if record.move_count != state.move_count {
            return Err(RecordError::StateMismatch("moveCount"));
        }

        log::info!("restored {size}x{size} game with {} moves", state.move_count);
        Ok(game)
    }
}
