//! Move engine: placement, rule enforcement, turn order and undo
//!
//! A [`Game`] exclusively owns its [`Board`] and move history. Every
//! mutation goes through [`Game::place_piece`], [`Game::undo`] or
//! [`Game::reset`], so the history replayed from an empty board always
//! reproduces the board.
//!
//! # Example
//!
//! ```
//! use renju::{Game, Stone};
//!
//! let mut game = Game::new(15);
//! let placed = game.place_piece(7, 7).unwrap();
//! assert_eq!(placed.player, Stone::Black);
//! assert_eq!(game.current_player(), Stone::White);
//!
//! game.undo(1).unwrap();
//! assert_eq!(game.move_count(), 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::{check_win, forbidden_for_move, is_claimable, WinLine};

/// A committed move. Immutable once recorded, popped on undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x: u8,
    pub y: u8,
    pub player: Stone,
    /// 0-based sequence number in the game
    pub index: usize,
}

impl Move {
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    InProgress,
    /// Terminal until `reset` or `undo`
    Over,
}

/// Derived game summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Stone,
    pub game_over: bool,
    pub winner: Option<Stone>,
    pub win_line: Option<WinLine>,
    pub move_count: usize,
}

/// What a successful placement led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Turn passed to `next_player`
    Continue { next_player: Stone },
    /// The mover won; the game is over
    Win { winner: Stone, line: WinLine },
}

/// A committed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub player: Stone,
    pub outcome: Outcome,
}

impl Placement {
    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win { .. })
    }
}

/// Result of an undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undone {
    pub steps_undone: usize,
    pub current_player: Stone,
}

/// Renju move engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    current_player: Stone,
    phase: Phase,
    winner: Option<Stone>,
    win_line: Option<WinLine>,
}

impl Game {
    /// New game on an empty `size` x `size` board, Black to move.
    ///
    /// # Panics
    ///
    /// If `size` is outside `5..=25`; see [`Game::try_new`].
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            moves: Vec::with_capacity(size * size),
            current_player: Stone::Black,
            phase: Phase::InProgress,
            winner: None,
            win_line: None,
        }
    }

    /// Like [`Game::new`], rejecting unsupported sizes instead of panicking
    pub fn try_new(size: usize) -> Result<Self, GameError> {
        if !Board::is_supported_size(size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::new(size))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size)
    }

    /// Clear the board and history back to the initial state
    pub fn reset(&mut self) {
        *self = Self::new(self.board.size());
    }

    /// Try to place the current player's stone at `(x, y)`.
    ///
    /// Rejections leave the game exactly as it was. A Black move that is not
    /// an exact five is checked against the forbidden rules after the stone
    /// is tentatively placed and rolled back if it breaks one.
    pub fn place_piece(&mut self, x: i32, y: i32) -> Result<Placement, GameError> {
        let pos = self
            .board
            .pos(x, y)
            .ok_or(GameError::InvalidPosition { x, y })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::PositionOccupied { x: pos.x, y: pos.y });
        }
        if self.phase == Phase::Over {
            return Err(GameError::GameFinished);
        }

        let player = self.current_player;
        self.board.set(pos, player);

        if player == Stone::Black {
            if let Some(reason) = forbidden_for_move(&self.board, pos) {
                self.board.clear(pos);
                log::debug!("rejected black {pos}: {reason}");
                return Err(GameError::ForbiddenMove {
                    x: pos.x,
                    y: pos.y,
                    reason,
                });
            }
        }

        self.moves.push(Move {
            x: pos.x,
            y: pos.y,
            player,
            index: self.moves.len(),
        });

        match check_win(&self.board, pos).filter(|line| is_claimable(player, line)) {
            Some(line) => {
                self.phase = Phase::Over;
                self.winner = Some(player);
                self.win_line = Some(line);
                log::info!(
                    "{} wins at {pos} after {} moves",
                    player.name(),
                    self.moves.len()
                );
                Ok(Placement {
                    pos,
                    player,
                    outcome: Outcome::Win { winner: player, line },
                })
            }
            None => {
                self.current_player = player.opponent();
                Ok(Placement {
                    pos,
                    player,
                    outcome: Outcome::Continue {
                        next_player: self.current_player,
                    },
                })
            }
        }
    }

    /// Place at a board position
    #[inline]
    pub fn play(&mut self, pos: Pos) -> Result<Placement, GameError> {
        self.place_piece(pos.x as i32, pos.y as i32)
    }

    /// Take back up to `steps` moves.
    ///
    /// The turn goes to the opponent of the new last mover (Black on an empty
    /// history) and any game-over state is cleared.
    pub fn undo(&mut self, steps: usize) -> Result<Undone, GameError> {
        if self.moves.is_empty() {
            return Err(GameError::NoMoves);
        }

        let steps_undone = steps.min(self.moves.len());
        for _ in 0..steps_undone {
            if let Some(last) = self.moves.pop() {
                self.board.clear(last.pos());
            }
        }

        self.current_player = self
            .moves
            .last()
            .map_or(Stone::Black, |m| m.player.opponent());
        self.phase = Phase::InProgress;
        self.winner = None;
        self.win_line = None;

        log::debug!("undid {steps_undone} move(s), {} left", self.moves.len());
        Ok(Undone {
            steps_undone,
            current_player: self.current_player,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().map(Move::pos)
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn state(&self) -> GameState {
        GameState {
            current_player: self.current_player,
            game_over: self.is_over(),
            winner: self.winner,
            win_line: self.win_line,
            move_count: self.moves.len(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ForbiddenKind, ForbiddenMove};

    /// Play alternating moves, panicking on any rejection
    fn play_all(game: &mut Game, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            game.place_piece(x, y)
                .unwrap_or_else(|e| panic!("move ({x}, {y}) rejected: {e}"));
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(15);
        let state = game.state();
        assert_eq!(state.current_player, Stone::Black);
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.win_line, None);
        assert_eq!(state.move_count, 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(15);
        let first = game.place_piece(7, 7).unwrap();
        assert_eq!(first.player, Stone::Black);
        assert_eq!(first.outcome, Outcome::Continue { next_player: Stone::White });

        let second = game.place_piece(8, 8).unwrap();
        assert_eq!(second.player, Stone::White);
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.moves()[1].index, 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut game = Game::new(15);
        assert_eq!(
            game.place_piece(15, 0),
            Err(GameError::InvalidPosition { x: 15, y: 0 })
        );
        assert_eq!(
            game.place_piece(-1, 3).unwrap_err().code(),
            "INVALID_POSITION"
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_board_size_limits() {
        assert_eq!(Game::try_new(30).unwrap_err(), GameError::InvalidBoardSize { size: 30 });
        assert_eq!(Game::try_new(4).unwrap_err().code(), "INVALID_BOARD_SIZE");

        let mut largest = Game::try_new(25).unwrap();
        assert!(largest.place_piece(24, 24).is_ok());
        assert_eq!(
            largest.place_piece(25, 3),
            Err(GameError::InvalidPosition { x: 25, y: 3 })
        );
        assert!(Game::try_new(5).is_ok());
    }

    #[test]
    #[should_panic(expected = "board size 30")]
    fn test_new_panics_on_unsupported_size() {
        let _ = Game::new(30);
    }

    #[test]
    fn test_occupied() {
        let mut game = Game::new(15);
        game.place_piece(7, 7).unwrap();
        assert_eq!(
            game.place_piece(7, 7),
            Err(GameError::PositionOccupied { x: 7, y: 7 })
        );
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_white_wins_with_five() {
        let mut game = Game::new(15);
        play_all(
            &mut game,
            &[(0, 0), (3, 7), (0, 2), (4, 7), (0, 4), (5, 7), (0, 6), (6, 7), (0, 8)],
        );
        let placed = game.place_piece(7, 7).unwrap();
        match placed.outcome {
            Outcome::Win { winner, line } => {
                assert_eq!(winner, Stone::White);
                assert_eq!(line.length, 5);
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Stone::White));
        assert_eq!(game.current_player(), Stone::White, "turn does not advance on win");
    }

    #[test]
    fn test_move_after_game_over() {
        let mut game = Game::new(15);
        play_all(
            &mut game,
            &[(3, 7), (0, 0), (4, 7), (0, 2), (5, 7), (0, 4), (6, 7), (0, 6), (7, 7)],
        );
        assert!(game.is_over());
        assert_eq!(game.place_piece(10, 10), Err(GameError::GameFinished));
        // Occupied is reported before game over
        assert_eq!(
            game.place_piece(3, 7).unwrap_err().code(),
            "POSITION_OCCUPIED"
        );
    }

    #[test]
    fn test_forbidden_rolls_back() {
        let mut game = Game::new(15);
        // Black: (6,7) (8,7) (7,6) (7,8); White stays far away
        play_all(
            &mut game,
            &[(6, 7), (0, 0), (8, 7), (0, 14), (7, 6), (14, 0), (7, 8), (14, 14)],
        );
        let board_before = game.board().clone();
        let state_before = game.state();

        let err = game.place_piece(7, 7).unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN_MOVE");
        assert_eq!(err.forbidden().map(|f| f.kind()), Some(ForbiddenKind::DoubleThree));
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.state(), state_before);
    }

    #[test]
    fn test_black_overline_is_forbidden_not_win() {
        let mut game = Game::new(15);
        play_all(
            &mut game,
            &[
                (2, 7), (0, 0), (3, 7), (0, 2), (4, 7), (0, 4),
                (6, 7), (0, 6), (7, 7), (0, 8),
            ],
        );
        let err = game.place_piece(5, 7).unwrap_err();
        assert_eq!(
            err.forbidden(),
            Some(ForbiddenMove::LongLine { dx: 1, dy: 0, length: 6 })
        );
        assert!(!game.is_over());
    }

    #[test]
    fn test_white_overline_wins() {
        let mut game = Game::new(15);
        play_all(
            &mut game,
            &[
                (0, 0), (2, 7), (0, 2), (3, 7), (0, 4), (4, 7),
                (0, 6), (6, 7), (0, 8), (7, 7), (14, 14),
            ],
        );
        let placed = game.place_piece(5, 7).unwrap();
        assert!(matches!(
            placed.outcome,
            Outcome::Win { winner: Stone::White, line } if line.length == 6
        ));
    }

    #[test]
    fn test_undo_empty() {
        let mut game = Game::new(15);
        let before = game.clone();
        assert_eq!(game.undo(1), Err(GameError::NoMoves));
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_restores_turn_and_clears_win() {
        let mut game = Game::new(15);
        play_all(
            &mut game,
            &[(3, 7), (0, 0), (4, 7), (0, 2), (5, 7), (0, 4), (6, 7), (0, 6), (7, 7)],
        );
        assert!(game.is_over());

        let undone = game.undo(1).unwrap();
        assert_eq!(undone.steps_undone, 1);
        assert_eq!(undone.current_player, Stone::Black);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.win_line(), None);
        assert!(game.board().is_empty(Pos::new(7, 7)));
    }

    #[test]
    fn test_undo_caps_steps() {
        let mut game = Game::new(15);
        play_all(&mut game, &[(7, 7), (8, 8), (9, 9)]);
        let undone = game.undo(10).unwrap();
        assert_eq!(undone.steps_undone, 3);
        assert_eq!(game.current_player(), Stone::Black);
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(9);
        play_all(&mut game, &[(4, 4), (5, 5)]);
        game.reset();
        assert_eq!(game, Game::new(9));
    }
}
