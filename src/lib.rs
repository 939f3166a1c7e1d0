//! Renju rules engine with a tiered computer opponent
//!
//! Five-in-a-row on a square board (15x15 by default) with the Renju
//! restrictions on the first player:
//! - White wins with five or more in a row
//! - Black wins only with exactly five
//! - Black may not play a long line (six or more), a double three or a
//!   double four, unless the move completes an exact five
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Line scanning, win detection, forbidden moves
//! - [`game`]: Move validation, turn order, history and undo
//! - [`eval`]: Heuristic scoring of hypothetical placements
//! - [`search`]: Candidate generation and move strategies
//! - [`engine`]: Difficulty-keyed AI engine
//! - [`record`]: JSON save/restore with replay verification
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Difficulty, Game, Stone};
//!
//! let mut game = Game::new(15);
//! let mut engine = AIEngine::default();
//!
//! game.place_piece(7, 7).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&game, Difficulty::Normal) {
//!     let placed = game.play(pos).unwrap();
//!     assert_eq!(placed.player, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod record;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{AiConfig, GameConfig};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{ConfigError, GameError, RecordError};
pub use game::{Game, GameState, Move, Outcome, Phase, Placement, Undone};
pub use record::GameRecord;
pub use rules::{ForbiddenKind, ForbiddenMove, WinLine};
