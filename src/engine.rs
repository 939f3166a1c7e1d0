//! Computer opponent dispatching on difficulty
//!
//! Each [`Difficulty`] is served by a registered [`Strategy`]:
//!
//! 1. **Beginner**: random pick among nearby candidates
//! 2. **Normal / Hard / Hell**: greedy search
//!    - immediate win
//!    - block the opponent's immediate win
//!    - best weighted attack/defense score
//!
//! The engine never touches the live game. It copies the board and hands the
//! copy to the strategy.
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, AiConfig, Difficulty, Game, Pos};
//!
//! let mut engine = AIEngine::new(AiConfig::default());
//! let game = Game::new(15);
//!
//! // Any difficulty opens at the centre
//! let result = engine.get_move_with_stats(&game, Difficulty::Normal);
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::board::Pos;
use crate::config::AiConfig;
use crate::game::Game;
use crate::search::{GreedyStrategy, RandomStrategy, Strategy};

pub use crate::search::SearchType;

/// Opponent strength selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    #[default]
    Normal,
    Hard,
    Hell,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Hell,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Hell => "Hell",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{s}'"))
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found; `None` when the game is over or no cell is playable
    pub best_move: Option<Pos>,
    /// Score of the chosen move as reported by the strategy
    pub score: f64,
    /// Step of the strategy that produced the move
    pub search_type: SearchType,
    pub difficulty: Difficulty,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidate cells examined
    pub evaluated: usize,
}

impl MoveResult {
    #[inline]
    fn no_move(difficulty: Difficulty, search_type: SearchType) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type,
            difficulty,
            time_ms: 0,
            evaluated: 0,
        }
    }
}

/// AI engine holding one strategy per difficulty.
pub struct AIEngine {
    config: AiConfig,
    strategies: [Box<dyn Strategy>; 4],
}

impl AIEngine {
    /// Create an engine with the default strategy for every difficulty
    pub fn new(config: AiConfig) -> Self {
        let strategies: [Box<dyn Strategy>; 4] = [
            Box::new(RandomStrategy::new(config.seed)),
            Box::new(GreedyStrategy),
            Box::new(GreedyStrategy),
            Box::new(GreedyStrategy),
        ];
        Self { config, strategies }
    }

    /// Replace the strategy serving `difficulty`
    #[must_use]
    pub fn with_strategy(mut self, difficulty: Difficulty, strategy: Box<dyn Strategy>) -> Self {
        self.register(difficulty, strategy);
        self
    }

    pub fn register(&mut self, difficulty: Difficulty, strategy: Box<dyn Strategy>) {
        log::debug!("{difficulty} now served by {}", strategy.name());
        self.strategies[difficulty.index()] = strategy;
    }

    /// Name of the strategy serving `difficulty`
    pub fn strategy_name(&self, difficulty: Difficulty) -> &str {
        self.strategies[difficulty.index()].name()
    }

    #[inline]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Best move for the side to move, or `None` if the game is over.
    pub fn get_move(&mut self, game: &Game, difficulty: Difficulty) -> Option<Pos> {
        self.get_move_with_stats(game, difficulty).best_move
    }

    /// Best move with search statistics.
    ///
    /// The strategy works on a private copy of the board, so the game is
    /// never modified.
    pub fn get_move_with_stats(&mut self, game: &Game, difficulty: Difficulty) -> MoveResult {
        let strategy = &mut self.strategies[difficulty.index()];

        if game.is_over() {
            log::debug!("{difficulty}: game over, no move");
            return MoveResult::no_move(difficulty, SearchType::Random);
        }

        let start = Instant::now();
        let mut board = game.board().clone();
        let to_move = game.current_player();
        let choice = strategy.select(&mut board, to_move, &self.config);
        let time_ms = start.elapsed().as_millis() as u64;

        match choice.best_move {
            Some(pos) => log::debug!(
                "{difficulty} ({}) {} plays {pos} via {:?}, score {:.1}, {} evaluated in {time_ms}ms",
                strategy.name(),
                to_move.name(),
                choice.search_type,
                choice.score,
                choice.evaluated
            ),
            None => log::debug!("{difficulty} ({}) found no move", strategy.name()),
        }

        MoveResult {
            best_move: choice.best_move,
            score: choice.score,
            search_type: choice.search_type,
            difficulty,
            time_ms,
            evaluated: choice.evaluated,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
