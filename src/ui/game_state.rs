//! Session state for the Renju GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{AIEngine, Difficulty, Game, GameConfig, MoveResult, Pos, Stone};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs AI
    PvE { human_color: Stone },
    /// AI vs AI
    EvE,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

impl GameMode {
    pub fn label(self) -> String {
        match self {
            GameMode::PvP => "PvP - Hotseat".to_string(),
            GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
            GameMode::EvE => "AI vs AI".to_string(),
        }
    }
}

/// AI computation state. The engine travels to the worker thread and comes
/// back with the result so the random strategy keeps its state.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// One GUI session: the game plus who plays it
pub struct GameSession {
    pub game: Game,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    /// Last rejection or AI problem, cleared by the next accepted move
    pub message: Option<String>,
    config: GameConfig,
    engine: Option<AIEngine>,
}

impl GameSession {
    pub fn new(config: GameConfig, mode: GameMode) -> Self {
        let engine = AIEngine::new(config.ai.clone());
        Self {
            game: Game::from_config(&config),
            mode,
            difficulty: Difficulty::default(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
            engine: Some(engine),
        }
    }

    /// Start over in `mode`, dropping any pending AI result
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Clear the board. A pending AI result is discarded, but the engine is
    /// taken back from the worker so its RNG state carries over.
    pub fn reset(&mut self) {
        self.reclaim_engine();
        self.game.reset();
        self.last_ai_result = None;
        self.message = None;
    }

    /// Wait for a running worker and keep its engine, dropping the move
    fn reclaim_engine(&mut self) {
        let AiState::Thinking { receiver, .. } = std::mem::replace(&mut self.ai_state, AiState::Idle) else {
            return;
        };
        match receiver.recv() {
            Ok((engine, _)) => self.engine = Some(engine),
            Err(_) => log::warn!("AI worker ended without a result; engine will be rebuilt"),
        }
    }

    pub fn is_ai_color(&self, stone: Stone) -> bool {
        match self.mode {
            GameMode::PvP => false,
            GameMode::PvE { human_color } => stone != human_color,
            GameMode::EvE => true,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_color(self.game.current_player())
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.is_ai_color(self.game.current_player())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Human click on `pos`
    pub fn try_place_stone(&mut self, pos: Pos) {
        if self.is_ai_thinking() {
            self.message = Some("AI is thinking".to_string());
            return;
        }
        if !self.is_human_turn() {
            self.message = Some("Not your turn".to_string());
            return;
        }
        self.apply(pos);
    }

    fn apply(&mut self, pos: Pos) {
        match self.game.play(pos) {
            Ok(_) => self.message = None,
            Err(e) => {
                log::debug!("move at {pos} rejected: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Hand the game to the engine on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let game = self.game.clone();
        let difficulty = self.difficulty;
        let mut engine = self.engine.take().unwrap_or_else(|| {
            log::warn!("rebuilding AI engine");
            AIEngine::new(self.config.ai.clone())
        });

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&game, difficulty);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once the worker reports back
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(received) => received,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        let (engine, result) = received;
        self.ai_state = AiState::Idle;
        self.engine = Some(engine);

        match result.best_move {
            Some(pos) => self.apply(pos),
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last move, or the last full round against the AI
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        let steps = match self.mode {
            GameMode::PvE { human_color }
                if self.game.current_player() == human_color && self.game.move_count() >= 2 =>
            {
                2
            }
            _ => 1,
        };

        match self.game.undo(steps) {
            Ok(_) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}
