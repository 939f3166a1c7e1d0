//! Move selection strategies
//!
//! - [`RandomStrategy`]: uniform pick among nearby candidates
//! - [`GreedyStrategy`]: win, else block, else best weighted
//!   attack/defense score over the candidates

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone};
use crate::config::AiConfig;
use crate::eval::{evaluate, threat_level, weighted, weights_for_threat};
use crate::rules::{check_win, forbidden_for_move, is_claimable};

use super::candidates::candidates;

/// Which step of a strategy produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform random pick
    Random,
    /// Move that wins on the spot
    ImmediateWin,
    /// Blocks the opponent's immediate win
    Defense,
    /// Best weighted heuristic score
    Heuristic,
}

/// A strategy's pick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub best_move: Option<Pos>,
    /// Weighted score of the move; 0 when no scoring took place
    pub score: f64,
    pub search_type: SearchType,
    /// Candidate cells examined
    pub evaluated: usize,
}

/// Move selection for one difficulty.
///
/// `board` may be mutated during selection but must be returned unchanged.
pub trait Strategy: Send {
    fn name(&self) -> &str;

    fn select(&mut self, board: &mut Board, to_move: Stone, config: &AiConfig) -> Choice;
}

/// First candidate where `player` completes a run of five or more.
///
/// No forbidden-move filtering: this is the check used to spot the
/// opponent's threats.
pub fn find_winning_move(board: &mut Board, player: Stone, radius: usize, limit: usize) -> Option<Pos> {
    candidates(board, radius, limit)
        .into_iter()
        .find(|&pos| wins_at(board, pos, player))
}

/// First candidate where `player` wins that `blocker` may legally take
fn find_block(board: &mut Board, player: Stone, blocker: Stone, radius: usize, limit: usize) -> Option<Pos> {
    candidates(board, radius, limit)
        .into_iter()
        .find(|&pos| wins_at(board, pos, player) && is_legal_for(board, pos, blocker))
}

/// Raw five-or-more check for `player` on the empty cell `pos`
fn wins_at(board: &mut Board, pos: Pos, player: Stone) -> bool {
    let placed = board.place_scoped(pos, player);
    check_win(&placed, pos).is_some()
}

/// First candidate where `player` would actually win if the move were played:
/// an exact five for Black, five or more for White.
pub fn find_claimable_win(board: &mut Board, player: Stone, radius: usize, limit: usize) -> Option<Pos> {
    candidates(board, radius, limit).into_iter().find(|&pos| {
        let placed = board.place_scoped(pos, player);
        check_win(&placed, pos).is_some_and(|line| is_claimable(player, &line))
    })
}

/// Whether `player` may legally occupy the empty cell `pos`
fn is_legal_for(board: &mut Board, pos: Pos, player: Stone) -> bool {
    if player != Stone::Black {
        return true;
    }
    let placed = board.place_scoped(pos, player);
    forbidden_for_move(&placed, pos).is_none()
}

/// Uniform random pick among nearby candidates
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomStrategy { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn select(&mut self, board: &mut Board, _to_move: Stone, config: &AiConfig) -> Choice {
        let cands = candidates(board, config.candidate_radius, config.random_limit);
        let best_move = if cands.is_empty() {
            None
        } else {
            Some(cands[self.rng.random_range(0..cands.len())])
        };
        Choice {
            best_move,
            score: 0.0,
            search_type: SearchType::Random,
            evaluated: cands.len(),
        }
    }
}

/// Greedy one-ply heuristic with threat-weighted defense
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn select(&mut self, board: &mut Board, to_move: Stone, config: &AiConfig) -> Choice {
        let radius = config.candidate_radius;
        let opponent = to_move.opponent();

        // 1. Win on the spot
        if let Some(pos) = find_claimable_win(board, to_move, radius, config.win_scan_limit) {
            return Choice {
                best_move: Some(pos),
                score: crate::eval::PatternScore::WIN as f64,
                search_type: SearchType::ImmediateWin,
                evaluated: 1,
            };
        }

        // 2. Block the opponent's win at the first point that is legal for us
        if let Some(pos) = find_block(board, opponent, to_move, radius, config.win_scan_limit) {
            return Choice {
                best_move: Some(pos),
                score: crate::eval::PatternScore::WIN as f64,
                search_type: SearchType::Defense,
                evaluated: 1,
            };
        }

        // 3. Weighted attack + defense over the candidates, first best wins
        let cands = candidates(board, radius, config.heuristic_limit);
        let mut best: Option<(Pos, f64)> = None;
        for &pos in &cands {
            let my_score = evaluate(board, pos, to_move);
            let opp_score = evaluate(board, pos, opponent);
            let (attack, defense) = weights_for_threat(threat_level(opp_score));
            let total = weighted(my_score, attack) + weighted(opp_score, defense);

            let best_score = best.map_or(f64::NEG_INFINITY, |(_, s)| s);
            if total > best_score {
                best = Some((pos, total));
            }
        }

        Choice {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(f64::NEG_INFINITY, |(_, s)| s),
            search_type: SearchType::Heuristic,
            evaluated: cands.len(),
        }
    }
}
