//! Move search for the computer opponent
//!
//! Contains:
//! - Candidate generation near existing stones
//! - Random and greedy move selection strategies

pub mod candidates;
pub mod strategy;

pub use candidates::candidates;
pub use strategy::{
    find_claimable_win, find_winning_move, Choice, GreedyStrategy, RandomStrategy, SearchType,
    Strategy,
};
