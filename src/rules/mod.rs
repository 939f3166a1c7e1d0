//! Game rules for Renju
//!
//! This module implements the rule set:
//! - Line scanning (runs and token signatures)
//! - Win conditions (exact five for Black, five or more for White)
//! - Forbidden moves for Black (long line, double-three, double-four)

pub mod forbidden;
pub mod line;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    check_forbidden, count_open_fours, count_open_threes, forbidden_for_move,
    is_forbidden_placement, long_line, ForbiddenKind, ForbiddenMove,
};
pub use line::{line_length, run_length, signature, Token, DIRECTIONS, SIGNATURE_RADIUS};
pub use win::{check_win, is_claimable, line_stones, WinLine};
