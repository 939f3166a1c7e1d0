//! Renju forbidden moves for Black
//!
//! Black may not make:
//! - a long line: six or more in a row
//! - a double-three: two or more open threes at once
//! - a double-four: two or more fours at once
//!
//! Threes and fours are found by matching canonical 7-cell windows against
//! the line signature of each axis. An occurrence only counts if its window
//! covers the new stone, so shapes elsewhere on the same line are ignored.
//!
//! All checks expect the stone to be on the board already.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};

use super::line::{line_length, signature, Token, DIRECTIONS, SIGNATURE_RADIUS};
use super::win::check_win;

const E: Token = Token::Empty;
const O: Token = Token::Own;

/// Canonical open-three windows: contiguous and single-gap threes with
/// room to become an open four.
const OPEN_THREE_PATTERNS: [[Token; 7]; 6] = [
    [E, E, O, O, O, E, E], // 0011100
    [E, E, O, O, E, O, E], // 0011010
    [E, E, O, E, O, O, E], // 0010110
    [E, O, E, O, O, E, E], // 0101100
    [E, O, E, E, O, O, E], // 0100110
    [E, O, O, E, O, E, E], // 0110100
];

/// Canonical four windows: four stones with at least one way to five.
const OPEN_FOUR_PATTERNS: [[Token; 7]; 5] = [
    [E, E, O, O, O, O, E], // 0011110
    [E, O, O, O, O, E, E], // 0111100
    [E, O, O, O, E, O, E], // 0111010
    [E, O, E, O, O, O, E], // 0101110
    [E, O, O, E, O, O, E], // 0110110
];

/// Which forbidden rule a move broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForbiddenKind {
    LongLine,
    DoubleThree,
    DoubleFour,
}

impl ForbiddenKind {
    pub fn label(self) -> &'static str {
        match self {
            ForbiddenKind::LongLine => "long line",
            ForbiddenKind::DoubleThree => "double three",
            ForbiddenKind::DoubleFour => "double four",
        }
    }
}

/// A violated forbidden rule with its detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ForbiddenMove {
    #[error("long line of {length} stones")]
    LongLine { dx: i8, dy: i8, length: u8 },

    #[error("double three ({open_threes} open threes)")]
    DoubleThree { open_threes: u8 },

    #[error("double four ({open_fours} fours)")]
    DoubleFour { open_fours: u8 },
}

impl ForbiddenMove {
    pub fn kind(&self) -> ForbiddenKind {
        match self {
            ForbiddenMove::LongLine { .. } => ForbiddenKind::LongLine,
            ForbiddenMove::DoubleThree { .. } => ForbiddenKind::DoubleThree,
            ForbiddenMove::DoubleFour { .. } => ForbiddenKind::DoubleFour,
        }
    }
}

/// First axis through `pos` with six or more `stone`s in a row
pub fn long_line(board: &Board, pos: Pos, stone: Stone) -> Option<ForbiddenMove> {
    DIRECTIONS.iter().find_map(|&(dx, dy)| {
        let total = line_length(board, pos, dx, dy, stone);
        (total >= 6).then_some(ForbiddenMove::LongLine {
            dx: dx as i8,
            dy: dy as i8,
            length: total as u8,
        })
    })
}

/// Count distinct shapes matching `patterns` in `sig` whose window
/// contains `center`.
///
/// Two windows that cover the same stones (e.g. `0011010` and `0110100` on
/// `00110100`) are one shape and count once.
fn count_patterns_including_center(sig: &[Token], patterns: &[[Token; 7]], center: usize) -> u8 {
    debug_assert!(sig.len() <= 64);
    let mut shapes: Vec<u64> = Vec::new();
    for pattern in patterns {
        for (start, window) in sig.windows(pattern.len()).enumerate() {
            let end = start + pattern.len() - 1;
            if window != pattern || center < start || center > end {
                continue;
            }
            let stones = window
                .iter()
                .enumerate()
                .filter(|(_, t)| **t == Token::Own)
                .fold(0u64, |mask, (i, _)| mask | 1 << (start + i));
            if !shapes.contains(&stones) {
                shapes.push(stones);
            }
        }
    }
    shapes.len() as u8
}

fn count_over_axes(board: &Board, pos: Pos, stone: Stone, patterns: &[[Token; 7]]) -> u8 {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| {
            let sig = signature(board, pos, dx, dy, stone, SIGNATURE_RADIUS);
            count_patterns_including_center(&sig, patterns, SIGNATURE_RADIUS)
        })
        .sum()
}

/// Open threes through the stone at `pos`, summed over the 4 axes
pub fn count_open_threes(board: &Board, pos: Pos, stone: Stone) -> u8 {
    count_over_axes(board, pos, stone, &OPEN_THREE_PATTERNS)
}

/// Fours through the stone at `pos`, summed over the 4 axes
pub fn count_open_fours(board: &Board, pos: Pos, stone: Stone) -> u8 {
    count_over_axes(board, pos, stone, &OPEN_FOUR_PATTERNS)
}

/// Check the Black stone already at `pos` against the forbidden rules.
///
/// Rules are tried in order long line, double-three, double-four and the
/// first violation is returned. Non-Black cells are never forbidden.
pub fn check_forbidden(board: &Board, pos: Pos) -> Option<ForbiddenMove> {
    let stone = board.get(pos);
    if stone != Stone::Black {
        return None;
    }

    if let Some(long) = long_line(board, pos, stone) {
        return Some(long);
    }

    let open_threes = count_open_threes(board, pos, stone);
    if open_threes >= 2 {
        return Some(ForbiddenMove::DoubleThree { open_threes });
    }

    let open_fours = count_open_fours(board, pos, stone);
    if open_fours >= 2 {
        return Some(ForbiddenMove::DoubleFour { open_fours });
    }

    None
}

/// The forbidden check as a move applies it: an exact five wins outright,
/// so it is never forbidden.
pub fn forbidden_for_move(board: &Board, pos: Pos) -> Option<ForbiddenMove> {
    if board.get(pos) != Stone::Black {
        return None;
    }
    let exact_five = check_win(board, pos).is_some_and(|line| line.is_exact_five());
    if exact_five {
        return None;
    }
    check_forbidden(board, pos)
}

/// Probe whether Black playing the empty cell `pos` would be forbidden.
/// The board is left unchanged.
pub fn is_forbidden_placement(board: &mut Board, pos: Pos) -> Option<ForbiddenMove> {
    if !board.is_empty(pos) {
        return None;
    }
    let placed = board.place_scoped(pos, Stone::Black);
    forbidden_for_move(&placed, pos)
}
