//! Win condition checking for Renju
//!
//! Any run of five or more wins for White. Black only wins with an exact
//! five; a longer Black run is an overline, which is forbidden.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};

use super::line::{line_length, run_length, DIRECTIONS};

/// Winning line descriptor, anchored on the stone that completed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub x: u8,
    pub y: u8,
    pub dx: i8,
    pub dy: i8,
    /// Total run length through the anchor
    pub length: u8,
}

impl WinLine {
    #[inline]
    pub fn anchor(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    #[inline]
    pub fn is_exact_five(&self) -> bool {
        self.length == 5
    }
}

/// Check whether the stone at `pos` completes a run of 5 or more.
///
/// Returns the longest such run; on equal lengths the first axis in
/// [`DIRECTIONS`] order is kept. `None` when the cell is empty.
pub fn check_win(board: &Board, pos: Pos) -> Option<WinLine> {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return None;
    }

    let mut best: Option<WinLine> = None;
    for &(dx, dy) in &DIRECTIONS {
        let total = line_length(board, pos, dx, dy, stone);
        if total >= 5 && best.map_or(true, |b| total > b.length as usize) {
            best = Some(WinLine {
                x: pos.x,
                y: pos.y,
                dx: dx as i8,
                dy: dy as i8,
                length: total as u8,
            });
        }
    }
    best
}

/// Whether `line`, made by `stone`, ends the game.
///
/// White claims any run of 5+, Black only an exact five.
#[inline]
pub fn is_claimable(stone: Stone, line: &WinLine) -> bool {
    match stone {
        Stone::Black => line.is_exact_five(),
        Stone::White => line.length >= 5,
        Stone::Empty => false,
    }
}

/// Cells covered by a win line, from the far backward end forward
pub fn line_stones(board: &Board, line: &WinLine) -> Vec<Pos> {
    let anchor = line.anchor();
    let stone = board.get(anchor);
    let (dx, dy) = (line.dx as i32, line.dy as i32);
    let back = run_length(board, anchor, -dx, -dy, stone) as i32;

    (0..line.length as i32)
        .filter_map(|i| {
            let (x, y) = anchor.offset(dx, dy, i - back);
            board.pos(x, y)
        })
        .collect()
}
