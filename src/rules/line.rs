//! Directional line scanning shared by every rule
//!
//! Two primitives:
//! - [`run_length`]: consecutive friendly stones in one direction
//! - [`signature`]: a 3-valued token window centred on a cell, the input
//!   of the forbidden-move pattern matcher

use crate::board::{Board, Pos, Stone};

/// The 4 line axes as `(dx, dy)`, in tie-break order:
/// horizontal, vertical, diagonal, anti-diagonal.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal (down-right)
    (1, -1), // Anti-diagonal (up-right)
];

/// Default signature radius; windows are `2 * radius + 1` cells
pub const SIGNATURE_RADIUS: usize = 6;

/// One cell of a line signature, relative to the scanning player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Empty cell
    Empty,
    /// Stone of the scanning player
    Own,
    /// Opponent stone or off the board
    Blocked,
}

impl Token {
    pub fn as_char(self) -> char {
        match self {
            Token::Empty => '0',
            Token::Own => '1',
            Token::Blocked => '2',
        }
    }
}

/// Count consecutive `stone` cells starting one step from `pos` along
/// `(dx, dy)`. Stops at the edge or the first mismatch. `pos` itself is not
/// read.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, stone: Stone) -> usize {
    let mut count = 0;
    let mut k = 1;
    loop {
        let (x, y) = pos.offset(dx, dy, k);
        match board.get_at(x, y) {
            Some(s) if s == stone => {
                count += 1;
                k += 1;
            }
            _ => return count,
        }
    }
}

/// Full run through `pos` on one axis: `1 + forward + backward`
#[inline]
pub fn line_length(board: &Board, pos: Pos, dx: i32, dy: i32, stone: Stone) -> usize {
    1 + run_length(board, pos, dx, dy, stone) + run_length(board, pos, -dx, -dy, stone)
}

/// Token window over offsets `-radius..=radius` along `(dx, dy)`.
///
/// Off-board cells read as [`Token::Blocked`], the same as an opponent
/// stone. The centre index is `radius`.
pub fn signature(
    board: &Board,
    pos: Pos,
    dx: i32,
    dy: i32,
    stone: Stone,
    radius: usize,
) -> Vec<Token> {
    let r = radius as i32;
    (-r..=r)
        .map(|k| {
            let (x, y) = pos.offset(dx, dy, k);
            match board.get_at(x, y) {
                Some(Stone::Empty) => Token::Empty,
                Some(s) if s == stone => Token::Own,
                _ => Token::Blocked,
            }
        })
        .collect()
}

/// Render a signature as the `0`/`1`/`2` string form (debugging and logs)
pub fn signature_string(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(15);
        for &(x, y, s) in stones {
            board.set(Pos::new(x, y), s);
        }
        board
    }

    #[test]
    fn test_run_length_stops_at_mismatch() {
        let board = board_with(&[
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
            (9, 7, Stone::White),
        ]);
        assert_eq!(run_length(&board, Pos::new(5, 7), 1, 0, Stone::Black), 3);
        assert_eq!(run_length(&board, Pos::new(9, 7), -1, 0, Stone::Black), 3);
        assert_eq!(run_length(&board, Pos::new(5, 7), -1, 0, Stone::Black), 0);
    }

    #[test]
    fn test_run_length_stops_at_edge() {
        let board = board_with(&[(0, 0, Stone::White), (1, 1, Stone::White)]);
        assert_eq!(run_length(&board, Pos::new(2, 2), -1, -1, Stone::White), 2);
    }

    #[test]
    fn test_line_length_counts_both_sides() {
        let board = board_with(&[
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 8, Stone::White),
        ]);
        assert_eq!(line_length(&board, Pos::new(7, 7), 0, 1, Stone::White), 4);
        assert_eq!(line_length(&board, Pos::new(7, 7), 1, 0, Stone::White), 1);
    }

    #[test]
    fn test_signature_tokens() {
        let board = board_with(&[
            (6, 7, Stone::Black),
            (8, 7, Stone::White),
        ]);
        let sig = signature(&board, Pos::new(7, 7), 1, 0, Stone::Black, 2);
        assert_eq!(sig, vec![Token::Empty, Token::Own, Token::Empty, Token::Blocked, Token::Empty]);
    }

    #[test]
    fn test_signature_off_board_is_blocked() {
        let board = Board::new(15);
        let sig = signature(&board, Pos::new(1, 7), 1, 0, Stone::Black, SIGNATURE_RADIUS);
        assert_eq!(sig.len(), 2 * SIGNATURE_RADIUS + 1);
        assert_eq!(signature_string(&sig), "2222200000000");
    }
}
