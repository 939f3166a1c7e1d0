//! Heuristic evaluation of a hypothetical placement
//!
//! The stone is placed through [`Board::place_scoped`] and removed again on
//! every return path, so the board is unchanged after each call.

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_win, forbidden_for_move, is_claimable, run_length, DIRECTIONS};

use super::patterns::{line_score, PatternScore};

/// Score `stone` played at `pos`.
///
/// - occupied target, or a forbidden Black move: [`PatternScore::ILLEGAL`]
/// - claimable win: [`PatternScore::WIN`]
/// - otherwise the sum of [`line_score`] over the 4 axes
///
/// The forbidden check runs before the win check, so a Black overline never
/// scores as a win.
#[must_use]
pub fn evaluate(board: &mut Board, pos: Pos, stone: Stone) -> i32 {
    if !board.is_empty(pos) {
        return PatternScore::ILLEGAL;
    }

    let placed = board.place_scoped(pos, stone);

    if stone == Stone::Black && forbidden_for_move(&placed, pos).is_some() {
        return PatternScore::ILLEGAL;
    }

    if check_win(&placed, pos).is_some_and(|line| is_claimable(stone, &line)) {
        return PatternScore::WIN;
    }

    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| axis_score(&placed, pos, dx, dy, stone))
        .sum()
}

/// Score one axis: the run through `pos` and whether each neighbour of
/// `pos` on the axis is empty.
///
/// Open ends are read next to the placed stone, not past the run, so a
/// stone that joins a run always has that side closed.
fn axis_score(board: &Board, pos: Pos, dx: i32, dy: i32, stone: Stone) -> i32 {
    let run = 1 + run_length(board, pos, dx, dy, stone) + run_length(board, pos, -dx, -dy, stone);
    let open_ends = is_open(board, pos, dx, dy) as u8 + is_open(board, pos, -dx, -dy) as u8;
    line_score(run, open_ends)
}

#[inline]
fn is_open(board: &Board, pos: Pos, dx: i32, dy: i32) -> bool {
    let (x, y) = pos.offset(dx, dy, 1);
    board.get_at(x, y) == Some(Stone::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new(15);
        for &(x, y) in black {
            board.set(Pos::new(x, y), Stone::Black);
        }
        for &(x, y) in white {
            board.set(Pos::new(x, y), Stone::White);
        }
        board
    }

    #[test]
    fn test_occupied_is_illegal() {
        let mut board = board_with(&[(7, 7)], &[]);
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::White), PatternScore::ILLEGAL);
    }

    #[test]
    fn test_lone_stone_center() {
        let mut board = Board::new(15);
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::Black), 20);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_edge_closes_ends() {
        let mut board = Board::new(15);
        // Only the vertical axis has both ends free
        assert_eq!(evaluate(&mut board, Pos::new(0, 7), Stone::White), 5);
    }

    #[test]
    fn test_filling_gap_closes_both_ends() {
        // Both neighbours on the row are stones, so the three scores nothing
        let mut board = board_with(&[(6, 7), (8, 7)], &[]);
        let before = board.clone();
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::Black), 15);
        assert_eq!(board, before);
    }

    #[test]
    fn test_extending_run_closes_one_end() {
        let mut board = board_with(&[(6, 7), (7, 7)], &[]);
        assert_eq!(
            evaluate(&mut board, Pos::new(8, 7), Stone::Black),
            PatternScore::CLOSED_THREE + 3 * PatternScore::OPEN_ONE
        );
        assert_eq!(evaluate(&mut board, Pos::new(8, 7), Stone::Black), 115);
    }

    #[test]
    fn test_closed_four_score() {
        // Blocked or not past the far end, the joined side counts as closed
        let mut board = board_with(&[], &[(4, 7), (5, 7), (6, 7)]);
        assert_eq!(
            evaluate(&mut board, Pos::new(7, 7), Stone::White),
            PatternScore::CLOSED_FOUR + 3 * PatternScore::OPEN_ONE
        );
        board.set(Pos::new(3, 7), Stone::Black);
        assert_eq!(
            evaluate(&mut board, Pos::new(7, 7), Stone::White),
            PatternScore::CLOSED_FOUR + 3 * PatternScore::OPEN_ONE
        );
    }

    #[test]
    fn test_open_one_only_for_isolated_stone() {
        // Both neighbours empty means the run is the stone alone
        let mut board = board_with(&[(5, 7)], &[]);
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::Black), 4 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_win_score() {
        let mut board = board_with(&[], &[(3, 7), (4, 7), (5, 7), (6, 7)]);
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::White), PatternScore::WIN);
        assert!(board.is_empty(Pos::new(7, 7)));
    }

    #[test]
    fn test_black_overline_is_illegal() {
        let mut board = board_with(&[(2, 7), (3, 7), (4, 7), (6, 7), (7, 7)], &[]);
        assert_eq!(evaluate(&mut board, Pos::new(5, 7), Stone::Black), PatternScore::ILLEGAL);
        // White may complete the same shape of its own
        let mut board = board_with(&[], &[(2, 7), (3, 7), (4, 7), (6, 7), (7, 7)]);
        assert_eq!(evaluate(&mut board, Pos::new(5, 7), Stone::White), PatternScore::WIN);
    }

    #[test]
    fn test_black_double_three_is_illegal() {
        let mut board = board_with(&[(6, 7), (8, 7), (7, 6), (7, 8)], &[]);
        let before = board.clone();
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::Black), PatternScore::ILLEGAL);
        assert_eq!(board, before);
        // The same cell is fine for White
        assert!(evaluate(&mut board, Pos::new(7, 7), Stone::White) >= 0);
    }

    #[test]
    fn test_black_exact_five_wins() {
        let mut board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7)], &[]);
        assert_eq!(evaluate(&mut board, Pos::new(7, 7), Stone::Black), PatternScore::WIN);
    }
}
