//! Candidate move generation
//!
//! Restricts the AI to empty cells near existing stones. The order is
//! deterministic: occupied cells are visited in scan order and each one
//! contributes its unseen empty neighbours row by row.

use crate::board::{Board, Pos};

/// Empty cells within Chebyshev distance `radius` of any stone, at most
/// `limit` of them. On an empty board the only candidate is the centre.
pub fn candidates(board: &Board, radius: usize, limit: usize) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let r = radius as i32;
    let mut seen = vec![false; size * size];
    let mut result = Vec::with_capacity(limit.min(size * size));

    for stone_pos in board.positions().filter(|&p| !board.is_empty(p)) {
        for dy in -r..=r {
            for dx in -r..=r {
                let Some(pos) = board.pos(stone_pos.x as i32 + dx, stone_pos.y as i32 + dy) else {
                    continue;
                };
                let idx = pos.to_index(size);
                if seen[idx] || !board.is_empty(pos) {
                    continue;
                }
                seen[idx] = true;
                result.push(pos);
                if result.len() == limit {
                    return result;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_board_gives_center() {
        let board = Board::new(15);
        assert_eq!(candidates(&board, 2, 30), vec![Pos::new(7, 7)]);
        assert_eq!(candidates(&Board::new(10), 2, 30), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_single_stone_neighbourhood() {
        let mut board = Board::new(15);
        board.set(Pos::new(7, 7), Stone::Black);
        let cands = candidates(&board, 2, 100);
        assert_eq!(cands.len(), 24);
        assert_eq!(cands[0], Pos::new(5, 5));
        assert_eq!(cands[1], Pos::new(6, 5));
        assert!(!cands.contains(&Pos::new(7, 7)));
        assert!(cands.iter().all(|p| (p.x as i32 - 7).abs() <= 2 && (p.y as i32 - 7).abs() <= 2));
    }

    #[test]
    fn test_limit_truncates() {
        let mut board = Board::new(15);
        board.set(Pos::new(7, 7), Stone::Black);
        let cands = candidates(&board, 2, 5);
        assert_eq!(
            cands,
            vec![
                Pos::new(5, 5),
                Pos::new(6, 5),
                Pos::new(7, 5),
                Pos::new(8, 5),
                Pos::new(9, 5),
            ]
        );
    }

    #[test]
    fn test_corner_clipped_and_unique() {
        let mut board = Board::new(15);
        board.set(Pos::new(0, 0), Stone::Black);
        board.set(Pos::new(1, 0), Stone::White);
        let cands = candidates(&board, 1, 100);
        // Union of both neighbourhoods: (2,0) (0,1) (1,1) (2,1)
        assert_eq!(cands.len(), 4);
        let mut sorted = cands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), cands.len());
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new(15);
        for (x, y) in [(7, 7), (8, 8), (3, 12)] {
            board.set(Pos::new(x, y), Stone::White);
        }
        assert_eq!(candidates(&board, 2, 30), candidates(&board, 2, 30));
    }
}
