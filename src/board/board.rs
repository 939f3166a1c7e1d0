//! Board storage and the scoped placement guard

use std::ops::Deref;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board.
///
/// Pure storage: no rule is enforced here beyond bounds. `Game` decides
/// whether a placement is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`. Use
    /// [`Board::is_supported_size`] (or `Game::try_new`) to check first.
    pub fn new(size: usize) -> Self {
        assert!(
            Self::is_supported_size(size),
            "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn is_supported_size(size: usize) -> bool {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check signed coordinates against the board edges
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Convert signed coordinates to a position if on the board
    #[inline]
    pub fn pos(&self, x: i32, y: i32) -> Option<Pos> {
        self.in_bounds(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, x: i32, y: i32) -> Option<Stone> {
        self.pos(x, y).map(|p| self.get(p))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = stone;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Stone::Empty);
    }

    /// Place `stone` at `pos` until the returned guard is dropped.
    ///
    /// The guard derefs to the board with the stone in place and clears the
    /// cell on drop, so every exit path of an evaluation restores the board.
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> Placed<'_> {
        debug_assert!(self.is_empty(pos), "scoped placement on occupied cell");
        self.set(pos, stone);
        Placed { board: self, pos }
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Center cell (side / 2, truncated)
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Iterate over every position in scan order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |i| Pos::from_index(i, self.size))
    }

    /// Row-major snapshot, `rows[y][x]`
    pub fn rows(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(<[Stone]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// A stone placed for the lifetime of the guard.
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placed<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
