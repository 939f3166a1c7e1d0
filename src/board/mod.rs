//! Board representation for Renju

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Placed};

use serde::{Deserialize, Serialize};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board on which a five still fits with room to block
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (coordinates fit in a `u8` and A-Z labels)
pub const MAX_BOARD_SIZE: usize = 25;

/// Stone colors
///
/// Serialized as the numeric cell codes used by saved games:
/// `0` empty, `1` black, `2` white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stone {
    #[default]
    Empty,
    /// First player, subject to the forbidden-move restriction
    Black,
    /// Second player, unrestricted
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl From<Stone> for u8 {
    fn from(stone: Stone) -> u8 {
        match stone {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }
}

impl TryFrom<u8> for Stone {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Stone::Empty),
            1 => Ok(Stone::Black),
            2 => Ok(Stone::White),
            other => Err(format!("invalid cell code {other}")),
        }
    }
}

/// Position on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_BOARD_SIZE && (y as usize) < MAX_BOARD_SIZE);
        Self { x, y }
    }

    /// Row-major index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size) as u8,
        }
    }

    /// Step `k` cells along `(dx, dy)`, unchecked against any board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, k: i32) -> (i32, i32) {
        (self.x as i32 + dx * k, self.y as i32 + dy * k)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Scan order: rows top to bottom, columns left to right
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
