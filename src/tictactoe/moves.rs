//! Move representation and move generation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Cell};

/// A move targeting `(row, col)`.
///
/// Ordering is row-major, which is also the order of move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Every on-board move in row-major order
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Move for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major cell index. Only meaningful for on-board moves.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl BoardState {
    /// Empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|mv| self.cells()[mv.index()] == Cell::Empty)
            .collect()
    }

    /// Every legal move paired with the board it produces, in row-major order.
    ///
    /// Terminal boards have no successors. The source board is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the board is malformed.
    pub fn successor_states(&self) -> Result<Vec<(Move, BoardState)>, crate::Error> {
        if self.is_terminal() {
            return Ok(Vec::new());
        }

        self.legal_moves()
            .into_iter()
            .map(|mv| Ok((mv, self.apply_move(mv)?)))
            .collect()
    }
}
