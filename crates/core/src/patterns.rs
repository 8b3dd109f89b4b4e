//! Pattern library - well-known Life patterns
//!
//! Cell offsets are `(row, col)` pairs relative to the pattern's top-left
//! corner. Stamping wraps toroidally, so a pattern placed near an edge
//! continues on the opposite side, same as the transition rules.

use crate::board::Board;
use crate::types::Cell;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (0, 0), (0, 1), (1, 0), (1, 1),
            (2, 2), (2, 3), (3, 2), (3, 3),
        ],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Bounding box of the pattern as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Stamp the pattern onto `board` with its top-left corner at
    /// `(row, col)`, wrapping toroidally. Existing live cells are left alone.
    pub fn apply(&self, board: &mut Board, row: usize, col: usize) {
        let height = board.height();
        let width = board.width();
        for &(dr, dc) in self.cells {
            board.set((row + dr) % height, (col + dc) % width, Cell::Alive);
        }
    }

    /// Stamp the pattern in the middle of `board`.
    ///
    /// Patterns larger than the board still stamp, they just wrap.
    pub fn apply_centered(&self, board: &mut Board) {
        let (rows, cols) = self.size();
        let row = board.height().saturating_sub(rows) / 2;
        let col = board.width().saturating_sub(cols) / 2;
        self.apply(board, row, col);
    }
}
