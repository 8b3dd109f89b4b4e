//! Life transition - one generation to the next
//!
//! The grid is a torus: row `-1` wraps to `height - 1`, column `width` wraps
//! to `0`. Neighbor counting enumerates the 8 canonical offsets around a cell
//! and wraps each coordinate independently, so every boundary cell sees a
//! full set of 8 probes.
//!
//! On degenerate grids (width or height of 1) some of the 8 probes alias to
//! the same cell; they are still counted once per offset, which is the
//! modular-arithmetic reading of "toroidal".

use crate::core::Board;
use crate::types::Cell;

/// Offsets of the 8 neighbors around a cell, as (row, col) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells among the 8 toroidal neighbors of `(row, col)`.
pub fn live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let height = board.height() as isize;
    let width = board.width() as isize;
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let r = (row as isize + dr).rem_euclid(height) as usize;
        let c = (col as isize + dc).rem_euclid(width) as usize;
        if board.get(r, c).is_some_and(Cell::is_alive) {
            count += 1;
        }
    }
    count
}

/// Compute the next generation.
///
/// Returns a freshly allocated board of identical dimensions; the input is
/// never mutated, so neighbor counting always reads generation `t` even
/// while generation `t+1` is being written. Calling `step` twice on equal
/// boards yields equal results.
pub fn step(board: &Board) -> Board {
    let mut next = Board::dead(board.width(), board.height());
    for row in 0..board.height() {
        for col in 0..board.width() {
            let alive = board.get(row, col).is_some_and(Cell::is_alive);
            let neighbors = live_neighbors(board, row, col);

            let cell = match (alive, neighbors) {
                (true, 2) | (true, 3) => Cell::Alive, // survival
                (false, 3) => Cell::Alive,            // birth
                _ => Cell::Dead,                      // under/overpopulation, or stays dead
            };

            next.set(row, col, cell);
        }
    }
    next
}
