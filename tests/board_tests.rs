//! Board factory tests - shape invariants and seeding

use tui_life::core::{Board, SimpleRng};
use tui_life::types::Cell;

#[test]
fn test_dead_board_shape_invariant() {
    for (w, h) in [(1, 1), (3, 7), (50, 30), (128, 2)] {
        let board = Board::dead(w, h);
        assert_eq!(board.width(), w);
        assert_eq!(board.height(), h);
        assert_eq!(board.rows().count(), h);
        assert!(board.rows().all(|row| row.len() == w));
    }
}

#[test]
fn test_random_board_shape_invariant() {
    let mut rng = SimpleRng::new(1);
    for (w, h) in [(1, 1), (3, 7), (50, 30)] {
        let board = Board::random(w, h, &mut rng);
        assert_eq!(board.rows().count(), h);
        assert!(board.rows().all(|row| row.len() == w));
    }
}

#[test]
fn test_dead_board_is_all_dead() {
    let board = Board::dead(10, 10);
    assert!(board
        .cells()
        .iter()
        .all(|&cell| cell == Cell::Dead));
}

#[test]
fn test_random_board_cells_are_in_domain() {
    let mut rng = SimpleRng::new(987);
    let board = Board::random(10, 10, &mut rng);
    assert!(board
        .cells()
        .iter()
        .all(|&cell| cell == Cell::Alive || cell == Cell::Dead));
}

#[test]
fn test_random_board_uses_injected_source() {
    // The factory consumes exactly one flip per cell, row-major.
    let mut flips = 0usize;
    let board = Board::random_with(4, 3, || {
        flips += 1;
        flips % 2 == 0
    });
    assert_eq!(flips, 12);
    assert_eq!(board.get(0, 0), Some(Cell::Dead));
    assert_eq!(board.get(0, 1), Some(Cell::Alive));
    assert_eq!(board.population(), 6);
}

#[test]
fn test_random_board_is_reproducible_by_seed() {
    let mut rng1 = SimpleRng::new(2024);
    let mut rng2 = SimpleRng::new(2024);
    assert_eq!(
        Board::random(50, 30, &mut rng1),
        Board::random(50, 30, &mut rng2)
    );
}

#[test]
#[should_panic(expected = "dimensions must be positive")]
fn test_zero_dimension_is_rejected() {
    Board::dead(0, 0);
}
