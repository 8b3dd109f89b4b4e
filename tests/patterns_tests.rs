//! Pattern library tests - stamping and evolution of the shipped patterns

use tui_life::core::{Board, Pattern, PATTERNS};
use tui_life::engine::step;

fn pattern(name: &str) -> &'static Pattern {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no pattern named {name}"))
}

#[test]
fn test_block_pattern_is_a_still_life() {
    let mut board = Board::dead(8, 8);
    pattern("Block").apply(&mut board, 3, 3);
    assert_eq!(step(&board), board);
}

#[test]
fn test_blinker_pattern_has_period_two() {
    let mut board = Board::dead(9, 9);
    pattern("Blinker").apply(&mut board, 4, 3);
    let once = step(&board);
    assert_ne!(once, board);
    assert_eq!(step(&once), board);
}

#[test]
fn test_toad_has_period_two() {
    let mut board = Board::dead(10, 10);
    pattern("Toad").apply(&mut board, 4, 3);
    let once = step(&board);
    assert_ne!(once, board);
    assert_eq!(step(&once), board);
}

#[test]
fn test_beacon_has_period_two() {
    let mut board = Board::dead(10, 10);
    pattern("Beacon").apply(&mut board, 3, 3);
    let once = step(&board);
    assert_ne!(once, board);
    assert_eq!(step(&once), board);
}

#[test]
fn test_glider_translates_diagonally_every_four_generations() {
    let glider = pattern("Glider");

    let mut board = Board::dead(10, 10);
    glider.apply(&mut board, 2, 2);
    for _ in 0..4 {
        board = step(&board);
    }

    let mut expected = Board::dead(10, 10);
    glider.apply(&mut expected, 3, 3);
    assert_eq!(board, expected);
}

#[test]
fn test_glider_crosses_the_torus_seam() {
    let glider = pattern("Glider");

    // 5 cells stay 5 cells while the glider walks through the wrap.
    let mut board = Board::dead(8, 8);
    glider.apply(&mut board, 6, 6);
    for _ in 0..32 {
        board = step(&board);
        assert_eq!(board.population(), 5);
    }

    // 32 generations translate the glider by (8, 8), which on an 8x8 torus
    // is exactly back to where it started.
    let mut expected = Board::dead(8, 8);
    glider.apply(&mut expected, 6, 6);
    assert_eq!(board, expected);
}

#[test]
fn test_r_pentomino_is_not_a_still_life() {
    let mut board = Board::dead(32, 32);
    pattern("R-pentomino").apply_centered(&mut board);
    assert_ne!(step(&board), board);
}
