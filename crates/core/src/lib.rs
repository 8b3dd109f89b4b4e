//! Core simulation data module - pure, deterministic, and testable
//!
//! This module contains the board storage, the board factory, and the
//! randomness source. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Unit tests can inject their own coin-flip sources
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: toroidal grid storage and the dead/random board factory
//! - [`rng`]: seedable LCG used for random board seeding
//! - [`patterns`]: a small library of well-known Life patterns
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Board, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let board = Board::random(50, 30, &mut rng);
//!
//! assert_eq!(board.width(), 50);
//! assert_eq!(board.height(), 30);
//! ```

pub mod board;
pub mod patterns;
pub mod rng;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use patterns::{Pattern, PATTERNS};
pub use rng::SimpleRng;
