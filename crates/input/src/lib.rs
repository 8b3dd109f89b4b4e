//! Terminal input module (runner-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::SimAction`] and keeps quit
//! detection separate so the runner can check it before anything else.

pub mod map;

pub use tui_life_types as types;

pub use map::{action_for_key, should_quit};
