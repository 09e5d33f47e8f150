//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key events into [`crate::types::GameAction`]; what an action means
//! (move the cursor, flip, confirm a dialog) is decided by the shell.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, should_quit};
