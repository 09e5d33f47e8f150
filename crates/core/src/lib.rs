//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: dealing, flipping,
//! matching, the countdown, and the round lifecycle. It has **no dependencies**
//! on the terminal or on wall-clock time, making it:
//!
//! - **Deterministic**: Same seed deals the same deck
//! - **Testable**: Time is advanced explicitly, so delays can be tested exactly
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`config`]: Deck size and countdown, with validation
//! - [`deck`]: Cards and the shuffled deck generator
//! - [`rng`]: Injectable random source and Fisher-Yates shuffle
//! - [`session`]: The round state machine
//! - [`snapshot`]: Allocation-free read-only view for renderers
//! - [`timer`]: Deferred tasks and the countdown tick source
//!
//! # Game Rules
//!
//! - Cards are revealed two at a time
//! - A matching pair stays face up; a mismatch counts as a mistake and the
//!   pair flips back after 1.5 seconds
//! - The round is won when every pair is found and lost when the countdown
//!   reaches zero
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{RoundConfig, Session};
//! use tui_memory_core::types::Phase;
//!
//! let mut session = Session::new(RoundConfig::new(4, 30).unwrap(), 12345);
//! session.start().unwrap();
//!
//! session.flip(0);
//! session.advance(1_000);
//!
//! assert_eq!(session.phase(), Phase::Running);
//! assert_eq!(session.seconds_remaining(), 29);
//! ```
//!
//! # Timing
//!
//! Call [`Session::advance`](session::Session::advance) with the elapsed
//! milliseconds every frame; due countdown ticks and mismatch resolutions run
//! in order inside that call.

pub mod config;
pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use config::{InvalidConfiguration, RoundConfig};
pub use deck::{generate_deck, Card, Deck};
pub use rng::{shuffle, RandomSource, SimpleRng};
pub use session::{Selection, Session, SessionEvent};
pub use snapshot::SessionSnapshot;
pub use timer::{Countdown, Deferred, ScheduledTask, Scheduler};
