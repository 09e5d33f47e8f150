//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Deck Limits
//!
//! - **Catalog**: 10 animals, so a deck holds at most 20 cards
//! - **Card count**: even, between 2 and 20
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Event loop timestep |
//! | `COUNTDOWN_TICK_MS` | 1000 | Interval between countdown ticks |
//! | `MISMATCH_DELAY_MS` | 1500 | Mismatched cards stay visible this long |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Animal, GameAction, ANIMALS, MAX_CARD_COUNT};
//!
//! assert_eq!(ANIMALS[0], Animal::Cat);
//! assert_eq!(Animal::Panda.as_str(), "panda");
//! assert_eq!(GameAction::Flip.as_str(), "flip");
//! assert_eq!(MAX_CARD_COUNT, 20);
//! ```

/// Event loop timestep in milliseconds.
pub const FRAME_MS: u32 = 50;

/// Interval between countdown ticks (one second).
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// How long a mismatched pair stays face up before flipping back.
pub const MISMATCH_DELAY_MS: u32 = 1500;

/// Default number of cards on the table.
pub const DEFAULT_CARD_COUNT: u8 = 12;

/// Default countdown in seconds.
pub const DEFAULT_START_SECS: u32 = 30;

/// Smallest deck the settings dialog accepts.
pub const MIN_CARD_COUNT: u8 = 2;

/// Largest deck the catalog can fill (two cards per animal).
pub const MAX_CARD_COUNT: u8 = (ANIMALS.len() * 2) as u8;

/// Countdown bounds accepted by the settings dialog (seconds).
pub const MIN_COUNTDOWN_SECS: u32 = 10;
pub const MAX_COUNTDOWN_SECS: u32 = 300;

/// Settings dialog adjustment steps.
pub const CARD_COUNT_STEP: u8 = 2;
pub const COUNTDOWN_STEP_SECS: u32 = 5;

/// Card identifier, unique within a deck.
pub type CardId = u8;

/// Session generation; bumped on every restart.
pub type Generation = u32;

/// The animal symbols printed on card faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Animal {
    Cat,
    Dog,
    Frog,
    Lion,
    Panda,
    Rabbit,
    Bear,
    Tiger,
    Pig,
    Fox,
}

/// Fixed, ordered animal catalog. Decks take a prefix of this list.
pub const ANIMALS: [Animal; 10] = [
    Animal::Cat,
    Animal::Dog,
    Animal::Frog,
    Animal::Lion,
    Animal::Panda,
    Animal::Rabbit,
    Animal::Bear,
    Animal::Tiger,
    Animal::Pig,
    Animal::Fox,
];

impl Animal {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Cat => "cat",
            Animal::Dog => "dog",
            Animal::Frog => "frog",
            Animal::Lion => "lion",
            Animal::Panda => "panda",
            Animal::Rabbit => "rabbit",
            Animal::Bear => "bear",
            Animal::Tiger => "tiger",
            Animal::Pig => "pig",
            Animal::Fox => "fox",
        }
    }
}

/// Actions the player can take.
///
/// Cursor movement is handled by the shell; everything else either reaches
/// the session directly or opens/closes a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Flip the card under the cursor, or confirm in a dialog
    Flip,
    /// Open the settings dialog
    OpenSettings,
    /// Close a dialog without applying it
    Cancel,
    /// Restart with the last applied configuration
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Flip => "flip",
            GameAction::OpenSettings => "openSettings",
            GameAction::Cancel => "cancel",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created but not started
    Idle,
    Running,
    /// Every pair found before the countdown ran out
    Won,
    TimedOut,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won | Phase::TimedOut)
    }
}

/// Outcome of the most recent transition, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundEvent {
    Matched { first: CardId, second: CardId },
    Mismatched { first: CardId, second: CardId },
    Won,
    TimedOut,
    Restarted { generation: Generation },
}
