//! Presentation shell - the player-facing side of the game.
//!
//! The core knows nothing about cursors or dialogs. This crate owns them and
//! talks to the [`Session`](crate::core::Session) only through its public
//! transitions:
//!
//! - [`cursor`]: card grid layout and cursor movement
//! - [`dialog`]: settings dialog (draft + validation) and the time-up dialog
//! - [`app`]: routes [`GameAction`](crate::types::GameAction)s to the session
//!   or the open dialog

pub mod app;
pub mod cursor;
pub mod dialog;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use app::{App, Overlay};
pub use cursor::{grid_columns, Cursor};
pub use dialog::{SettingsDialog, SettingsField, TimeUpDialog};
