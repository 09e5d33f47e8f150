//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the binary's
//! command-line and logging setup.

pub mod cli;
pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_shell as shell;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
