//! Terminal front end for the memory game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] draws the table and dialogs into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes only the cells that changed since the last
//! frame.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_shell as shell;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
