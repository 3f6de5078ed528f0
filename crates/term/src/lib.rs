//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget toolkits
//! and renders into a simple framebuffer that is flushed to the terminal with
//! crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep [`GameView`] pure so layouts can be asserted cell by cell
//! - Only rewrite changed cells between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{board_size, farewell, field_width, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
