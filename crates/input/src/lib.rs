//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps key events into [`crate::types::GameAction`] and provides a
//! [`FieldEntry`] buffer for typing multi-digit field numbers.

pub mod entry;
pub mod map;

pub use tui_tictactoe_types as types;

pub use entry::FieldEntry;
pub use map::{handle_key_event, should_quit};
