//! Terminal tic-tac-toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,input,term,types}`
//! and holds the application glue used by the binary: command-line
//! [`config`], file [`logging`] and the key-to-state [`session`] dispatch.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
