//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, session state and the win detector.
//! It has **no dependencies** on the terminal, input handling or I/O, making it:
//!
//! - **Deterministic**: The same sequence of moves always yields the same state
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` grid of optional marks
//! - [`win`]: Detects a completed run through the most recently placed mark
//! - [`settings`]: Validated board size and win target
//! - [`game_state`]: Turn order, field placement, scores and rematch flow
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - Two players; the player holding **X** always moves first
//! - Cells are addressed by 1-based field numbers in row-major order
//! - A round is won by `win_target` consecutive marks in a row, column or diagonal
//! - A full board without a winner is a draw
//! - On a rematch the players swap marks and scores carry over
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameSettings, GameState, PlaceOutcome};
//! use tui_tictactoe_types::Player;
//!
//! let mut game = GameState::new(GameSettings::default());
//!
//! // X takes the top row while O plays the middle row.
//! for field in [1, 4, 2, 5] {
//!     assert_eq!(game.place_field(field), Ok(PlaceOutcome::NextTurn));
//! }
//! assert_eq!(game.place_field(3), Ok(PlaceOutcome::Won(Player::One)));
//! assert_eq!(game.score(Player::One), 1);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod settings;
pub mod snapshot;
pub mod win;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{PlaceError, SettingsError};
pub use game_state::{GameState, Phase, PlaceOutcome};
pub use settings::GameSettings;
pub use snapshot::GameSnapshot;
pub use win::{has_won, winning_run, DIRECTIONS};
