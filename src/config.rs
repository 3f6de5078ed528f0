//! Command-line and environment configuration.
//!
//! Every flag can also be set through an environment variable:
//!
//! - `TICTACTOE_ROWS`: Board height (default: 3)
//! - `TICTACTOE_COLUMNS`: Board width (default: 3)
//! - `TICTACTOE_WIN_TARGET`: Marks in a row needed to win (default: 3)
//! - `TICTACTOE_LOG_PATH`: Append logs to this file (default: logging off)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::GameSettings;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_TARGET};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-tictactoe", version, about = "Two-player terminal tic-tac-toe")]
pub struct Cli {
    /// Number of board rows
    #[arg(short, long, env = "TICTACTOE_ROWS", default_value_t = DEFAULT_ROWS as usize)]
    pub rows: usize,

    /// Number of board columns
    #[arg(short, long, env = "TICTACTOE_COLUMNS", default_value_t = DEFAULT_COLUMNS as usize)]
    pub columns: usize,

    /// Consecutive marks needed to win
    #[arg(
        short = 'n',
        long,
        env = "TICTACTOE_WIN_TARGET",
        default_value_t = DEFAULT_WIN_TARGET as usize
    )]
    pub win_target: usize,

    /// Append logs to this file; the terminal itself is owned by the game
    #[arg(long, env = "TICTACTOE_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Hide the key help line under the board
    #[arg(long)]
    pub no_help: bool,
}

impl Cli {
    /// Validate the board flags into session settings.
    pub fn settings(&self) -> Result<GameSettings> {
        GameSettings::new(self.rows, self.columns, self.win_target).with_context(|| {
            format!(
                "invalid board {}x{} with win target {}",
                self.rows, self.columns, self.win_target
            )
        })
    }
}
