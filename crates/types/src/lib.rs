//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is `rows x columns`, chosen per session:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 3 | Classic board height |
//! | `DEFAULT_COLUMNS` | 3 | Classic board width |
//! | `DEFAULT_WIN_TARGET` | 3 | Marks in a row needed to win |
//! | `MIN_BOARD_SIDE` | 3 | Smallest allowed side length |
//! | `MAX_ROWS` | 40 | Largest board height the grid renderer supports |
//! | `MAX_COLUMNS` | 60 | Largest board width the grid renderer supports |
//!
//! # Field Numbers
//!
//! Players address cells with 1-based field numbers in row-major order.
//! On a 3x3 board field 1 is the top-left cell and field 9 the bottom-right.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Mark, Position};
//!
//! assert_eq!(Mark::X.other(), Mark::O);
//! assert_eq!(Mark::from_char('o'), Some(Mark::O));
//!
//! // Field 6 on a board with 3 columns is row 1, column 2
//! let pos = Position::from_field(6, 3);
//! assert_eq!(pos, Position::new(1, 2));
//! assert_eq!(pos.field(3), 6);
//! ```

/// Default board height
pub const DEFAULT_ROWS: u8 = 3;

/// Default board width
pub const DEFAULT_COLUMNS: u8 = 3;

/// Default number of consecutive marks required to win
pub const DEFAULT_WIN_TARGET: u8 = 3;

/// Smallest allowed board side and win target
pub const MIN_BOARD_SIDE: u8 = 3;

/// Largest supported number of rows
pub const MAX_ROWS: u8 = 40;

/// Largest supported number of columns
pub const MAX_COLUMNS: u8 = 60;

/// Title drawn above the board
pub const TITLE: &str = "Tic Tac Toe";

/// The two player symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parse mark from a character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::from_char('x'), Some(Mark::X));
    /// assert_eq!(Mark::from_char('O'), Some(Mark::O));
    /// assert_eq!(Mark::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Mark)`: Cell holding the given player's mark
pub type Cell = Option<Mark>;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based seat number used in prompts
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Zero-based board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a 1-based, row-major field number into coordinates.
    ///
    /// The caller is responsible for checking `field` is in `1..=rows*columns`.
    pub fn from_field(field: usize, columns: usize) -> Self {
        debug_assert!(field >= 1 && columns > 0);
        let idx = field - 1;
        Self {
            row: idx / columns,
            col: idx % columns,
        }
    }

    /// 1-based, row-major field number of this position
    pub fn field(&self, columns: usize) -> usize {
        self.row * columns + self.col + 1
    }
}

/// Actions the turn loop understands
///
/// These come from the keyboard mapping and drive the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one cell up
    CursorUp,
    /// Move the selection cursor one cell down
    CursorDown,
    /// Move the selection cursor one cell left
    CursorLeft,
    /// Move the selection cursor one cell right
    CursorRight,
    /// Append a digit to the typed field number
    Digit(u8),
    /// Remove the last typed digit
    Backspace,
    /// Submit the typed field number, or the cursor cell when nothing is typed
    Submit,
    /// Accept a rematch after a finished round
    Rematch,
    /// Decline a rematch and end the session
    Decline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_classic() {
        assert_eq!(DEFAULT_ROWS, 3);
        assert_eq!(DEFAULT_COLUMNS, 3);
        assert_eq!(DEFAULT_WIN_TARGET, 3);
        assert!(MIN_BOARD_SIDE <= DEFAULT_WIN_TARGET);
    }

    #[test]
    fn field_numbers_are_row_major() {
        // 3 rows x 4 columns: field 5 starts the second row
        assert_eq!(Position::from_field(1, 4), Position::new(0, 0));
        assert_eq!(Position::from_field(4, 4), Position::new(0, 3));
        assert_eq!(Position::from_field(5, 4), Position::new(1, 0));
        assert_eq!(Position::from_field(12, 4), Position::new(2, 3));

        for field in 1..=12 {
            assert_eq!(Position::from_field(field, 4).field(4), field);
        }
    }

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::Two.number(), 2);
    }
}
