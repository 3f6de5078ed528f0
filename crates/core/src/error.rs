//! Error types for session setup and move placement.

/// Invalid board size or win target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("rows must be between {min} and {max}, got {rows}")]
    RowsOutOfRange { rows: usize, min: usize, max: usize },

    #[error("columns must be between {min} and {max}, got {columns}")]
    ColumnsOutOfRange {
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("win target must be between {min} and {max} for this board, got {win_target}")]
    WinTargetOutOfRange {
        win_target: usize,
        min: usize,
        max: usize,
    },
}

/// A placement the turn loop refused.
///
/// The board is left unchanged and the same player keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("Please provide a valid field number in the range 1 - {max}!")]
    FieldOutOfRange { field: usize, max: usize },

    #[error("You cannot mark a field that has already been marked!")]
    FieldTaken(usize),

    #[error("The round is over, answer the rematch question first!")]
    NotPlaying,
}
