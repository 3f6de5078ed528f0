//! Per-session game settings: board size and win target.

use crate::error::SettingsError;
use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_TARGET, MAX_COLUMNS, MAX_ROWS, MIN_BOARD_SIDE,
};

/// Validated board dimensions and win target.
///
/// Fixed for the whole session, rematches included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    rows: usize,
    columns: usize,
    win_target: usize,
}

impl GameSettings {
    /// Validate and build settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_core::GameSettings;
    ///
    /// let s = GameSettings::new(6, 7, 4).unwrap();
    /// assert_eq!(s.field_count(), 42);
    ///
    /// // Win target larger than the shorter side can never be reached.
    /// assert!(GameSettings::new(3, 5, 4).is_err());
    /// ```
    pub fn new(rows: usize, columns: usize, win_target: usize) -> Result<Self, SettingsError> {
        let min = MIN_BOARD_SIDE as usize;

        if !(min..=MAX_ROWS as usize).contains(&rows) {
            return Err(SettingsError::RowsOutOfRange {
                rows,
                min,
                max: MAX_ROWS as usize,
            });
        }
        if !(min..=MAX_COLUMNS as usize).contains(&columns) {
            return Err(SettingsError::ColumnsOutOfRange {
                columns,
                min,
                max: MAX_COLUMNS as usize,
            });
        }

        let max_target = rows.min(columns);
        if !(min..=max_target).contains(&win_target) {
            return Err(SettingsError::WinTargetOutOfRange {
                win_target,
                min,
                max: max_target,
            });
        }

        Ok(Self {
            rows,
            columns,
            win_target,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_target(&self) -> usize {
        self.win_target
    }

    /// Highest valid field number
    pub fn field_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS as usize,
            columns: DEFAULT_COLUMNS as usize,
            win_target: DEFAULT_WIN_TARGET as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let d = GameSettings::default();
        assert_eq!(GameSettings::new(d.rows(), d.columns(), d.win_target()), Ok(d));
    }

    #[test]
    fn rejects_boards_outside_renderer_limits() {
        assert_eq!(
            GameSettings::new(2, 3, 3),
            Err(SettingsError::RowsOutOfRange {
                rows: 2,
                min: 3,
                max: 40
            })
        );
        assert_eq!(
            GameSettings::new(3, 61, 3),
            Err(SettingsError::ColumnsOutOfRange {
                columns: 61,
                min: 3,
                max: 60
            })
        );
        assert!(GameSettings::new(40, 60, 5).is_ok());
    }

    #[test]
    fn win_target_is_bounded_by_shorter_side() {
        assert!(GameSettings::new(4, 9, 4).is_ok());
        assert_eq!(
            GameSettings::new(4, 9, 5),
            Err(SettingsError::WinTargetOutOfRange {
                win_target: 5,
                min: 3,
                max: 4
            })
        );
        assert!(GameSettings::new(5, 5, 2).is_err());
    }
}
