//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid where each cell is empty or holds a mark.
//! Uses a flat vector in row-major order, sized once per session.
//! Coordinates: (row, col) where row ranges 0..rows (top to bottom) and col
//! ranges 0..columns (left to right).

use crate::types::{Cell, Mark, Position};

/// The game board - `rows x columns` using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat vector of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Build a board from rows of cells.
    ///
    /// Returns `None` when the input is empty or ragged.
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Option<Self> {
        let rows = cells_2d.len();
        let columns = cells_2d.first()?.len();
        if columns == 0 || cells_2d.iter().any(|row| row.len() != columns) {
            return None;
        }
        Some(Self {
            rows,
            columns,
            cells: cells_2d.into_iter().flatten().collect(),
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells, which is also the highest field number
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Get cell at a position
    pub fn at(&self, pos: Position) -> Option<Cell> {
        self.get(pos.row, pos.col)
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Place a mark on an empty, in-bounds cell.
    /// Returns false (and leaves the board untouched) otherwise.
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        match self.index(pos.row, pos.col) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Check if position is in bounds and empty
    pub fn is_vacant(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of cells holding the given mark (test and debugging aid)
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to rows of cells (test and debugging aid)
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.columns.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(3, 4);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_board_flat_storage() {
        let mut board = Board::new(4, 5);

        board.set(0, 0, Some(Mark::X));
        board.set(2, 3, Some(Mark::O));

        assert_eq!(board.get(0, 0), Some(Some(Mark::X)));
        assert_eq!(board.get(2, 3), Some(Some(Mark::O)));

        assert_eq!(board.cells[0], Some(Mark::X));
        assert_eq!(board.cells[2 * 5 + 3], Some(Mark::O));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 4]; 3];
        cells_2d[1][2] = Some(Mark::O);
        cells_2d[2][0] = Some(Mark::X);

        let board = Board::from_cells(cells_2d.clone()).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.columns(), 4);
        assert_eq!(board.to_cells(), cells_2d);
    }

    #[test]
    fn test_board_from_cells_rejects_ragged_input() {
        assert!(Board::from_cells(vec![]).is_none());
        assert!(Board::from_cells(vec![vec![None; 3], vec![None; 2]]).is_none());
    }
}
