//! Win detection around the most recently placed mark.
//!
//! Only runs through the placed cell can be new, so instead of scanning the
//! whole board the detector walks outward from that cell in each of the eight
//! compass directions. Each walk stops at the board edge, at the first cell not
//! holding the mark, or after `win_target - 1` steps.
//!
//! Directions are visited in the fixed order N, NE, E, SE, S, SW, W, NW.
//! Direction `i` and direction `i + 4` are opposites, so once the second half
//! of the table is reached both sides of an axis are known and a run that
//! straddles the placed cell can be detected.

use crate::board::Board;
use crate::types::{Mark, Position};

/// Unit steps as `(row_step, col_step)` in scan order:
/// N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Offset between a direction and its opposite in [`DIRECTIONS`].
const OPPOSITE: usize = 4;

/// Check whether the mark just placed at `(row, col)` completes a run of
/// `win_target` consecutive marks.
///
/// The cell must already hold `mark`. The board is never modified.
///
/// # Examples
///
/// ```
/// use tui_tictactoe_core::{has_won, Board};
/// use tui_tictactoe_types::Mark;
///
/// let mut board = Board::new(3, 3);
/// board.set(0, 0, Some(Mark::X));
/// board.set(1, 1, Some(Mark::X));
/// board.set(2, 2, Some(Mark::X));
///
/// assert!(has_won(&board, 2, 2, Mark::X, 3));
/// ```
pub fn has_won(board: &Board, row: usize, col: usize, mark: Mark, win_target: usize) -> bool {
    debug_assert_eq!(
        board.get(row, col),
        Some(Some(mark)),
        "({row}, {col}) must already hold {mark:?}"
    );

    let mut counts = [0usize; DIRECTIONS.len()];
    for (i, &(row_step, col_step)) in DIRECTIONS.iter().enumerate() {
        counts[i] = count_in_direction(board, row, col, row_step, col_step, mark, win_target);

        if counts[i] + 1 == win_target {
            return true;
        }

        // Second half of the table: both sides of this axis are known.
        if i >= OPPOSITE && counts[i] + counts[i - OPPOSITE] + 1 >= win_target {
            return true;
        }
    }

    false
}

/// Cells of the run completed by the mark at `pos`, in order along the axis.
///
/// Returns `None` exactly when [`has_won`] returns false. The run is limited to
/// what the detector scans: at most `win_target - 1` cells on either side.
pub fn winning_run(
    board: &Board,
    pos: Position,
    mark: Mark,
    win_target: usize,
) -> Option<Vec<Position>> {
    for axis in 0..OPPOSITE {
        let (fwd_row, fwd_col) = DIRECTIONS[axis];
        let (back_row, back_col) = DIRECTIONS[axis + OPPOSITE];
        let fwd = count_in_direction(board, pos.row, pos.col, fwd_row, fwd_col, mark, win_target);
        let back =
            count_in_direction(board, pos.row, pos.col, back_row, back_col, mark, win_target);

        if fwd + back + 1 >= win_target {
            let mut run = Vec::with_capacity(fwd + back + 1);
            for step in (1..=back).rev() {
                run.extend(offset(pos.row, pos.col, back_row, back_col, step));
            }
            run.push(pos);
            for step in 1..=fwd {
                run.extend(offset(pos.row, pos.col, fwd_row, fwd_col, step));
            }
            return Some(run);
        }
    }
    None
}

/// Count contiguous `mark` cells starting one step away from `(row, col)`.
///
/// Scans at most `win_target - 1` steps and never reads outside the board.
fn count_in_direction(
    board: &Board,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
    mark: Mark,
    win_target: usize,
) -> usize {
    let mut count = 0;
    for step in 1..win_target {
        let Some(pos) = offset(row, col, row_step, col_step, step) else {
            break;
        };
        match board.at(pos) {
            Some(Some(m)) if m == mark => count += 1,
            _ => break,
        }
    }
    count
}

#[inline]
fn offset(
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
    step: usize,
) -> Option<Position> {
    let step = isize::try_from(step).ok()?;
    let r = row.checked_add_signed(row_step * step)?;
    let c = col.checked_add_signed(col_step * step)?;
    Some(Position::new(r, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let cells = rows
            .iter()
            .map(|r| r.chars().map(Mark::from_char).collect())
            .collect();
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn directions_pair_with_their_opposites() {
        for i in 0..OPPOSITE {
            let (r, c) = DIRECTIONS[i];
            assert_eq!(DIRECTIONS[i + OPPOSITE], (-r, -c));
        }
        assert!(!DIRECTIONS.contains(&(0, 0)));
    }

    #[test]
    fn count_stops_at_first_mismatch() {
        let board = board_from(&["XXOX.", ".....", "....."]);
        assert_eq!(count_in_direction(&board, 0, 0, 0, 1, Mark::X, 5), 1);
    }

    #[test]
    fn count_is_capped_at_target_minus_one() {
        let board = board_from(&["XXXXXX"; 6]);
        assert_eq!(count_in_direction(&board, 0, 0, 0, 1, Mark::X, 3), 2);
        assert_eq!(count_in_direction(&board, 0, 0, 1, 1, Mark::X, 4), 3);
    }

    #[test]
    fn off_grid_directions_count_zero() {
        let board = board_from(&["X..", "...", "..."]);
        for &(dr, dc) in &[(-1, 0), (-1, 1), (-1, -1), (0, -1), (1, -1)] {
            assert_eq!(count_in_direction(&board, 0, 0, dr, dc, Mark::X, 3), 0);
        }
    }

    #[test]
    fn winning_run_is_ordered_along_the_axis() {
        let mut board = board_from(&[".....", ".....", "OO.OO", ".....", "....."]);
        board.set(2, 2, Some(Mark::O));

        let run = winning_run(&board, Position::new(2, 2), Mark::O, 4).unwrap();
        // Axis E/W: west side first, then the placed cell, then east.
        assert_eq!(
            run,
            (0..5).map(|c| Position::new(2, c)).collect::<Vec<_>>()
        );
    }
}
