use crate::error::PlaceError;
use crate::game_state::Phase;
use crate::types::{Cell, Mark, Player, Position};

/// Render-facing copy of the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub win_target: usize,
    /// Row-major cells, `rows * columns` long
    pub cells: Vec<Cell>,
    pub phase: Phase,
    pub turn: Player,
    pub x_player: Player,
    pub scores: [u32; 2],
    pub round: u32,
    pub cursor: Position,
    pub last_move: Option<Position>,
    pub winning_run: Vec<Position>,
    pub last_error: Option<PlaceError>,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells[row * self.columns + col]
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        if player == self.x_player {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[(player.number() - 1) as usize]
    }

    pub fn field_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn in_winning_run(&self, row: usize, col: usize) -> bool {
        self.winning_run.contains(&Position::new(row, col))
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            win_target: 0,
            cells: Vec::new(),
            phase: Phase::Playing,
            turn: Player::One,
            x_player: Player::One,
            scores: [0; 2],
            round: 1,
            cursor: Position::new(0, 0),
            last_move: None,
            winning_run: Vec::new(),
            last_error: None,
        }
    }
}
