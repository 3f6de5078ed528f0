//! Game state module - manages the complete session state
//!
//! This module ties together the board, the win detector and the session
//! settings. It handles turn order, field placement, scores and the rematch
//! flow. It never touches the terminal; the binary drives it with
//! [`GameAction`]s and renders [`GameSnapshot`]s.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::PlaceError;
use crate::settings::GameSettings;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Mark, Player, Position};
use crate::win::{has_won, winning_run};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the current player's move
    Playing,
    /// The given player completed a run; waiting for the rematch answer
    Won(Player),
    /// Board filled up without a winner; waiting for the rematch answer
    Draw,
    /// Rematch declined, session over
    Finished,
}

/// What a successful placement led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Turn passed to the other player
    NextTurn,
    /// The placing player won the round
    Won(Player),
    /// Last empty cell filled without a winner
    Draw,
}

/// Complete session state: board, turn, scores and rematch flow
#[derive(Debug, Clone)]
pub struct GameState {
    settings: GameSettings,
    board: Board,
    phase: Phase,
    /// Player to move
    turn: Player,
    /// Player holding X this round; X always moves first.
    x_player: Player,
    /// Rounds won, indexed by `Player::number() - 1`
    scores: [u32; 2],
    /// Round counter, starting at 1
    round: u32,
    cursor: Position,
    last_move: Option<Position>,
    /// Cells of the completed run while in `Phase::Won`
    winning_run: Vec<Position>,
    /// Most recent rejected placement, cleared by the next successful one
    last_error: Option<PlaceError>,
}

impl GameState {
    /// Start a session; Player 1 holds X and moves first.
    pub fn new(settings: GameSettings) -> Self {
        info!(
            rows = settings.rows(),
            columns = settings.columns(),
            win_target = settings.win_target(),
            "new session"
        );
        Self {
            settings,
            board: Board::new(settings.rows(), settings.columns()),
            phase: Phase::Playing,
            turn: Player::One,
            x_player: Player::One,
            scores: [0; 2],
            round: 1,
            cursor: center(&settings),
            last_move: None,
            winning_run: Vec::new(),
            last_error: None,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn x_player(&self) -> Player {
        self.x_player
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        if player == self.x_player {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.mark_of(self.turn)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[score_index(player)]
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_run(&self) -> &[Position] {
        &self.winning_run
    }

    pub fn last_error(&self) -> Option<PlaceError> {
        self.last_error
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Whether the round is over and a rematch answer is expected
    pub fn awaiting_rematch(&self) -> bool {
        matches!(self.phase, Phase::Won(_) | Phase::Draw)
    }

    /// Place the current player's mark on a 1-based field number.
    ///
    /// Rejections are also recorded in [`last_error`](Self::last_error) so the
    /// view can show them.
    pub fn place_field(&mut self, field: usize) -> Result<PlaceOutcome, PlaceError> {
        let max = self.settings.field_count();
        if field < 1 || field > max {
            return self.reject(PlaceError::FieldOutOfRange { field, max });
        }
        let pos = Position::from_field(field, self.settings.columns());
        self.place_at(pos)
    }

    /// Place the current player's mark at the cursor.
    pub fn place_at_cursor(&mut self) -> Result<PlaceOutcome, PlaceError> {
        self.place_at(self.cursor)
    }

    fn place_at(&mut self, pos: Position) -> Result<PlaceOutcome, PlaceError> {
        if self.phase != Phase::Playing {
            return self.reject(PlaceError::NotPlaying);
        }

        if !self.board.is_vacant(pos.row, pos.col) {
            return self.reject(PlaceError::FieldTaken(pos.field(self.settings.columns())));
        }
        let mark = self.current_mark();
        self.board.place(pos, mark);

        self.last_error = None;
        self.last_move = Some(pos);
        self.cursor = pos;
        debug!(
            player = self.turn.number(),
            mark = %mark.as_char(),
            row = pos.row,
            col = pos.col,
            "mark placed"
        );

        let win_target = self.settings.win_target();
        if has_won(&self.board, pos.row, pos.col, mark, win_target) {
            let winner = self.turn;
            self.scores[score_index(winner)] += 1;
            self.winning_run = winning_run(&self.board, pos, mark, win_target).unwrap_or_default();
            self.phase = Phase::Won(winner);
            info!(
                round = self.round,
                winner = winner.number(),
                score_p1 = self.scores[0],
                score_p2 = self.scores[1],
                "round won"
            );
            return Ok(PlaceOutcome::Won(winner));
        }

        if self.board.is_full() {
            self.phase = Phase::Draw;
            info!(round = self.round, "round drawn");
            return Ok(PlaceOutcome::Draw);
        }

        self.turn = self.turn.other();
        Ok(PlaceOutcome::NextTurn)
    }

    fn reject(&mut self, err: PlaceError) -> Result<PlaceOutcome, PlaceError> {
        debug!(player = self.turn.number(), error = %err, "placement rejected");
        self.last_error = Some(err);
        Err(err)
    }

    /// Start the next round after a win or draw.
    ///
    /// Marks swap between the players and the new X player moves first.
    /// Scores carry over. Returns false when no round has just ended.
    pub fn rematch(&mut self) -> bool {
        if !self.awaiting_rematch() {
            return false;
        }
        self.board.clear();
        self.x_player = self.x_player.other();
        self.turn = self.x_player;
        self.phase = Phase::Playing;
        self.round += 1;
        self.cursor = center(&self.settings);
        self.last_move = None;
        self.winning_run.clear();
        self.last_error = None;
        info!(round = self.round, x_player = self.x_player.number(), "rematch");
        true
    }

    /// Decline the rematch and finish the session.
    pub fn decline(&mut self) -> bool {
        if !self.awaiting_rematch() {
            return false;
        }
        self.phase = Phase::Finished;
        info!(
            rounds = self.round,
            score_p1 = self.scores[0],
            score_p2 = self.scores[1],
            "session finished"
        );
        true
    }

    /// Move the cursor, clamped to the board.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        let row = self
            .cursor
            .row
            .saturating_add_signed(d_row)
            .min(self.settings.rows() - 1);
        let col = self
            .cursor
            .col
            .saturating_add_signed(d_col)
            .min(self.settings.columns() - 1);
        let moved = row != self.cursor.row || col != self.cursor.col;
        self.cursor = Position::new(row, col);
        moved
    }

    /// Apply a game action
    ///
    /// `Submit` places at the cursor while playing and accepts the rematch
    /// (the default answer) once the round is over. Digit entry is buffered by
    /// the input layer and arrives through [`place_field`](Self::place_field).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::Submit => {
                if self.awaiting_rematch() {
                    self.rematch()
                } else {
                    self.place_at_cursor().is_ok()
                }
            }
            GameAction::Rematch => self.rematch(),
            GameAction::Decline => self.decline(),
            GameAction::Digit(_) | GameAction::Backspace => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.settings.rows();
        out.columns = self.settings.columns();
        out.win_target = self.settings.win_target();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.phase = self.phase;
        out.turn = self.turn;
        out.x_player = self.x_player;
        out.scores = self.scores;
        out.round = self.round;
        out.cursor = self.cursor;
        out.last_move = self.last_move;
        out.winning_run.clear();
        out.winning_run.extend_from_slice(&self.winning_run);
        out.last_error = self.last_error;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn score_index(player: Player) -> usize {
    (player.number() - 1) as usize
}

fn center(settings: &GameSettings) -> Position {
    Position::new(settings.rows() / 2, settings.columns() / 2)
}
