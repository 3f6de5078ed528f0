//! Routes mapped key actions to the game state and the field-number buffer.

use tracing::debug;

use crate::core::{GameSettings, GameSnapshot, GameState, Phase};
use crate::input::FieldEntry;
use crate::types::GameAction;

/// A running session: game state plus the digits typed so far.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    entry: FieldEntry,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            state: GameState::new(settings),
            entry: FieldEntry::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn entry(&self) -> &FieldEntry {
        &self.entry
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Apply one action. Returns whether anything changed.
    ///
    /// Digits are only buffered while a round is in progress. `Submit` with a
    /// typed number places on that field; with nothing typed it falls through
    /// to the game state (place at cursor, or accept the rematch).
    pub fn handle(&mut self, action: GameAction) -> bool {
        let playing = self.state.phase() == Phase::Playing;
        match action {
            GameAction::Digit(d) if playing => self.entry.push(d),
            GameAction::Digit(_) => false,
            GameAction::Backspace => self.entry.pop(),
            GameAction::Submit if playing && !self.entry.is_empty() => {
                let Some(field) = self.entry.take() else {
                    return false;
                };
                match self.state.place_field(field) {
                    Ok(outcome) => {
                        debug!(field, ?outcome, "field submitted");
                        true
                    }
                    // The rejection is kept in the state for the view.
                    Err(_) => true,
                }
            }
            other => self.state.apply_action(other),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }
}
