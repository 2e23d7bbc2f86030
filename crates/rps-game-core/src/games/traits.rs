//! Game traits.

use super::{Move, MoveSet};
use crate::protocol::Outcome;

/// Trait for game logic - decides rounds from the human's point of view
pub trait GameJudge {
    /// The moves this judge understands
    fn moves(&self) -> &MoveSet;

    /// Outcome of `human` playing against `computer`
    fn judge(&self, human: &Move, computer: &Move) -> Outcome;

    /// Validate that a move belongs to this game
    fn validate_move(&self, mv: &Move) -> bool {
        self.moves()
            .get(mv.index())
            .is_some_and(|known| known == *mv)
    }
}
