//! Game definitions and logic.

mod moves;
mod rules;
mod traits;

pub use moves::{Move, MoveSet, DEFAULT_MOVES, MIN_MOVES};
pub use rules::RuleEngine;
pub use traits::GameJudge;
