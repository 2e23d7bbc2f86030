//! N-move rule engine.
//!
//! Moves are arranged in a cycle. Each move loses to its immediate successor
//! and beats every other move:
//!
//! ```text
//! outcome(i, i)           = Draw
//! outcome(i, (i + 1) % N) = Lose
//! outcome(i, j)           = Win   otherwise
//! ```
//!
//! For three moves ordered Rock, Paper, Scissors this is the classic game.

use super::traits::GameJudge;
use super::{Move, MoveSet};
use crate::error::{GameError, Result};
use crate::protocol::Outcome;

/// Outcome for the human playing `human` against `computer` among `n` moves
fn successor_rule(human: usize, computer: usize, n: usize) -> Outcome {
    if human == computer {
        Outcome::Draw
    } else if computer == (human + 1) % n {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}

/// Precomputed N×N outcome table over a move set
#[derive(Clone, Debug)]
pub struct RuleEngine {
    moves: MoveSet,
    results: Vec<Vec<Outcome>>,
}

impl RuleEngine {
    /// Build the results table for `moves`
    pub fn build(moves: MoveSet) -> Self {
        let n = moves.len();
        let results = (0..n)
            .map(|i| (0..n).map(|j| successor_rule(i, j, n)).collect())
            .collect();
        Self { moves, results }
    }

    /// `results()[i][j]` is the outcome of human move i against computer move j
    pub fn results(&self) -> &[Vec<Outcome>] {
        &self.results
    }

    /// Table lookup by index.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn outcome(&self, human: usize, computer: usize) -> Outcome {
        self.results[human][computer]
    }

    /// Outcome for two labels, failing if either is not in the move set
    pub fn determine_outcome(&self, human: &str, computer: &str) -> Result<Outcome> {
        let human = self
            .moves
            .index_of(human)
            .ok_or_else(|| GameError::UnknownMove(human.to_string()))?;
        let computer = self
            .moves
            .index_of(computer)
            .ok_or_else(|| GameError::UnknownMove(computer.to_string()))?;
        Ok(self.results[human][computer])
    }

    /// The single move that beats `index`
    pub fn beaten_by(&self, index: usize) -> usize {
        (index + 1) % self.moves.len()
    }

    /// Check if move `a` beats move `b`
    pub fn beats(&self, a: usize, b: usize) -> bool {
        self.outcome(a, b) == Outcome::Win
    }
}

impl GameJudge for RuleEngine {
    fn moves(&self) -> &MoveSet {
        &self.moves
    }

    fn judge(&self, human: &Move, computer: &Move) -> Outcome {
        self.outcome(human.index(), computer.index())
    }
}
