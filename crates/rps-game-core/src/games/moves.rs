//! Move labels and validated move sets.

use crate::error::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Moves used when none are given on the command line
pub const DEFAULT_MOVES: [&str; 3] = ["Rock", "Paper", "Scissors"];

/// Smallest move set with a cyclic beats-relation
pub const MIN_MOVES: usize = 3;

/// One move of a [`MoveSet`]: its position and its label
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    index: usize,
    label: String,
}

impl Move {
    /// Zero-based position in the move set
    pub fn index(&self) -> usize {
        self.index
    }

    /// The label as given by the user
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Ordered, validated sequence of unique move labels.
///
/// The length is odd and at least [`MIN_MOVES`], so every move has exactly
/// one successor in the cyclic order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate labels and build a move set
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(GameError::TooFewMoves(labels.len()));
        }
        if labels.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(labels.len()));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.trim().is_empty() {
                return Err(GameError::EmptyMove);
            }
            if !seen.insert(label.as_str()) {
                return Err(GameError::DuplicateMove(label.clone()));
            }
        }

        Ok(Self(labels))
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a valid move set has at least three moves
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in order
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Move at `index`, if in range
    pub fn get(&self, index: usize) -> Option<Move> {
        self.0.get(index).map(|label| Move {
            index,
            label: label.clone(),
        })
    }

    /// Position of `label`, if present
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }

    /// Resolve a label to a move
    pub fn resolve(&self, label: &str) -> Result<Move> {
        self.index_of(label)
            .and_then(|index| self.get(index))
            .ok_or_else(|| GameError::UnknownMove(label.to_string()))
    }

    /// All moves in order
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.0.iter().enumerate().map(|(index, label)| Move {
            index,
            label: label.clone(),
        })
    }

    /// Pick a move uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        let index = rng.gen_range(0..self.0.len());
        Move {
            index,
            label: self.0[index].clone(),
        }
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self(DEFAULT_MOVES.iter().map(|m| m.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}
