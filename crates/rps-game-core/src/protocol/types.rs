//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Round or match outcome, always from the human's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Label used in tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Points awarded as (human, computer)
    pub fn points(&self) -> (u32, u32) {
        match self {
            Outcome::Win => (1, 0),
            Outcome::Lose => (0, 1),
            Outcome::Draw => (0, 0),
        }
    }

    /// Compare two scores from the first one's point of view
    pub fn from_scores(human: u32, computer: u32) -> Self {
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Lose,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved round. Only exists once the human made a valid choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub index: u32,
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    /// Key revealed after the human's choice, hex encoded
    pub revealed_key: String,
    /// Code published before the human's choice, hex encoded
    pub code: String,
}

/// One parsed line of human input at the move prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// `0`: leave the match
    Exit,
    /// `?`: show the outcome table
    Help,
    /// `1..=N`: play the move at this zero-based index
    Move(usize),
    /// Anything else
    Invalid,
}

impl Choice {
    /// Parse a prompt line against a set of `move_count` moves
    pub fn parse(input: &str, move_count: usize) -> Self {
        let input = input.trim();
        if input == "?" {
            return Choice::Help;
        }
        match input.parse::<usize>() {
            Ok(0) => Choice::Exit,
            Ok(n) if n <= move_count => Choice::Move(n - 1),
            _ => Choice::Invalid,
        }
    }
}
