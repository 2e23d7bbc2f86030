//! Match configuration.

use crate::error::Result;
use crate::games::MoveSet;

/// Rounds per match
pub const DEFAULT_MAX_ROUNDS: u32 = 7;

/// Settings fixed at match start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub moves: MoveSet,
    pub max_rounds: u32,
}

impl MatchConfig {
    /// Build from command-line move labels; no labels means the default set
    pub fn from_args<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let moves = if labels.is_empty() {
            MoveSet::default()
        } else {
            MoveSet::new(labels)?
        };
        Ok(Self {
            moves,
            max_rounds: DEFAULT_MAX_ROUNDS,
        })
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            moves: MoveSet::default(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
