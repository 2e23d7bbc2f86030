//! Round protocol, match state and the runner that ties them together.

mod round;
mod runner;
mod state;
mod types;

pub use round::PendingRound;
pub use runner::{MatchEnd, MatchReport, MatchRunner};
pub use state::{MatchState, MatchSummary};
pub use types::{Choice, Outcome, RoundRecord};
