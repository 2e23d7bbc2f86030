//! RPS Game Core Library
//!
//! This crate provides the commitment scheme, the N-move rule engine and the
//! match protocol for a provably fair rock-paper-scissors game. The computer
//! publishes an HMAC of its move before the human chooses, and reveals the
//! key only after the human's choice is locked in.

pub mod config;
pub mod crypto;
pub mod error;
pub mod games;
pub mod io;
pub mod protocol;
pub mod render;

pub use config::{MatchConfig, DEFAULT_MAX_ROUNDS};
pub use crypto::{compute_code, verify_code, Commitment, CommitmentCode, SecretKey};
pub use error::{GameError, Result};
pub use games::{GameJudge, Move, MoveSet, RuleEngine, DEFAULT_MOVES};
pub use protocol::{
    Choice, MatchEnd, MatchReport, MatchRunner, MatchState, MatchSummary, Outcome, PendingRound,
    RoundRecord,
};
