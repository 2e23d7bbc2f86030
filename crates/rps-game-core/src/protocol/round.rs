//! A single commit → choose → reveal round.

use super::RoundRecord;
use crate::crypto::{Commitment, CommitmentCode, SecretKey};
use crate::error::{GameError, Result};
use crate::games::{GameJudge, Move};
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// A round whose commitment is published and whose human choice is pending.
///
/// The key and computer move are fixed at [`PendingRound::start`] and stay the
/// same however many times the human is re-prompted.
#[derive(Debug)]
pub struct PendingRound {
    index: u32,
    commitment: Commitment,
}

impl PendingRound {
    /// Generate a key, pick the computer's move and commit to it
    pub fn start<J, R>(index: u32, judge: &J, rng: &mut R) -> Result<Self>
    where
        J: GameJudge + ?Sized,
        R: RngCore + CryptoRng + ?Sized,
    {
        let key = SecretKey::generate(rng)?;
        let computer_move = judge.moves().choose(rng);
        let commitment = Commitment::new(key, computer_move);

        debug!(round = index, code = %commitment.code(), "Round committed");

        Ok(Self { index, commitment })
    }

    /// 1-based round number
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Code to publish before the human chooses
    pub fn code(&self) -> &CommitmentCode {
        self.commitment.code()
    }

    /// Lock in the human's move, reveal the key and score the round
    pub fn resolve<J>(self, human_move: Move, judge: &J) -> Result<RoundRecord>
    where
        J: GameJudge + ?Sized,
    {
        if !judge.validate_move(&human_move) {
            return Err(GameError::UnknownMove(human_move.label().to_string()));
        }

        let code = *self.commitment.code();
        let (key, computer_move) = self.commitment.reveal();

        if !code.verify(key.as_bytes(), computer_move.label()) {
            return Err(GameError::CommitmentMismatch);
        }

        let outcome = judge.judge(&human_move, &computer_move);

        debug!(
            round = self.index,
            human = %human_move,
            computer = %computer_move,
            %outcome,
            "Round resolved"
        );

        Ok(RoundRecord {
            index: self.index,
            human_move: human_move.label().to_string(),
            computer_move: computer_move.label().to_string(),
            outcome,
            revealed_key: key.to_hex(),
            code: code.to_string(),
        })
    }
}
