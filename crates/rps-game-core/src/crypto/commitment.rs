//! Commitment and CommitmentCode for the commit-reveal scheme.

use super::SecretKey;
use crate::games::Move;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 tag in bytes
pub const CODE_LEN: usize = 32;

fn keyed_mac(key: &[u8], message: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    mac
}

/// Compute the hex HMAC-SHA256 of `message` keyed by `key`
pub fn compute_code(key: &[u8], message: &str) -> String {
    CommitmentCode::compute(key, message).to_string()
}

/// Check a published hex code against a revealed key and message.
///
/// Returns false for malformed hex as well as for a mismatch.
pub fn verify_code(key: &[u8], message: &str, code_hex: &str) -> bool {
    match CommitmentCode::from_hex(code_hex) {
        Some(code) => code.verify(key, message),
        None => false,
    }
}

/// HMAC-SHA256(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitmentCode([u8; CODE_LEN]);

impl CommitmentCode {
    /// Compute the code binding `message` to `key`
    pub fn compute(key: &[u8], message: &str) -> Self {
        Self(keyed_mac(key, message).finalize().into_bytes().into())
    }

    /// Parse a published code from hex
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s.trim()).ok()?;
        let bytes: [u8; CODE_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Constant-time check that `key` and `message` produce this code
    pub fn verify(&self, key: &[u8], message: &str) -> bool {
        keyed_mac(key, message).verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for CommitmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentCode({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// The computer's hidden move for one round, bound by a published code.
///
/// Only the code is observable until [`Commitment::reveal`] consumes the
/// commitment and hands out the key and the move.
#[derive(Clone)]
pub struct Commitment {
    key: SecretKey,
    computer_move: Move,
    code: CommitmentCode,
}

impl Commitment {
    /// Commit to `computer_move` under `key`
    pub fn new(key: SecretKey, computer_move: Move) -> Self {
        let code = CommitmentCode::compute(key.as_bytes(), computer_move.label());
        Self {
            key,
            computer_move,
            code,
        }
    }

    /// The code published before the human chooses
    pub fn code(&self) -> &CommitmentCode {
        &self.code
    }

    /// Check that this commitment still reproduces its own code
    pub fn verify(&self) -> bool {
        self.code.verify(self.key.as_bytes(), self.computer_move.label())
    }

    /// Open the commitment, yielding the key and the committed move
    pub fn reveal(self) -> (SecretKey, Move) {
        (self.key, self.computer_move)
    }
}

// Key and move stay out of Debug output until reveal.
impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({:?})", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MoveSet;

    fn rock() -> Move {
        MoveSet::default().resolve("Rock").unwrap()
    }

    fn paper() -> Move {
        MoveSet::default().resolve("Paper").unwrap()
    }

    #[test]
    fn test_commitment_verification() {
        let key = SecretKey::random().unwrap();
        let commitment = Commitment::new(key.clone(), rock());

        assert!(commitment.verify());
        assert!(commitment.code().verify(key.as_bytes(), "Rock"));
    }

    #[test]
    fn test_compute_code_is_deterministic() {
        let key = [7u8; 32];

        assert_eq!(compute_code(&key, "Rock"), compute_code(&key, "Rock"));
        assert_eq!(compute_code(&key, "Rock").len(), CODE_LEN * 2);
    }

    #[test]
    fn test_known_hmac_vector() {
        // RFC 4231 test case 2
        assert_eq!(
            compute_code(b"Jefe", "what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_different_moves_different_codes() {
        let key = SecretKey::random().unwrap();
        let code1 = Commitment::new(key.clone(), rock());
        let code2 = Commitment::new(key, paper());

        assert_ne!(code1.code(), code2.code());
    }

    #[test]
    fn test_different_keys_different_codes() {
        let code1 = Commitment::new(SecretKey::random().unwrap(), rock());
        let code2 = Commitment::new(SecretKey::random().unwrap(), rock());

        assert_ne!(code1.code(), code2.code());
    }

    #[test]
    fn test_reveal_recomputes_published_code() {
        let commitment = Commitment::new(SecretKey::random().unwrap(), paper());
        let published = commitment.code().to_string();

        let (key, revealed) = commitment.reveal();

        assert_eq!(compute_code(key.as_bytes(), revealed.label()), published);
        assert!(verify_code(key.as_bytes(), revealed.label(), &published));
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = SecretKey::random().unwrap();
        let commitment = Commitment::new(key.clone(), rock());

        assert!(!commitment.code().verify(key.as_bytes(), "Paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = Commitment::new(SecretKey::random().unwrap(), rock());
        let other = SecretKey::random().unwrap();

        assert!(!commitment.code().verify(other.as_bytes(), "Rock"));
    }

    #[test]
    fn test_verify_code_rejects_malformed_hex() {
        assert!(!verify_code(&[1u8; 32], "Rock", "zz"));
        assert!(!verify_code(&[1u8; 32], "Rock", ""));
    }

    #[test]
    fn test_debug_does_not_leak_move() {
        let commitment = Commitment::new(SecretKey::random().unwrap(), rock());
        let debug = format!("{:?}", commitment);

        assert!(!debug.contains("Rock"));
        assert!(debug.starts_with("Commitment(CommitmentCode("));
    }
}
