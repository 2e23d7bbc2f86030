//! Cryptographic primitives for the fairness proof.
//!
//! This module provides:
//! - SecretKey, the per-round random HMAC key
//! - Commitment and CommitmentCode for the commit-reveal scheme

mod commitment;
mod key;

pub use commitment::{compute_code, verify_code, Commitment, CommitmentCode};
pub use key::{SecretKey, KEY_LEN};
