//! Per-round secret key.

use crate::error::Result;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// 32-byte HMAC key, kept secret until the round is resolved
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from a cryptographically secure generator.
    ///
    /// Fails if the generator cannot produce entropy; the round must not
    /// proceed in that case.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Draw a fresh key from the operating system
    pub fn random() -> Result<Self> {
        Self::generate(&mut OsRng)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a revealed key from hex
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s.trim()).ok()?;
        let bytes: [u8; KEY_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Hex encoding, as shown to the human after reveal
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Never print key material through Debug.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
