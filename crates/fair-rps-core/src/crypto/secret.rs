//! Per-round HMAC key.

use super::provider::{CryptoProvider, EntropyError};
use std::fmt;

/// Length of the secret key in bytes
pub const SECRET_LEN: usize = 32;

/// Secret key for one round.
///
/// Not `Serialize` or `Display`, and `Debug` is redacted. A live round's key
/// is only readable through a revealed `RoundResult`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Draw a fresh secret from the provider's secure random source
    pub fn generate<P: CryptoProvider + ?Sized>(provider: &mut P) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; SECRET_LEN];
        provider.random_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a revealed key from its hex form
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; SECRET_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, as shown at reveal
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
