//! Commitment for the HMAC commit-reveal scheme.

use super::provider::{hmac_sha256, CryptoProvider};
use super::secret::Secret;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Commitment = HMAC-SHA256(key = secret, message = move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex_serde")] [u8; 32]);

impl Commitment {
    /// Bind `move_name` to `secret`
    pub fn compute<P: CryptoProvider + ?Sized>(provider: &P, secret: &Secret, move_name: &str) -> Self {
        Self(provider.hmac_sha256(secret.as_bytes(), move_name.as_bytes()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a published commitment (64 hex characters)
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given secret and move name produce this commitment
    pub fn verify<P: CryptoProvider + ?Sized>(&self, provider: &P, secret: &Secret, move_name: &str) -> bool {
        *self == Self::compute(provider, secret, move_name)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Errors decoding a reveal for offline verification
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("malformed commitment: {0}")]
    Commitment(hex::FromHexError),

    #[error("malformed key: {0}")]
    Key(hex::FromHexError),
}

/// Check a published commitment against a revealed key and move name.
///
/// Needs nothing from the session that produced it, so any observer holding
/// the three values can run it.
pub fn verify_reveal(commitment_hex: &str, key_hex: &str, move_name: &str) -> Result<bool, VerifyError> {
    let commitment = Commitment::from_hex(commitment_hex).map_err(VerifyError::Commitment)?;
    let secret = Secret::from_hex(key_hex).map_err(VerifyError::Key)?;
    Ok(commitment.0 == hmac_sha256(secret.as_bytes(), move_name.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SystemCrypto;

    fn secret(byte: u8) -> Secret {
        Secret::from_bytes([byte; 32])
    }

    #[test]
    fn test_commitment_verification() {
        let key = Secret::generate(&mut SystemCrypto).unwrap();
        let commitment = Commitment::compute(&SystemCrypto, &key, "Rock");

        assert!(commitment.verify(&SystemCrypto, &key, "Rock"));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let a = Commitment::compute(&SystemCrypto, &secret(1), "Spock");
        let b = Commitment::compute(&SystemCrypto, &secret(1), "Spock");

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let commitment1 = Commitment::compute(&SystemCrypto, &secret(1), "Rock");
        let commitment2 = Commitment::compute(&SystemCrypto, &secret(1), "Paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let commitment1 = Commitment::compute(&SystemCrypto, &secret(1), "Rock");
        let commitment2 = Commitment::compute(&SystemCrypto, &secret(2), "Rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let commitment = Commitment::compute(&SystemCrypto, &secret(3), "Rock");

        assert!(!commitment.verify(&SystemCrypto, &secret(3), "rock"));
    }

    #[test]
    fn test_display_is_64_lowercase_hex() {
        let shown = Commitment::compute(&SystemCrypto, &secret(4), "Lizard").to_string();

        assert_eq!(shown.len(), 64);
        assert!(shown.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let commitment = Commitment::compute(&SystemCrypto, &secret(5), "Paper");
        let parsed = Commitment::from_hex(&commitment.to_string()).unwrap();

        assert_eq!(commitment, parsed);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let commitment = Commitment::compute(&SystemCrypto, &secret(6), "Rock");
        let json = serde_json::to_string(&commitment).unwrap();

        assert_eq!(json, format!("\"{}\"", commitment));
        let back: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }

    #[test]
    fn test_verify_reveal() {
        let key = secret(7);
        let commitment = Commitment::compute(&SystemCrypto, &key, "Scissors").to_string();

        assert!(verify_reveal(&commitment, &key.to_hex(), "Scissors").unwrap());
        assert!(!verify_reveal(&commitment, &key.to_hex(), "Rock").unwrap());
        assert!(!verify_reveal(&commitment, &secret(8).to_hex(), "Scissors").unwrap());
    }

    #[test]
    fn test_verify_reveal_rejects_bad_hex() {
        let key = secret(9);
        let commitment = Commitment::compute(&SystemCrypto, &key, "Rock").to_string();

        assert!(matches!(
            verify_reveal("nothex", &key.to_hex(), "Rock"),
            Err(VerifyError::Commitment(_))
        ));
        assert!(matches!(
            verify_reveal(&commitment, "abc", "Rock"),
            Err(VerifyError::Key(_))
        ));
    }
}
