//! Randomness and keyed-hash capabilities.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Failure to draw from the secure random source
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("secure random source unavailable: {0}")]
    Unavailable(String),
}

/// Trait for the cryptographic capabilities a round needs
///
/// Implementations:
/// - SystemCrypto for production (OS entropy, real HMAC)
/// - ScriptedCrypto for tests that need fixed secrets and opponent moves
pub trait CryptoProvider {
    /// Fill `dest` from a cryptographically secure source
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// HMAC-SHA256 of `message` keyed by `key`
    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> [u8; 32];

    /// Draw an index uniformly from `0..bound`.
    ///
    /// Rejection sampling over 64-bit draws keeps the result unbiased for
    /// any bound.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero. Callers pass the size of a validated move
    /// set, which is at least three.
    fn random_index(&mut self, bound: usize) -> Result<usize, EntropyError> {
        assert!(bound > 0, "random_index needs a non-empty range");
        let bound = bound as u64;
        // Largest accepted value; everything above would skew the modulo.
        let ceiling = u64::MAX - (u64::MAX % bound + 1) % bound;
        loop {
            let mut buf = [0u8; 8];
            self.random_bytes(&mut buf)?;
            let value = u64::from_be_bytes(buf);
            if value <= ceiling {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// HMAC-SHA256 over the given key and message
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Production provider backed by the operating system's entropy source.
///
/// `OsRng` carries no state, so concurrent sessions never share draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCrypto;

impl CryptoProvider for SystemCrypto {
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| EntropyError::Unavailable(err.to_string()))
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> [u8; 32] {
        hmac_sha256(key, message)
    }
}
