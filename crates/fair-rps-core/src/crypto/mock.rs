//! Deterministic CryptoProvider for tests and demos.

use super::provider::{hmac_sha256, CryptoProvider, EntropyError};
use std::collections::VecDeque;

/// Provider that serves pre-scripted random bytes.
///
/// HMAC is the real algorithm, so commitments produced under a script verify
/// exactly like production ones. When the script runs out (or was built with
/// [`ScriptedCrypto::unavailable`]) every draw fails with `EntropyError`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedCrypto {
    script: VecDeque<u8>,
    draws: usize,
}

impl ScriptedCrypto {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a round: the secret bytes followed by the opponent's index
    pub fn for_round(secret: [u8; 32], opponent_index: usize) -> Self {
        Self::new()
            .with_bytes(&secret)
            .with_index(opponent_index)
    }

    /// Provider whose random source always fails
    pub fn unavailable() -> Self {
        Self::new()
    }

    /// Append raw bytes to the script
    pub fn with_bytes(mut self, bytes: &[u8]) -> Self {
        self.script.extend(bytes.iter().copied());
        self
    }

    /// Append a draw that `random_index` will decode to `index`
    pub fn with_index(self, index: usize) -> Self {
        self.with_bytes(&(index as u64).to_be_bytes())
    }

    /// Number of successful `random_bytes` calls served so far
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Bytes still queued
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CryptoProvider for ScriptedCrypto {
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.script.len() < dest.len() {
            return Err(EntropyError::Unavailable(format!(
                "script exhausted: wanted {} bytes, {} left",
                dest.len(),
                self.script.len()
            )));
        }
        for byte in dest.iter_mut() {
            // Length checked above.
            *byte = self.script.pop_front().unwrap_or_default();
        }
        self.draws += 1;
        Ok(())
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> [u8; 32] {
        hmac_sha256(key, message)
    }
}
