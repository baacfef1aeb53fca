//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - CryptoProvider, the randomness and HMAC capability, with SystemCrypto
//!   for production and ScriptedCrypto for deterministic tests
//! - Secret, the per-round HMAC key
//! - Commitment, the published HMAC-SHA256 tag

mod commitment;
mod mock;
mod provider;
mod secret;

pub(crate) mod hex_serde;

pub use commitment::{verify_reveal, Commitment, VerifyError};
pub use mock::ScriptedCrypto;
pub use provider::{hmac_sha256, CryptoProvider, EntropyError, SystemCrypto};
pub use secret::{Secret, SECRET_LEN};
