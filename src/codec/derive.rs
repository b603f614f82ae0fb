//! Digest derivation
//!
//! Derives the stored credential digest from a password and salt using
//! Argon2id. Identical `(password, salt, params)` inputs always produce the
//! identical digest; verification depends on this.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::CodecError;

/// Raw digest output length in bytes before hex encoding.
pub const DIGEST_BYTES: usize = 32;

/// Length of the canonical hex-encoded digest.
pub const DIGEST_HEX_LENGTH: usize = DIGEST_BYTES * 2;

/// Tunable Argon2id work factor.
///
/// Raising these slows every derivation, stored digests derived under the
/// old values keep verifying only while the same params are supplied, so a
/// deployment changes them together with a credential re-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestParams {
    /// Memory cost in KiB.
    pub memory_cost_kib: u32,
    /// Number of passes over memory.
    pub time_cost: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for DigestParams {
    fn default() -> Self {
        DigestParams {
            memory_cost_kib: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Derives the canonical hex digest for a password and salt.
///
/// The password bytes are the Argon2 message and the salt bytes are the
/// Argon2 salt; the 32-byte output is hex-encoded lowercase. The result is
/// deterministic and one-way. Fails if the params are out of range or the
/// salt is unusable (shorter than Argon2's minimum).
pub fn derive_digest(
    password: &str,
    salt: &str,
    params: &DigestParams,
) -> Result<String, CodecError> {
    let argon_params = Params::new(
        params.memory_cost_kib,
        params.time_cost,
        params.parallelism,
        Some(DIGEST_BYTES),
    )
    .map_err(|e| CodecError::InvalidParams(e.to_string()))?;

    let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

    let mut output = [0u8; DIGEST_BYTES];
    hasher
        .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut output)
        .map_err(|e| CodecError::DerivationFailed(e.to_string()))?;

    Ok(hex::encode(output))
}
