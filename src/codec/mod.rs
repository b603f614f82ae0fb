//! Credential codec
//!
//! Combines a password and salt into a deterministic one-way digest and
//! checks login attempts against stored digests. Holds no state; passwords
//! and digests never outlive a single call.

pub mod derive;
pub mod verify;

pub use derive::{DIGEST_BYTES, DIGEST_HEX_LENGTH, DigestParams, derive_digest};
pub use verify::verify;

/// Cheap Argon2 parameters for tests; never use outside of tests.
#[cfg(test)]
pub(crate) fn test_params() -> DigestParams {
    DigestParams {
        memory_cost_kib: 8,
        time_cost: 1,
        parallelism: 1,
    }
}
