//! Persistence provider contract
//!
//! The calling contract the vault depends on. Connection lifecycle,
//! transactions, and schema belong entirely to the implementation behind
//! this trait.

use crate::error::StoreError;

/// A persisted credential record.
///
/// The digest is always derivable from the password that was current at
/// write time; it is never reversed and never recomputed from itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub salt: String,
    pub digest: String,
}

/// Backing store for credential records.
///
/// `insert` creates or overwrites the record for a username and must be
/// atomic: a salt without its digest (or the reverse) must never be
/// observable. `lookup` returns `StoreError::NotFound` when no record
/// exists and never returns a partial record. Calls are synchronous and
/// are not retried by the vault; failures propagate to the caller as-is.
pub trait CredentialStore: Send + Sync {
    fn insert(&self, username: &str, salt: &str, digest: &str) -> Result<(), StoreError>;

    fn lookup(&self, username: &str) -> Result<CredentialRecord, StoreError>;
}
