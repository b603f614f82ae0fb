//! Credential storage
//!
//! Defines the persistence provider contract and the in-memory reference
//! implementation.

pub mod memory;
pub mod provider;

pub use memory::MemoryStore;
pub use provider::{CredentialRecord, CredentialStore};
