//! In-memory credential store
//!
//! `HashMap`-backed implementation of the persistence contract for tests and
//! embedders without a relational backend. Each map update happens under a
//! single write-lock acquisition, which gives the atomicity the contract
//! requires.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::store::provider::{CredentialRecord, CredentialStore};

/// Thread-safe in-process credential store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, (String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn insert(&self, username: &str, salt: &str, digest: &str) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        records.insert(username.to_string(), (salt.to_string(), digest.to_string()));
        Ok(())
    }

    fn lookup(&self, username: &str) -> Result<CredentialRecord, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        match records.get(username) {
            Some((salt, digest)) => Ok(CredentialRecord {
                username: username.to_string(),
                salt: salt.clone(),
                digest: digest.clone(),
            }),
            None => Err(StoreError::NotFound(username.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_user_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.lookup("nobody"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_insert_then_lookup_round_trips() {
        let store = MemoryStore::new();
        store.insert("alice", "salt-a", "digest-a").unwrap();

        let record = store.lookup("alice").unwrap();
        assert_eq!(record.username, "alice");
        assert_eq!(record.salt, "salt-a");
        assert_eq!(record.digest, "digest-a");
    }

    #[test]
    fn test_insert_overwrites_existing_record() {
        let store = MemoryStore::new();
        store.insert("alice", "salt-1", "digest-1").unwrap();
        store.insert("alice", "salt-2", "digest-2").unwrap();

        let record = store.lookup("alice").unwrap();
        assert_eq!(record.salt, "salt-2");
        assert_eq!(record.digest, "digest-2");
    }
}
