//! Vault operations
//!
//! Implements the set-credential, privileged import, and authenticate
//! operations on top of the salt generator, codec, and a persistence
//! provider.

use log::{debug, info, warn};

use crate::codec::{DIGEST_HEX_LENGTH, DigestParams, derive_digest, verify};
use crate::config::VaultConfig;
use crate::error::{StoreError, VaultError};
use crate::salt::generate_salt;
use crate::store::{CredentialRecord, CredentialStore};
use crate::vault::results::AuthOutcome;

// Fixed salt for the dummy derivation on unknown-username paths, so a
// rejected lookup costs the same as a rejected password.
const DUMMY_SALT: &str = "00000000000000000000000000000000";

/// Stateless credential manager over a persistence provider.
///
/// Holds only the store handle and the derivation work factor; passwords and
/// digests never outlive a single call. Safe to share across threads.
pub struct CredentialVault<S: CredentialStore> {
    store: S,
    params: DigestParams,
    max_username_length: usize,
}

impl<S: CredentialStore> CredentialVault<S> {
    pub fn new(store: S, config: &VaultConfig) -> Self {
        CredentialVault {
            store,
            params: config.digest_params(),
            max_username_length: config.max_username_length,
        }
    }

    /// Construct with explicit derivation parameters and the default
    /// username length limit.
    pub fn with_params(store: S, params: DigestParams) -> Self {
        CredentialVault {
            store,
            params,
            max_username_length: VaultConfig::default().max_username_length,
        }
    }

    /// Sets (or replaces) the credential for a username.
    ///
    /// Generates a fresh salt, derives the digest, and writes both in one
    /// atomic insert. A randomness failure aborts the operation; there is no
    /// fallback source.
    pub fn set_credential(&self, username: &str, password: &str) -> Result<(), VaultError> {
        self.check_username(username)?;

        let salt = generate_salt()?;
        let digest = derive_digest(password, &salt, &self.params)?;

        self.store.insert(username, &salt, &digest)?;
        info!("Credential stored for user: {}", username);
        Ok(())
    }

    /// Stores a precomputed digest and salt verbatim, with no derivation.
    ///
    /// Privileged trust-boundary operation for migrations and administrative
    /// tooling only. The vault does not validate the digest format here; a
    /// caller that stores a wrongly derived digest locks the user out until
    /// the next `set_credential`.
    pub fn import_digest(
        &self,
        username: &str,
        salt: &str,
        digest: &str,
    ) -> Result<(), VaultError> {
        self.check_username(username)?;

        self.store.insert(username, salt, digest)?;
        warn!("Precomputed digest imported for user: {}", username);
        Ok(())
    }

    /// Authenticates a username and password against the stored record.
    ///
    /// Unknown username, wrong password, and malformed stored record all
    /// return `AuthOutcome::Rejected`; only a store failure is an error. The
    /// unknown-username path runs a dummy derivation so its latency matches
    /// the known-user path.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<AuthOutcome, VaultError> {
        if self.check_username(username).is_err() {
            return Ok(self.reject_with_dummy_derivation("invalid username shape"));
        }

        let record = match self.store.lookup(username) {
            Ok(record) => record,
            Err(StoreError::NotFound(_)) => {
                return Ok(self.reject_with_dummy_derivation("unknown username"));
            }
            Err(StoreError::Malformed(detail)) => {
                warn!("Malformed credential record for {}: {}", username, detail);
                return Ok(AuthOutcome::Rejected);
            }
            Err(err) => return Err(err.into()),
        };

        if !record_shape_ok(&record) {
            warn!("Stored credential for {} has unexpected shape", username);
            return Ok(AuthOutcome::Rejected);
        }

        if verify(password, &record.salt, &record.digest, &self.params) {
            info!("Authentication succeeded for user: {}", username);
            Ok(AuthOutcome::Authenticated)
        } else {
            debug!("Authentication rejected for {}: digest mismatch", username);
            Ok(AuthOutcome::Rejected)
        }
    }

    // Keeps the rejected path in the same latency class as a real
    // verification.
    fn reject_with_dummy_derivation(&self, reason: &str) -> AuthOutcome {
        let _ = derive_digest("", DUMMY_SALT, &self.params);
        debug!("Authentication rejected: {}", reason);
        AuthOutcome::Rejected
    }

    /// Basic input sanitation shared by every operation; not a password
    /// policy.
    fn check_username(&self, username: &str) -> Result<(), VaultError> {
        let valid = !username.trim().is_empty()
            && username.len() <= self.max_username_length
            && !username.contains(['\r', '\n', '\0']);
        if valid {
            Ok(())
        } else {
            Err(VaultError::InvalidUsername(username.to_string()))
        }
    }
}

// Defensive read-side check. Salts always have a fixed length on the normal
// write path but imported ones may differ, so only the digest shape is
// enforced strictly.
fn record_shape_ok(record: &CredentialRecord) -> bool {
    !record.salt.is_empty()
        && record.digest.len() == DIGEST_HEX_LENGTH
        && record.digest.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_params;
    use crate::store::MemoryStore;

    fn vault() -> CredentialVault<MemoryStore> {
        CredentialVault::with_params(MemoryStore::new(), test_params())
    }

    #[test]
    fn test_set_then_authenticate() {
        let vault = vault();
        vault.set_credential("alice", "secret").unwrap();
        assert_eq!(
            vault.authenticate("alice", "secret").unwrap(),
            AuthOutcome::Authenticated
        );
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let vault = vault();
        vault.set_credential("alice", "secret").unwrap();
        assert_eq!(
            vault.authenticate("alice", "wrong").unwrap(),
            AuthOutcome::Rejected
        );
    }

    #[test]
    fn test_unknown_user_matches_wrong_password_outcome() {
        let vault = vault();
        vault.set_credential("alice", "secret").unwrap();

        let wrong_password = vault.authenticate("alice", "wrong").unwrap();
        let unknown_user = vault.authenticate("bob", "secret").unwrap();
        assert_eq!(wrong_password, unknown_user);
    }

    #[test]
    fn test_overwrite_invalidates_previous_password() {
        let vault = vault();
        vault.set_credential("alice", "first").unwrap();
        vault.set_credential("alice", "second").unwrap();

        assert_eq!(
            vault.authenticate("alice", "first").unwrap(),
            AuthOutcome::Rejected
        );
        assert_eq!(
            vault.authenticate("alice", "second").unwrap(),
            AuthOutcome::Authenticated
        );
    }

    #[test]
    fn test_empty_username_rejected_on_set() {
        let vault = vault();
        assert!(matches!(
            vault.set_credential("   ", "secret"),
            Err(VaultError::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_empty_username_rejected_uniformly_on_authenticate() {
        let vault = vault();
        assert_eq!(
            vault.authenticate("", "secret").unwrap(),
            AuthOutcome::Rejected
        );
    }

    #[test]
    fn test_imported_digest_authenticates() {
        let vault = vault();
        let salt = crate::salt::generate_salt().unwrap();
        let digest = derive_digest("secret", &salt, &test_params()).unwrap();

        vault.import_digest("alice", &salt, &digest).unwrap();
        assert_eq!(
            vault.authenticate("alice", "secret").unwrap(),
            AuthOutcome::Authenticated
        );
    }

    #[test]
    fn test_malformed_stored_digest_is_rejected_not_fatal() {
        let vault = vault();
        vault
            .import_digest("alice", "0123456789abcdef", "not-a-digest")
            .unwrap();
        assert_eq!(
            vault.authenticate("alice", "secret").unwrap(),
            AuthOutcome::Rejected
        );
    }
}
