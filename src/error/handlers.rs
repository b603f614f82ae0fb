//! Error handlers
//!
//! Provides error logging and outward-facing message mapping.

use crate::error::types::{StoreError, VaultError};
use log::error;

/// Log a vault error with full internal detail
pub fn handle_error(err: &VaultError) {
    error!("Credential vault error: {}", err);
}

/// Map an error to a message safe to show a network-facing caller.
///
/// Authentication-related detail is collapsed into a single message so a
/// remote caller cannot tell an unknown username from a wrong password or a
/// malformed record. The internal log line keeps the distinction.
pub fn external_message(err: &VaultError) -> &'static str {
    match err {
        VaultError::Store(StoreError::Unavailable(_)) => "credential store unavailable",
        VaultError::Store(_) => "authentication failed",
        VaultError::InvalidUsername(_) => "authentication failed",
        VaultError::Salt(_) | VaultError::Codec(_) => "credential processing failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_message_hides_store_detail() {
        let not_found = VaultError::Store(StoreError::NotFound("alice".to_string()));
        let malformed = VaultError::Store(StoreError::Malformed("bad digest".to_string()));
        assert_eq!(external_message(&not_found), external_message(&malformed));
        assert_eq!(external_message(&not_found), "authentication failed");
    }

    #[test]
    fn test_external_message_store_unavailable() {
        let err = VaultError::Store(StoreError::Unavailable("connection refused".to_string()));
        assert_eq!(external_message(&err), "credential store unavailable");
    }
}
