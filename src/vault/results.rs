//! Vault result types
//!
//! Defines result structures returned by credential operations.

/// Outcome of an authentication attempt.
///
/// `Rejected` covers unknown username, wrong password, and malformed stored
/// record alike; the variant carries no detail so callers cannot enumerate
/// usernames from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Rejected,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated)
    }
}
