//! Error types
//!
//! Defines domain-specific error types for each module of the credential vault.

use std::fmt;

/// Salt generator errors
#[derive(Debug)]
pub enum SaltError {
    /// The operating-system randomness source failed. Fatal for the enclosing
    /// operation; there is no weaker fallback source.
    RandomnessFailure(String),
}

impl fmt::Display for SaltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaltError::RandomnessFailure(e) => write!(f, "Randomness source failure: {}", e),
        }
    }
}

impl std::error::Error for SaltError {}

/// Credential codec errors
#[derive(Debug)]
pub enum CodecError {
    InvalidParams(String),
    DerivationFailed(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidParams(e) => write!(f, "Invalid derivation parameters: {}", e),
            CodecError::DerivationFailed(e) => write!(f, "Digest derivation failed: {}", e),
        }
    }
}

impl std::error::Error for CodecError {}

/// Persistence provider errors
#[derive(Debug)]
pub enum StoreError {
    /// No credential record exists for the username.
    NotFound(String),
    /// The backing store could not be reached or the operation did not
    /// complete. Propagated as-is; the core never retries.
    Unavailable(String),
    /// A stored record does not match the expected shape.
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(u) => write!(f, "No credential record for user: {}", u),
            StoreError::Unavailable(e) => write!(f, "Credential store unavailable: {}", e),
            StoreError::Malformed(e) => write!(f, "Malformed credential record: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// General vault error that encompasses all error types
#[derive(Debug)]
pub enum VaultError {
    Salt(SaltError),
    Codec(CodecError),
    Store(StoreError),
    InvalidUsername(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Salt(e) => write!(f, "Salt error: {}", e),
            VaultError::Codec(e) => write!(f, "Codec error: {}", e),
            VaultError::Store(e) => write!(f, "Store error: {}", e),
            VaultError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
        }
    }
}

impl std::error::Error for VaultError {}

// Implement conversions from specific errors to VaultError
impl From<SaltError> for VaultError {
    fn from(error: SaltError) -> Self {
        VaultError::Salt(error)
    }
}

impl From<CodecError> for VaultError {
    fn from(error: CodecError) -> Self {
        VaultError::Codec(error)
    }
}

impl From<StoreError> for VaultError {
    fn from(error: StoreError) -> Self {
        VaultError::Store(error)
    }
}
