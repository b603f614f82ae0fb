//! Credential vault
//!
//! Ties salt generation, the credential codec, and a persistence provider
//! into the set / import / authenticate operations.

pub mod operations;
pub mod results;

pub use operations::CredentialVault;
pub use results::AuthOutcome;
