//! Error handling
//!
//! Defines error types and handling for the credential vault.

pub mod handlers;
pub mod types;

pub use types::*;
