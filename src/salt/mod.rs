//! Salt generation
//!
//! Produces per-credential random salts from the OS randomness source.

pub mod generator;

pub use generator::{SALT_LENGTH, generate_salt};
