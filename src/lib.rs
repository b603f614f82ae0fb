pub mod codec;
pub mod config;
pub mod error;
pub mod salt;
pub mod store;
pub mod utils;
pub mod vault;

pub use config::{BackendConfig, VaultConfig};
pub use store::{CredentialRecord, CredentialStore, MemoryStore};
pub use vault::{AuthOutcome, CredentialVault};
