//! Configuration management for the credential vault
//!
//! Carries the Argon2 work factor and input limits. Loaded once at startup;
//! changing the work factor only affects digests derived afterwards, so a
//! deployment pairs a raise with credential re-sets.

use argon2::Params;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::codec::DigestParams;

/// Vault configuration with CRED_VAULT_* environment overrides
#[derive(Debug, Deserialize, Clone)]
pub struct VaultConfig {
    /// Argon2 memory cost in KiB
    pub memory_cost_kib: u32,

    /// Argon2 passes over memory
    pub time_cost: u32,

    /// Argon2 degree of parallelism
    pub parallelism: u32,

    /// Maximum accepted username length
    pub max_username_length: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        VaultConfig {
            memory_cost_kib: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
            max_username_length: 64,
        }
    }
}

impl VaultConfig {
    /// Load configuration from credvault.toml with environment overrides.
    ///
    /// Missing files fall back to the defaults; a present but invalid value
    /// is an error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = VaultConfig::default();

        let settings = Config::builder()
            .set_default("memory_cost_kib", defaults.memory_cost_kib as i64)?
            .set_default("time_cost", defaults.time_cost as i64)?
            .set_default("parallelism", defaults.parallelism as i64)?
            .set_default("max_username_length", defaults.max_username_length as i64)?
            .add_source(File::with_name("credvault").required(false))
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CRED_VAULT"))
            .build()?;

        let config: VaultConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Derivation work factor as codec parameters
    pub fn digest_params(&self) -> DigestParams {
        DigestParams {
            memory_cost_kib: self.memory_cost_kib,
            time_cost: self.time_cost,
            parallelism: self.parallelism,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.time_cost == 0 {
            return Err(ConfigError::Message(
                "time_cost must be greater than 0".into(),
            ));
        }

        if self.parallelism == 0 {
            return Err(ConfigError::Message(
                "parallelism must be greater than 0".into(),
            ));
        }

        // Argon2 needs at least 8 KiB of memory per lane
        if self.memory_cost_kib < 8 * self.parallelism {
            return Err(ConfigError::Message(
                "memory_cost_kib must be at least 8 KiB per lane".into(),
            ));
        }

        if self.max_username_length == 0 {
            return Err(ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Connection details for a relational credential store.
///
/// The vault core never dials; this exists so store implementations behind
/// [`crate::store::CredentialStore`] share one configuration shape.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub ssl: bool,
}

impl BackendConfig {
    /// Key/value connection string in libpq format
    pub fn connection_string(&self) -> String {
        let ssl_mode = if self.ssl { "require" } else { "disable" };
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            self.host, self.port, self.user, self.password, self.dbname, ssl_mode
        )
    }
}
