//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger;

/// Setup logging for the vault host process
pub fn setup_logging() {
    // try_init so embedding applications that already installed a logger
    // are left alone
    let _ = env_logger::Builder::from_default_env().try_init();
}
