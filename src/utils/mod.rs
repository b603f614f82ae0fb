//! Utility functions
//!
//! Provides logging utilities for host processes.

pub mod logging;
