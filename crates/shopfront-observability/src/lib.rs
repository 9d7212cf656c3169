//! Logging infrastructure for the shopfront workspace.
//!
//! Library crates only emit `tracing` events. Binaries call [`init`] once at
//! startup to install a subscriber configured by a [`LoggingConfig`].
//!
//! This crate provides:
//! - `LogLevel` - Minimum level, parsed from config or CLI flags
//! - `LogFormat` - JSON or human-readable output
//! - `LoggingConfig` - Serializable logging section of the config file
//! - `init` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
