//! Observability for the Bite storefront.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - logging knobs as they appear in config files
//! - `LogConfig` - the `[logging]` config section
//! - `init_logging` - installs the global `tracing` subscriber

mod logging;

pub use logging::*;
