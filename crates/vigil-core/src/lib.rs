//! vigil-core — configuration for the vigil health-check prober.
//!
//! Defines the check schema (`CheckSpec`), the top-level daemon
//! configuration (`VigilConfig`), and TOML loading. Checks are
//! constructed once at startup and are read-only for the life of the
//! process; each check drives exactly one scheduler loop.

pub mod config;
pub mod error;

pub use config::{CheckSpec, VigilConfig};
pub use error::{ConfigError, ConfigResult};
