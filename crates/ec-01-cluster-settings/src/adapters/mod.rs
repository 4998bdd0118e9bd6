//! # Adapters
//!
//! Concrete implementations of the `ConfigProvider` port.

pub mod config;

pub use config::{ConfigError, StaticConfigProvider};

#[cfg(feature = "toml-config")]
pub use config::TomlConfigProvider;
