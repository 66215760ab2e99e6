//! Configuration module
//!
//! Layout constants, paging defaults and logging settings, loaded from TOML.

pub mod config;

pub use config::{Config, LoggingConfig, PagingConfig, PositionConfig};
