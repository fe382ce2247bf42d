//! Configuration module for the behavior-organizer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, LayoutConfig, OptionsConfig, PathsConfig, RenameConfig};
pub use modes::RunMode;
pub use validation::validate_config;
