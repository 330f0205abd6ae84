//! Configuration and file management for the domain event console
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file lookup (TOML)
//! - Display configuration (DisplayConfig) load and save

pub mod config_file;
pub mod display_config;
pub mod paths;

pub use config_file::load_config_file;
pub use display_config::DisplayConfig;
pub use paths::{cache_dir, config_dir, display_config_path};
