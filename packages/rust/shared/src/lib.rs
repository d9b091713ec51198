//! Shared types, error model, and file handling for the WOS onboarding tools.
//!
//! This crate is the foundation depended on by all other WOS crates.
//! It provides:
//! - [`WosError`] — the unified error type
//! - Domain types ([`ClientConfig`], [`Operator`], [`Persona`], [`TableSpec`])
//! - Per-prefix config/env file paths and readers/writers

pub mod envfile;
pub mod error;
pub mod paths;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use envfile::parse_env_file;
pub use error::{Result, WosError};
pub use paths::{
    config_path, default_configs_dir, env_path, load_client_config, write_client_config,
    write_env_template,
};
pub use types::{ClientConfig, Operator, Persona, REQUIRED_ENV_KEYS, TableSpec};
