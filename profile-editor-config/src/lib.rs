//! Configuration system for profile-editor.
//!
//! This crate provides configuration loading, saving, and default values
//! for the profile editor. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - `ProfileFields`, the editable profile data and its starting values
//! - `LogLevel` for the debug log
//! - Typed `ConfigError` variants

pub mod config;
pub mod defaults;
pub mod error;
pub mod profile_types;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use profile_types::{ProfileField, ProfileFields};
pub use types::LogLevel;
