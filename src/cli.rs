//! Command-line interface for profile-editor.
//!
//! This module handles CLI argument parsing and the `default-config` subcommand.

use clap::{Parser, Subcommand};
use profile_editor_config::{Config, LogLevel};
use std::path::PathBuf;

/// profile-editor - edit a profile and preview photos live
#[derive(Parser, Debug)]
#[command(name = "profile-editor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Preload this image as the main photo
    #[arg(long, value_name = "PATH")]
    pub main_photo: Option<PathBuf>,

    /// Preload these images into the gallery, in order
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub gallery: Vec<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the default configuration as YAML and exit
    DefaultConfig,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Explicit config file path
    pub config_path: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Main photo to load on startup
    pub main_photo: Option<PathBuf>,
    /// Gallery photos to load on startup
    pub gallery: Vec<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| {
        format!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)")
    })
}

impl Cli {
    /// Handle a subcommand or turn the flags into runtime options
    pub fn into_result(self) -> CliResult {
        match self.command {
            Some(Commands::DefaultConfig) => match Config::default().to_yaml() {
                Ok(yaml) => {
                    print!("{yaml}");
                    CliResult::Exit(0)
                }
                Err(e) => {
                    eprintln!("profile-editor: error: {e}");
                    CliResult::Exit(1)
                }
            },
            None => CliResult::Continue(RuntimeOptions {
                config_path: self.config,
                log_level: self.log_level,
                main_photo: self.main_photo,
                gallery: self.gallery,
            }),
        }
    }
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    Cli::parse().into_result()
}
