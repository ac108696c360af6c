//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// `AOC_IMPORT_PATHS` is not a JSON path list
    #[error("Invalid ${var}: expected a JSON string or (nested) list of strings: {source}")]
    ImportPaths {
        var: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// Run error
    #[error(transparent)]
    Run(#[from] aoc_runner::RunError),
}
