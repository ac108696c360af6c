//! Error types for the runner library

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a solution's part callable
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solution failed while computing its answer
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The part declares a `logger` parameter but was invoked without one
    #[error("Part {0} requires a logger but none was provided")]
    MissingLogger(u8),
    /// Reading the input handle failed
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

impl SolveError {
    /// Wrap any error produced inside a solution
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::Failed(error.into())
    }
}

/// Error type for resolving a solution or one of its parts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No solution class registered for the identifier
    #[error("No solution class '{class}' registered for year {year} problem {problem}")]
    SolutionNotFound {
        year: u16,
        problem: u32,
        class: String,
    },
    /// The solution class exists but has no `part_<n>` callable
    #[error("Solution '{module}' has no callable part_{part}")]
    PartNotFound { module: String, part: u8 },
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Attempted to register a class for a year-problem combination that already has it
    #[error("Duplicate solution registration for year {year} problem {problem} class '{class}'")]
    Duplicate {
        year: u16,
        problem: u32,
        class: String,
    },
}

/// Error type for a single run
#[derive(Debug, Error)]
pub enum RunError {
    /// The problem directory does not exist
    #[error("Problem directory not found: {}", path.display())]
    ProblemNotFound { path: PathBuf },

    /// A declared dependency directory does not exist
    #[error("Dependency path not found: {}", path.display())]
    DependencyNotFound { path: PathBuf },

    /// Solution or part lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The input file could not be opened
    #[error("Failed to open input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The working directory could not be changed
    #[error("Failed to change working directory to {}: {source}", path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The solution itself returned an error
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for clipboard access
#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
