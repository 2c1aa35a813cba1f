//! Error handling for the crig application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ErrorList;

/// Custom error types for crig operations.
///
/// Template defects are collected into a single [`Error::ValidationError`];
/// the remaining variants are operational failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template file does not exist
    #[error("Template file '{}' not found. Run `crig --init` to create a starter template.", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// `--init` would overwrite an existing template
    #[error("Template file '{}' already exists. Use --force to overwrite it.", .path.display())]
    TemplateExists { path: PathBuf },

    /// Represents errors that occur during configuration parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Every fatal defect found in the template
    #[error("Template errors:\n{0}")]
    ValidationError(#[from] ErrorList),

    /// Represents errors that occur while rendering canned file contents
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A single filesystem operation failed
    #[error("Failed to create '{}': {e}.", .target.display())]
    ProcessError { target: PathBuf, e: String },

    /// Some operations failed while the rest of the structure was created
    #[error("Generation incomplete: {failed} operation(s) failed.")]
    GenerationIncomplete { failed: usize },
}

/// Convenience type alias for Results with crig's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
