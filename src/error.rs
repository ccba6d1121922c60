use std::path::PathBuf;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the template root. Original error: {0}")]
    DiscoveryError(#[from] walkdir::Error),

    #[error("Failed to parse command line. Original error: {0}")]
    CliError(#[from] clap::Error),

    /// Random tokens outside the supported range are refused outright.
    #[error(
        "Refusing to generate a random string of length {length}; \
         lengths must be between {minimum} and {maximum}."
    )]
    InvalidLength { length: i64, minimum: i64, maximum: i64 },

    /// A named placeholder had no bound value at resolution time.
    #[error("No value bound for placeholder '{key}'.")]
    MissingArgument { key: String },

    #[error("Argument '{key}' does not match any placeholder of this template.")]
    UnknownArgument { key: String },

    #[error("Invalid placeholder '{placeholder}'.")]
    InvalidPlaceholder { placeholder: String },

    #[error("Path '{}' contains invalid Unicode characters.", path.display())]
    NonUnicodePath { path: PathBuf },

    #[error(
        "Templates '{}' and '{}' both map to command '{command}'.",
        first.display(),
        second.display()
    )]
    DuplicateCommand { command: String, first: PathBuf, second: PathBuf },

    #[error("Random source failed: {0}.")]
    RandomSourceError(String),
}

/// Convenience type alias for Results with infill's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
