/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Cryptographically secure random token generation.
pub mod random;

/// Discovers template files and derives their command names.
pub mod registry;

/// Placeholder scanning, argument schemas and population.
pub mod template;
