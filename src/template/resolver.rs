use crate::error::{Error, Result};
use crate::random;

use super::schema::Arguments;

/// Turns one placeholder occurrence into its replacement text.
///
/// A template holds one resolver per distinct placeholder text and invokes it
/// once per occurrence. Named lookups return the same value every time;
/// random generation returns a fresh token every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    NamedLookup(String),
    RandomGenerate(i64),
}

impl Resolver {
    /// Resolves against the bound `arguments`.
    ///
    /// # Returns
    /// * `Result<String>` - The replacement, `Error::MissingArgument` when a
    ///   named key is unbound, or `Error::InvalidLength` for short random tokens
    pub fn resolve(&self, arguments: &Arguments) -> Result<String> {
        match self {
            Resolver::NamedLookup(key) => arguments
                .get(key)
                .map(str::to_string)
                .ok_or_else(|| Error::MissingArgument { key: key.clone() }),
            Resolver::RandomGenerate(length) => random::generate(*length),
        }
    }
}
