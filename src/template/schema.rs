use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};

use super::resolver::Resolver;

/// The named placeholder keys a template needs values for.
///
/// Fields are string-typed and ordered by first appearance in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSchema {
    fields: IndexSet<String>,
}

/// Values bound to a template's named placeholders for one population run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: IndexMap<String, String>,
}

impl ArgumentSchema {
    /// Builds a schema from named keys, dropping repeats.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { fields: keys.into_iter().map(Into::into).collect() }
    }

    /// Derives the schema from a resolver map, keeping only named lookups.
    pub fn from_resolvers(resolvers: &IndexMap<String, Resolver>) -> Self {
        Self::new(resolvers.values().filter_map(|resolver| match resolver {
            Resolver::NamedLookup(key) => Some(key.as_str()),
            Resolver::RandomGenerate(_) => None,
        }))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Binds raw key/value pairs into [`Arguments`] for this schema.
    ///
    /// # Returns
    /// * `Result<Arguments>` - Bound values, `Error::UnknownArgument` for a
    ///   key outside the schema, or `Error::MissingArgument` for the first
    ///   field left without a value
    pub fn bind<I, K, V>(&self, values: I) -> Result<Arguments>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut arguments = Arguments::default();
        for (key, value) in values {
            let key = key.into();
            if !self.contains(&key) {
                return Err(Error::UnknownArgument { key });
            }
            arguments.insert(key, value);
        }

        if let Some(missing) = self.fields().find(|field| arguments.get(field).is_none()) {
            return Err(Error::MissingArgument { key: missing.to_string() });
        }
        Ok(arguments)
    }
}

impl Arguments {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Arguments::default();
        for (key, value) in iter {
            arguments.insert(key, value);
        }
        arguments
    }
}
