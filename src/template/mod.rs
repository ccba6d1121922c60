//! Template model and population engine
//!
//! This module contains the core template components:
//! - `scanner`: Extracts and classifies placeholders
//! - `resolver`: Resolves one placeholder occurrence to its replacement
//! - `schema`: Named argument schema and bound values
//! - `processor`: Substitutes every occurrence to produce populated text
//! - `operation`: Describes the write of a populated artifact

pub mod operation;
pub mod processor;
pub mod resolver;
pub mod scanner;
pub mod schema;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::Result;
use crate::ioutils::{populated_path, read_template};
use crate::registry::command_name;

use self::resolver::Resolver;
use self::scanner::{build_resolvers, scan};
use self::schema::ArgumentSchema;

pub use self::processor::populate;
pub use self::schema::Arguments;

/// One template source file, loaded and scanned.
///
/// Content is immutable once loaded. Bound values are not stored here; they
/// are passed to [`Template::populated`] on each run.
#[derive(Debug, Clone)]
pub struct Template {
    command_name: String,
    path: PathBuf,
    content: String,
    occurrences: Vec<String>,
    resolvers: IndexMap<String, Resolver>,
    schema: ArgumentSchema,
}

impl Template {
    /// Builds a template from already loaded content.
    pub fn new(
        command_name: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let content = content.into();
        let occurrences = scan(&content);
        let resolvers = build_resolvers(&occurrences)?;
        let schema = ArgumentSchema::from_resolvers(&resolvers);
        Ok(Self {
            command_name: command_name.into(),
            path: path.into(),
            content,
            occurrences,
            resolvers,
            schema,
        })
    }

    /// Loads the template at `path`, deriving its command name relative to `root`.
    pub fn from_path<R: AsRef<Path>, P: AsRef<Path>>(root: R, path: P) -> Result<Self> {
        let path = path.as_ref();
        let command_name = command_name(root, path)?;
        let content = read_template(path)?;
        Self::new(command_name, path, content)
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Placeholder texts in order of appearance, duplicates included.
    pub fn occurrences(&self) -> &[String] {
        &self.occurrences
    }

    pub fn resolvers(&self) -> &IndexMap<String, Resolver> {
        &self.resolvers
    }

    /// Resolver shared by every occurrence of `placeholder`.
    ///
    /// # Panics
    /// If `placeholder` was not found in the template content.
    pub fn resolver(&self, placeholder: &str) -> &Resolver {
        &self.resolvers[placeholder]
    }

    pub fn schema(&self) -> &ArgumentSchema {
        &self.schema
    }

    /// Where the populated artifact for this template is written.
    pub fn output_path(&self) -> PathBuf {
        populated_path(&self.path)
    }

    /// Populates this template with `arguments`. See [`populate`].
    pub fn populated(&self, arguments: &Arguments) -> Result<String> {
        populate(self, arguments)
    }
}
