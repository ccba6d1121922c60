use std::path::PathBuf;

use crate::error::Result;
use crate::ioutils::write_file;

use super::{Arguments, Template};

/// A populated artifact ready to be written next to its template.
#[derive(Debug)]
pub enum TemplateOperation {
    Write { source: PathBuf, target: PathBuf, content: String, target_exists: bool },
}

impl TemplateOperation {
    /// Populates `template` and describes where the result goes.
    ///
    /// Population happens fully in memory; nothing touches the filesystem
    /// until [`TemplateOperation::apply`] is called.
    pub fn populate(template: &Template, arguments: &Arguments) -> Result<Self> {
        let content = template.populated(arguments)?;
        let target = template.output_path();
        let target_exists = target.exists();
        Ok(TemplateOperation::Write {
            source: template.path().to_path_buf(),
            target,
            content,
            target_exists,
        })
    }

    pub fn content(&self) -> &str {
        match self {
            TemplateOperation::Write { content, .. } => content,
        }
    }

    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Writes the artifact to disk.
    pub fn apply(&self) -> Result<()> {
        match self {
            TemplateOperation::Write { target, content, .. } => write_file(content, target),
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Write { source, target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Populating '{}' into '{}' (overwriting existing file)",
                        prefix,
                        source.display(),
                        target.display()
                    )
                } else {
                    format!(
                        "{}Populating '{}' into '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    )
                }
            }
        }
    }
}
