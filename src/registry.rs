//! Discovery of `.TEMPLATE` files and their command names.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{info, trace};
use walkdir::WalkDir;

use crate::constants::{COMMAND_SEPARATOR, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::template::Template;

/// Checks if the provided path names a template source file.
///
/// The file name must end with `.TEMPLATE` and have something before it.
pub fn is_template_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.file_name().and_then(|n| n.to_str()).is_some_and(|file_name| {
        file_name.len() > TEMPLATE_SUFFIX.len() && file_name.ends_with(TEMPLATE_SUFFIX)
    }) && path.is_file()
}

fn file_name_str(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::NonUnicodePath { path: path.to_path_buf() })
}

fn to_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

/// Derives the command name for the template at `path` under `root`.
///
/// Separators such as dots become underscores. Templates outside the root
/// directory itself are prefixed with their parent directory name and `__`.
///
/// # Examples
/// ```
/// use infill::registry::command_name;
///
/// assert_eq!(command_name("/srv", "/srv/b.TEMPLATE").unwrap(), "b_TEMPLATE");
/// assert_eq!(command_name("/srv", "/srv/a/b.TEMPLATE").unwrap(), "a__b_TEMPLATE");
/// ```
pub fn command_name<R: AsRef<Path>, P: AsRef<Path>>(root: R, path: P) -> Result<String> {
    let path = path.as_ref();
    let name = to_identifier(file_name_str(path)?);

    match path.parent() {
        Some(parent) if parent != root.as_ref() => {
            let parent_name = to_identifier(file_name_str(parent)?);
            Ok(format!("{parent_name}{COMMAND_SEPARATOR}{name}"))
        }
        _ => Ok(name),
    }
}

/// Recursively collects every template file under `root`, sorted by path.
///
/// Filesystem errors are returned as `Error::DiscoveryError`; unreadable
/// subtrees are never skipped.
pub fn find_template_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut templates = Vec::new();
    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if is_template_file(path) {
            templates.push(path.to_path_buf());
        } else {
            trace!("Skipping '{}'", path.display());
        }
    }
    Ok(templates)
}

/// Discovers and loads every template under `root`.
///
/// # Returns
/// * `Result<Vec<Template>>` - Loaded templates, or `Error::DuplicateCommand`
///   when two templates derive the same command name
pub fn discover<P: AsRef<Path>>(root: P) -> Result<Vec<Template>> {
    let root = root.as_ref();
    let mut seen: IndexMap<String, PathBuf> = IndexMap::new();
    let mut templates = Vec::new();

    for path in find_template_files(root)? {
        let template = Template::from_path(root, &path)?;
        if let Some(first) = seen.get(template.command_name()) {
            return Err(Error::DuplicateCommand {
                command: template.command_name().to_string(),
                first: first.clone(),
                second: path,
            });
        }
        info!("Found template '{}' as '{}'", path.display(), template.command_name());
        seen.insert(template.command_name().to_string(), path);
        templates.push(template);
    }
    Ok(templates)
}
