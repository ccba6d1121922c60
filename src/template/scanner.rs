use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::constants::{PLACEHOLDER_PATTERN, RANDOM_PLACEHOLDER_PATTERN};
use crate::error::{Error, Result};

use super::resolver::Resolver;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

static RANDOM_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RANDOM_PLACEHOLDER_PATTERN).expect("random placeholder pattern is valid")
});

/// A classified placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Resolved from an externally supplied value under `key`.
    Named { key: String },
    /// Resolved by generating a fresh random token of `length` characters.
    Random { length: i64 },
}

/// Extracts every placeholder occurrence from `content`.
///
/// Duplicates are preserved and the order is the order of appearance.
///
/// # Examples
/// ```
/// use infill::template::scanner::scan;
///
/// let found = scan("<USER>-<GENERATE_RANDOM_8>-<USER>");
/// assert_eq!(found, vec!["<USER>", "<GENERATE_RANDOM_8>", "<USER>"]);
/// ```
pub fn scan(content: &str) -> Vec<String> {
    PLACEHOLDER_RE.find_iter(content).map(|m| m.as_str().to_string()).collect()
}

/// Classifies a placeholder text as random or named.
///
/// # Arguments
/// * `placeholder` - Placeholder text including its angle brackets
///
/// # Returns
/// * `Result<Placeholder>` - The classification, or `Error::InvalidPlaceholder`
///   when the random length does not fit an `i64`
pub fn classify(placeholder: &str) -> Result<Placeholder> {
    if let Some(captures) = RANDOM_PLACEHOLDER_RE.captures(placeholder) {
        let length = captures[1].parse::<i64>().map_err(|_| Error::InvalidPlaceholder {
            placeholder: placeholder.to_string(),
        })?;
        return Ok(Placeholder::Random { length });
    }

    let key = placeholder.trim_start_matches('<').trim_end_matches('>');
    Ok(Placeholder::Named { key: key.to_string() })
}

/// Builds the resolver map keyed by unique placeholder text.
///
/// Keys keep the order of first appearance in `occurrences`.
pub fn build_resolvers(occurrences: &[String]) -> Result<IndexMap<String, Resolver>> {
    let mut resolvers = IndexMap::new();
    for placeholder in occurrences {
        if resolvers.contains_key(placeholder) {
            continue;
        }
        let resolver = match classify(placeholder)? {
            Placeholder::Random { length } => Resolver::RandomGenerate(length),
            Placeholder::Named { key } => Resolver::NamedLookup(key),
        };
        resolvers.insert(placeholder.clone(), resolver);
    }
    debug!(
        "Found {} placeholder occurrences, {} distinct",
        occurrences.len(),
        resolvers.len()
    );
    Ok(resolvers)
}
