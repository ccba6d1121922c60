use log::debug;

use crate::error::Result;

use super::schema::Arguments;
use super::Template;

/// Resolves every placeholder occurrence of `template` and returns the populated text.
///
/// Occurrences are processed in order of appearance. Each step invokes the
/// resolver for that placeholder text and replaces the left-most remaining
/// match, so repeated random placeholders receive independent tokens while
/// repeated named placeholders receive the same bound value.
///
/// The template's own content is left untouched. Nothing is returned on
/// failure, so an unbound key never yields a partially populated result.
///
/// # Arguments
/// * `template` - The template to populate
/// * `arguments` - Values bound to the template's named placeholders
///
/// # Returns
/// * `Result<String>` - The populated text
pub fn populate(template: &Template, arguments: &Arguments) -> Result<String> {
    let mut content = template.content().to_string();
    for placeholder in template.occurrences() {
        let value = template.resolver(placeholder).resolve(arguments)?;
        content = content.replacen(placeholder.as_str(), &value, 1);
    }
    debug!(
        "Populated {} placeholder occurrences in '{}'",
        template.occurrences().len(),
        template.path().display()
    );
    Ok(content)
}
