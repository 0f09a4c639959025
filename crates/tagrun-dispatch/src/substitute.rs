//! Placeholder substitution.
//!
//! Every argument key `k` defines the placeholder `@k`. All placeholders
//! are replaced together in a single scan of the template, so a value that
//! happens to contain another placeholder is never expanded again.
//! Where placeholders overlap as prefixes (`@type`, `@typeName`) the
//! longest one wins.

use crate::error::DispatchResult;
use regex::{Captures, Regex};
use tagrun_common_core::Arguments;

/// Marker that turns an argument key into a placeholder.
pub const PLACEHOLDER_PREFIX: char = '@';

/// Resolve every `@key` placeholder in `template`.
///
/// Text that does not match a registered placeholder is left verbatim.
pub fn substitute(template: &str, arguments: &Arguments) -> DispatchResult<String> {
    if arguments.is_empty() {
        return Ok(template.to_string());
    }

    let pattern = placeholder_pattern(arguments)?;
    let resolved = pattern.replace_all(template, |caps: &Captures<'_>| {
        let key = &caps[0][PLACEHOLDER_PREFIX.len_utf8()..];
        arguments.get(key).cloned().unwrap_or_default()
    });
    Ok(resolved.into_owned())
}

/// Build one alternation over all placeholders.
///
/// Keys arrive in lexicographic order; the stable length sort keeps that
/// order among equal lengths. Regex alternation is leftmost-first, so
/// listing longer placeholders first yields leftmost-longest matching.
fn placeholder_pattern(arguments: &Arguments) -> Result<Regex, regex::Error> {
    let mut keys: Vec<&str> = arguments.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = keys
        .iter()
        .map(|key| regex::escape(&format!("{PLACEHOLDER_PREFIX}{key}")))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation)
}
