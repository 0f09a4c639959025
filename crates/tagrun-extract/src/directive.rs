//! Directive comment grammar.
//!
//! A directive is a single line comment of the form
//! `// <keyword>: key=value key2=value2 flag`. Tokens without `=` are
//! ignored; the first `=` of a token separates key from value.

use std::path::Path;
use tagrun_common_core::{reserved_arguments, Arguments};

/// Line-comment marker that opens a directive.
pub const LINE_MARKER: &str = "//";

/// Return the trimmed directive body if `line` is a directive for `keyword`.
///
/// The keyword must be followed directly by `:`, so `mock` does not match
/// `// mockgen:`.
pub fn directive_body<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    line.strip_prefix(LINE_MARKER)?
        .strip_prefix(' ')?
        .strip_prefix(keyword)?
        .strip_prefix(':')
        .map(str::trim)
}

/// Split a directive body into `(key, value)` pairs in source order.
pub fn parse_pairs(body: &str) -> impl Iterator<Item = (&str, &str)> {
    body.split_whitespace()
        .filter_map(|token| token.split_once('='))
}

/// Build the full argument map for one directive.
///
/// Reserved keys are seeded first; later pairs overwrite earlier ones,
/// reserved keys included.
pub fn build_arguments(declaration: &str, source_path: &Path, body: &str) -> Arguments {
    let mut arguments = reserved_arguments(declaration, source_path);
    for (key, value) in parse_pairs(body) {
        arguments.insert(key.to_string(), value.to_string());
    }
    arguments
}
