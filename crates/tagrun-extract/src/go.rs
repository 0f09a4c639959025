//! Go type-declaration extractor built on tree-sitter.

use crate::directive::{build_arguments, directive_body};
use crate::error::{ExtractError, ExtractResult};
use crate::AnnotationExtractor;
use std::borrow::Cow;
use std::path::Path;
use tagrun_common_core::Annotation;
use tracing::{debug, instrument, trace};
use tree_sitter::{Node, Parser};

const TYPE_DECLARATION: &str = "type_declaration";
const TYPE_SPECS: &[&str] = &["type_spec", "type_alias"];
const COMMENT: &str = "comment";

/// Characters of source quoted in syntax errors.
const SNIPPET_LEN: usize = 32;

/// Extracts directives attached to Go `type` declarations.
///
/// A declaration's doc block is the run of comments ending on the line
/// directly above it with no blank line in between. For grouped
/// declarations (`type ( ... )`) the outer block applies to every type in
/// the group, and a block directly above a single spec applies to that
/// spec only.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeExtractor;

impl GoTypeExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract annotations from source text already in memory.
    ///
    /// `path` is recorded on each annotation and used in error messages.
    pub fn extract_source(
        &self,
        source: &str,
        path: &Path,
        keyword: &str,
    ) -> ExtractResult<Vec<Annotation>> {
        // tree-sitter-go rejects a type declaration that ends the file
        // without a final newline.
        let text: Cow<'_, str> = if source.ends_with('\n') {
            Cow::Borrowed(source)
        } else {
            Cow::Owned(format!("{source}\n"))
        };
        let source: &str = &text;

        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::NoTree {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root, source, path));
        }

        let mut annotations = Vec::new();
        for (node, doc) in documented_children(root) {
            if node.kind() == TYPE_DECLARATION {
                collect_declaration(node, &doc, source, path, keyword, &mut annotations);
            }
        }

        debug!("Found {} annotations", annotations.len());
        Ok(annotations)
    }
}

impl AnnotationExtractor for GoTypeExtractor {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn extract(&self, path: &Path, keyword: &str) -> ExtractResult<Vec<Annotation>> {
        let source = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract_source(&source, path, keyword)
    }
}

/// Emit annotations for every type declared by `decl`.
fn collect_declaration(
    decl: Node<'_>,
    outer_doc: &[Node<'_>],
    source: &str,
    path: &Path,
    keyword: &str,
    out: &mut Vec<Annotation>,
) {
    for (spec, inner_doc) in documented_children(decl) {
        if !TYPE_SPECS.contains(&spec.kind()) {
            continue;
        }
        let Some(name) = spec.child_by_field_name("name") else {
            continue;
        };
        let name = &source[name.byte_range()];

        for comment in outer_doc.iter().chain(inner_doc.iter()) {
            let Some(body) = directive_body(comment_text(*comment, source), keyword) else {
                continue;
            };
            trace!(declaration = name, body, "matched directive");
            out.push(Annotation::new(
                name,
                path,
                build_arguments(name, path, body),
            ));
        }
    }
}

/// Pair each non-comment named child of `parent` with its doc block.
fn documented_children<'t>(parent: Node<'t>) -> Vec<(Node<'t>, Vec<Node<'t>>)> {
    let mut cursor = parent.walk();
    let mut documented = Vec::new();
    let mut block: Vec<Node<'t>> = Vec::new();
    let mut code_row: Option<usize> = None;

    for child in parent.children(&mut cursor) {
        let row = child.start_position().row;

        if child.kind() == COMMENT {
            // Trailing comment on a line of code.
            if code_row == Some(row) {
                block.clear();
                continue;
            }
            if let Some(last) = block.last() {
                if row > last_row(*last) + 1 {
                    block.clear();
                }
            }
            block.push(child);
            continue;
        }

        code_row = Some(last_row(child));
        if !child.is_named() {
            continue;
        }

        let attached = block
            .last()
            .map(|last| last_row(*last) + 1 == row)
            .unwrap_or(false);
        let doc = if attached {
            std::mem::take(&mut block)
        } else {
            block.clear();
            Vec::new()
        };
        documented.push((child, doc));
    }

    documented
}

/// Last line a node occupies, ignoring a trailing newline.
fn last_row(node: Node<'_>) -> usize {
    let end = node.end_position();
    if end.column == 0 && end.row > node.start_position().row {
        end.row - 1
    } else {
        end.row
    }
}

fn comment_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source[node.byte_range()].trim_end_matches('\r')
}

fn syntax_error(root: Node<'_>, source: &str, path: &Path) -> ExtractError {
    let node = error_site(root);
    let start = node.start_position();
    let line = source.lines().nth(start.row).unwrap_or_default().trim();
    ExtractError::Syntax {
        path: path.to_path_buf(),
        line: start.row + 1,
        column: start.column + 1,
        snippet: line.chars().take(SNIPPET_LEN).collect(),
    }
}

/// Node to blame for a parse failure.
///
/// The innermost ERROR or MISSING node wins. An ERROR node that only wraps
/// well-formed tokens is blamed at its last token, where recovery stopped.
fn error_site(root: Node<'_>) -> Node<'_> {
    let node = first_error(root).unwrap_or(root);
    if node.is_missing() || node.child_count() == 0 {
        node
    } else {
        last_leaf(node)
    }
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    let nested = children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error);
    if nested.is_some() {
        return nested;
    }
    (node.is_error() || node.is_missing()).then_some(node)
}

fn last_leaf(mut node: Node<'_>) -> Node<'_> {
    while let Some(child) = node.child(node.child_count().saturating_sub(1)) {
        node = child;
    }
    node
}
