use anyhow::{anyhow, Context, Result};
use tree_sitter::Parser as TSParser;

use crate::language::language_trait::LanguageImpl;

/// One identifier occurrence in a parsed file, with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierOccurrence {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

/// Parses a source buffer and collects every candidate identifier occurrence.
///
/// Walks the full tree with a cursor; for each identifier-kind node the
/// language impl recognizes, records name and position unless the node is the
/// accessed (non-computed) property side of a member expression. Every
/// occurrence is collected, so a name repeated in the file shows up once per
/// node.
pub fn collect_identifiers(
    source: &str,
    language_impl: &dyn LanguageImpl,
) -> Result<Vec<IdentifierOccurrence>> {
    let mut parser = TSParser::new();
    parser
        .set_language(&language_impl.get_tree_sitter_language())
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Failed to parse source"))?;

    let bytes = source.as_bytes();
    let mut occurrences = Vec::new();
    let mut cursor = tree.walk();

    // Depth-first walk over every node. Identifier nodes are leaves, so the
    // visit order matches source order.
    'walk: loop {
        let node = cursor.node();
        if language_impl.is_identifier_node(&node)
            && !language_impl.is_accessed_member_property(&node)
        {
            if let Ok(name) = node.utf8_text(bytes) {
                let position = node.start_position();
                occurrences.push(IdentifierOccurrence {
                    name: name.to_string(),
                    line: position.row + 1,
                    column: position.column + 1,
                });
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    Ok(occurrences)
}
