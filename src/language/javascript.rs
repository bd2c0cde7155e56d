use super::language_trait::LanguageImpl;
use tree_sitter::{Language as TSLanguage, Node};

/// Implementation of LanguageImpl for JavaScript
pub struct JavaScriptLanguage;

impl Default for JavaScriptLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaScriptLanguage {
    pub fn new() -> Self {
        JavaScriptLanguage
    }
}

impl LanguageImpl for JavaScriptLanguage {
    fn get_tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn is_identifier_node(&self, node: &Node) -> bool {
        matches!(
            node.kind(),
            "identifier"
                | "property_identifier"
                | "shorthand_property_identifier"
                | "shorthand_property_identifier_pattern"
                | "private_property_identifier"
                | "statement_identifier"
        )
    }
}
