use super::language_trait::LanguageImpl;
use tree_sitter::{Language as TSLanguage, Node};

/// Implementation of LanguageImpl for TypeScript
pub struct TypeScriptLanguage {
    tsx: bool,
}

impl TypeScriptLanguage {
    pub fn new_typescript() -> Self {
        TypeScriptLanguage { tsx: false }
    }

    pub fn new_tsx() -> Self {
        TypeScriptLanguage { tsx: true }
    }
}

impl LanguageImpl for TypeScriptLanguage {
    fn get_tree_sitter_language(&self) -> TSLanguage {
        if self.tsx {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        }
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
                | "type_identifier" // TypeScript specific
        )
    }
}
