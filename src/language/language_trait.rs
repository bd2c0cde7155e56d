use tree_sitter::{Language as TSLanguage, Node};

/// Trait that defines the interface for all language implementations.
pub trait LanguageImpl {
    /// Get the tree-sitter language for parsing
    fn get_tree_sitter_language(&self) -> TSLanguage;

    /// Check if a node names something in this grammar (a binding, a
    /// declared property, a label, a type name, ...)
    fn is_identifier_node(&self, node: &Node) -> bool;

    /// Check if a node is the non-computed property side of a member-access
    /// expression. In `user.nombre`, the `nombre` node is an accessed field,
    /// not a declared binding. Such names are excluded from checking: the code
    /// being analyzed does not control how external objects spell their
    /// fields. Computed access (`user[expr]`) parses as a different node
    /// kind and never reaches this test.
    fn is_accessed_member_property(&self, node: &Node) -> bool {
        node.kind() == "property_identifier"
            && node
                .parent()
                .is_some_and(|parent| parent.kind() == "member_expression")
    }
}
