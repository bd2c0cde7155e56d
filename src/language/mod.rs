// Language module - provides functionality for parsing supported languages
// using tree-sitter and extracting identifier occurrences.

// Import submodules
pub mod extract;
pub mod factory;
pub mod language_trait;

// Language implementations
pub mod javascript;
pub mod typescript;

// Re-export the items callers need
pub use extract::{collect_identifiers, IdentifierOccurrence};
pub use factory::{get_language_impl, is_supported_extension};
pub use language_trait::LanguageImpl;
