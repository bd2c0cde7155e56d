use crate::language::javascript::JavaScriptLanguage;
use crate::language::language_trait::LanguageImpl;
use crate::language::typescript::TypeScriptLanguage;

/// Factory function to get the appropriate language implementation based on file extension
pub fn get_language_impl(extension: &str) -> Option<Box<dyn LanguageImpl>> {
    match extension {
        "js" | "jsx" | "mjs" | "cjs" => Some(Box::new(JavaScriptLanguage::new())),
        "ts" | "mts" | "cts" => Some(Box::new(TypeScriptLanguage::new_typescript())),
        "tsx" => Some(Box::new(TypeScriptLanguage::new_tsx())),
        _ => None,
    }
}

/// Check if an extension maps to a supported language
pub fn is_supported_extension(extension: &str) -> bool {
    matches!(
        extension,
        "js" | "jsx" | "mjs" | "cjs" | "ts" | "mts" | "cts" | "tsx"
    )
}
