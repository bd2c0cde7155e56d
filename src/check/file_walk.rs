use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

use crate::language::is_supported_extension;

/// Directories and artifacts that never contain identifiers worth checking
static COMMON_IGNORES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "node_modules",
        "vendor",
        "target",
        "dist",
        "build",
        "coverage",
        ".git",
        ".svn",
        ".hg",
        ".idea",
        ".vscode",
        "*.min.js",
        "*.bundle.js",
        "*.d.ts",
        "*.map",
    ]
});

/// Finds every checkable source file under `path`.
///
/// Respects .gitignore files, applies the built-in common-ignore list plus
/// any user-supplied patterns, and keeps only files whose extension maps to
/// a supported language.
pub fn find_source_files(path: &Path, custom_ignores: &[String]) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(path);
    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);

    let mut ignore_patterns: Vec<String> =
        COMMON_IGNORES.iter().map(|s| s.to_string()).collect();
    ignore_patterns.extend(custom_ignores.iter().cloned());

    let mut override_builder = ignore::overrides::OverrideBuilder::new(path);
    for pattern in &ignore_patterns {
        if let Err(err) = override_builder.add(&format!("!**/{pattern}")) {
            tracing::warn!(pattern = %pattern, %err, "skipping bad ignore pattern");
        }
    }
    match override_builder.build() {
        Ok(overrides) => {
            builder.overrides(overrides);
        }
        Err(err) => {
            tracing::warn!(%err, "failed to build ignore overrides");
        }
    }

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "error walking directory");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let file_path = entry.path();
        let supported = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(is_supported_extension);
        if supported {
            files.push(file_path.to_owned());
        }
    }

    files
}
