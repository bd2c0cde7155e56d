use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::check::file_walk::find_source_files;
use crate::classifier::{Classifier, ClassifyPolicy};
use crate::dictionary::WordStore;
use crate::language::{collect_identifiers, get_language_impl};
use crate::models::{CheckResults, CheckSummary, Finding};

/// Options for a single check run
pub struct CheckOptions<'a> {
    /// Files or directories to check
    pub paths: &'a [PathBuf],
    /// Extra ignore patterns on top of .gitignore and the built-in list
    pub custom_ignores: &'a [String],
    /// Classification policy (length threshold, whitelist)
    pub policy: ClassifyPolicy,
    /// Dictionary candidate paths, tried in order
    pub dictionary_paths: &'a [PathBuf],
}

/// Runs a full check: open the store, discover files, extract and classify
/// identifiers in parallel, and assemble sorted findings plus the summary.
///
/// The classifier (and with it the lookup cache) is shared across rayon
/// workers; findings are sorted by file, line and column so output is
/// deterministic regardless of scheduling.
pub fn run_check(options: &CheckOptions) -> Result<CheckResults> {
    let start_time = Instant::now();

    // Store problems are fatal: a missing or empty dictionary would flag
    // every identifier in the tree.
    let store = Arc::new(WordStore::open(options.dictionary_paths)?);
    let classifier = Arc::new(Classifier::new(Arc::clone(&store)));

    let mut files = Vec::new();
    for path in options.paths {
        if path.is_file() {
            files.push(path.clone());
        } else {
            files.extend(find_source_files(path, options.custom_ignores));
        }
    }

    let per_file: Vec<(Vec<Finding>, usize)> = files
        .par_iter()
        .map(|file| check_file(file, &classifier, &options.policy))
        .collect();

    let mut findings = Vec::new();
    let mut identifiers_checked = 0;
    for (file_findings, checked) in per_file {
        findings.extend(file_findings);
        identifiers_checked += checked;
    }
    findings.sort_by(|a, b| {
        (&a.file, a.line, a.column, &a.name).cmp(&(&b.file, b.line, b.column, &b.name))
    });

    let summary = CheckSummary {
        files_scanned: files.len(),
        identifiers_checked,
        findings: findings.len(),
        cached_tokens: classifier.cached_tokens(),
        store_lookups: store.lookup_count(),
        elapsed_ms: start_time.elapsed().as_millis(),
    };

    Ok(CheckResults {
        findings,
        summary,
        dictionary: store.resolved_path().to_owned(),
    })
}

/// Checks one file, returning its findings and how many identifier
/// occurrences were classified. Unreadable or unparseable files are logged
/// and contribute nothing; a broken file never aborts the run.
fn check_file(
    path: &Path,
    classifier: &Classifier,
    policy: &ClassifyPolicy,
) -> (Vec<Finding>, usize) {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return (Vec::new(), 0);
    };
    let Some(language_impl) = get_language_impl(extension) else {
        return (Vec::new(), 0);
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(file = %path.display(), %err, "skipping unreadable file");
            return (Vec::new(), 0);
        }
    };

    let occurrences = match collect_identifiers(&source, language_impl.as_ref()) {
        Ok(occurrences) => occurrences,
        Err(err) => {
            tracing::warn!(file = %path.display(), %err, "skipping unparseable file");
            return (Vec::new(), 0);
        }
    };

    let checked = occurrences.len();
    let findings = occurrences
        .into_iter()
        .filter(|occurrence| !classifier.classify_identifier(&occurrence.name, policy))
        .map(|occurrence| Finding {
            file: path.to_owned(),
            line: occurrence.line,
            column: occurrence.column,
            name: occurrence.name,
        })
        .collect();

    (findings, checked)
}
