//! Read-only English word-list store.
//!
//! The store is loaded once at startup from a plain-text word list (one word
//! per line) and held memory-resident for the lifetime of the process.
//! Lookups are case-insensitive exact matches; there is no stemming or fuzzy
//! matching anywhere in this tool.

use ahash::RandomState;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Default dictionary file name, shipped next to the binary
pub const DEFAULT_DICTIONARY_FILE: &str = "scowl.txt";

/// Errors raised while opening the word-list store.
///
/// Store problems are fatal at startup: running with an empty store would
/// classify every identifier as non-English, so initialization must fail
/// loudly instead of degrading.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no usable dictionary found, tried: {}", format_paths(.tried))]
    NoUsablePath { tried: Vec<PathBuf> },

    #[error("dictionary {path} contains no words")]
    EmptyStore { path: PathBuf },

    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Immutable set of recognized English words.
///
/// Safe for concurrent reads from multiple worker threads; the lookup
/// counter is a relaxed atomic and exists for the run summary and for
/// verifying cache behavior in tests.
pub struct WordStore {
    words: HashSet<String, RandomState>,
    path: PathBuf,
    lookups: AtomicU64,
}

impl WordStore {
    /// Opens the first usable word list from an ordered candidate list.
    ///
    /// Candidates are tried in sequence; a path that is missing or
    /// unreadable moves on to the next one, while a readable but empty list
    /// is an immediate error (it means the file is there but corrupt or
    /// truncated). When every candidate fails, the error carries the full
    /// list of attempted paths.
    pub fn open(candidates: &[PathBuf]) -> Result<Self, StoreError> {
        let debug_mode = std::env::var("DEBUG").unwrap_or_default() == "1";

        for path in candidates {
            match fs::read_to_string(path) {
                Ok(contents) => {
                    let words = parse_word_list(&contents);
                    if words.is_empty() {
                        return Err(StoreError::EmptyStore { path: path.clone() });
                    }
                    if debug_mode {
                        println!(
                            "DEBUG: Loaded {} words from {}",
                            words.len(),
                            path.display()
                        );
                    }
                    tracing::debug!(
                        path = %path.display(),
                        words = words.len(),
                        "dictionary loaded"
                    );
                    return Ok(WordStore {
                        words,
                        path: path.clone(),
                        lookups: AtomicU64::new(0),
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "dictionary candidate missing");
                    continue;
                }
                Err(source) => {
                    return Err(StoreError::Io {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        Err(StoreError::NoUsablePath {
            tried: candidates.to_vec(),
        })
    }

    /// Builds a store directly from an iterator of words.
    ///
    /// Used by tests and benchmarks that do not want a file on disk.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        WordStore {
            words,
            path: PathBuf::from("<memory>"),
            lookups: AtomicU64::new(0),
        }
    }

    /// Case-insensitive exact-match membership test.
    ///
    /// Total: the empty string and non-word input simply return false.
    pub fn contains(&self, word: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if word.bytes().all(|b| !b.is_ascii_uppercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    /// The path the store actually loaded from
    pub fn resolved_path(&self) -> &Path {
        &self.path
    }

    /// Number of words in the store
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of store lookups performed so far
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for WordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordStore")
            .field("path", &self.path)
            .field("words", &self.words.len())
            .field("lookups", &self.lookup_count())
            .finish()
    }
}

/// Parses a plain-text word list: one word per line, `#` comment lines and
/// blank lines ignored, everything lowercased.
fn parse_word_list(contents: &str) -> HashSet<String, RandomState> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Default candidate paths for the dictionary, in priority order: next to
/// the executable first, then the current working directory.
pub fn default_dictionary_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(DEFAULT_DICTIONARY_FILE));
        }
    }
    paths.push(PathBuf::from(DEFAULT_DICTIONARY_FILE));
    paths
}
