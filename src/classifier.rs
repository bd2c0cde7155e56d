//! Dictionary membership with a memoizing cache, and whole-identifier
//! classification built on top of it.
//!
//! Analysis runs see the same short words (`user`, `name`, `data`, ...)
//! millions of times, so every store answer is memoized for the lifetime of
//! the classifier. The backing store is immutable, which makes the
//! memoization unconditionally sound: once cached, a value never changes.

use ahash::RandomState;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::dictionary::WordStore;
use crate::segmentation::{has_alphabetic, segment_identifier};

/// Unbounded token -> membership cache.
///
/// Concurrent: one classifier is shared across rayon workers, so the cache
/// must take parallel insertions without corrupting results. Growth is
/// bounded by the number of distinct tokens seen in one run, which is small
/// for real codebases. Injected at construction so independent runs never
/// leak state into each other.
#[derive(Default)]
pub struct LookupCache {
    entries: DashMap<String, bool, RandomState>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized value for `token`, computing and storing it on
    /// first sight. The compute step runs under the shard lock for the
    /// token's entry, so concurrent workers racing on the same token still
    /// produce exactly one store lookup.
    fn get_or_insert_with<F>(&self, token: &str, compute: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if let Some(hit) = self.entries.get(token) {
            return *hit;
        }
        *self.entries.entry(token.to_string()).or_insert_with(compute)
    }

    /// Number of distinct tokens cached so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Policy knobs for whole-identifier classification
#[derive(Debug, Clone)]
pub struct ClassifyPolicy {
    /// Tokens shorter than this many characters are never checked against
    /// the dictionary. Short tokens (`id`, `ok`, `db`) are overwhelmingly
    /// legitimate abbreviations and would drown the output in false
    /// positives.
    pub min_word_length: usize,
    /// Tokens or whole identifiers exempted from checking, lowercased
    pub whitelist: HashSet<String, RandomState>,
}

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

impl Default for ClassifyPolicy {
    fn default() -> Self {
        ClassifyPolicy {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            whitelist: HashSet::default(),
        }
    }
}

impl ClassifyPolicy {
    /// Builds a policy from configured values. Whitelist entries are
    /// lowercased here so later checks are a plain set lookup.
    pub fn new<I, S>(min_word_length: usize, whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ClassifyPolicy {
            min_word_length,
            whitelist: whitelist
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn is_whitelisted(&self, name: &str) -> bool {
        if self.whitelist.is_empty() {
            return false;
        }
        self.whitelist.contains(&name.to_lowercase())
    }
}

/// Decides whether words and identifiers are recognized English.
///
/// Holds the read-only store plus the injected cache; shared across worker
/// threads behind an `Arc`.
pub struct Classifier {
    store: Arc<WordStore>,
    cache: LookupCache,
}

impl Classifier {
    pub fn new(store: Arc<WordStore>) -> Self {
        Classifier {
            store,
            cache: LookupCache::new(),
        }
    }

    /// Constructs a classifier with an explicitly provided cache, for
    /// callers that want to observe or pre-seed it.
    pub fn with_cache(store: Arc<WordStore>, cache: LookupCache) -> Self {
        Classifier { store, cache }
    }

    /// Case-insensitive dictionary membership, memoized.
    ///
    /// The token is not assumed normalized; the store lowercases the query.
    /// Total: empty strings and non-word input return false.
    pub fn is_english_word(&self, token: &str) -> bool {
        self.cache
            .get_or_insert_with(token, || self.store.contains(token))
    }

    /// Classifies a whole identifier: true when every word token at or above
    /// the length threshold is a recognized English word.
    ///
    /// Exemptions, checked in order and before any store access:
    /// - identifiers without a single ASCII letter carry no linguistic
    ///   content and pass vacuously (`_123`, `$$`)
    /// - whitelisted identifiers and tokens pass regardless of the
    ///   dictionary
    /// - tokens below the length threshold are skipped
    ///
    /// Short-circuits on the first failing token; the overall answer is a
    /// conjunction, so ordering only affects speed.
    pub fn classify_identifier(&self, name: &str, policy: &ClassifyPolicy) -> bool {
        if !has_alphabetic(name) {
            return true;
        }
        if policy.is_whitelisted(name) {
            return true;
        }
        for token in segment_identifier(name) {
            if token.chars().count() < policy.min_word_length {
                continue;
            }
            if policy.is_whitelisted(&token) {
                continue;
            }
            if !self.is_english_word(&token) {
                return false;
            }
        }
        true
    }

    /// Number of distinct tokens memoized so far
    pub fn cached_tokens(&self) -> usize {
        self.cache.len()
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(words: &[&str]) -> Classifier {
        Classifier::new(Arc::new(WordStore::from_words(words.iter().copied())))
    }

    #[test]
    fn recognizes_dictionary_words() {
        let c = classifier(&["user", "name"]);
        assert!(c.is_english_word("user"));
        assert!(c.is_english_word("User"));
        assert!(!c.is_english_word("nombre"));
        assert!(!c.is_english_word(""));
    }

    #[test]
    fn memoizes_store_answers() {
        let c = classifier(&["user"]);
        for _ in 0..10 {
            assert!(c.is_english_word("user"));
            assert!(!c.is_english_word("nombre"));
        }
        // One store round-trip per distinct token, everything else is cache.
        assert_eq!(c.store().lookup_count(), 2);
        assert_eq!(c.cached_tokens(), 2);
    }

    #[test]
    fn cache_keys_are_exact_tokens() {
        let c = classifier(&["user"]);
        assert!(c.is_english_word("user"));
        assert!(c.is_english_word("USER"));
        // Different spellings of the same word memoize separately.
        assert_eq!(c.store().lookup_count(), 2);
        assert_eq!(c.cached_tokens(), 2);
        assert!(c.is_english_word("USER"));
        assert_eq!(c.store().lookup_count(), 2);
    }

    #[test]
    fn classification_is_a_conjunction() {
        let c = classifier(&["user", "name", "calculate", "total"]);
        let policy = ClassifyPolicy::default();

        assert!(c.classify_identifier("userName", &policy));
        assert!(c.classify_identifier("calculateTotal", &policy));
        assert!(!c.classify_identifier("nombreUsuario", &policy));
        // One English word is not enough.
        assert!(!c.classify_identifier("nombreUser", &policy));
    }

    #[test]
    fn short_tokens_are_exempt() {
        let c = classifier(&[]);
        let policy = ClassifyPolicy::default();

        // Every token is <= 3 chars, so nothing reaches the empty store.
        assert!(c.classify_identifier("id", &policy));
        assert!(c.classify_identifier("ok", &policy));
        assert!(c.classify_identifier("getDbId", &policy));
        assert_eq!(c.store().lookup_count(), 0);
    }

    #[test]
    fn no_alphabetic_content_is_vacuously_english() {
        let c = classifier(&[]);
        let policy = ClassifyPolicy::default();

        assert!(c.classify_identifier("_123", &policy));
        assert!(c.classify_identifier("$$", &policy));
        assert!(c.classify_identifier("", &policy));
        assert_eq!(c.store().lookup_count(), 0);
    }

    #[test]
    fn threshold_is_configurable() {
        let c = classifier(&["user"]);
        let strict = ClassifyPolicy::new(2, Vec::<String>::new());

        // With a threshold of 2, "db" is checked and fails.
        assert!(!c.classify_identifier("userDb", &strict));
        assert!(c.classify_identifier("userDb", &ClassifyPolicy::default()));
    }

    #[test]
    fn whitelist_overrides_the_dictionary() {
        let c = classifier(&["user"]);
        let policy = ClassifyPolicy::new(DEFAULT_MIN_WORD_LENGTH, ["nombre"]);

        assert!(c.classify_identifier("nombre", &policy));
        assert!(c.classify_identifier("userNombre", &policy));
        assert!(!c.classify_identifier("usuario", &policy));
        // Whitelisted tokens never touch the store: only "user" and
        // "usuario" did.
        assert_eq!(c.store().lookup_count(), 2);
    }

    #[test]
    fn whitelist_matches_whole_identifiers() {
        let c = classifier(&[]);
        let policy = ClassifyPolicy::new(DEFAULT_MIN_WORD_LENGTH, ["nombreUsuario"]);

        assert!(c.classify_identifier("nombreUsuario", &policy));
        assert!(c.classify_identifier("NOMBREUSUARIO", &policy));
        assert_eq!(c.store().lookup_count(), 0);
    }

    #[test]
    fn injected_cache_is_used() {
        let store = Arc::new(WordStore::from_words(["user"]));
        let cache = LookupCache::new();
        let c = Classifier::with_cache(store, cache);

        assert!(c.is_english_word("user"));
        assert_eq!(c.cached_tokens(), 1);
    }
}
