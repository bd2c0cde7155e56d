use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::DEFAULT_MIN_WORD_LENGTH;

/// Global configuration for identlint
/// All fields are optional to support partial configurations and merging
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentlintConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<CheckConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<DictionaryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckConfig {
    /// Tokens or whole identifiers exempted from dictionary checking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_word_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_paths: Option<Vec<String>>,
}

/// Configuration with every option resolved to a concrete value
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub debug: bool,
    pub log_level: String,
    pub format: String,
    pub whitelist: Vec<String>,
    pub min_word_length: usize,
    pub ignore: Vec<String>,
    /// Dictionary candidate paths from config, empty when unset
    pub dictionary_paths: Vec<PathBuf>,
}

impl IdentlintConfig {
    /// Load configuration from all levels and merge them
    pub fn load() -> Result<ResolvedConfig> {
        let mut merged = IdentlintConfig::default();
        for path in Self::get_config_paths() {
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {
                    let config = Self::load_from_file(&path)?;
                    merged = Self::merge_configs(merged, config);
                }
                _ => continue,
            }
        }

        merged.apply_env_overrides();
        Ok(merged.resolve_with_defaults())
    }

    /// Configuration file paths in priority order (later wins)
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Global config: ~/.identlint/settings.json
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".identlint").join("settings.json"));
        }

        // 2. Project config: ./.identlint/settings.json
        paths.push(PathBuf::from(".identlint").join("settings.json"));

        // 3. Custom path via environment variable, highest precedence
        if let Ok(custom_path) = env::var("IDENTLINT_CONFIG_PATH") {
            paths.push(PathBuf::from(custom_path));
        }

        paths
    }

    /// Load a single configuration file
    fn load_from_file(path: &Path) -> Result<IdentlintConfig> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {path:?}"))?;
        let config: IdentlintConfig = serde_json::from_str(&contents)
            .context(format!("Failed to parse config file: {path:?}"))?;
        Ok(config)
    }

    /// Deep merge two configurations, with `other` taking precedence
    fn merge_configs(mut base: IdentlintConfig, other: IdentlintConfig) -> IdentlintConfig {
        if let Some(other_defaults) = other.defaults {
            let base_defaults = base.defaults.get_or_insert(DefaultsConfig::default());
            if other_defaults.debug.is_some() {
                base_defaults.debug = other_defaults.debug;
            }
            if other_defaults.log_level.is_some() {
                base_defaults.log_level = other_defaults.log_level;
            }
            if other_defaults.format.is_some() {
                base_defaults.format = other_defaults.format;
            }
        }

        if let Some(other_check) = other.check {
            let base_check = base.check.get_or_insert(CheckConfig::default());
            if other_check.whitelist.is_some() {
                base_check.whitelist = other_check.whitelist;
            }
            if other_check.min_word_length.is_some() {
                base_check.min_word_length = other_check.min_word_length;
            }
            if other_check.ignore.is_some() {
                base_check.ignore = other_check.ignore;
            }
        }

        if let Some(other_dictionary) = other.dictionary {
            let base_dictionary = base.dictionary.get_or_insert(DictionaryConfig::default());
            if other_dictionary.path.is_some() {
                base_dictionary.path = other_dictionary.path;
            }
            if other_dictionary.fallback_paths.is_some() {
                base_dictionary.fallback_paths = other_dictionary.fallback_paths;
            }
        }

        base
    }

    /// Apply environment variable overrides on top of file configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("IDENTLINT_DICTIONARY") {
            self.dictionary
                .get_or_insert(DictionaryConfig::default())
                .path = Some(path);
        }
        if let Ok(value) = env::var("IDENTLINT_MIN_WORD_LENGTH") {
            if let Ok(length) = value.parse::<usize>() {
                self.check
                    .get_or_insert(CheckConfig::default())
                    .min_word_length = Some(length);
            }
        }
        if let Ok(value) = env::var("IDENTLINT_DEBUG") {
            self.defaults.get_or_insert(DefaultsConfig::default()).debug =
                Some(value == "1" || value == "true");
        }
    }

    /// Convert to a resolved config, filling unset options with defaults
    fn resolve_with_defaults(self) -> ResolvedConfig {
        let defaults = self.defaults.unwrap_or_default();
        let check = self.check.unwrap_or_default();
        let dictionary = self.dictionary.unwrap_or_default();

        let mut dictionary_paths = Vec::new();
        if let Some(path) = dictionary.path {
            dictionary_paths.push(PathBuf::from(path));
        }
        for fallback in dictionary.fallback_paths.unwrap_or_default() {
            dictionary_paths.push(PathBuf::from(fallback));
        }

        ResolvedConfig {
            debug: defaults.debug.unwrap_or(false),
            log_level: defaults.log_level.unwrap_or_else(|| "warn".to_string()),
            format: defaults.format.unwrap_or_else(|| "terminal".to_string()),
            whitelist: check.whitelist.unwrap_or_default(),
            min_word_length: check.min_word_length.unwrap_or(DEFAULT_MIN_WORD_LENGTH),
            ignore: check.ignore.unwrap_or_default(),
            dictionary_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> IdentlintConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = IdentlintConfig::default().resolve_with_defaults();
        assert!(!resolved.debug);
        assert_eq!(resolved.log_level, "warn");
        assert_eq!(resolved.format, "terminal");
        assert_eq!(resolved.min_word_length, DEFAULT_MIN_WORD_LENGTH);
        assert!(resolved.whitelist.is_empty());
        assert!(resolved.dictionary_paths.is_empty());
    }

    #[test]
    fn later_config_wins_on_merge() {
        let base = parse(r#"{"check": {"min_word_length": 3, "whitelist": ["foo"]}}"#);
        let other = parse(r#"{"check": {"min_word_length": 5}}"#);

        let merged = IdentlintConfig::merge_configs(base, other);
        let resolved = merged.resolve_with_defaults();
        assert_eq!(resolved.min_word_length, 5);
        // Options absent from the later config survive from the earlier one.
        assert_eq!(resolved.whitelist, vec!["foo"]);
    }

    #[test]
    fn merge_fills_missing_sections() {
        let base = parse(r#"{"defaults": {"debug": true}}"#);
        let other = parse(r#"{"dictionary": {"path": "/opt/words.txt"}}"#);

        let resolved = IdentlintConfig::merge_configs(base, other).resolve_with_defaults();
        assert!(resolved.debug);
        assert_eq!(resolved.dictionary_paths, vec![PathBuf::from("/opt/words.txt")]);
    }

    #[test]
    fn fallback_paths_follow_the_primary() {
        let config = parse(
            r#"{"dictionary": {"path": "/a.txt", "fallback_paths": ["/b.txt", "/c.txt"]}}"#,
        );
        let resolved = config.resolve_with_defaults();
        assert_eq!(
            resolved.dictionary_paths,
            vec![
                PathBuf::from("/a.txt"),
                PathBuf::from("/b.txt"),
                PathBuf::from("/c.txt")
            ]
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        // serde defaults: unknown fields are ignored, not errors.
        let config = parse(r#"{"check": {"whitelist": ["db"], "unknown_option": 1}}"#);
        let resolved = config.resolve_with_defaults();
        assert_eq!(resolved.whitelist, vec!["db"]);
    }
}
