use anyhow::Result;
use clap::Parser as ClapParser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

mod cli;

use cli::{Args, Commands};
use identlint::check::{format_and_print_check_results, run_check, CheckOptions, OutputFormat};
use identlint::classifier::{Classifier, ClassifyPolicy};
use identlint::config::{IdentlintConfig, ResolvedConfig};
use identlint::dictionary::{default_dictionary_paths, WordStore};
use identlint::segmentation::segment_identifier;

struct CheckParams {
    paths: Vec<PathBuf>,
    ignore: Vec<String>,
    whitelist: Vec<String>,
    min_word_length: Option<usize>,
    dictionary: Option<PathBuf>,
    format: Option<String>,
}

/// Candidate dictionary paths: CLI flag first, then configured paths, then
/// the default locations (next to the binary, then the working directory)
fn dictionary_candidates(cli_path: Option<PathBuf>, config: &ResolvedConfig) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = cli_path {
        candidates.push(path);
    }
    candidates.extend(config.dictionary_paths.iter().cloned());
    candidates.extend(default_dictionary_paths());
    candidates
}

fn handle_check(params: CheckParams, config: &ResolvedConfig) -> Result<i32> {
    // CLI flags layer on top of file configuration.
    let mut whitelist = config.whitelist.clone();
    whitelist.extend(params.whitelist);

    let mut custom_ignores = config.ignore.clone();
    custom_ignores.extend(params.ignore);

    let min_word_length = params.min_word_length.unwrap_or(config.min_word_length);
    let format: OutputFormat = params
        .format
        .as_deref()
        .unwrap_or(config.format.as_str())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let dictionary_paths = dictionary_candidates(params.dictionary, config);
    let policy = ClassifyPolicy::new(min_word_length, whitelist);

    let options = CheckOptions {
        paths: &params.paths,
        custom_ignores: &custom_ignores,
        policy,
        dictionary_paths: &dictionary_paths,
    };

    let results = run_check(&options)?;
    format_and_print_check_results(&results, format)?;

    Ok(if results.findings.is_empty() { 0 } else { 1 })
}

fn handle_words(
    words: Vec<String>,
    dictionary: Option<PathBuf>,
    config: &ResolvedConfig,
) -> Result<i32> {
    let candidates = dictionary_candidates(dictionary, config);
    let store = Arc::new(WordStore::open(&candidates)?);
    println!(
        "{} {}",
        "Dictionary:".bold().green(),
        store.resolved_path().display()
    );

    let classifier = Classifier::new(store);
    for word in &words {
        if classifier.is_english_word(word) {
            println!("{word}: {}", "english".green());
        } else {
            println!("{word}: {}", "not english".red());
        }
    }
    Ok(0)
}

fn handle_split(identifiers: Vec<String>) -> i32 {
    for identifier in &identifiers {
        let tokens = segment_identifier(identifier);
        println!("{identifier}: {}", tokens.join(" "));
    }
    0
}

fn run(args: Args) -> Result<i32> {
    let config = IdentlintConfig::load()?;

    let log_level = if args.debug || config.debug {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::WARN)
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match args.command {
        // When no subcommand is provided, default to checking the current
        // directory with configured options.
        None => handle_check(
            CheckParams {
                paths: vec![PathBuf::from(".")],
                ignore: Vec::new(),
                whitelist: Vec::new(),
                min_word_length: None,
                dictionary: None,
                format: None,
            },
            &config,
        ),
        Some(Commands::Check {
            paths,
            ignore,
            whitelist,
            min_word_length,
            dictionary,
            format,
        }) => handle_check(
            CheckParams {
                paths,
                ignore,
                whitelist,
                min_word_length,
                dictionary,
                format,
            },
            &config,
        ),
        Some(Commands::Words { words, dictionary }) => handle_words(words, dictionary, &config),
        Some(Commands::Split { identifiers }) => Ok(handle_split(identifiers)),
    }
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            std::process::exit(2);
        }
    }
}
