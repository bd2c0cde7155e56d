use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files or directories for non-English identifiers
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Custom patterns to ignore (in addition to .gitignore and common patterns)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Tokens or whole identifiers to exempt from checking
        #[arg(short, long)]
        whitelist: Vec<String>,

        /// Minimum token length checked against the dictionary
        #[arg(long = "min-word-length")]
        min_word_length: Option<usize>,

        /// Path to the dictionary word list (tried before the default locations)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Output format for findings
        #[arg(short, long, value_parser = ["terminal", "json"])]
        format: Option<String>,
    },

    /// Look up word tokens directly against the dictionary
    Words {
        /// Words to classify
        #[arg(required = true)]
        words: Vec<String>,

        /// Path to the dictionary word list (tried before the default locations)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },

    /// Show how identifiers segment into word tokens
    Split {
        /// Identifiers to segment
        #[arg(required = true)]
        identifiers: Vec<String>,
    },
}

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
