use anyhow::Result;
use colored::*;

use crate::models::{CheckResults, NON_ENGLISH_MESSAGE};

/// Output formats for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Function to format and print check results according to the specified format
pub fn format_and_print_check_results(results: &CheckResults, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Terminal => print_terminal(results),
        OutputFormat::Json => print_json(results)?,
    }
    Ok(())
}

fn print_terminal(results: &CheckResults) {
    if results.findings.is_empty() {
        println!("{}", "No non-English identifiers found.".green().bold());
    } else {
        for finding in &results.findings {
            println!(
                "{}:{}:{}  {}  {}  [{}]",
                finding.file.display().to_string().cyan(),
                finding.line,
                finding.column,
                "warning".yellow().bold(),
                NON_ENGLISH_MESSAGE,
                finding.name.bold()
            );
        }
    }

    let summary = &results.summary;
    println!();
    println!(
        "{} {} files, {} identifiers, {} findings",
        "Checked:".bold().green(),
        summary.files_scanned,
        summary.identifiers_checked,
        summary.findings
    );
    println!(
        "{} {} distinct tokens, {} dictionary lookups",
        "Cache:".bold().green(),
        summary.cached_tokens,
        summary.store_lookups
    );
    println!(
        "{} {}",
        "Dictionary:".bold().green(),
        results.dictionary.display()
    );
    println!("Check completed in {}ms", summary.elapsed_ms);
}

fn print_json(results: &CheckResults) -> Result<()> {
    let findings: Vec<serde_json::Value> = results
        .findings
        .iter()
        .map(|finding| {
            serde_json::json!({
                "file": finding.file,
                "line": finding.line,
                "column": finding.column,
                "name": finding.name,
                "message": NON_ENGLISH_MESSAGE,
            })
        })
        .collect();

    let document = serde_json::json!({
        "findings": findings,
        "summary": results.summary,
        "dictionary": results.dictionary,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
