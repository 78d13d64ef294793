use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// A `NAME=PATH` category mapping from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryArg {
    pub name: String,
    pub path: PathBuf,
}

impl std::str::FromStr for CategoryArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, path) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=PATH, got: {s}"))?;
        if name.is_empty() || path.is_empty() {
            return Err(format!("Category name and path cannot be empty: {s}"));
        }
        Ok(Self {
            name: name.to_string(),
            path: PathBuf::from(path),
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "codeshape")]
#[command(author, version, about = "Per-category code statistics: lines, LOC, classes, methods")]
#[command(long_about = "Scans a source tree and reports per-category code statistics:\n\
    total lines, lines of code, class and method declaration counts, and\n\
    derived ratios including a code-to-test summary.\n\n\
    Exit codes:\n  \
    0 - Report produced\n  \
    1 - Configuration or runtime error")]
pub struct Cli {
    /// Paths scanned as a single ALL category when no categories are given
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Category mapping NAME=PATH (repeatable; order is display order)
    #[arg(long, short = 'C', value_name = "NAME=PATH")]
    pub category: Vec<CategoryArg>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// File extensions to scan (comma-separated; defaults to the registered languages)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Respect .gitignore files while scanning
    #[arg(long)]
    pub gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
