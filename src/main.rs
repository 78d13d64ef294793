use std::fs;
use std::path::PathBuf;

use clap::Parser;

use codeshape::cli::Cli;
use codeshape::config::{Config, ConfigLoader, FileConfigLoader};
use codeshape::language::LanguageRegistry;
use codeshape::output::{JsonFormatter, OutputFormat, ReportFormatter, TableFormatter};
use codeshape::scanner::{DirectoryScanner, ExtensionFilter};
use codeshape::stats::{Aggregator, CategoryScan, StatsReport};
use codeshape::{EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> codeshape::Result<()> {
    // 1. Load configuration
    let config = load_config(cli)?;

    // 2. Build the language registry (builtins + custom languages)
    let registry = LanguageRegistry::from_config(&config.languages)?;

    // 3. Create the enumeration filter
    let extensions = cli
        .ext
        .clone()
        .unwrap_or_else(|| registry.recognized_extensions());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(cli.exclude.clone());
    let filter = ExtensionFilter::new(extensions, &exclude_patterns)?;
    let scanner = DirectoryScanner::with_gitignore(filter, cli.gitignore);

    // 4. Enumerate files per category, in display order
    let categories: Vec<CategoryScan> = resolve_categories(cli, &config)
        .into_iter()
        .map(|(name, roots)| CategoryScan {
            paths: roots.iter().flat_map(|root| scanner.scan(root)).collect(),
            name,
        })
        .collect();

    // 5. Aggregate and format
    let aggregator = Aggregator::new(&registry, &config.test_categories);
    let report = aggregator.aggregate(&categories);

    let output = match cli.format {
        OutputFormat::Text => TableFormatter.format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };

    // 6. Write output and surface skipped files
    write_output(cli, &output)?;
    warn_skipped(&report, cli.quiet);

    Ok(())
}

fn load_config(cli: &Cli) -> codeshape::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Display-ordered category roots. CLI categories take precedence over
/// config categories; with neither, the run mirrors the classic default of
/// one `ALL` category over the given paths.
fn resolve_categories(cli: &Cli, config: &Config) -> Vec<(String, Vec<PathBuf>)> {
    if !cli.category.is_empty() {
        return cli
            .category
            .iter()
            .map(|c| (c.name.clone(), vec![c.path.clone()]))
            .collect();
    }

    if !config.categories.is_empty() {
        return config
            .categories
            .iter()
            .map(|c| (c.name.clone(), c.paths.iter().map(PathBuf::from).collect()))
            .collect();
    }

    vec![("ALL".to_string(), cli.paths.clone())]
}

fn write_output(cli: &Cli, content: &str) -> codeshape::Result<()> {
    if let Some(path) = &cli.output {
        fs::write(path, content)?;
    } else if !cli.quiet {
        print!("{content}");
    }
    Ok(())
}

fn warn_skipped(report: &StatsReport, quiet: bool) {
    if quiet || report.skipped.is_empty() {
        return;
    }

    eprintln!("Warning: skipped {} unreadable file(s):", report.skipped.len());
    for path in &report.skipped {
        eprintln!("  {}", path.display());
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
