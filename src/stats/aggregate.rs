use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::counter::StatsCounter;
use crate::error::{CodeShapeError, Result};
use crate::language::LanguageRegistry;

use super::CodeTally;

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// One caller-supplied category: a display name plus the files to scan.
/// Names are assumed unique by the caller; order is display order.
#[derive(Debug, Clone)]
pub struct CategoryScan {
    pub name: String,
    pub paths: Vec<PathBuf>,
}

/// One category's aggregated row.
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub name: String,
    pub tally: CodeTally,
    /// Set when the category name is in the test-category enumeration;
    /// drives the code-vs-test split in the summary line.
    pub is_test: bool,
}

/// Aggregated result of a whole run.
#[derive(Debug, Clone, Default)]
pub struct StatsReport {
    pub categories: Vec<CategoryStats>,
    /// Present iff more than one category was supplied.
    pub total: Option<CodeTally>,
    /// Files that could not be read. Skipped with a warning, never fatal.
    pub skipped: Vec<PathBuf>,
}

impl StatsReport {
    /// Code LOC summed over categories not flagged as tests.
    #[must_use]
    pub fn code_loc(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| !c.is_test)
            .map(|c| c.tally.code_lines)
            .sum()
    }

    /// Code LOC summed over test categories.
    #[must_use]
    pub fn test_loc(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| c.is_test)
            .map(|c| c.tally.code_lines)
            .sum()
    }

    /// Test-to-code LOC ratio; `0.0` when there is no code LOC.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn test_ratio(&self) -> f64 {
        let code = self.code_loc();
        if code == 0 {
            return 0.0;
        }
        self.test_loc() as f64 / code as f64
    }
}

/// Rolls per-file tallies into named categories and a grand total.
///
/// Scanning is sequential and deterministic: one file is fully read and
/// classified before the next begins. Per-file read failures are contained
/// here and reported via [`StatsReport::skipped`].
pub struct Aggregator<'a> {
    registry: &'a LanguageRegistry,
    test_categories: &'a [String],
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry, test_categories: &'a [String]) -> Self {
        Self {
            registry,
            test_categories,
        }
    }

    #[must_use]
    pub fn aggregate(&self, categories: &[CategoryScan]) -> StatsReport {
        let mut report = StatsReport::default();

        for category in categories {
            let mut tally = CodeTally::new();

            for path in &category.paths {
                // Paths outside the recognized-extension set are silently
                // excluded, not errors.
                if !self.has_recognized_extension(path) {
                    continue;
                }
                match self.scan_file(path) {
                    Ok(file_tally) => tally.merge(&file_tally),
                    Err(_) => report.skipped.push(path.clone()),
                }
            }

            report.categories.push(CategoryStats {
                is_test: self.test_categories.iter().any(|t| t == &category.name),
                name: category.name.clone(),
                tally,
            });
        }

        if report.categories.len() > 1 {
            let mut total = CodeTally::new();
            for category in &report.categories {
                total.merge(&category.tally);
            }
            report.total = Some(total);
        }

        report
    }

    fn has_recognized_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.registry.is_recognized(e))
    }

    fn scan_file(&self, path: &Path) -> Result<CodeTally> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let counter = StatsCounter::new(self.registry.rules_for(ext));

        let read_error = |source| CodeShapeError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(read_error)?;
        if metadata.len() >= LARGE_FILE_THRESHOLD {
            let file = File::open(path).map_err(read_error)?;
            counter.count_reader(BufReader::new(file)).map_err(read_error)
        } else {
            let content = fs::read_to_string(path).map_err(read_error)?;
            Ok(counter.count(&content))
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
