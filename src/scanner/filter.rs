use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CodeShapeError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps paths whose extension is in the recognized set and which match
/// no exclude pattern. An empty extension list admits every extension.
#[derive(Debug)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a filter from an extension list and glob exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CodeShapeError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| CodeShapeError::InvalidGlob {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns,
        })
    }

    fn has_recognized_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_recognized_extension(path) && !self.exclude_patterns.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
