use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of `.codeshape.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Categories to report, in display order.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryConfig>,

    /// Closed enumeration of category names whose LOC counts as test code
    /// in the summary line. Unmatched categories are treated as code.
    #[serde(default = "default_test_categories")]
    pub test_categories: Vec<String>,

    #[serde(default)]
    pub exclude: ExcludeConfig,

    /// Custom languages keyed by display name. Ordered so registration is
    /// deterministic.
    #[serde(default)]
    pub languages: IndexMap<String, LanguageConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            test_categories: default_test_categories(),
            exclude: ExcludeConfig::default(),
            languages: IndexMap::new(),
        }
    }
}

fn default_test_categories() -> Vec<String> {
    [
        "Controller tests",
        "Helper tests",
        "Model tests",
        "Mailer tests",
        "Integration tests",
        "Functional tests (old)",
        "Unit tests (old)",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// One `[[category]]` entry: a display name and the roots it covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,

    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// A `[languages.<name>]` entry. Rule fields hold regex source strings;
/// omitted rules mean the construct is not detected for that language.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    pub line_comment: Option<String>,
    pub block_comment_start: Option<String>,
    pub block_comment_end: Option<String>,
    pub class_decl: Option<String>,
    pub method_decl: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
