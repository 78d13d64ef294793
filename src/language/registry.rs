use std::collections::HashMap;

use indexmap::IndexMap;
use regex::Regex;

use crate::config::LanguageConfig;
use crate::error::{CodeShapeError, Result};

/// Per-language line-classification rules.
///
/// Every rule is optional: a missing rule means the language has no such
/// construct (or it is not detected), and classification silently skips
/// that check rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct SyntaxRules {
    /// Matches a line that is entirely a single-line comment.
    pub line_comment: Option<Regex>,
    /// Matches a line that opens a multi-line comment.
    pub block_comment_start: Option<Regex>,
    /// Matches a line that closes a multi-line comment.
    pub block_comment_end: Option<Regex>,
    /// Matches a class declaration.
    pub class_decl: Option<Regex>,
    /// Matches a method or function declaration.
    pub method_decl: Option<Regex>,
}

/// Empty rule set handed out for unregistered extensions: every line of
/// such a file counts as code and no declarations are detected.
static EMPTY_RULES: SyntaxRules = SyntaxRules {
    line_comment: None,
    block_comment_start: None,
    block_comment_end: None,
    class_decl: None,
    method_decl: None,
};

impl SyntaxRules {
    /// Compile a rule set from the optional pattern strings of a language
    /// definition.
    ///
    /// # Errors
    /// Returns an error naming the offending rule if a pattern fails to
    /// compile.
    pub fn compile(config: &LanguageConfig) -> Result<Self> {
        Ok(Self {
            line_comment: compile_rule("line_comment", config.line_comment.as_deref())?,
            block_comment_start: compile_rule(
                "block_comment_start",
                config.block_comment_start.as_deref(),
            )?,
            block_comment_end: compile_rule(
                "block_comment_end",
                config.block_comment_end.as_deref(),
            )?,
            class_decl: compile_rule("class_decl", config.class_decl.as_deref())?,
            method_decl: compile_rule("method_decl", config.method_decl.as_deref())?,
        })
    }
}

fn compile_rule(rule: &'static str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| CodeShapeError::InvalidPattern {
                rule,
                pattern: p.to_string(),
                source: e,
            })
        })
        .transpose()
}

#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub rules: SyntaxRules,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, rules: SyntaxRules) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            rules,
        }
    }
}

/// Immutable, process-wide table of languages, looked up by normalized
/// file extension.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Normalized extension key: lower-cased, no leading dot.
    #[must_use]
    pub fn normalize_extension(ext: &str) -> String {
        ext.trim_start_matches('.').to_lowercase()
    }

    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map
                .insert(Self::normalize_extension(ext), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&Self::normalize_extension(ext))
            .map(|&idx| &self.languages[idx])
    }

    /// Rules for an extension, or the empty rule set when the extension is
    /// unregistered. Pure lookup; unregistered extensions are not an error.
    #[must_use]
    pub fn rules_for(&self, ext: &str) -> &SyntaxRules {
        self.get_by_extension(ext).map_or(&EMPTY_RULES, |l| &l.rules)
    }

    #[must_use]
    pub fn is_recognized(&self, ext: &str) -> bool {
        self.extension_map
            .contains_key(&Self::normalize_extension(ext))
    }

    /// All registered extensions, in registration order.
    #[must_use]
    pub fn recognized_extensions(&self) -> Vec<String> {
        self.languages
            .iter()
            .flat_map(|l| l.extensions.iter().cloned())
            .collect()
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Registry preloaded with the built-in languages and their classic
    /// code-statistics rule patterns.
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();

        registry.register(Language::new(
            "Python",
            vec!["py"],
            SyntaxRules::compile(&LanguageConfig {
                line_comment: Some(r"^\s*#".to_string()),
                class_decl: Some(r"^\s*class\s+[_A-Z]".to_string()),
                method_decl: Some(r"^\s*def\s+[_a-z]".to_string()),
                ..LanguageConfig::default()
            })?,
        ));

        registry.register(Language::new(
            "JavaScript",
            vec!["js"],
            SyntaxRules::compile(&LanguageConfig {
                line_comment: Some(r"^\s*//".to_string()),
                block_comment_start: Some(r"^\s*/\*".to_string()),
                block_comment_end: Some(r"\*/".to_string()),
                method_decl: Some(r"function(\s+[_a-zA-Z][\da-zA-Z]*)?\s*\(".to_string()),
                ..LanguageConfig::default()
            })?,
        ));

        registry.register(Language::new(
            "CoffeeScript",
            vec!["coffee"],
            SyntaxRules::compile(&LanguageConfig {
                line_comment: Some(r"^\s*#".to_string()),
                block_comment_start: Some(r"^\s*###".to_string()),
                block_comment_end: Some(r"^\s*###".to_string()),
                class_decl: Some(r"^\s*class\s+[_A-Z]".to_string()),
                method_decl: Some(r"[-=]>".to_string()),
                ..LanguageConfig::default()
            })?,
        ));

        Ok(registry)
    }

    /// Built-in registry extended with custom languages from configuration.
    /// Custom entries are registered in table order; an entry reusing an
    /// extension shadows the earlier registration for that extension.
    ///
    /// # Errors
    /// Returns an error if any rule pattern fails to compile.
    pub fn from_config(languages: &IndexMap<String, LanguageConfig>) -> Result<Self> {
        let mut registry = Self::builtin()?;

        for (name, config) in languages {
            let rules = SyntaxRules::compile(config)?;
            registry.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                rules,
            });
        }

        Ok(registry)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
