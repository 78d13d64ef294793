use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::config::Config;
use crate::language::LanguageRegistry;

const MODELS_SOURCE: &str = "\
# models for the demo app
class Widget:
    def name(self):
        return \"widget\"

    # helper
    def size(self):
        return 1

w = Widget()
";

const MODEL_TESTS_SOURCE: &str = "\
def test_widget():
    w = object()
    assert w
    x = 1
    assert x
";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn scan(name: &str, paths: Vec<PathBuf>) -> CategoryScan {
    CategoryScan {
        name: name.to_string(),
        paths,
    }
}

#[test]
fn two_category_scenario() {
    let dir = TempDir::new().unwrap();
    let models = write_file(&dir, "widget.py", MODELS_SOURCE);
    let tests = write_file(&dir, "test_widget.py", MODEL_TESTS_SOURCE);

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Config::default().test_categories;
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[
        scan("Models", vec![models]),
        scan("Model tests", vec![tests]),
    ]);

    assert_eq!(report.categories.len(), 2);

    let models_row = &report.categories[0];
    assert_eq!(models_row.name, "Models");
    assert!(!models_row.is_test);
    assert_eq!(models_row.tally.lines, 10);
    assert_eq!(models_row.tally.code_lines, 6);
    assert_eq!(models_row.tally.classes, 1);
    assert_eq!(models_row.tally.methods, 2);

    let tests_row = &report.categories[1];
    assert_eq!(tests_row.name, "Model tests");
    assert!(tests_row.is_test);
    assert_eq!(tests_row.tally.lines, 5);
    assert_eq!(tests_row.tally.code_lines, 5);
    assert_eq!(tests_row.tally.classes, 0);
    assert_eq!(tests_row.tally.methods, 1);

    let total = report.total.unwrap();
    assert_eq!(total.lines, 15);
    assert_eq!(total.code_lines, 11);
    assert_eq!(total.classes, 1);
    assert_eq!(total.methods, 3);

    assert_eq!(report.code_loc(), 6);
    assert_eq!(report.test_loc(), 5);
    assert!((report.test_ratio() - 5.0 / 6.0).abs() < f64::EPSILON);
    assert!(report.skipped.is_empty());
}

#[test]
fn total_equals_merge_of_category_rows() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.py", "x = 1\n");
    let b = write_file(&dir, "b.py", "def f():\n    return 2\n");

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("A", vec![a]), scan("B", vec![b])]);

    let mut merged = CodeTally::new();
    for category in &report.categories {
        merged.merge(&category.tally);
    }
    assert_eq!(report.total.unwrap(), merged);
}

#[test]
fn single_category_has_no_total() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "only.py", "x = 1\n");

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("ALL", vec![file])]);
    assert_eq!(report.categories.len(), 1);
    assert!(report.total.is_none());
}

#[test]
fn empty_category_set_yields_empty_report() {
    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[]);
    assert!(report.categories.is_empty());
    assert!(report.total.is_none());
    assert!(report.skipped.is_empty());
}

#[test]
fn unrecognized_extensions_are_silently_excluded() {
    let dir = TempDir::new().unwrap();
    let py = write_file(&dir, "app.py", "x = 1\n");
    let txt = write_file(&dir, "notes.txt", "not code\nat all\n");
    let bare = write_file(&dir, "Makefile", "all:\n");

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("ALL", vec![py, txt, bare])]);
    assert_eq!(report.categories[0].tally.lines, 1);
    assert!(report.skipped.is_empty());
}

#[test]
fn missing_file_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let present = write_file(&dir, "here.py", "x = 1\n");
    let missing = dir.path().join("gone.py");

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("ALL", vec![missing.clone(), present])]);
    assert_eq!(report.categories[0].tally.lines, 1);
    assert_eq!(report.skipped, vec![missing]);
}

#[test]
fn non_utf8_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let binary = dir.path().join("blob.py");
    std::fs::write(&binary, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = Vec::new();
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("ALL", vec![binary.clone()])]);
    assert_eq!(report.categories[0].tally, CodeTally::new());
    assert_eq!(report.skipped, vec![binary]);
}

#[test]
fn test_ratio_sentinel_when_no_code_loc() {
    let dir = TempDir::new().unwrap();
    let tests = write_file(&dir, "test_only.py", "assert True\n");

    let registry = LanguageRegistry::builtin().unwrap();
    let test_categories = vec!["Model tests".to_string()];
    let aggregator = Aggregator::new(&registry, &test_categories);

    let report = aggregator.aggregate(&[scan("Model tests", vec![tests])]);
    assert_eq!(report.code_loc(), 0);
    assert_eq!(report.test_loc(), 1);
    assert!((report.test_ratio() - 0.0).abs() < f64::EPSILON);
}
