use super::*;
use crate::stats::{CategoryStats, CodeTally, StatsReport};

const fn tally(lines: usize, code_lines: usize, classes: usize, methods: usize) -> CodeTally {
    CodeTally {
        lines,
        code_lines,
        classes,
        methods,
    }
}

fn category(name: &str, tally: CodeTally, is_test: bool) -> CategoryStats {
    CategoryStats {
        name: name.to_string(),
        tally,
        is_test,
    }
}

fn two_category_report() -> StatsReport {
    let models = tally(10, 6, 1, 2);
    let model_tests = tally(5, 5, 0, 1);
    let mut total = models;
    total.merge(&model_tests);

    StatsReport {
        categories: vec![
            category("Models", models, false),
            category("Model tests", model_tests, true),
        ],
        total: Some(total),
        skipped: Vec::new(),
    }
}

#[test]
fn renders_the_full_table_byte_for_byte() {
    let output = TableFormatter.format(&two_category_report()).unwrap();

    let expected = "\
+----------------------+-------+-------+---------+---------+-----+-------+
| Name                 | Lines |   LOC | Classes | Methods | M/C | LOC/M |
+----------------------+-------+-------+---------+---------+-----+-------+
| Models               |    10 |     6 |       1 |       2 | 2.0 |   1.0 |
| Model tests          |     5 |     5 |       0 |       1 | 0.0 |   3.0 |
+----------------------+-------+-------+---------+---------+-----+-------+
| Total                |    15 |    11 |       1 |       3 | 3.0 |   1.7 |
+----------------------+-------+-------+---------+---------+-----+-------+
  Code LOC: 6     Test LOC: 5     Code to Test Ratio: 1:0.8
";
    assert_eq!(output, expected);
}

#[test]
fn empty_report_renders_bordered_header_only() {
    let output = TableFormatter.format(&StatsReport::default()).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('+'));
    assert!(lines[1].starts_with("| Name"));
    assert!(lines[2].starts_with('+'));
    assert!(!output.contains("Code LOC"));
}

#[test]
fn single_category_omits_total_but_keeps_summary() {
    let report = StatsReport {
        categories: vec![category("ALL", tally(3, 3, 0, 0), false)],
        total: None,
        skipped: Vec::new(),
    };

    let output = TableFormatter.format(&report).unwrap();
    assert!(!output.contains("Total"));
    assert!(output.contains("Code LOC: 3     Test LOC: 0"));
}

#[test]
fn degenerate_ratios_render_zero_sentinels() {
    let report = StatsReport {
        categories: vec![category("Model tests", tally(4, 4, 0, 0), true)],
        total: None,
        skipped: Vec::new(),
    };

    let output = TableFormatter.format(&report).unwrap();
    assert!(output.contains("| 0.0 |   0.0 |"));
    assert!(output.contains("Code to Test Ratio: 1:0.0"));
}

#[test]
fn negative_loc_per_method_is_not_clamped() {
    let report = StatsReport {
        categories: vec![category("Terse", tally(2, 2, 0, 2), false)],
        total: None,
        skipped: Vec::new(),
    };

    let output = TableFormatter.format(&report).unwrap();
    assert!(output.contains("|  -1.0 |"));
}

#[test]
fn long_category_names_are_not_truncated() {
    let report = StatsReport {
        categories: vec![category(
            "A category name well beyond twenty characters",
            tally(1, 1, 0, 0),
            false,
        )],
        total: None,
        skipped: Vec::new(),
    };

    let output = TableFormatter.format(&report).unwrap();
    assert!(output.contains("A category name well beyond twenty characters"));
}
