use serde::Serialize;

use crate::error::Result;
use crate::stats::{CodeTally, StatsReport};

use super::ReportFormatter;

/// Machine-readable rendition of the report. Surrounding functionality,
/// not part of the core table contract.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport {
    categories: Vec<JsonCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<JsonTally>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonCategory {
    name: String,
    is_test: bool,
    #[serde(flatten)]
    tally: JsonTally,
}

#[derive(Serialize)]
struct JsonTally {
    lines: usize,
    code_lines: usize,
    classes: usize,
    methods: usize,
    methods_per_class: f64,
    loc_per_method: f64,
}

impl JsonTally {
    fn from_tally(tally: &CodeTally) -> Self {
        Self {
            lines: tally.lines,
            code_lines: tally.code_lines,
            classes: tally.classes,
            methods: tally.methods,
            methods_per_class: tally.methods_per_class(),
            loc_per_method: tally.loc_per_method(),
        }
    }
}

#[derive(Serialize)]
struct JsonSummary {
    code_loc: usize,
    test_loc: usize,
    test_ratio: f64,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let output = JsonReport {
            categories: report
                .categories
                .iter()
                .map(|c| JsonCategory {
                    name: c.name.clone(),
                    is_test: c.is_test,
                    tally: JsonTally::from_tally(&c.tally),
                })
                .collect(),
            total: report.total.as_ref().map(JsonTally::from_tally),
            summary: JsonSummary {
                code_loc: report.code_loc(),
                test_loc: report.test_loc(),
                test_ratio: report.test_ratio(),
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
