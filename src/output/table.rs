use std::fmt::Write;

use crate::error::Result;
use crate::stats::{CodeTally, StatsReport};

use super::ReportFormatter;

const HEADER: &str = "| Name                 | Lines |   LOC | Classes | Methods | M/C | LOC/M |";
const SPLITTER: &str = "+----------------------+-------+-------+---------+---------+-----+-------+";

/// Renders the classic fixed-width statistics table plus the code-to-test
/// summary line.
///
/// Column widths and separators are fixed so the output stays byte-stable:
/// `Name(20) | Lines(5) | LOC(5) | Classes(7) | Methods(7) | M/C(3,1dp) |
/// LOC/M(5,1dp)`. With zero categories only the bordered header is
/// emitted and the summary line is omitted.
pub struct TableFormatter;

impl TableFormatter {
    fn row(name: &str, tally: &CodeTally) -> String {
        format!(
            "| {:<20} | {:>5} | {:>5} | {:>7} | {:>7} | {:>3.1} | {:>5.1} |",
            name,
            tally.lines,
            tally.code_lines,
            tally.classes,
            tally.methods,
            tally.methods_per_class(),
            tally.loc_per_method(),
        )
    }

    fn summary_line(report: &StatsReport) -> String {
        format!(
            "  Code LOC: {}     Test LOC: {}     Code to Test Ratio: 1:{:.1}",
            report.code_loc(),
            report.test_loc(),
            report.test_ratio(),
        )
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{SPLITTER}");
        let _ = writeln!(output, "{HEADER}");
        let _ = writeln!(output, "{SPLITTER}");

        if report.categories.is_empty() {
            return Ok(output);
        }

        for category in &report.categories {
            let _ = writeln!(output, "{}", Self::row(&category.name, &category.tally));
        }
        let _ = writeln!(output, "{SPLITTER}");

        if let Some(total) = &report.total {
            let _ = writeln!(output, "{}", Self::row("Total", total));
            let _ = writeln!(output, "{SPLITTER}");
        }

        let _ = writeln!(output, "{}", Self::summary_line(report));

        Ok(output)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
