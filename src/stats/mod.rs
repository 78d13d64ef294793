mod aggregate;

pub use aggregate::{Aggregator, CategoryScan, CategoryStats, StatsReport};

use serde::Serialize;

/// Per-method boilerplate (a signature plus a closing line) subtracted
/// from the LOC-per-method ratio.
const METHOD_BOILERPLATE_LINES: f64 = 2.0;

/// Mergeable accumulator for one file, one category, or a whole run.
///
/// Created zero-valued and mutated only by folding in one line's
/// classification or by merging another tally. Merge is field-by-field
/// addition, so accumulation order never affects the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CodeTally {
    /// Total physical lines read.
    pub lines: usize,
    /// Lines counted as code (blank lines and full-line comments excluded).
    pub code_lines: usize,
    pub classes: usize,
    pub methods: usize,
}

impl CodeTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            code_lines: 0,
            classes: 0,
            methods: 0,
        }
    }

    pub const fn merge(&mut self, other: &Self) {
        self.lines += other.lines;
        self.code_lines += other.code_lines;
        self.classes += other.classes;
        self.methods += other.methods;
    }

    /// Methods per class; `0.0` when no classes were seen.
    #[must_use]
    pub fn methods_per_class(&self) -> f64 {
        if self.classes == 0 {
            return 0.0;
        }
        to_f64(self.methods) / to_f64(self.classes)
    }

    /// Code lines per method, minus the boilerplate constant. `0.0` when
    /// no methods were seen. May legitimately be negative (many one-line
    /// methods) and is never clamped.
    #[must_use]
    pub fn loc_per_method(&self) -> f64 {
        if self.methods == 0 {
            return 0.0;
        }
        to_f64(self.code_lines) / to_f64(self.methods) - METHOD_BOILERPLATE_LINES
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(value: usize) -> f64 {
    value as f64
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
