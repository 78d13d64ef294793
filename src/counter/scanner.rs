use std::io::BufRead;

use crate::language::SyntaxRules;
use crate::stats::CodeTally;

/// Single-pass line classifier: folds the lines of one file into a
/// [`CodeTally`] using the rule set selected for the file's extension.
///
/// The classifier is a two-state machine. Outside a block comment each
/// line is checked against the declaration rules and counts as code
/// unless it is blank or matched by the line-comment rule. Inside a
/// block comment, lines only advance the total line count until the end
/// rule matches. An unterminated block comment is not an error: the
/// remaining lines are simply excluded from code and declaration counts.
pub struct StatsCounter<'a> {
    rules: &'a SyntaxRules,
}

impl<'a> StatsCounter<'a> {
    #[must_use]
    pub const fn new(rules: &'a SyntaxRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> CodeTally {
        let mut tally = CodeTally::new();
        let mut in_block_comment = false;

        for line in source.lines() {
            self.process_line(line, &mut tally, &mut in_block_comment);
        }

        tally
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for
    /// large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading fails, including non-UTF-8 content.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<CodeTally> {
        let mut tally = CodeTally::new();
        let mut in_block_comment = false;

        for line_result in reader.lines() {
            let line = line_result?;
            self.process_line(&line, &mut tally, &mut in_block_comment);
        }

        Ok(tally)
    }

    fn process_line(&self, line: &str, tally: &mut CodeTally, in_block_comment: &mut bool) {
        tally.lines += 1;

        if *in_block_comment {
            if let Some(end) = &self.rules.block_comment_end
                && end.is_match(line)
            {
                *in_block_comment = false;
            }
            return;
        }

        if let Some(start) = &self.rules.block_comment_start
            && start.is_match(line)
        {
            // The opening line contributes nothing further, even when the
            // end marker sits on the same line.
            *in_block_comment = true;
            return;
        }

        if let Some(class_decl) = &self.rules.class_decl
            && class_decl.is_match(line)
        {
            tally.classes += 1;
        }

        if let Some(method_decl) = &self.rules.method_decl
            && method_decl.is_match(line)
        {
            tally.methods += 1;
        }

        // Declaration detection and the code-line decision are independent:
        // a line can open a class and still count as code.
        if line.trim().is_empty() {
            return;
        }
        if let Some(line_comment) = &self.rules.line_comment
            && line_comment.is_match(line)
        {
            return;
        }
        tally.code_lines += 1;
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
