//! Per-line grammar validation.
//!
//! [`validate`] is a deterministic pure function of document text. It
//! never fails: malformed input becomes diagnostics, not errors, and a
//! single line can carry several diagnostics at once. Each run produces
//! a complete replacement set; there is no diagnostic diffing.

use std::sync::Arc;

use crate::base::Span;
use crate::parser::{LineRecord, classify, keywords};

/// Source tag attached to every diagnostic this crate emits.
pub const SOURCE_TAG: &str = "Echo Query";

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The offending range (0-indexed line/column).
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Always [`SOURCE_TAG`].
    pub source: &'static str,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            span,
            severity: Severity::Error,
            message: message.into(),
            source: SOURCE_TAG,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            span,
            severity: Severity::Warning,
            message: message.into(),
            source: SOURCE_TAG,
        }
    }
}

/// Validate a document, producing its full diagnostic set.
///
/// Rules are applied per statement line, in order, and are additive:
/// blank and comment lines are skipped, and the unmatched-quote check
/// runs independently of the keyword rules.
pub fn validate(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for record in classify(text) {
        if record.is_statement() {
            check_line(&record, &mut diagnostics);
        }
    }
    diagnostics
}

fn check_line(record: &LineRecord<'_>, out: &mut Vec<Diagnostic>) {
    let line = record.index;
    let line_width = record.raw.chars().count() as u32;
    let whole_line = Span::on_line(line, 0, line_width);

    let parts: Vec<&str> = record.trimmed.split_whitespace().collect();
    let Some(keyword) = record.keyword.as_deref() else {
        return;
    };

    // Rule 1: unknown leading keyword.
    if !keywords::is_statement_keyword(keyword) {
        let token_width = parts.first().map_or(0, |w| w.chars().count()) as u32;
        out.push(Diagnostic::error(
            Span::on_line(line, 0, token_width),
            "Line must start with one of: INDEX, FILTER, MAP, AS, SQL, JOIN",
        ));
    }

    // Rule 2: INDEX needs an index name argument.
    if keyword == "INDEX" && parts.len() < 2 {
        let width = (record.trimmed.chars().count() as u32).max(5);
        out.push(Diagnostic::error(
            Span::on_line(line, 0, width),
            "INDEX statement must be followed by an index name",
        ));
    }

    // Rule 3: FILTER needs a comparison somewhere on the line.
    if keyword == "FILTER" {
        let has_comparison = ["!=", ">", "<", "="]
            .iter()
            .any(|op| record.raw.contains(op));
        if !has_comparison {
            out.push(Diagnostic::error(
                whole_line,
                "FILTER must include a comparison operator (>, <, =, !=)",
            ));
        }
    }

    // Rule 4: MAP without field paths or AS is suspicious.
    if keyword == "MAP" && !record.raw.contains("AS") && !record.raw.contains('.') {
        out.push(Diagnostic::warning(
            whole_line,
            "MAP statement should typically include field paths (using dots) or AS keyword",
        ));
    }

    // Rule 5: unmatched quotes, independent of the keyword rules.
    if record.raw.matches('"').count() % 2 == 1 {
        out.push(Diagnostic::error(whole_line, "Unmatched quotes in line"));
    }
}
