//! Validator tests covering each rule and their interactions.

use echoql::Span;
use echoql::ide::{Severity, validate};
use rstest::rstest;

// =============================================================================
// CLEAN INPUTS
// =============================================================================

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("// just a comment")]
#[case("  \n// one\n\t\n// two\n")]
#[case("INDEX usersonly")]
#[case("FILTER age > 25")]
#[case("MAP host.hostname AS h")]
#[case("AS alias")]
#[case("SQL select 1")]
#[case("JOIN other ON user.id = user.id")]
fn clean_input_has_no_diagnostics(#[case] text: &str) {
    assert!(validate(text).is_empty(), "expected no diagnostics for {text:?}");
}

// =============================================================================
// INDIVIDUAL RULES
// =============================================================================

#[test]
fn unknown_keyword_spans_the_offending_token() {
    let diags = validate("SELECT * FROM users");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(
        diags[0].message.as_ref(),
        "Line must start with one of: INDEX, FILTER, MAP, AS, SQL, JOIN"
    );
    assert_eq!(diags[0].span, Span::on_line(0, 0, "SELECT".len() as u32));
}

#[test]
fn keyword_check_is_case_insensitive() {
    assert!(validate("index users").is_empty());
    assert!(validate("Filter age > 1").is_empty());
}

#[test]
fn bare_index_reports_missing_name() {
    let diags = validate("INDEX");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message.as_ref(),
        "INDEX statement must be followed by an index name"
    );
    // Whole trimmed line, which is exactly the keyword here
    assert_eq!(diags[0].span, Span::on_line(0, 0, 5));
}

#[rstest]
#[case("FILTER age > 25")]
#[case("FILTER age < 25")]
#[case("FILTER name = x")]
#[case("FILTER name != x")]
fn filter_with_operator_is_clean(#[case] text: &str) {
    assert!(validate(text).is_empty());
}

#[test]
fn filter_without_operator_is_an_error() {
    let diags = validate("FILTER active");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message.as_ref(),
        "FILTER must include a comparison operator (>, <, =, !=)"
    );
}

#[test]
fn map_without_dots_or_as_is_a_warning() {
    let diags = validate("MAP foo");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[0].severity.to_lsp(), 2);
}

#[rstest]
#[case("MAP host.hostname")]
#[case("MAP foo AS bar")]
fn map_with_dots_or_as_is_clean(#[case] text: &str) {
    assert!(validate(text).is_empty());
}

#[test]
fn odd_quote_count_is_an_error() {
    let diags = validate("INDEX \"users");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message.as_ref(), "Unmatched quotes in line");
}

#[test]
fn even_quote_count_is_clean() {
    assert!(validate("INDEX \"users\"").is_empty());
}

// =============================================================================
// RULE INTERACTIONS
// =============================================================================

#[test]
fn one_line_can_carry_multiple_diagnostics() {
    let diags = validate("BADKEY \"unterminated");
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].severity, Severity::Error);
    assert!(diags[0].message.contains("must start with one of"));
    assert_eq!(diags[1].message.as_ref(), "Unmatched quotes in line");
}

#[test]
fn diagnostics_cover_every_bad_line() {
    let text = "INDEX\nFILTER active\nMAP foo";
    let diags = validate(text);
    assert_eq!(diags.len(), 3);
    let lines: Vec<u32> = diags.iter().map(|d| d.span.start.line).collect();
    assert_eq!(lines, vec![0, 1, 2]);
}

#[test]
fn skipped_lines_keep_position_accounting() {
    let diags = validate("// header\n\nINDEX\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].span.start.line, 2);
}

#[test]
fn validate_is_deterministic() {
    let text = "BADKEY \"x\nFILTER y\nMAP z";
    let first = validate(text);
    let second = validate(text);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.span, b.span);
        assert_eq!(a.message, b.message);
    }
}
