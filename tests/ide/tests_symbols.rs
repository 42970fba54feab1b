//! Document symbol extraction tests.

use echoql::Span;
use echoql::ide::{SymbolKind, document_symbols};

#[test]
fn test_outline_of_a_small_query() {
    let text = "INDEX users\nFILTER user.name = \"bob\"\nMAP host.hostname AS h";
    let symbols = document_symbols(text);

    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(
        names,
        vec!["INDEX", "FILTER", "user.name", "MAP", "host.hostname", "AS"]
    );

    let kinds: Vec<SymbolKind> = symbols.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SymbolKind::Keyword,
            SymbolKind::Keyword,
            SymbolKind::Variable,
            SymbolKind::Keyword,
            SymbolKind::Variable,
            SymbolKind::Keyword,
        ]
    );
}

#[test]
fn test_every_occurrence_is_reported() {
    let symbols = document_symbols("MAP a AS b AS c");
    let as_count = symbols.iter().filter(|s| s.name.as_ref() == "AS").count();
    assert_eq!(as_count, 2);
}

#[test]
fn test_repeated_tokens_share_the_first_span() {
    // The column lookup is first-match-from-line-start, so repeats collide.
    let symbols = document_symbols("MAP a AS b AS c");
    let spans: Vec<Span> = symbols
        .iter()
        .filter(|s| s.name.as_ref() == "AS")
        .map(|s| s.span)
        .collect();
    assert_eq!(spans[0], Span::on_line(0, 6, 8));
    assert_eq!(spans[1], spans[0]);
}

#[test]
fn test_case_insensitive_keywords_keep_canonical_names() {
    let symbols = document_symbols("index users\nmap host.hostname");
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, vec!["INDEX", "MAP", "host.hostname"]);
    // Span points at the lower-case occurrence
    assert_eq!(symbols[0].span, Span::on_line(0, 0, 5));
}

#[test]
fn test_partial_identifier_does_not_match_keyword() {
    assert!(document_symbols("INDEXED users").is_empty());
    // And a field path embedded in a longer path does not match
    assert!(document_symbols("MAP xhost.ipx")
        .iter()
        .all(|s| s.kind == SymbolKind::Keyword));
}

#[test]
fn test_comment_lines_produce_no_symbols() {
    assert!(document_symbols("// INDEX FILTER host.hostname").is_empty());
}

#[test]
fn test_lines_are_tracked_across_blanks() {
    let symbols = document_symbols("\n\nINDEX users");
    assert_eq!(symbols[0].span.start.line, 2);
}
