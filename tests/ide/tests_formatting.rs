//! Range formatting tests.

use echoql::Span;
use echoql::ide::{FormatOptions, range_format};

fn format_whole(text: &str) -> String {
    let end = text.lines().count().saturating_sub(1) as u32;
    range_format(text, Span::from_coords(0, 0, end, 0), &FormatOptions::default())
        .expect("edit")
        .new_text
}

#[test]
fn test_canonicalizes_keyword_case_and_spacing() {
    assert_eq!(format_whole("index  users,filter"), "INDEX users, filter");
}

#[test]
fn test_idempotency() {
    let inputs = [
        "INDEX users, filter",
        "FILTER age > 25",
        "MAP host.hostname AS h",
    ];
    for input in inputs {
        let once = format_whole(input);
        let twice = format_whole(&once);
        assert_eq!(once, twice, "formatting must be idempotent for {input:?}");
        assert_eq!(once, input, "already-canonical text must not change");
    }
}

#[test]
fn test_leading_keyword_uppercasing_is_whole_word() {
    assert_eq!(format_whole("indexed users"), "indexed users");
    assert_eq!(format_whole("join a.b"), "JOIN a.b");
}

#[test]
fn test_whitespace_collapse_and_trim() {
    assert_eq!(format_whole("  filter   a  >  1   "), "FILTER a > 1");
}

#[test]
fn test_only_requested_lines_are_formatted() {
    let text = "index a\nfilter b > 1\nmap c.d";
    let edit = range_format(text, Span::from_coords(1, 0, 1, 3), &FormatOptions::default())
        .expect("edit");
    assert_eq!(edit.new_text, "FILTER b > 1");
    assert_eq!(edit.range, Span::from_coords(1, 0, 1, 12));
}

#[test]
fn test_edit_is_a_single_replacement() {
    let text = "index a\nfilter b>1";
    let edit = range_format(text, Span::from_coords(0, 0, 1, 0), &FormatOptions::default())
        .expect("edit");
    assert_eq!(edit.new_text, "INDEX a\nFILTER b>1");
    assert_eq!(edit.range.start.column, 0);
}

#[test]
fn test_out_of_range_returns_no_edit() {
    assert!(range_format("INDEX a", Span::from_coords(9, 0, 9, 1), &FormatOptions::default()).is_none());
}
