//! Completion and resolve tests.

use echoql::Position;
use echoql::ide::{CompletionItem, CompletionKind, completions, resolve};
use echoql::keywords::{FIELDS, KEYWORDS};

#[test]
fn test_full_tables_regardless_of_context() {
    let at_start = completions("", Position::new(0, 0));
    let mid_word = completions("FIL", Position::new(0, 3));

    assert_eq!(at_start.len(), KEYWORDS.len() + FIELDS.len());
    assert_eq!(mid_word.len(), at_start.len());

    let labels: Vec<&str> = mid_word.iter().map(|i| i.label.as_ref()).collect();
    for keyword in &KEYWORDS {
        assert!(labels.contains(&keyword.label), "missing {}", keyword.label);
    }
    for field in &FIELDS {
        assert!(labels.contains(&field.path), "missing {}", field.path);
    }
}

#[test]
fn test_items_carry_their_category() {
    let items = completions("", Position::new(0, 0));
    let index = items.iter().find(|i| i.label.as_ref() == "INDEX").unwrap();
    assert_eq!(index.kind, CompletionKind::Keyword);
    assert_eq!(index.kind.to_lsp(), 14);

    let field = items.iter().find(|i| i.label.as_ref() == "source.ip").unwrap();
    assert_eq!(field.kind, CompletionKind::Field);
    assert_eq!(field.kind.to_lsp(), 5);
}

#[test]
fn test_resolve_enriches_each_category() {
    for item in completions("", Position::new(0, 0)) {
        let label = item.label.clone();
        let resolved = resolve(item);
        assert!(
            resolved.documentation.is_some(),
            "resolve left {label} without documentation"
        );
        assert!(resolved.detail.is_some());
    }
}

#[test]
fn test_resolve_is_a_pure_lookup() {
    let item = CompletionItem::new("MAP", CompletionKind::Keyword);
    let once = resolve(item.clone());
    let twice = resolve(resolve(item));
    assert_eq!(once.documentation.as_deref(), twice.documentation.as_deref());
}
