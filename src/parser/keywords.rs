//! Static keyword and field tables for the Echo Query Language.
//!
//! Both tables are process-wide constants, initialized at compile time
//! and never mutated, so they are safe to read from any thread.

/// Description of one language keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordInfo {
    /// Canonical upper-case spelling.
    pub label: &'static str,
    /// One-line detail shown next to the label.
    pub detail: &'static str,
    /// Longer documentation shown in hover and completion popups.
    pub documentation: &'static str,
}

/// All 7 language keywords.
pub const KEYWORDS: [KeywordInfo; 7] = [
    KeywordInfo {
        label: "INDEX",
        detail: "Select a data source",
        documentation: "Specifies the index (data source) the query reads from. \
                        Must be followed by an index name, e.g. `INDEX users`.",
    },
    KeywordInfo {
        label: "FILTER",
        detail: "Filter documents by condition",
        documentation: "Keeps only documents matching a comparison condition. \
                        Supports the operators `>`, `<`, `=`, `!=`, e.g. `FILTER age > 25`.",
    },
    KeywordInfo {
        label: "MAP",
        detail: "Project fields",
        documentation: "Projects fields out of matching documents, referenced by \
                        dotted paths, e.g. `MAP host.hostname AS h`.",
    },
    KeywordInfo {
        label: "AS",
        detail: "Rename a mapped field",
        documentation: "Renames the preceding field path in a MAP statement, \
                        e.g. `MAP user.name AS username`.",
    },
    KeywordInfo {
        label: "SQL",
        detail: "Embed a raw SQL statement",
        documentation: "Passes a raw SQL statement through to the backing store \
                        unchanged.",
    },
    KeywordInfo {
        label: "JOIN",
        detail: "Join a secondary index",
        documentation: "Joins documents from a secondary index on a shared field \
                        path.",
    },
    KeywordInfo {
        label: "NOT",
        detail: "Negate a condition",
        documentation: "Negates the condition that follows it inside a FILTER \
                        statement.",
    },
];

/// Keywords allowed to start a statement line.
///
/// NOT is a keyword but never a valid line head.
pub const STATEMENT_KEYWORDS: [&str; 6] = ["INDEX", "FILTER", "MAP", "AS", "SQL", "JOIN"];

/// Description of one known field path from the sample schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Dotted path, e.g. `host.hostname`.
    pub path: &'static str,
    /// Documentation shown in hover and completion popups.
    pub documentation: &'static str,
}

/// Known field paths.
pub const FIELDS: [FieldInfo; 8] = [
    FieldInfo {
        path: "host.hostname",
        documentation: "Hostname of the machine that produced the document.",
    },
    FieldInfo {
        path: "host.ip",
        documentation: "IP address of the machine that produced the document.",
    },
    FieldInfo {
        path: "user.name",
        documentation: "Short login name of the user.",
    },
    FieldInfo {
        path: "user.id",
        documentation: "Unique identifier of the user.",
    },
    FieldInfo {
        path: "event.category",
        documentation: "High-level event category, e.g. `authentication`.",
    },
    FieldInfo {
        path: "event.action",
        documentation: "The action captured by the event.",
    },
    FieldInfo {
        path: "source.ip",
        documentation: "IP address the event originated from.",
    },
    FieldInfo {
        path: "destination.ip",
        documentation: "IP address the event was directed at.",
    },
];

/// Look up a keyword by spelling, case-insensitively.
pub fn keyword(word: &str) -> Option<&'static KeywordInfo> {
    KEYWORDS.iter().find(|k| k.label.eq_ignore_ascii_case(word))
}

/// Look up a known field by its exact dotted path.
pub fn field(path: &str) -> Option<&'static FieldInfo> {
    FIELDS.iter().find(|f| f.path == path)
}

/// Check whether a word may start a statement line, case-insensitively.
pub fn is_statement_keyword(word: &str) -> bool {
    STATEMENT_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(word))
}
