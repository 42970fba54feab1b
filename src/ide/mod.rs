//! IDE features: high-level APIs for LSP handlers.
//!
//! Each function here corresponds to an editor request and is a pure
//! function over `(document text, position/range)` plus the static
//! keyword and field tables. No LSP wire types appear in this module;
//! conversion happens at the protocol boundary via the `to_lsp`
//! helpers on the result types.
//!
//! ## Usage
//!
//! The recommended entry point is [`crate::session::Session`], which
//! owns document state and calls into these functions with the current
//! snapshot:
//!
//! ```
//! use echoql::ide::validate;
//!
//! let diagnostics = validate("FILTER active");
//! assert_eq!(diagnostics.len(), 1);
//! ```

mod completion;
mod diagnostics;
mod formatting;
mod hover;
mod symbols;

pub use completion::{CompletionItem, CompletionKind, completions, resolve};
pub use diagnostics::{Diagnostic, SOURCE_TAG, Severity, validate};
pub use formatting::{FormatOptions, TextEdit, format_range_async, range_format};
pub use hover::{HoverResult, hover};
pub use symbols::{SymbolInfo, SymbolKind, document_symbols};
