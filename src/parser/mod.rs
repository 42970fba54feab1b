//! Lexical analysis for the Echo Query Language.
//!
//! The language is line-oriented: each non-blank, non-comment line is a
//! statement classified by its leading keyword. This module provides:
//! - **logos** lexer producing words, dotted field paths, strings, and
//!   comparison operators
//! - the static keyword and field tables shared by every IDE feature
//! - the line classifier turning document text into [`LineRecord`]s
//!
//! There is deliberately no AST: per-statement grammar checks operate
//! directly on line records and tokens.

pub mod keywords;
mod lexer;
mod line;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use line::{LineKind, LineRecord, classify};
