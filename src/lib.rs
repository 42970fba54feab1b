//! # echoql-core
//!
//! Core library for Echo Query Language analysis: diagnostics, completion,
//! hover, document symbols, and range formatting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → per-URI document state, debounced re-validation
//!   ↓
//! ide       → editor features (validate, completion, hover, symbols, format)
//!   ↓
//! parser    → Logos lexer, line classifier, keyword/field tables
//!   ↓
//! base      → Primitives (Position, Span)
//! core      → Text utilities (word extraction, substring lookup)
//! ```
//!
//! The `ide` functions are pure: they take a text snapshot plus a
//! position or range and return plain data. The `session` layer owns
//! the mutable per-document state and schedules validation; transport
//! framing and UI rendering are external collaborators.

// ============================================================================
// MODULES (dependency order: base/core → parser → ide → session)
// ============================================================================

/// Foundation types: Position, Span
pub mod base;

/// Text utilities: word-at-cursor extraction, substring lookup
pub mod core;

/// Parser: Logos lexer, line classifier, keyword and field tables
pub mod parser;

/// IDE features: diagnostics, completion, hover, symbols, formatting
pub mod ide;

/// Session management: document store, debounced validation scheduling
pub mod session;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{Position, Span};
