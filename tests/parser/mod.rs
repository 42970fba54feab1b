//! Lexer and line-classifier tests.
