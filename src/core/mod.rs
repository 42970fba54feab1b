//! Shared text utilities with no dependencies on other echoql modules.

pub mod text_utils;

pub use text_utils::{extract_word_at_cursor, find_substring, find_word_boundaries};
