//! Foundation types for the Echo Query Language toolchain.
//!
//! This module provides the position primitives used throughout the
//! analyzer:
//! - [`Position`] - A 0-indexed line/column location
//! - [`Span`] - A range between two positions
//!
//! This module has NO dependencies on other echoql modules.

mod position;

pub use position::{Position, Span};
