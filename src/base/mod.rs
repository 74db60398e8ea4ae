//! Foundation types for the command grammars.
//!
//! This module provides the primitives every other layer builds on:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Character classes for unquoted strings and identifiers
//! - String quoting used when printing parsed values back
//!
//! This module has NO dependencies on other modules of this crate.

mod text;

pub use text::{
    is_identifier_continue, is_identifier_start, is_quote, is_unquoted_char, is_unquoted_word,
    quote,
};

pub use text_size::{TextRange, TextSize};

/// Convert a byte offset into a [`TextSize`], saturating on overflow.
pub fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}

/// Build a [`TextRange`] from two byte offsets.
pub fn text_range(start: usize, end: usize) -> TextRange {
    let start = text_size(start);
    let end = text_size(end).max(start);
    TextRange::new(start, end)
}
