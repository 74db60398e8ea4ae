//! Parser error handling module
//!
//! This module provides the error vocabulary shared by every grammar:
//! - Categorized error codes for filtering and documentation
//! - Range-anchored errors with optional hints
//! - The [`ParseResult`] alias used throughout the parsers

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::SyntaxError;

/// Result of running a grammar production.
pub type ParseResult<T> = Result<T, SyntaxError>;
