//! Syntax error type
//!
//! Every failure raised by the grammars is a [`SyntaxError`]: a code, a
//! human-readable message, the offending range of the input and an
//! optional hint.

use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;

/// A syntax error anchored to a range of the parsed input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
        }
    }

    /// Create an error using the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Offset the error starts at
    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    /// Pick whichever of two competing errors got further into the input.
    ///
    /// Ties keep `self`.
    pub fn later(self, other: SyntaxError) -> SyntaxError {
        if other.start() > self.start() {
            other
        } else {
            self
        }
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!(
            "{}: {} at {}..{}",
            self.code,
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        );
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
