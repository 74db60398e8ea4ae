//! Mutable state threaded through every production.
//!
//! A production receives `&mut ParserState`, may advance the cursor, and
//! leaves the pending suggestions describing what may legally follow at
//! the point where it stopped, whether it succeeded or failed.

use tracing::trace;

use super::config::ParserConfig;
use super::errors::{ErrorCode, ParseResult, SyntaxError};
use super::scanner::Scanner;
use crate::ide::{PendingSuggestions, SuggestionProducer};

/// Cursor, pending suggestions and resource limits for one parse.
#[derive(Debug, Clone)]
pub struct ParserState<'a> {
    pub scanner: Scanner<'a>,
    pending: PendingSuggestions,
    config: ParserConfig,
    depth: usize,
}

/// Snapshot of cursor and suggestions taken before a speculative parse.
#[derive(Debug, Clone)]
pub struct Mark {
    cursor: usize,
    pending: PendingSuggestions,
}

impl Mark {
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> ParserState<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            scanner: Scanner::new(input),
            pending: PendingSuggestions::default(),
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn cursor(&self) -> usize {
        self.scanner.cursor()
    }

    pub fn pending(&self) -> &PendingSuggestions {
        &self.pending
    }

    pub fn into_suggestions(self) -> PendingSuggestions {
        self.pending
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Replace the pending suggestions with one producer anchored at the cursor.
    pub fn suggest(&mut self, producer: SuggestionProducer) {
        self.pending.replace(self.cursor(), vec![producer]);
    }

    /// Replace the pending suggestions with several producers anchored at the cursor.
    pub fn suggest_all(&mut self, producers: impl IntoIterator<Item = SuggestionProducer>) {
        self.pending
            .replace(self.cursor(), producers.into_iter().collect());
    }

    /// Add producers when the pending list is anchored at the cursor, replace it otherwise.
    ///
    /// Used after optional prefixes that may be omitted, such as a sign.
    pub fn suggest_also(&mut self, producers: impl IntoIterator<Item = SuggestionProducer>) {
        self.pending
            .extend(self.cursor(), producers.into_iter().collect());
    }

    /// Drop all pending suggestions.
    pub fn clear_suggestions(&mut self) {
        self.pending.clear(self.cursor());
    }

    pub(crate) fn replace_pending(&mut self, pending: PendingSuggestions) {
        self.pending = pending;
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    pub fn mark(&self) -> Mark {
        Mark {
            cursor: self.cursor(),
            pending: self.pending.clone(),
        }
    }

    /// Restore cursor and suggestions to a mark.
    pub fn reset(&mut self, mark: Mark) {
        trace!(from = self.cursor(), to = mark.cursor, "rollback");
        self.scanner.set_cursor(mark.cursor);
        self.pending = mark.pending;
    }

    /// Run `f`, moving the cursor back to where it started if it fails.
    ///
    /// Suggestions recorded by `f` are kept so a failed parse still
    /// reports what was legal where it stopped.
    pub fn restoring<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let start = self.cursor();
        let result = f(self);
        if result.is_err() {
            self.scanner.set_cursor(start);
        }
        result
    }

    /// Run `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(SyntaxError::at_offset(
                format!("nesting deeper than {} levels", self.config.max_depth),
                self.scanner.offset(),
                ErrorCode::E0207,
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Error covering `[start, cursor)`.
    pub fn error_from(&self, start: usize, code: ErrorCode, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.scanner.range_from(start), code)
    }

    /// Zero-width error at the cursor.
    pub fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> SyntaxError {
        SyntaxError::at_offset(message, self.scanner.offset(), code)
    }

    /// Consume `c` or fail with E0101.
    pub fn expect(&mut self, c: char) -> ParseResult<()> {
        if self.scanner.eat(c) {
            return Ok(());
        }
        let message = match self.scanner.peek() {
            Some(found) => format!("expected '{c}', found '{found}'"),
            None => format!("expected '{c}'"),
        };
        Err(self.error_here(ErrorCode::E0101, message))
    }
}
