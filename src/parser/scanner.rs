//! Character cursor over command input.
//!
//! The scanner is the only thing the grammars read from. It works on byte
//! offsets into the original string so every error range and suggestion
//! anchor can be reported over the same input. Every `read_*` method that
//! fails leaves the cursor where it was.

use text_size::{TextRange, TextSize};

use crate::base::{
    is_identifier_continue, is_identifier_start, is_quote, is_unquoted_char, text_range,
    text_size,
};
use crate::parser::errors::{ErrorCode, ParseResult, SyntaxError};

/// A cursor over an input string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Move the cursor, clamping to the end of input.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Current offset as a [`TextSize`].
    pub fn offset(&self) -> TextSize {
        text_size(self.pos)
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn can_read(&self) -> bool {
        self.pos < self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `text` if the input continues with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning whether any was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        self.read_while(char::is_whitespace);
        self.pos > start
    }

    pub fn read_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    /// Read a run of unquoted-string characters.
    pub fn read_unquoted(&mut self) -> &'a str {
        self.read_while(is_unquoted_char)
    }

    /// Read an unquoted string that stops in front of a `..` range operator.
    pub fn read_unquoted_bound(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_unquoted_char(c) || self.starts_with("..") {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    /// Read an identifier, or nothing if the input does not start with one.
    pub fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        if self.peek().is_some_and(is_identifier_start) {
            self.bump();
            self.read_while(is_identifier_continue);
        }
        &self.input[start..self.pos]
    }

    /// Read a string delimited by `"` or `'`.
    ///
    /// Inside the string only the delimiter and backslash may be escaped.
    pub fn read_quoted(&mut self) -> ParseResult<String> {
        let start = self.pos;
        let quote = match self.peek() {
            Some(c) if is_quote(c) => c,
            _ => {
                return Err(SyntaxError::at_offset(
                    "expected quoted string",
                    self.offset(),
                    ErrorCode::E0101,
                ));
            }
        };
        self.bump();

        let mut out = String::new();
        let mut escaped = false;
        while let Some(c) = self.bump() {
            if escaped {
                if c == quote || c == '\\' {
                    out.push(c);
                    escaped = false;
                } else {
                    let escape_start = self.pos - c.len_utf8() - 1;
                    let err = SyntaxError::new(
                        format!("invalid escape sequence '\\{c}'"),
                        text_range(escape_start, self.pos),
                        ErrorCode::E0104,
                    )
                    .with_hint(format!("only '\\{quote}' and '\\\\' may be escaped"));
                    self.pos = start;
                    return Err(err);
                }
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                return Ok(out);
            } else {
                out.push(c);
            }
        }

        let err = SyntaxError::new(
            "unterminated quoted string",
            text_range(start, self.pos),
            ErrorCode::E0103,
        )
        .with_hint(format!("add a closing {quote}"));
        self.pos = start;
        Err(err)
    }

    /// Read a quoted string, or an unquoted one if no quote is next.
    ///
    /// An empty unquoted read is not an error here; callers decide.
    pub fn read_string(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(c) if is_quote(c) => self.read_quoted(),
            _ => Ok(self.read_unquoted().to_string()),
        }
    }

    /// Read a signed integer.
    pub fn read_i64(&mut self) -> ParseResult<i64> {
        let start = self.pos;
        self.eat('-');
        self.read_while(|c| c.is_ascii_digit());
        let input = self.input;
        let text = &input[start..self.pos];
        match text.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.pos = start;
                let message = if text.is_empty() || text == "-" {
                    "expected integer".to_string()
                } else {
                    format!("invalid integer '{text}'")
                };
                Err(SyntaxError::new(
                    message,
                    text_range(start, start + text.len()),
                    ErrorCode::E0105,
                ))
            }
        }
    }

    /// Read a signed integer that fits in an `i32`.
    pub fn read_i32(&mut self) -> ParseResult<i32> {
        let start = self.pos;
        let value = self.read_i64()?;
        i32::try_from(value).map_err(|_| {
            let err = SyntaxError::new(
                format!("integer {value} out of range"),
                text_range(start, self.pos),
                ErrorCode::E0601,
            );
            self.pos = start;
            err
        })
    }

    /// Read a decimal number such as `-1`, `2.5` or `.5`.
    ///
    /// A `..` after the integer part is left unread.
    pub fn read_f64(&mut self) -> ParseResult<f64> {
        let start = self.pos;
        if !self.eat('-') {
            self.eat('+');
        }
        self.read_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_nth(1) != Some('.') {
            self.bump();
            self.read_while(|c| c.is_ascii_digit());
        }
        let input = self.input;
        let text = &input[start..self.pos];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => {
                self.pos = start;
                let message = if text.is_empty() {
                    "expected number".to_string()
                } else {
                    format!("invalid number '{text}'")
                };
                Err(SyntaxError::new(
                    message,
                    text_range(start, start + text.len()),
                    ErrorCode::E0105,
                ))
            }
        }
    }

    /// Range from `start` to the cursor.
    pub fn range_from(&self, start: usize) -> TextRange {
        text_range(start, self.pos)
    }
}
