//! Leaf values: primitives, keys, booleans, enumerants, bounded numbers,
//! ranges and resource locations.
//!
//! Leaf parsers do not skip leading whitespace; the production calling
//! them decides where whitespace is allowed.

use std::sync::Arc;

use super::errors::{ErrorCode, ParseResult, SyntaxError};
use super::lexer;
use super::state::ParserState;
use crate::base::{is_quote, is_unquoted_char};
use crate::ide::{Suggestion, SuggestionProducer, words};
use crate::syntax::{Nbt, ResourceLocation};

/// Read a primitive: a quoted string or a classified unquoted token.
///
/// With `bound` the unquoted token stops before a `..` range operator.
pub fn primitive(state: &mut ParserState<'_>, bound: bool) -> ParseResult<Nbt> {
    if state.scanner.peek().is_some_and(is_quote) {
        return state.scanner.read_quoted().map(Nbt::String);
    }
    let token = if bound {
        state.scanner.read_unquoted_bound()
    } else {
        state.scanner.read_unquoted()
    };
    if token.is_empty() {
        return Err(expected_value(state));
    }
    Ok(lexer::primitive(token))
}

fn expected_value(state: &ParserState<'_>) -> SyntaxError {
    let message = match state.scanner.peek() {
        Some(found) => format!("expected value, found '{found}'"),
        None => "expected value".to_string(),
    };
    state.error_here(ErrorCode::E0106, message)
}

/// Read a compound key, quoted or unquoted.
pub fn key(state: &mut ParserState<'_>) -> ParseResult<String> {
    if state.scanner.peek().is_some_and(is_quote) {
        return state.scanner.read_quoted();
    }
    let token = state.scanner.read_unquoted();
    if token.is_empty() {
        let message = match state.scanner.peek() {
            Some(found) => format!("expected key, found '{found}'"),
            None => "expected key".to_string(),
        };
        return Err(state.error_here(ErrorCode::E0106, message));
    }
    Ok(token.to_string())
}

/// Read a non-empty quoted or unquoted string.
pub fn word(state: &mut ParserState<'_>) -> ParseResult<String> {
    let start = state.cursor();
    let text = state.scanner.read_string()?;
    if text.is_empty() && state.cursor() == start {
        return Err(expected_value(state));
    }
    Ok(text)
}

pub fn boolean(state: &mut ParserState<'_>) -> ParseResult<bool> {
    state.suggest(words(&["true", "false"]));
    let start = state.cursor();
    match state.scanner.read_unquoted() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => {
            let message = if other.is_empty() {
                "expected boolean".to_string()
            } else {
                format!("expected boolean, found '{other}'")
            };
            let err = state.error_from(start, ErrorCode::E0501, message);
            state.scanner.set_cursor(start);
            Err(err)
        }
    }
}

/// Read one of a fixed set of words.
pub fn enumerant(
    state: &mut ParserState<'_>,
    values: &'static [&'static str],
) -> ParseResult<&'static str> {
    state.suggest(words(values));
    let start = state.cursor();
    let token = state.scanner.read_unquoted();
    match values.iter().find(|value| **value == token) {
        Some(value) => Ok(value),
        None => {
            let err = state
                .error_from(start, ErrorCode::E0302, format!("unknown value '{token}'"))
                .with_hint(format!("expected one of {}", values.join(", ")));
            state.scanner.set_cursor(start);
            Err(err)
        }
    }
}

pub fn int_in(state: &mut ParserState<'_>, min: i64, max: i64) -> ParseResult<i64> {
    let start = state.cursor();
    let value = state.scanner.read_i64()?;
    if value < min || value > max {
        let err = state.error_from(
            start,
            ErrorCode::E0601,
            format!("{value} is not between {min} and {max}"),
        );
        state.scanner.set_cursor(start);
        return Err(err);
    }
    Ok(value)
}

pub fn float_in(state: &mut ParserState<'_>, min: f64, max: f64) -> ParseResult<f64> {
    let start = state.cursor();
    let value = state.scanner.read_f64()?;
    if value < min || value > max {
        let err = state.error_from(
            start,
            ErrorCode::E0601,
            format!("{value} is not between {min} and {max}"),
        );
        state.scanner.set_cursor(start);
        return Err(err);
    }
    Ok(value)
}

/// Read `namespace:path` or a bare `path` in the default namespace.
pub fn resource_location(state: &mut ParserState<'_>) -> ParseResult<ResourceLocation> {
    let start = state.cursor();
    let text = state
        .scanner
        .read_while(|c| is_unquoted_char(c) || c == ':' || c == '/');
    match ResourceLocation::parse(text) {
        Some(location) => Ok(location),
        None => {
            let message = if text.is_empty() {
                "expected resource location".to_string()
            } else {
                format!("invalid resource location '{text}'")
            };
            let err = state
                .error_from(start, ErrorCode::E0303, message)
                .with_hint("use lowercase letters, digits and '_ - . /', as in 'minecraft:stone'");
            state.scanner.set_cursor(start);
            Err(err)
        }
    }
}

// =============================================================================
// Ranges
// =============================================================================

/// One end of a range.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Number(f64),
    Text(String),
}

impl Bound {
    fn from_nbt(value: Nbt) -> Option<Bound> {
        match value {
            Nbt::String(text) => Some(Bound::Text(text)),
            other => other.as_f64().map(Bound::Number),
        }
    }
}

/// A primitive or a range of primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Value(Nbt),
    Range {
        min: Option<Bound>,
        max: Option<Bound>,
    },
}

/// Read `a..b`, `..b`, `a..` or a single primitive.
pub fn scalar(state: &mut ParserState<'_>) -> ParseResult<Scalar> {
    let start = state.cursor();
    if state.scanner.eat_str("..") {
        let max = bound(state, start)?;
        return Ok(Scalar::Range {
            min: None,
            max: Some(max),
        });
    }

    let value = primitive(state, true)?;
    if !state.scanner.eat_str("..") {
        return Ok(Scalar::Value(value));
    }

    let Some(min) = Bound::from_nbt(value) else {
        let err = state.error_from(start, ErrorCode::E0501, "range bounds must be numbers or strings");
        state.scanner.set_cursor(start);
        return Err(err);
    };
    let max = if starts_bound(state) {
        Some(bound(state, start)?)
    } else {
        None
    };
    let mixed = max
        .as_ref()
        .is_some_and(|max| std::mem::discriminant(max) != std::mem::discriminant(&min));
    if mixed {
        let err = state.error_from(
            start,
            ErrorCode::E0501,
            "cannot mix numbers and strings in a range",
        );
        state.scanner.set_cursor(start);
        return Err(err);
    }
    Ok(Scalar::Range {
        min: Some(min),
        max,
    })
}

fn starts_bound(state: &ParserState<'_>) -> bool {
    state
        .scanner
        .peek()
        .is_some_and(|c| is_quote(c) || is_unquoted_char(c))
}

fn bound(state: &mut ParserState<'_>, range_start: usize) -> ParseResult<Bound> {
    let result = primitive(state, true).and_then(|value| {
        Bound::from_nbt(value).ok_or_else(|| {
            state.error_from(
                range_start,
                ErrorCode::E0501,
                "range bounds must be numbers or strings",
            )
        })
    });
    if result.is_err() {
        state.scanner.set_cursor(range_start);
    }
    result
}

/// Suggestion for the start of any SNBT value.
pub(crate) fn value_start_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("{").with_tooltip("compound"),
        Suggestion::new("[").with_tooltip("list"),
        Suggestion::new("\"").with_tooltip("string"),
    ]
}

pub(crate) fn value_starts() -> SuggestionProducer {
    Arc::new(|_| value_start_suggestions())
}
