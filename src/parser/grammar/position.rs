//! Position grammar
//!
//! ```text
//! position   = coordinate sep coordinate sep coordinate
//! coordinate = '~' number? | '^' number? | number
//! sep        = whitespace (spaced) | ',' (compact)
//! ```

use std::sync::Arc;

use crate::ide::Suggestion;
use crate::parser::errors::{ErrorCode, ParseResult, SyntaxError};
use crate::parser::state::ParserState;
use crate::syntax::{Coordinate, Position, PositionStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    World(Coordinate),
    Local(f64),
}

/// Parse three coordinates separated according to `style`.
pub fn position(state: &mut ParserState<'_>, style: PositionStyle) -> ParseResult<Position> {
    state.restoring(|state| {
        if style == PositionStyle::Spaced {
            state.scanner.skip_whitespace();
        }
        Ok(match component(state, style, true)? {
            Component::World(x) => Position::World {
                x,
                y: world(state, style)?,
                z: world(state, style)?,
            },
            Component::Local(left) => Position::Local {
                left,
                up: local(state, style)?,
                forward: local(state, style)?,
            },
        })
    })
}

/// A later coordinate of a world position.
fn world(state: &mut ParserState<'_>, style: PositionStyle) -> ParseResult<Coordinate> {
    let start = following(state, style)?;
    match component(state, style, false)? {
        Component::World(coordinate) => Ok(coordinate),
        Component::Local(_) => Err(mixed(state, start)),
    }
}

/// A later coordinate of a local position.
fn local(state: &mut ParserState<'_>, style: PositionStyle) -> ParseResult<f64> {
    let start = following(state, style)?;
    match component(state, style, false)? {
        Component::Local(value) => Ok(value),
        Component::World(_) => Err(mixed(state, start)),
    }
}

/// Consume the separator, returning where the next coordinate starts.
fn following(state: &mut ParserState<'_>, style: PositionStyle) -> ParseResult<usize> {
    separator(state, style)?;
    Ok(state.cursor())
}

fn mixed(state: &ParserState<'_>, start: usize) -> SyntaxError {
    state
        .error_from(start, ErrorCode::E0501, "cannot mix local and world coordinates")
        .with_hint("use '^' for all three coordinates or for none")
}

fn component(
    state: &mut ParserState<'_>,
    style: PositionStyle,
    first: bool,
) -> ParseResult<Component> {
    state.suggest(Arc::new(move |_| {
        let mut items = Vec::new();
        if first {
            let sep = style.separator();
            items.push(Suggestion::new(format!("~{sep}~{sep}~")).with_tooltip("here"));
            items.push(Suggestion::new(format!("^{sep}^{sep}^")).with_tooltip("here, facing forward"));
        }
        items.push(Suggestion::new("~").with_tooltip("relative"));
        items.push(Suggestion::new("^").with_tooltip("local"));
        items
    }));

    if state.scanner.eat('~') {
        return offset(state).map(|value| Component::World(Coordinate::relative(value)));
    }
    if state.scanner.eat('^') {
        return offset(state).map(Component::Local);
    }
    state
        .scanner
        .read_f64()
        .map(|value| Component::World(Coordinate::absolute(value)))
}

/// The optional number after `~` or `^`.
fn offset(state: &mut ParserState<'_>) -> ParseResult<f64> {
    match state.scanner.peek() {
        Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => state.scanner.read_f64(),
        _ => Ok(0.0),
    }
}

fn separator(state: &mut ParserState<'_>, style: PositionStyle) -> ParseResult<()> {
    match style {
        PositionStyle::Spaced => {
            if state.scanner.skip_whitespace() {
                return Ok(());
            }
            let message = match state.scanner.peek() {
                Some(found) => format!("expected whitespace between coordinates, found '{found}'"),
                None => "expected whitespace between coordinates".to_string(),
            };
            Err(state.error_here(ErrorCode::E0101, message))
        }
        PositionStyle::Compact => state.expect(','),
    }
}
