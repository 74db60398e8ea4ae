//! Region grammar
//!
//! ```text
//! region = shape (whitespace keyword-args)?
//! shape  = 'box' | 'sphere' | 'cylinder'
//! ```

use super::keywords::keyword_args;
use crate::ide::words;
use crate::parser::errors::{ErrorCode, ParseResult};
use crate::parser::state::ParserState;
use crate::syntax::{KeywordArgs, Region, Shape};

/// Parse a shape name and its arguments into a [`Region`].
pub fn region(state: &mut ParserState<'_>) -> ParseResult<Region> {
    state.restoring(|state| {
        state.scanner.skip_whitespace();
        state.suggest(words(Shape::NAMES));
        let start = state.cursor();
        let name = state.scanner.read_unquoted();
        let Some(shape) = Shape::from_name(name) else {
            return Err(state
                .error_from(start, ErrorCode::E0302, format!("unknown shape '{name}'"))
                .with_hint(format!("expected one of {}", Shape::NAMES.join(", "))));
        };

        let args_start = state.cursor();
        let args = if state.scanner.skip_whitespace() {
            keyword_args(state, shape.schema())?
        } else if state.scanner.can_read() {
            let found = state.scanner.peek().unwrap_or_default();
            return Err(state.error_here(
                ErrorCode::E0101,
                format!("expected whitespace after '{name}', found '{found}'"),
            ));
        } else {
            KeywordArgs::new(shape.schema(), Default::default())
        };

        Region::from_args(shape, &args)
            .map_err(|err| err.into_syntax_error(state.scanner.range_from(args_start)))
    })
}
