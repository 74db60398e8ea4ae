//! Suggestion-aware recursive-descent parsers
//!
//! ## Architecture
//!
//! ```text
//! Input text
//!     ↓
//! Scanner → cursor over the input, primitive reads
//!     ↓
//! ParserState → scanner + pending suggestions + resource limits
//!     ↓
//! Grammar (root production) → AST value or SyntaxError
//!     ↓
//! ParseOutcome → result + suggestions for the end of input
//! ```
//!
//! Every language has a strict entry point (`parse_*`) returning the AST,
//! and a completion entry point (`suggest_*`) returning what may be typed
//! where the parse stopped. Both run the same grammar through [`run`].

pub mod config;
pub mod errors;
pub mod grammar;
pub mod leaf;
pub mod lexer;
pub mod scanner;
pub mod sign;
pub mod state;

pub use config::ParserConfig;
pub use errors::{ErrorCode, ParseResult, SyntaxError};
pub use scanner::Scanner;
pub use sign::{Comparison, ParsedSign, Sign, SignSet};
pub use state::{Mark, ParserState};

use tracing::debug;

use crate::ide::{PendingSuggestions, Suggestions};
use crate::syntax::{
    BlockFunction, BlockPredicate, KeywordArgs, KeywordSchema, Nbt, NbtFunction, NbtPredicate,
    Position, PositionStyle, Region,
};

// =============================================================================
// Driver
// =============================================================================

/// What one run of a grammar produced.
#[derive(Debug, Clone)]
pub struct ParseOutcome<T> {
    pub result: ParseResult<T>,
    /// Recorded while parsing, whether or not it succeeded
    pub suggestions: PendingSuggestions,
}

impl<T> ParseOutcome<T> {
    /// Materialize the suggestions against the parsed input.
    pub fn resolve(&self, input: &str) -> Suggestions {
        self.suggestions.resolve(input)
    }
}

/// Run `grammar` over the whole of `input`.
///
/// Only whitespace may follow what the grammar consumed.
pub fn run<'a, T>(
    input: &'a str,
    config: &ParserConfig,
    grammar: impl FnOnce(&mut ParserState<'a>) -> ParseResult<T>,
) -> ParseOutcome<T> {
    if input.len() > config.max_input_len {
        let error = SyntaxError::new(
            format!("input is longer than {} bytes", config.max_input_len),
            crate::base::text_range(config.max_input_len, input.len()),
            ErrorCode::E0208,
        );
        debug!(len = input.len(), "input rejected");
        return ParseOutcome {
            result: Err(error),
            suggestions: PendingSuggestions::default(),
        };
    }

    let mut state = ParserState::with_config(input, config.clone());
    let result = grammar(&mut state).and_then(|value| {
        state.scanner.skip_whitespace();
        if state.scanner.can_read() {
            let start = state.cursor();
            state.scanner.set_cursor(input.len());
            return Err(state.error_from(start, ErrorCode::E0107, "trailing input"));
        }
        Ok(value)
    });
    if let Err(error) = &result {
        debug!(
            code = error.code.as_str(),
            structural = error.code.is_structural(),
            message = %error.message,
            "parse failed"
        );
    }

    ParseOutcome {
        result,
        suggestions: state.into_suggestions(),
    }
}

// =============================================================================
// Entry points
// =============================================================================

macro_rules! entry_points {
    ($($(#[$doc:meta])* $ty:ty => $parse:ident, $parse_with:ident, $suggest:ident, $suggest_with:ident = $grammar:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $parse(input: &str) -> ParseResult<$ty> {
                $parse_with(input, &ParserConfig::default())
            }

            pub fn $parse_with(input: &str, config: &ParserConfig) -> ParseResult<$ty> {
                run(input, config, $grammar).result
            }

            /// Completions for the end of `input`.
            pub fn $suggest(input: &str) -> Suggestions {
                $suggest_with(input, &ParserConfig::default())
            }

            pub fn $suggest_with(input: &str, config: &ParserConfig) -> Suggestions {
                run(input, config, $grammar).resolve(input)
            }
        )*
    };
}

entry_points! {
    /// Parse an NBT predicate such as `{Items:[{id:"minecraft:stone"}]}`.
    NbtPredicate => parse_nbt_predicate, parse_nbt_predicate_with,
        suggest_nbt_predicate, suggest_nbt_predicate_with = grammar::nbt_predicate;
    /// Parse an NBT function such as `{CustomName:"a", -Lock}`.
    NbtFunction => parse_nbt_function, parse_nbt_function_with,
        suggest_nbt_function, suggest_nbt_function_with = grammar::nbt_function;
    /// Parse a block predicate such as `#logs[axis=y]`.
    BlockPredicate => parse_block_predicate, parse_block_predicate_with,
        suggest_block_predicate, suggest_block_predicate_with = grammar::block_predicate;
    /// Parse a block function such as `oak_log[axis=x]`.
    BlockFunction => parse_block_function, parse_block_function_with,
        suggest_block_function, suggest_block_function_with = grammar::block_function;
    /// Parse a whitespace separated position such as `~ ~1 ~`.
    Position => parse_position, parse_position_with,
        suggest_position, suggest_position_with =
        |state| grammar::position(state, PositionStyle::Spaced);
    /// Parse a region such as `sphere radius=4 hollow=true`.
    Region => parse_region, parse_region_with,
        suggest_region, suggest_region_with = grammar::region;
}

/// Parse an SNBT literal such as `{a:1b,b:[2,3]}`.
pub fn parse_nbt(input: &str) -> ParseResult<Nbt> {
    run(input, &ParserConfig::default(), grammar::nbt_value).result
}

/// Parse keyword arguments such as `radius=2 hollow=true` against `schema`.
pub fn parse_keyword_args<'s>(input: &str, schema: &'s KeywordSchema) -> ParseResult<KeywordArgs<'s>> {
    parse_keyword_args_with(input, schema, &ParserConfig::default())
}

pub fn parse_keyword_args_with<'s>(
    input: &str,
    schema: &'s KeywordSchema,
    config: &ParserConfig,
) -> ParseResult<KeywordArgs<'s>> {
    run(input, config, |state| grammar::keyword_args(state, schema)).result
}

/// Completions for the end of a keyword argument list.
pub fn suggest_keyword_args(input: &str, schema: &KeywordSchema) -> Suggestions {
    suggest_keyword_args_with(input, schema, &ParserConfig::default())
}

pub fn suggest_keyword_args_with(input: &str, schema: &KeywordSchema, config: &ParserConfig) -> Suggestions {
    run(input, config, |state| grammar::keyword_args(state, schema)).resolve(input)
}
