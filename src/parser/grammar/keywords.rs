//! Keyword-argument grammar
//!
//! ```text
//! keyword-args = (name '=' value (whitespace name '=' value)*)?
//! ```
//!
//! Which names exist and how each value is read comes from a
//! [`KeywordSchema`].

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::block::{block_function, block_predicate};
use super::nbt_function::nbt_function;
use super::nbt_predicate::nbt_predicate;
use super::position::position;
use crate::ide::{Suggestion, literal, owned};
use crate::parser::errors::{ErrorCode, ParseResult};
use crate::parser::leaf;
use crate::parser::state::ParserState;
use crate::syntax::{ArgGrammar, ArgValue, KeywordArgs, KeywordSchema, PositionStyle};

/// Parse `name=value` pairs until the end of input.
pub fn keyword_args<'s>(
    state: &mut ParserState<'_>,
    schema: &'s KeywordSchema,
) -> ParseResult<KeywordArgs<'s>> {
    state.restoring(|state| {
        // Names outside the schema or repeated fail before the bound is reached
        let limit = state.config().max_arguments;
        let mut values: IndexMap<SmolStr, ArgValue> = IndexMap::new();

        for given in 0..=limit {
            state.scanner.skip_whitespace();
            offer_names(state, schema, &values);
            if !state.scanner.can_read() {
                return Ok(KeywordArgs::new(schema, values));
            }
            if given == limit {
                break;
            }

            let start = state.cursor();
            let name = state.scanner.read_identifier();
            if name.is_empty() {
                let message = match state.scanner.peek() {
                    Some(found) => format!("expected argument name, found '{found}'"),
                    None => "expected argument name".to_string(),
                };
                return Err(state.error_here(ErrorCode::E0303, message));
            }
            let Some(param) = schema.param(name) else {
                let names: Vec<&str> = schema.names().map(SmolStr::as_str).collect();
                let err = state
                    .error_from(start, ErrorCode::E0301, format!("unknown argument '{name}'"))
                    .with_hint(format!("expected one of {}", names.join(", ")));
                state.scanner.set_cursor(start);
                return Err(err);
            };
            if values.contains_key(name) {
                let err = state.error_from(
                    start,
                    ErrorCode::E0402,
                    format!("argument '{name}' given more than once"),
                );
                state.scanner.set_cursor(start);
                return Err(err);
            }

            state.suggest(literal("=", None));
            state.expect('=')?;
            state.clear_suggestions();

            let value = arg_value(state, &param.grammar)?;
            values.insert(SmolStr::new(name), value);

            if state.scanner.can_read() && !state.scanner.skip_whitespace() {
                let found = state.scanner.peek().unwrap_or_default();
                return Err(state.error_here(
                    ErrorCode::E0101,
                    format!("expected whitespace after argument '{name}', found '{found}'"),
                ));
            }
        }

        Err(state.error_here(
            ErrorCode::E0902,
            format!("more than {limit} arguments"),
        ))
    })
}

fn offer_names(state: &mut ParserState<'_>, schema: &KeywordSchema, given: &IndexMap<SmolStr, ArgValue>) {
    let items = schema
        .names()
        .filter(|name| !given.contains_key(*name))
        .filter_map(|name| {
            let param = schema.param(name)?;
            Some(Suggestion::new(format!("{name}=")).with_tooltip(param.grammar.type_name()))
        })
        .collect();
    state.suggest(owned(items));
}

/// Read one value with the grammar its parameter declares.
pub fn arg_value(state: &mut ParserState<'_>, grammar: &ArgGrammar) -> ParseResult<ArgValue> {
    Ok(match *grammar {
        ArgGrammar::Bool => ArgValue::Bool(leaf::boolean(state)?),
        ArgGrammar::Int { min, max } => ArgValue::Int(leaf::int_in(state, min, max)?),
        ArgGrammar::Float { min, max } => ArgValue::Float(leaf::float_in(state, min, max)?),
        ArgGrammar::Word => ArgValue::Word(leaf::word(state)?.into()),
        ArgGrammar::Enum(values) => ArgValue::Enum(leaf::enumerant(state, values)?),
        ArgGrammar::Position => ArgValue::Position(position(state, PositionStyle::Compact)?),
        ArgGrammar::NbtPredicate => ArgValue::NbtPredicate(nbt_predicate(state)?),
        ArgGrammar::NbtFunction => ArgValue::NbtFunction(nbt_function(state)?),
        ArgGrammar::BlockPredicate => ArgValue::BlockPredicate(block_predicate(state)?),
        ArgGrammar::BlockFunction => ArgValue::BlockFunction(block_function(state)?),
    })
}
