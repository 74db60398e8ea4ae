//! NBT function grammar
//!
//! ```text
//! function = sign? (compound | list | primitive)
//! ```
//!
//! `:` merges into the existing value and `=` replaces it. Inside a merging
//! compound `-key` removes a key.

use std::sync::Arc;

use tracing::trace;

use super::compound::{CompoundDialect, DuplicateKeys, Entry, parse_compound};
use super::list::{FunctionListBody, ListDialect, ListElement, parse_function_list};
use crate::ide::SuggestionProducer;
use crate::parser::errors::ParseResult;
use crate::parser::leaf::{self, value_start_suggestions};
use crate::parser::sign::{NBT_FUNCTION_SIGNS, ParsedSign, Sign, SignSet};
use crate::parser::state::ParserState;
use crate::syntax::{ListFunction, NbtFunction};

/// Parse a function with the default sign `:`.
pub fn nbt_function(state: &mut ParserState<'_>) -> ParseResult<NbtFunction> {
    state.restoring(|state| {
        let sign = NBT_FUNCTION_SIGNS.parse(state, false, Sign::Match)?;
        function_value(state, sign)
    })
}

/// Parse the value after an already parsed sign.
pub fn function_value(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtFunction> {
    state.scanner.skip_whitespace();
    state.suggest_also([value_starts()]);
    match state.scanner.peek() {
        Some('{') => compound(state, sign),
        Some('[') => list(state, sign),
        _ => leaf::primitive(state, false).map(NbtFunction::Simple),
    }
}

fn value_starts() -> SuggestionProducer {
    Arc::new(|_| value_start_suggestions())
}

struct FunctionCompound {
    merge: bool,
}

impl CompoundDialect for FunctionCompound {
    type Value = NbtFunction;

    fn delimiters(&self) -> (char, char) {
        ('{', '}')
    }

    fn signs(&self) -> SignSet {
        NBT_FUNCTION_SIGNS
    }

    fn key_removal(&self) -> bool {
        self.merge
    }

    fn duplicates(&self) -> DuplicateKeys {
        DuplicateKeys::Overwrite
    }

    fn parse_value(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtFunction> {
        function_value(state, sign)
    }
}

fn compound(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtFunction> {
    let merge = !sign.uses_equals();
    let entries = parse_compound(state, &FunctionCompound { merge })?
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Set { key, value } => Some((key, Some(value))),
            Entry::Remove(key) => Some((key, None)),
            Entry::Wildcard(_) => None,
        })
        .collect();
    Ok(NbtFunction::Compound { merge, entries })
}

struct FunctionList;

impl ListDialect for FunctionList {
    type Value = NbtFunction;

    fn positional(&self) -> bool {
        true
    }

    fn signs(&self) -> SignSet {
        NBT_FUNCTION_SIGNS
    }

    fn parse_bare(&self, state: &mut ParserState<'_>) -> ParseResult<NbtFunction> {
        nbt_function(state)
    }

    fn parse_positional(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtFunction> {
        function_value(state, sign)
    }
}

fn list(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtFunction> {
    let body = parse_function_list(state, &FunctionList)?;
    Ok(NbtFunction::List(list_function(body, sign.uses_equals())))
}

/// Turn list sections into edits.
///
/// Without `...` bare insertions append; with it they go in front of the
/// kept elements, or after them once past the `...`.
fn list_function(body: FunctionListBody<NbtFunction>, replace: bool) -> ListFunction {
    let mut function = ListFunction::default();
    let mut replacement = Vec::new();
    let mut any_bare = false;

    for element in body.left {
        match element {
            ListElement::Bare(value) => {
                any_bare = true;
                replacement.push(value);
            }
            ListElement::Positional { index, value } => {
                if function.edits.insert(index, value).is_some() {
                    trace!(index, "overwriting list edit");
                }
            }
        }
    }
    if replace || any_bare {
        function.replacement = Some(replacement);
    }

    let before_default = if body.has_ellipsis { 0 } else { -1 };
    for element in body.right_before {
        let (index, value) = match element {
            ListElement::Bare(value) => (before_default, value),
            ListElement::Positional { index, value } => (index, value),
        };
        function.insertions.entry(index).or_default().push(value);
    }
    for element in body.right_after {
        let (index, value) = match element {
            ListElement::Bare(value) => (-1, value),
            ListElement::Positional { index, value } => (-index - 1, value),
        };
        function.insertions.entry(index).or_default().push(value);
    }
    function
}
