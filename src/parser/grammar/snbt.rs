//! SNBT literals
//!
//! ```text
//! value    = compound | list | primitive
//! compound = '{' (key ':' value (',' key ':' value)*)? '}'
//! list     = '[' (value (',' value)*)? ']'
//! ```

use super::compound::{CompoundDialect, DuplicateKeys, Entry, parse_compound};
use super::list::{ListDialect, ListElement, parse_list};
use crate::parser::errors::ParseResult;
use crate::parser::leaf::{self, value_starts};
use crate::parser::sign::{ParsedSign, Sign, SignSet};
use crate::parser::state::ParserState;
use crate::syntax::Nbt;

const SNBT_SIGNS: SignSet = SignSet {
    signs: &[Sign::Match],
    negation: false,
};

/// Parse one SNBT value.
pub fn nbt_value(state: &mut ParserState<'_>) -> ParseResult<Nbt> {
    state.scanner.skip_whitespace();
    state.suggest(value_starts());
    match state.scanner.peek() {
        Some('{') => {
            let entries = parse_compound(state, &SnbtCompound)?;
            Ok(Nbt::Compound(
                entries
                    .into_iter()
                    .filter_map(|entry| match entry {
                        Entry::Set { key, value } => Some((key, value)),
                        Entry::Wildcard(_) | Entry::Remove(_) => None,
                    })
                    .collect(),
            ))
        }
        Some('[') => {
            let elements = parse_list(state, &SnbtList)?;
            Ok(Nbt::List(
                elements
                    .into_iter()
                    .map(|element| match element {
                        ListElement::Bare(value) | ListElement::Positional { value, .. } => value,
                    })
                    .collect(),
            ))
        }
        _ => leaf::primitive(state, false),
    }
}

struct SnbtCompound;

impl CompoundDialect for SnbtCompound {
    type Value = Nbt;

    fn delimiters(&self) -> (char, char) {
        ('{', '}')
    }

    fn signs(&self) -> SignSet {
        SNBT_SIGNS
    }

    fn duplicates(&self) -> DuplicateKeys {
        DuplicateKeys::Overwrite
    }

    fn parse_value(&self, state: &mut ParserState<'_>, _: ParsedSign) -> ParseResult<Nbt> {
        nbt_value(state)
    }
}

struct SnbtList;

impl ListDialect for SnbtList {
    type Value = Nbt;

    fn positional(&self) -> bool {
        false
    }

    fn signs(&self) -> SignSet {
        SNBT_SIGNS
    }

    fn parse_bare(&self, state: &mut ParserState<'_>) -> ParseResult<Nbt> {
        nbt_value(state)
    }

    fn parse_positional(&self, state: &mut ParserState<'_>, _: ParsedSign) -> ParseResult<Nbt> {
        nbt_value(state)
    }
}
