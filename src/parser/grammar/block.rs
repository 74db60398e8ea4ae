//! Block predicate and block function grammars
//!
//! ```text
//! block-predicate = '!'? ('*' | '#' resource | resource) properties? nbt?
//! block-function  = ('*' | resource) properties? nbt?
//! properties      = '[' (name sign value (',' name sign value)*)? ']'
//! ```

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::compound::{CompoundDialect, DuplicateKeys, Entry, parse_compound};
use super::nbt_function::function_value;
use super::nbt_predicate::predicate_value;
use crate::ide::{Suggestion, literals, owned};
use crate::parser::errors::{ErrorCode, ParseResult};
use crate::parser::leaf;
use crate::parser::sign::{
    BLOCK_FUNCTION_SIGNS, BLOCK_PREDICATE_SIGNS, Comparison, ParsedSign, Sign, SignSet,
};
use crate::parser::state::ParserState;
use crate::syntax::{
    BlockFunction, BlockPredicate, BlockTarget, PropertyPredicate, PropertyValue,
};

/// Parse a block predicate such as `#logs[axis=y]{Lock:*}`.
pub fn block_predicate(state: &mut ParserState<'_>) -> ParseResult<BlockPredicate> {
    state.restoring(|state| {
        state.scanner.skip_whitespace();
        state.suggest(literals(&[
            ("!", "not"),
            ("*", "any block"),
            ("#", "block tag"),
        ]));
        let negated = state.scanner.eat('!');
        if negated {
            state.suggest(literals(&[("*", "any block"), ("#", "block tag")]));
        }

        let target = if state.scanner.eat('*') {
            BlockTarget::Any
        } else if state.scanner.eat('#') {
            BlockTarget::Tag(leaf::resource_location(state)?)
        } else {
            BlockTarget::Block(leaf::resource_location(state)?)
        };

        offer_suffixes(state, true);
        let mut properties = Vec::new();
        if state.scanner.peek() == Some('[') {
            for entry in parse_compound(state, &PropertyPredicates)? {
                if let Entry::Set {
                    key,
                    value: (sign, value),
                } = entry
                {
                    properties.push(PropertyPredicate {
                        name: key,
                        comparison: sign.sign.comparison().unwrap_or(Comparison::Eq),
                        negated: sign.negated,
                        value,
                    });
                }
            }
            offer_suffixes(state, false);
        }

        let nbt = if state.scanner.peek() == Some('{') {
            let predicate = predicate_value(state, ParsedSign::implicit(Sign::Match))?;
            Some(predicate)
        } else {
            None
        };

        Ok(BlockPredicate {
            negated,
            target,
            properties,
            nbt,
        })
    })
}

/// Parse a block function such as `oak_log[axis=x]` or `*{CustomName:a}`.
pub fn block_function(state: &mut ParserState<'_>) -> ParseResult<BlockFunction> {
    state.restoring(|state| {
        state.scanner.skip_whitespace();
        state.suggest(literals(&[("*", "keep the current block")]));
        let block = if state.scanner.eat('*') {
            None
        } else {
            Some(leaf::resource_location(state)?)
        };

        offer_suffixes(state, true);
        let mut properties = IndexMap::new();
        if state.scanner.peek() == Some('[') {
            for entry in parse_compound(state, &PropertyAssignments)? {
                if let Entry::Set { key, value } = entry {
                    properties.insert(key, value);
                }
            }
            offer_suffixes(state, false);
        }

        let nbt = if state.scanner.peek() == Some('{') {
            Some(function_value(state, ParsedSign::implicit(Sign::Match))?)
        } else {
            None
        };

        Ok(BlockFunction {
            block,
            properties,
            nbt,
        })
    })
}

fn offer_suffixes(state: &mut ParserState<'_>, properties: bool) {
    let mut items = Vec::new();
    if properties {
        items.push(Suggestion::new("[").with_tooltip("block properties"));
    }
    items.push(Suggestion::new("{").with_tooltip("block entity data"));
    state.suggest(owned(items));
}

fn property_value(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<PropertyValue> {
    state.scanner.skip_whitespace();
    state.suggest(literals(&[("*", "any value")]));
    let start = state.cursor();
    if state.scanner.eat('*') {
        if sign.sign != Sign::Equals {
            return Err(state.error_from(
                start,
                ErrorCode::E0501,
                format!("'*' cannot follow '{}'", sign.sign),
            ));
        }
        return Ok(PropertyValue::Exists);
    }
    leaf::word(state).map(|word| PropertyValue::Value(word.into()))
}

struct PropertyPredicates;

impl CompoundDialect for PropertyPredicates {
    type Value = (ParsedSign, PropertyValue);

    fn delimiters(&self) -> (char, char) {
        ('[', ']')
    }

    fn signs(&self) -> SignSet {
        BLOCK_PREDICATE_SIGNS
    }

    fn duplicates(&self) -> DuplicateKeys {
        DuplicateKeys::Accumulate
    }

    fn parse_value(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<Self::Value> {
        property_value(state, sign).map(|value| (sign, value))
    }
}

struct PropertyAssignments;

impl CompoundDialect for PropertyAssignments {
    type Value = SmolStr;

    fn delimiters(&self) -> (char, char) {
        ('[', ']')
    }

    fn signs(&self) -> SignSet {
        BLOCK_FUNCTION_SIGNS
    }

    fn duplicates(&self) -> DuplicateKeys {
        DuplicateKeys::Overwrite
    }

    fn parse_value(&self, state: &mut ParserState<'_>, _: ParsedSign) -> ParseResult<SmolStr> {
        state.scanner.skip_whitespace();
        leaf::word(state).map(SmolStr::from)
    }
}
