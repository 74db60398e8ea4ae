//! NBT predicate grammar
//!
//! ```text
//! predicate = sign? value
//! value     = '*' | compound | list | range | primitive
//! ```
//!
//! The sign defaults to `:`. Bare list elements inherit the sign of their
//! list, so `=[1, 2]` compares both elements exactly.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::trace;

use super::compound::{CompoundDialect, DuplicateKeys, Entry, parse_compound};
use super::list::{ListDialect, ListElement, parse_list};
use crate::ide::Suggestion;
use crate::parser::errors::{ErrorCode, ParseResult};
use crate::parser::leaf::{self, Bound, Scalar, value_start_suggestions};
use crate::parser::sign::{Comparison, NBT_PREDICATE_SIGNS, ParsedSign, Sign, SignSet};
use crate::parser::state::ParserState;
use crate::syntax::{MatchKey, NbtPredicate, Pattern};

/// Parse a predicate with the default sign `:`.
pub fn nbt_predicate(state: &mut ParserState<'_>) -> ParseResult<NbtPredicate> {
    predicate_with_default(state, Sign::Match)
}

/// Parse a predicate whose omitted sign means `default`.
pub fn predicate_with_default(
    state: &mut ParserState<'_>,
    default: Sign,
) -> ParseResult<NbtPredicate> {
    state.restoring(|state| {
        let sign = NBT_PREDICATE_SIGNS.parse(state, false, default)?;
        predicate_value(state, sign)
    })
}

/// Parse the value after an already parsed sign.
pub fn predicate_value(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtPredicate> {
    state.scanner.skip_whitespace();
    state.suggest_also([value_starts()]);
    let start = state.cursor();

    let predicate = match state.scanner.peek() {
        Some('*') => {
            state.scanner.bump();
            if !matches!(sign.sign, Sign::Match | Sign::Equals) {
                return Err(state.error_from(
                    start,
                    ErrorCode::E0501,
                    format!("'*' cannot follow '{}'", sign.sign),
                ));
            }
            return Ok(NbtPredicate::Constant(!sign.negated));
        }
        Some('{') => compound(state, sign)?,
        Some('[') => list(state, sign)?,
        _ => scalar(state, sign, start)?,
    };

    Ok(if sign.negated {
        NbtPredicate::Not(Box::new(predicate))
    } else {
        predicate
    })
}

fn value_starts() -> crate::ide::SuggestionProducer {
    Arc::new(|_| {
        let mut items = vec![Suggestion::new("*").with_tooltip("any value")];
        items.extend(value_start_suggestions());
        items
    })
}

fn structure_sign(state: &ParserState<'_>, sign: ParsedSign, what: &str) -> ParseResult<bool> {
    match sign.sign {
        Sign::Match => Ok(false),
        Sign::Equals => Ok(true),
        other => Err(state
            .error_here(ErrorCode::E0501, format!("'{other}' cannot compare a {what}"))
            .with_hint("use ':' to match or '=' to compare exactly")),
    }
}

// =============================================================================
// Compounds
// =============================================================================

struct PredicateCompound {
    equals: bool,
}

impl CompoundDialect for PredicateCompound {
    type Value = NbtPredicate;

    fn delimiters(&self) -> (char, char) {
        ('{', '}')
    }

    fn signs(&self) -> SignSet {
        NBT_PREDICATE_SIGNS
    }

    fn wildcard_keys(&self) -> bool {
        !self.equals
    }

    fn duplicates(&self) -> DuplicateKeys {
        if self.equals {
            DuplicateKeys::Reject
        } else {
            DuplicateKeys::Accumulate
        }
    }

    fn parse_value(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtPredicate> {
        predicate_value(state, sign)
    }
}

fn compound(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtPredicate> {
    let equals = structure_sign(state, sign, "compound")?;
    let entries = parse_compound(state, &PredicateCompound { equals })?;

    if equals {
        let mut exact = IndexMap::with_capacity(entries.len());
        for entry in entries {
            if let Entry::Set { key, value } = entry {
                exact.insert(key, value);
            }
        }
        return Ok(NbtPredicate::EqualsCompound(exact));
    }

    let mut grouped: IndexMap<MatchKey, Vec<NbtPredicate>> = IndexMap::new();
    for entry in entries {
        let (key, value) = match entry {
            Entry::Set { key, value } => (MatchKey::Named(key), value),
            Entry::Wildcard(value) => (MatchKey::Wildcard, value),
            Entry::Remove(_) => continue,
        };
        grouped.entry(key).or_default().push(value);
    }
    Ok(NbtPredicate::MatchCompound(grouped))
}

// =============================================================================
// Lists
// =============================================================================

struct PredicateList {
    equals: bool,
}

impl ListDialect for PredicateList {
    type Value = NbtPredicate;

    fn positional(&self) -> bool {
        !self.equals
    }

    fn signs(&self) -> SignSet {
        NBT_PREDICATE_SIGNS
    }

    fn parse_bare(&self, state: &mut ParserState<'_>) -> ParseResult<NbtPredicate> {
        let default = if self.equals { Sign::Equals } else { Sign::Match };
        predicate_with_default(state, default)
    }

    fn parse_positional(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtPredicate> {
        predicate_value(state, sign)
    }
}

fn list(state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<NbtPredicate> {
    let equals = structure_sign(state, sign, "list")?;
    let elements = parse_list(state, &PredicateList { equals })?;

    if equals {
        let ordinal = elements
            .into_iter()
            .map(|element| match element {
                ListElement::Bare(value) | ListElement::Positional { value, .. } => value,
            })
            .collect();
        return Ok(NbtPredicate::EqualsList(ordinal));
    }

    let mut bare = Vec::new();
    let mut positional = IndexMap::new();
    for element in elements {
        match element {
            ListElement::Bare(value) => bare.push(value),
            ListElement::Positional { index, value } => {
                positional.insert(index, value);
            }
        }
    }
    Ok(NbtPredicate::MatchList {
        elements: bare,
        positional,
    })
}

// =============================================================================
// Scalars
// =============================================================================

fn scalar(state: &mut ParserState<'_>, sign: ParsedSign, start: usize) -> ParseResult<NbtPredicate> {
    match sign.sign {
        Sign::Regex => {
            let source = leaf::word(state)?;
            Pattern::new(&source).map(NbtPredicate::Regex).map_err(|err| {
                let error = state.error_from(
                    start,
                    ErrorCode::E0502,
                    format!("invalid regular expression '{source}'"),
                );
                state.scanner.set_cursor(start);
                error.with_hint(err.to_string())
            })
        }
        Sign::Match => Ok(match leaf::scalar(state)? {
            Scalar::Value(value) => match value.as_f64() {
                Some(number) => NbtPredicate::Compare {
                    op: Comparison::Eq,
                    value: number,
                },
                None => NbtPredicate::Equals(value),
            },
            Scalar::Range { min, max } => range(min, max),
        }),
        Sign::Equals => leaf::primitive(state, false).map(NbtPredicate::Equals),
        ordering => {
            let value = leaf::primitive(state, false)?;
            match (value.as_f64(), ordering.comparison()) {
                (Some(number), Some(op)) => Ok(NbtPredicate::Compare { op, value: number }),
                _ => {
                    let error = state.error_from(
                        start,
                        ErrorCode::E0501,
                        format!("'{ordering}' needs a number, found {}", value.type_name()),
                    );
                    state.scanner.set_cursor(start);
                    Err(error)
                }
            }
        }
    }
}

fn range(min: Option<Bound>, max: Option<Bound>) -> NbtPredicate {
    let text = matches!(min, Some(Bound::Text(_))) || matches!(max, Some(Bound::Text(_)));
    trace!(text, "range predicate");
    if text {
        let as_text = |bound: Option<Bound>| match bound {
            Some(Bound::Text(text)) => Some(text),
            _ => None,
        };
        NbtPredicate::StringRange {
            min: as_text(min),
            max: as_text(max),
        }
    } else {
        let as_number = |bound: Option<Bound>| match bound {
            Some(Bound::Number(number)) => Some(number),
            _ => None,
        };
        NbtPredicate::NumberRange {
            min: as_number(min),
            max: as_number(max),
        }
    }
}
