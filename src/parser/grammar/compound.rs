//! Generic compound parsing
//!
//! One engine serves NBT compounds and block property lists. What differs
//! between them is described by a [`CompoundDialect`]:
//!
//! ```text
//! compound = open (entry (',' entry)*)? close
//! entry    = key sign value
//!          | '*' sign value          (wildcard keys)
//!          | '-' key                 (key removal)
//! ```

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::ide::{Suggestion, owned};
use crate::parser::errors::{ErrorCode, ParseResult};
use crate::parser::leaf;
use crate::parser::sign::{ParsedSign, SignSet};
use crate::parser::state::ParserState;

/// What happens when a key appears twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Fail with E0401
    Reject,
    /// Last write wins, the first position is kept
    Overwrite,
    /// Keep every entry
    Accumulate,
}

/// One parsed compound entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<V> {
    Set { key: SmolStr, value: V },
    Wildcard(V),
    Remove(SmolStr),
}

impl<V> Entry<V> {
    pub fn key(&self) -> Option<&SmolStr> {
        match self {
            Entry::Set { key, .. } | Entry::Remove(key) => Some(key),
            Entry::Wildcard(_) => None,
        }
    }
}

/// Describes one flavour of compound.
pub trait CompoundDialect {
    type Value;

    /// Opening and closing characters.
    fn delimiters(&self) -> (char, char);

    /// Signs allowed between key and value.
    fn signs(&self) -> SignSet;

    /// Whether `*` may stand in for a key.
    fn wildcard_keys(&self) -> bool {
        false
    }

    /// Whether `-key` removes a key.
    fn key_removal(&self) -> bool {
        false
    }

    fn duplicates(&self) -> DuplicateKeys;

    /// Parse the value following `sign`.
    fn parse_value(&self, state: &mut ParserState<'_>, sign: ParsedSign) -> ParseResult<Self::Value>;
}

/// Parse a compound in the given dialect.
pub fn parse_compound<D: CompoundDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<Vec<Entry<D::Value>>> {
    let (open, close) = dialect.delimiters();
    state.restoring(|state| {
        state.nested(|state| {
            let open_at = state.cursor();
            state.expect(open)?;

            let mut entries: Vec<Entry<D::Value>> = Vec::new();
            let mut slots: FxHashMap<SmolStr, usize> = FxHashMap::default();

            state.scanner.skip_whitespace();
            offer_entry_start(state, dialect, Some(close));
            if state.scanner.eat(close) {
                state.clear_suggestions();
                return Ok(entries);
            }

            loop {
                let entry_start = state.cursor();
                let entry = parse_entry(state, dialect)?;

                match entry.key().cloned() {
                    Some(key) => match slots.get(&key) {
                        Some(&slot) => match dialect.duplicates() {
                            DuplicateKeys::Reject => {
                                return Err(state.error_from(
                                    entry_start,
                                    ErrorCode::E0401,
                                    format!("duplicate key '{key}'"),
                                ));
                            }
                            DuplicateKeys::Overwrite => {
                                trace!(key = %key, "overwriting duplicate key");
                                entries[slot] = entry;
                            }
                            DuplicateKeys::Accumulate => entries.push(entry),
                        },
                        None => {
                            slots.insert(key, entries.len());
                            entries.push(entry);
                        }
                    },
                    None => entries.push(entry),
                }

                state.scanner.skip_whitespace();
                state.suggest(separators(close));
                if state.scanner.eat(',') {
                    state.scanner.skip_whitespace();
                    offer_entry_start(state, dialect, None);
                    continue;
                }
                if state.scanner.eat(close) {
                    state.clear_suggestions();
                    return Ok(entries);
                }
                return Err(match state.scanner.peek() {
                    None => {
                        let (code, what) = if open == '{' {
                            (ErrorCode::E0201, "compound")
                        } else {
                            (ErrorCode::E0202, "property list")
                        };
                        state
                            .error_from(open_at, code, format!("unclosed {what}"))
                            .with_hint(format!("add '{close}'"))
                    }
                    Some(found) => state.error_here(
                        ErrorCode::E0101,
                        format!("expected ',' or '{close}', found '{found}'"),
                    ),
                });
            }
        })
    })
}

fn parse_entry<D: CompoundDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<Entry<D::Value>> {
    let signs = dialect.signs();
    let required = signs.signs[0];

    if dialect.wildcard_keys() && state.scanner.eat('*') {
        let sign = signs.parse(state, true, required)?;
        return dialect.parse_value(state, sign).map(Entry::Wildcard);
    }
    if dialect.key_removal() && state.scanner.eat('-') {
        let key = leaf::key(state)?;
        return Ok(Entry::Remove(key.into()));
    }

    let key = leaf::key(state)?;
    let sign = signs.parse(state, true, required)?;
    let value = dialect.parse_value(state, sign)?;
    Ok(Entry::Set {
        key: key.into(),
        value,
    })
}

fn offer_entry_start<D: CompoundDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
    close: Option<char>,
) {
    let mut items = Vec::new();
    if let Some(close) = close {
        items.push(Suggestion::new(close.to_string()));
    }
    if dialect.wildcard_keys() {
        items.push(Suggestion::new("*").with_tooltip("any key"));
    }
    if dialect.key_removal() {
        items.push(Suggestion::new("-").with_tooltip("remove key"));
    }
    state.suggest(owned(items));
}

fn separators(close: char) -> crate::ide::SuggestionProducer {
    owned(vec![Suggestion::new(","), Suggestion::new(close.to_string())])
}
