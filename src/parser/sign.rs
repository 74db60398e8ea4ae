//! Comparison signs in front of values.
//!
//! Each grammar dialect allows a subset of the signs and may or may not
//! allow negation with `!`. The dialect is described by a [`SignSet`].

use std::fmt;

use tracing::trace;

use super::errors::{ErrorCode, ParseResult};
use super::state::ParserState;
use crate::ide::{Suggestion, SuggestionProducer};

/// A sign written in front of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `:` loose match
    Match,
    /// `=` exact equality
    Equals,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    /// `~` regular expression
    Regex,
}

impl Sign {
    /// Longest spelling first so `<=` wins over `<`.
    const BY_LENGTH: [Sign; 7] = [
        Sign::LessEq,
        Sign::GreaterEq,
        Sign::Less,
        Sign::Greater,
        Sign::Match,
        Sign::Equals,
        Sign::Regex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Match => ":",
            Sign::Equals => "=",
            Sign::Less => "<",
            Sign::LessEq => "<=",
            Sign::Greater => ">",
            Sign::GreaterEq => ">=",
            Sign::Regex => "~",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Sign::Match => "matches",
            Sign::Equals => "equals",
            Sign::Less => "less than",
            Sign::LessEq => "less than or equal to",
            Sign::Greater => "greater than",
            Sign::GreaterEq => "greater than or equal to",
            Sign::Regex => "matches regular expression",
        }
    }

    fn negated_tooltip(self) -> &'static str {
        match self {
            Sign::Equals => "does not equal",
            Sign::Regex => "does not match regular expression",
            _ => "does not match",
        }
    }

    /// Only `:`, `=` and `~` may follow `!`.
    pub fn is_negatable(self) -> bool {
        matches!(self, Sign::Match | Sign::Equals | Sign::Regex)
    }

    pub fn comparison(self) -> Option<Comparison> {
        match self {
            Sign::Match | Sign::Equals => Some(Comparison::Eq),
            Sign::Less => Some(Comparison::Less),
            Sign::LessEq => Some(Comparison::LessEq),
            Sign::Greater => Some(Comparison::Greater),
            Sign::GreaterEq => Some(Comparison::GreaterEq),
            Sign::Regex => None,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric comparison selected by a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Comparison {
    pub fn test<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Comparison::Eq => lhs == rhs,
            Comparison::Less => lhs < rhs,
            Comparison::LessEq => lhs <= rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::GreaterEq => lhs >= rhs,
        }
    }

    /// The sign spelling, using `eq` for equality.
    pub fn sign(self, eq: Sign) -> Sign {
        match self {
            Comparison::Eq => eq,
            Comparison::Less => Sign::Less,
            Comparison::LessEq => Sign::LessEq,
            Comparison::Greater => Sign::Greater,
            Comparison::GreaterEq => Sign::GreaterEq,
        }
    }
}

/// The sign found in front of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSign {
    pub sign: Sign,
    pub negated: bool,
    /// Whether the sign was written or defaulted
    pub explicit: bool,
}

impl ParsedSign {
    /// A sign that was not written.
    pub fn implicit(sign: Sign) -> Self {
        Self {
            sign,
            negated: false,
            explicit: false,
        }
    }

    pub fn uses_equals(&self) -> bool {
        self.sign == Sign::Equals
    }
}

/// The signs a dialect accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignSet {
    pub signs: &'static [Sign],
    pub negation: bool,
}

/// `: = < <= > >= ~` with negation.
pub const NBT_PREDICATE_SIGNS: SignSet = SignSet {
    signs: &[
        Sign::Match,
        Sign::Equals,
        Sign::Less,
        Sign::LessEq,
        Sign::Greater,
        Sign::GreaterEq,
        Sign::Regex,
    ],
    negation: true,
};

/// `:` merges and `=` replaces.
pub const NBT_FUNCTION_SIGNS: SignSet = SignSet {
    signs: &[Sign::Match, Sign::Equals],
    negation: false,
};

pub const BLOCK_PREDICATE_SIGNS: SignSet = SignSet {
    signs: &[
        Sign::Equals,
        Sign::Less,
        Sign::LessEq,
        Sign::Greater,
        Sign::GreaterEq,
    ],
    negation: true,
};

pub const BLOCK_FUNCTION_SIGNS: SignSet = SignSet {
    signs: &[Sign::Equals],
    negation: false,
};

const MATCH_OR_EQUALS: SignSet = SignSet {
    signs: &[Sign::Match, Sign::Equals],
    negation: true,
};

impl SignSet {
    pub fn contains(&self, sign: Sign) -> bool {
        self.signs.contains(&sign)
    }

    /// Everything that may be typed at a sign position.
    pub fn producer(&self) -> SuggestionProducer {
        let set = *self;
        std::sync::Arc::new(move |_| {
            let mut items: Vec<Suggestion> = set
                .signs
                .iter()
                .map(|sign| Suggestion::new(sign.as_str()).with_tooltip(sign.tooltip()))
                .collect();
            if set.negation {
                items.extend(set.signs.iter().filter(|s| s.is_negatable()).map(|sign| {
                    Suggestion::new(format!("!{}", sign.as_str())).with_tooltip(sign.negated_tooltip())
                }));
            }
            items
        })
    }

    /// Parse an optional `!` and a sign from this set.
    ///
    /// Without a sign the result is `default` and nothing is consumed,
    /// unless `must_have_sign`, in which case E0102 covers what was consumed
    /// and the cursor is restored.
    pub fn parse(
        &self,
        state: &mut ParserState<'_>,
        must_have_sign: bool,
        default: Sign,
    ) -> ParseResult<ParsedSign> {
        let before = state.cursor();
        state.scanner.skip_whitespace();
        let start = state.cursor();
        if must_have_sign {
            state.suggest(self.producer());
        } else {
            state.suggest_also([self.producer()]);
        }

        let negated = self.negation && state.scanner.eat('!');
        match self.read_sign(state) {
            Some(sign) if negated && !sign.is_negatable() => {
                let err = state.error_from(
                    start,
                    ErrorCode::E0102,
                    format!("'{}' cannot be negated", sign.as_str()),
                );
                state.scanner.set_cursor(start);
                Err(err)
            }
            Some(sign) => Ok(ParsedSign {
                sign,
                negated,
                explicit: true,
            }),
            None if negated || must_have_sign => {
                let err = state
                    .error_from(start, ErrorCode::E0102, "sign expected")
                    .with_hint(self.hint());
                state.scanner.set_cursor(start);
                Err(err)
            }
            None => {
                trace!(sign = default.as_str(), "defaulted sign");
                state.scanner.set_cursor(before);
                Ok(ParsedSign::implicit(default))
            }
        }
    }

    fn read_sign(&self, state: &mut ParserState<'_>) -> Option<Sign> {
        Sign::BY_LENGTH
            .into_iter()
            .find(|sign| self.contains(*sign) && state.scanner.eat_str(sign.as_str()))
    }

    fn hint(&self) -> String {
        let spelled: Vec<String> = self
            .signs
            .iter()
            .map(|sign| format!("'{}'", sign.as_str()))
            .collect();
        format!("expected one of {}", spelled.join(", "))
    }
}

/// Parse a `:` or `=` sign, returning `(uses_equals, negated)`.
pub fn parse_sign(
    state: &mut ParserState<'_>,
    must_have_sign: bool,
    equals_is_default: bool,
) -> ParseResult<(bool, bool)> {
    let default = if equals_is_default {
        Sign::Equals
    } else {
        Sign::Match
    };
    let parsed = MATCH_OR_EQUALS.parse(state, must_have_sign, default)?;
    Ok((parsed.uses_equals(), parsed.negated))
}
