//! NBT predicates: tests over tag values.
//!
//! A predicate is built from a sign and a value. `:` matches loosely
//! (compounds need only the listed keys, lists need only contain the
//! listed elements), `=` compares exactly, `< <= > >=` compare numbers,
//! `~` matches a regular expression and `!` negates.

use std::fmt;

use indexmap::IndexMap;
use regex::Regex;
use smol_str::SmolStr;

use super::nbt::{Nbt, write_key};
use crate::base::quote;
use crate::parser::sign::{Comparison, Sign};

/// A compiled regular expression compared by its source text.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Key of a match-mode compound entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchKey {
    Named(SmolStr),
    /// `*`: any key
    Wildcard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NbtPredicate {
    /// `*`: the value is present (`true`) or absent (`false`)
    Constant(bool),
    /// Exact equality
    Equals(Nbt),
    /// String matches the pattern
    Regex(Pattern),
    /// Number compared against `value`
    Compare { op: Comparison, value: f64 },
    /// Number within the inclusive bounds
    NumberRange { min: Option<f64>, max: Option<f64> },
    /// String within the inclusive bounds
    StringRange {
        min: Option<String>,
        max: Option<String>,
    },
    /// Compound with exactly these keys
    EqualsCompound(IndexMap<SmolStr, NbtPredicate>),
    /// Compound where every key matches at least one of its predicates
    MatchCompound(IndexMap<MatchKey, Vec<NbtPredicate>>),
    /// List of the same length, element by element
    EqualsList(Vec<NbtPredicate>),
    /// List containing every element, with indexed constraints
    MatchList {
        elements: Vec<NbtPredicate>,
        positional: IndexMap<i32, NbtPredicate>,
    },
    Not(Box<NbtPredicate>),
}

impl NbtPredicate {
    /// Test a present value.
    pub fn test(&self, value: &Nbt) -> bool {
        self.test_opt(Some(value))
    }

    /// Test a value that may be missing.
    ///
    /// Only `Constant(false)` and negations accept a missing value.
    pub fn test_opt(&self, value: Option<&Nbt>) -> bool {
        match self {
            NbtPredicate::Constant(present) => value.is_some() == *present,
            NbtPredicate::Not(inner) => !inner.test_opt(value),
            _ => value.is_some_and(|value| self.test_present(value)),
        }
    }

    fn test_present(&self, value: &Nbt) -> bool {
        match self {
            NbtPredicate::Constant(present) => *present,
            NbtPredicate::Not(inner) => !inner.test(value),
            NbtPredicate::Equals(expected) => value == expected,
            NbtPredicate::Regex(pattern) => value.as_str().is_some_and(|s| pattern.is_match(s)),
            NbtPredicate::Compare { op, value: rhs } => {
                value.as_f64().is_some_and(|lhs| op.test(lhs, *rhs))
            }
            NbtPredicate::NumberRange { min, max } => value.as_f64().is_some_and(|v| {
                min.is_none_or(|min| v >= min) && max.is_none_or(|max| v <= max)
            }),
            NbtPredicate::StringRange { min, max } => value.as_str().is_some_and(|v| {
                min.as_deref().is_none_or(|min| v >= min)
                    && max.as_deref().is_none_or(|max| v <= max)
            }),
            NbtPredicate::EqualsCompound(expected) => value.as_compound().is_some_and(|actual| {
                actual.len() == expected.len()
                    && expected
                        .iter()
                        .all(|(key, predicate)| predicate.test_opt(actual.get(key)))
            }),
            NbtPredicate::MatchCompound(expected) => value.as_compound().is_some_and(|actual| {
                expected.iter().all(|(key, predicates)| match key {
                    MatchKey::Named(key) => {
                        let entry = actual.get(key);
                        predicates.iter().any(|p| p.test_opt(entry))
                    }
                    MatchKey::Wildcard => actual
                        .values()
                        .any(|entry| predicates.iter().any(|p| p.test(entry))),
                })
            }),
            NbtPredicate::EqualsList(expected) => value.as_list().is_some_and(|actual| {
                actual.len() == expected.len()
                    && expected.iter().zip(actual).all(|(p, v)| p.test(v))
            }),
            NbtPredicate::MatchList {
                elements,
                positional,
            } => value.as_list().is_some_and(|actual| {
                elements.iter().all(|p| actual.iter().any(|v| p.test(v)))
                    && positional
                        .iter()
                        .all(|(index, p)| p.test_opt(list_index(actual, *index)))
            }),
        }
    }

    /// The sign this predicate prints with, and whether it is negated.
    pub fn sign(&self) -> (bool, Sign) {
        match self {
            NbtPredicate::Constant(present) => (!present, Sign::Match),
            NbtPredicate::Not(inner) => (true, inner.sign().1),
            NbtPredicate::Equals(_)
            | NbtPredicate::EqualsCompound(_)
            | NbtPredicate::EqualsList(_) => (false, Sign::Equals),
            NbtPredicate::Regex(_) => (false, Sign::Regex),
            NbtPredicate::Compare { op, .. } => (false, op.sign(Sign::Match)),
            NbtPredicate::NumberRange { .. }
            | NbtPredicate::StringRange { .. }
            | NbtPredicate::MatchCompound(_)
            | NbtPredicate::MatchList { .. } => (false, Sign::Match),
        }
    }

    /// Print with the sign omitted when it equals `default`.
    ///
    /// `None` always prints the sign.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, default: Option<Sign>) -> fmt::Result {
        let (negated, sign) = self.sign();
        if negated {
            write!(f, "!{sign}")?;
        } else if default != Some(sign) {
            write!(f, "{sign}")?;
        }
        self.write_body(f)
    }

    fn write_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbtPredicate::Constant(_) => f.write_str("*"),
            NbtPredicate::Not(inner) => inner.write_body(f),
            NbtPredicate::Equals(value) => write!(f, "{value}"),
            NbtPredicate::Regex(pattern) => f.write_str(&quote(pattern.as_str())),
            NbtPredicate::Compare { value, .. } => write_number(f, *value),
            NbtPredicate::NumberRange { min, max } => {
                if let Some(min) = min {
                    write_number(f, *min)?;
                }
                f.write_str("..")?;
                if let Some(max) = max {
                    write_number(f, *max)?;
                }
                Ok(())
            }
            NbtPredicate::StringRange { min, max } => {
                if let Some(min) = min {
                    f.write_str(&quote(min))?;
                }
                f.write_str("..")?;
                if let Some(max) = max {
                    f.write_str(&quote(max))?;
                }
                Ok(())
            }
            NbtPredicate::EqualsCompound(entries) => {
                f.write_str("{")?;
                for (i, (key, predicate)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_key(f, key)?;
                    predicate.write(f, None)?;
                }
                f.write_str("}")
            }
            NbtPredicate::MatchCompound(entries) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, predicates) in entries {
                    for predicate in predicates {
                        if !first {
                            f.write_str(",")?;
                        }
                        first = false;
                        match key {
                            MatchKey::Named(key) => write_key(f, key)?,
                            MatchKey::Wildcard => f.write_str("*")?,
                        }
                        predicate.write(f, None)?;
                    }
                }
                f.write_str("}")
            }
            NbtPredicate::EqualsList(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    element.write(f, Some(Sign::Equals))?;
                }
                f.write_str("]")
            }
            NbtPredicate::MatchList {
                elements,
                positional,
            } => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    element.write(f, Some(Sign::Match))?;
                }
                for (i, (index, predicate)) in positional.iter().enumerate() {
                    if i > 0 || !elements.is_empty() {
                        f.write_str(",")?;
                    }
                    write!(f, "{index}")?;
                    predicate.write(f, None)?;
                }
                f.write_str("]")
            }
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

/// Write a number so it reads back as a number.
///
/// Large whole numbers would overflow the integer types, so they keep a
/// fraction.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() >= 1e15 {
        write!(f, "{value:?}")
    } else {
        write!(f, "{value}")
    }
}

/// Element at `index`, counting from the end when negative.
pub(crate) fn list_index(list: &[Nbt], index: i32) -> Option<&Nbt> {
    let len = i64::try_from(list.len()).ok()?;
    let index = i64::from(index);
    let resolved = if index < 0 { len + index } else { index };
    usize::try_from(resolved).ok().and_then(|i| list.get(i))
}

impl fmt::Display for NbtPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, Some(Sign::Match))
    }
}
