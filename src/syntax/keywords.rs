//! Keyword arguments: `name=value` pairs checked against a schema.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;
use text_size::TextRange;

use super::block::{BlockFunction, BlockPredicate};
use super::nbt_function::NbtFunction;
use super::nbt_predicate::NbtPredicate;
use super::position::{Position, PositionStyle};
use crate::base::{is_unquoted_word, quote};
use crate::parser::errors::{ErrorCode, SyntaxError};

/// How an argument value is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgGrammar {
    Bool,
    Int { min: i64, max: i64 },
    Float { min: f64, max: f64 },
    /// Quoted or unquoted string
    Word,
    Enum(&'static [&'static str]),
    /// Three coordinates separated by `,`
    Position,
    NbtPredicate,
    NbtFunction,
    BlockPredicate,
    BlockFunction,
}

impl ArgGrammar {
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgGrammar::Bool => "boolean",
            ArgGrammar::Int { .. } => "integer",
            ArgGrammar::Float { .. } => "number",
            ArgGrammar::Word => "word",
            ArgGrammar::Enum(_) => "enumerant",
            ArgGrammar::Position => "position",
            ArgGrammar::NbtPredicate => "NBT predicate",
            ArgGrammar::NbtFunction => "NBT function",
            ArgGrammar::BlockPredicate => "block predicate",
            ArgGrammar::BlockFunction => "block function",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Word(SmolStr),
    Enum(&'static str),
    Position(Position),
    NbtPredicate(NbtPredicate),
    NbtFunction(NbtFunction),
    BlockPredicate(BlockPredicate),
    BlockFunction(BlockFunction),
}

impl ArgValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Bool(_) => "boolean",
            ArgValue::Int(_) => "integer",
            ArgValue::Float(_) => "number",
            ArgValue::Word(_) => "word",
            ArgValue::Enum(_) => "enumerant",
            ArgValue::Position(_) => "position",
            ArgValue::NbtPredicate(_) => "NBT predicate",
            ArgValue::NbtFunction(_) => "NBT function",
            ArgValue::BlockPredicate(_) => "block predicate",
            ArgValue::BlockFunction(_) => "block function",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(value) => write!(f, "{value}"),
            ArgValue::Int(value) => write!(f, "{value}"),
            ArgValue::Float(value) => write!(f, "{value}"),
            ArgValue::Word(word) if is_unquoted_word(word) => f.write_str(word),
            ArgValue::Word(word) => f.write_str(&quote(word)),
            ArgValue::Enum(value) => f.write_str(value),
            ArgValue::Position(position) => position.write(f, PositionStyle::Compact),
            ArgValue::NbtPredicate(predicate) => write!(f, "{predicate}"),
            ArgValue::NbtFunction(function) => write!(f, "{function}"),
            ArgValue::BlockPredicate(predicate) => write!(f, "{predicate}"),
            ArgValue::BlockFunction(function) => write!(f, "{function}"),
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub grammar: ArgGrammar,
    /// `None` for required arguments
    pub default: Option<ArgValue>,
}

/// The arguments a command accepts, in suggestion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSchema {
    params: IndexMap<SmolStr, Param>,
}

impl KeywordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, grammar: ArgGrammar) -> Self {
        self.params.insert(
            name.into(),
            Param {
                grammar,
                default: None,
            },
        );
        self
    }

    pub fn optional(mut self, name: &str, grammar: ArgGrammar, default: ArgValue) -> Self {
        self.params.insert(
            name.into(),
            Param {
                grammar,
                default: Some(default),
            },
        );
        self
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.params.keys()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("missing required argument '{0}'")]
    MissingRequired(SmolStr),
    #[error("unknown argument '{0}'")]
    Unknown(SmolStr),
    #[error("argument '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        name: SmolStr,
        expected: &'static str,
        found: &'static str,
    },
}

impl ArgumentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgumentError::MissingRequired(_) => ErrorCode::E0701,
            ArgumentError::Unknown(_) => ErrorCode::E0301,
            ArgumentError::TypeMismatch { .. } => ErrorCode::E0501,
        }
    }

    pub fn into_syntax_error(self, range: TextRange) -> SyntaxError {
        let code = self.code();
        let error = SyntaxError::new(self.to_string(), range, code);
        match self {
            ArgumentError::MissingRequired(name) => error.with_hint(format!("add '{name}=...'")),
            _ => error,
        }
    }
}

fn mismatch(name: &str, expected: &'static str, found: &ArgValue) -> ArgumentError {
    ArgumentError::TypeMismatch {
        name: name.into(),
        expected,
        found: found.type_name(),
    }
}

/// Parsed arguments, falling back to schema defaults on lookup.
#[derive(Debug, Clone)]
pub struct KeywordArgs<'s> {
    schema: &'s KeywordSchema,
    values: IndexMap<SmolStr, ArgValue>,
}

impl PartialEq for KeywordArgs<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<'s> KeywordArgs<'s> {
    pub fn new(schema: &'s KeywordSchema, values: IndexMap<SmolStr, ArgValue>) -> Self {
        Self { schema, values }
    }

    pub fn schema(&self) -> &'s KeywordSchema {
        self.schema
    }

    /// Arguments written in the input, in input order.
    pub fn provided(&self) -> &IndexMap<SmolStr, ArgValue> {
        &self.values
    }

    pub fn is_provided(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The written value, else the default.
    pub fn get(&self, name: &str) -> Result<&ArgValue, ArgumentError> {
        let Some(param) = self.schema.param(name) else {
            return Err(ArgumentError::Unknown(name.into()));
        };
        self.values
            .get(name)
            .or(param.default.as_ref())
            .ok_or_else(|| ArgumentError::MissingRequired(name.into()))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ArgumentError> {
        match self.get(name)? {
            ArgValue::Bool(value) => Ok(*value),
            other => Err(mismatch(name, "boolean", other)),
        }
    }

    pub fn get_i64(&self, name: &str) -> Result<i64, ArgumentError> {
        match self.get(name)? {
            ArgValue::Int(value) => Ok(*value),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    /// Integers widen to floats.
    pub fn get_f64(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.get(name)? {
            ArgValue::Float(value) => Ok(*value),
            ArgValue::Int(value) => Ok(*value as f64),
            other => Err(mismatch(name, "number", other)),
        }
    }

    pub fn get_word(&self, name: &str) -> Result<&str, ArgumentError> {
        match self.get(name)? {
            ArgValue::Word(value) => Ok(value),
            ArgValue::Enum(value) => Ok(value),
            other => Err(mismatch(name, "word", other)),
        }
    }

    pub fn get_position(&self, name: &str) -> Result<Position, ArgumentError> {
        match self.get(name)? {
            ArgValue::Position(value) => Ok(*value),
            other => Err(mismatch(name, "position", other)),
        }
    }

    pub fn get_nbt_predicate(&self, name: &str) -> Result<&NbtPredicate, ArgumentError> {
        match self.get(name)? {
            ArgValue::NbtPredicate(value) => Ok(value),
            other => Err(mismatch(name, "NBT predicate", other)),
        }
    }

    pub fn get_nbt_function(&self, name: &str) -> Result<&NbtFunction, ArgumentError> {
        match self.get(name)? {
            ArgValue::NbtFunction(value) => Ok(value),
            other => Err(mismatch(name, "NBT function", other)),
        }
    }

    pub fn get_block_predicate(&self, name: &str) -> Result<&BlockPredicate, ArgumentError> {
        match self.get(name)? {
            ArgValue::BlockPredicate(value) => Ok(value),
            other => Err(mismatch(name, "block predicate", other)),
        }
    }

    pub fn get_block_function(&self, name: &str) -> Result<&BlockFunction, ArgumentError> {
        match self.get(name)? {
            ArgValue::BlockFunction(value) => Ok(value),
            other => Err(mismatch(name, "block function", other)),
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeywordArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}
