//! NBT values and their SNBT text form.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{is_unquoted_word, quote};

/// A tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum Nbt {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<Nbt>),
    Compound(IndexMap<SmolStr, Nbt>),
}

impl Nbt {
    /// Build a compound from key/value pairs, keeping their order.
    pub fn compound<K: Into<SmolStr>>(entries: impl IntoIterator<Item = (K, Nbt)>) -> Self {
        Nbt::Compound(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Nbt::String(value.into())
    }

    /// Name of the value's type, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Nbt::Byte(_) => "byte",
            Nbt::Short(_) => "short",
            Nbt::Int(_) => "int",
            Nbt::Long(_) => "long",
            Nbt::Float(_) => "float",
            Nbt::Double(_) => "double",
            Nbt::String(_) => "string",
            Nbt::List(_) => "list",
            Nbt::Compound(_) => "compound",
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    /// The numeric value widened to `f64`, if the tag is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Nbt::Byte(v) => Some(v.into()),
            Nbt::Short(v) => Some(v.into()),
            Nbt::Int(v) => Some(v.into()),
            Nbt::Long(v) => Some(v as f64),
            Nbt::Float(v) => Some(v.into()),
            Nbt::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Nbt::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Nbt]> {
        match self {
            Nbt::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&IndexMap<SmolStr, Nbt>> {
        match self {
            Nbt::Compound(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key if this is a compound.
    pub fn get(&self, key: &str) -> Option<&Nbt> {
        self.as_compound()?.get(key)
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

/// Check if a string value reads back as the same string without quotes.
pub(crate) fn is_bare_string(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && is_unquoted_word(text)
        && text != "true"
        && text != "false"
}

/// Write a compound key, quoting it when it would not read back as-is.
pub(crate) fn write_key(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    if is_unquoted_word(key) && !key.starts_with('-') {
        f.write_str(key)
    } else {
        f.write_str(&quote(key))
    }
}

/// Write a string value, quoting it unless it is a plain word.
pub(crate) fn write_string(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if is_bare_string(text) {
        f.write_str(text)
    } else {
        f.write_str(&quote(text))
    }
}

impl fmt::Display for Nbt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nbt::Byte(v) => write!(f, "{v}b"),
            Nbt::Short(v) => write!(f, "{v}s"),
            Nbt::Int(v) => write!(f, "{v}"),
            Nbt::Long(v) => write!(f, "{v}L"),
            Nbt::Float(v) => write!(f, "{v}f"),
            Nbt::Double(v) => write!(f, "{v}d"),
            Nbt::String(s) => write_string(f, s),
            Nbt::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Nbt::Compound(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_key(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Nbt {
    fn from(value: bool) -> Self {
        Nbt::Byte(value.into())
    }
}

impl From<i32> for Nbt {
    fn from(value: i32) -> Self {
        Nbt::Int(value)
    }
}

impl From<f64> for Nbt {
    fn from(value: f64) -> Self {
        Nbt::Double(value)
    }
}

impl From<&str> for Nbt {
    fn from(value: &str) -> Self {
        Nbt::String(value.to_string())
    }
}

impl From<Vec<Nbt>> for Nbt {
    fn from(value: Vec<Nbt>) -> Self {
        Nbt::List(value)
    }
}
