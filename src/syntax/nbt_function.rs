//! NBT functions: edits producing a new tag value from an existing one.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use super::nbt::{Nbt, write_key};
use super::nbt_predicate::list_index;
use crate::parser::sign::Sign;

#[derive(Debug, Clone, PartialEq)]
pub enum NbtFunction {
    /// Replace the value with a constant
    Simple(Nbt),
    /// Edit a compound key by key
    ///
    /// With `merge` the existing keys are kept and `None` entries remove a
    /// key; otherwise the result holds only the listed entries.
    Compound {
        merge: bool,
        entries: IndexMap<SmolStr, Option<NbtFunction>>,
    },
    List(ListFunction),
}

/// Edits to a list, applied in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFunction {
    /// New contents replacing the existing elements
    pub replacement: Option<Vec<NbtFunction>>,
    /// Functions applied to single elements; negative counts from the end
    pub edits: IndexMap<i32, NbtFunction>,
    /// Elements inserted by position
    ///
    /// Non-negative keys insert before that index. Negative keys insert
    /// relative to the end, `-1` appending.
    pub insertions: BTreeMap<i32, Vec<NbtFunction>>,
}

impl NbtFunction {
    /// Apply to an existing value, or to nothing when the value is missing.
    pub fn apply(&self, target: Option<&Nbt>) -> Nbt {
        match self {
            NbtFunction::Simple(value) => value.clone(),
            NbtFunction::Compound { merge, entries } => {
                let mut result = match target.and_then(Nbt::as_compound) {
                    Some(existing) if *merge => existing.clone(),
                    _ => IndexMap::new(),
                };
                for (key, entry) in entries {
                    match entry {
                        Some(function) => {
                            let value = function.apply(result.get(key));
                            result.insert(key.clone(), value);
                        }
                        None => {
                            result.shift_remove(key);
                        }
                    }
                }
                Nbt::Compound(result)
            }
            NbtFunction::List(list) => Nbt::List(list.apply(target.and_then(Nbt::as_list))),
        }
    }

    /// `=` for replacing forms that would read back differently under `:`.
    pub fn sign(&self) -> Sign {
        match self {
            NbtFunction::Compound { merge: false, .. } => Sign::Equals,
            NbtFunction::List(list) if list.replacement.as_ref().is_some_and(Vec::is_empty) => {
                Sign::Equals
            }
            _ => Sign::Match,
        }
    }

    /// Print with the sign omitted when it is `:` and `always_sign` is off.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, always_sign: bool) -> fmt::Result {
        let sign = self.sign();
        if always_sign || sign != Sign::Match {
            write!(f, "{sign}")?;
        }
        match self {
            NbtFunction::Simple(value) => write!(f, "{value}"),
            NbtFunction::Compound { entries, .. } => {
                f.write_str("{")?;
                for (i, (key, entry)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match entry {
                        Some(function) => {
                            write_key(f, key)?;
                            function.write(f, true)?;
                        }
                        None => {
                            f.write_str("-")?;
                            write_key(f, key)?;
                        }
                    }
                }
                f.write_str("}")
            }
            NbtFunction::List(list) => write!(f, "{list}"),
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NbtFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

impl From<Nbt> for NbtFunction {
    fn from(value: Nbt) -> Self {
        NbtFunction::Simple(value)
    }
}

impl ListFunction {
    pub fn is_noop(&self) -> bool {
        self.replacement.is_none() && self.edits.is_empty() && self.insertions.is_empty()
    }

    pub fn apply(&self, original: Option<&[Nbt]>) -> Vec<Nbt> {
        let mut items: Vec<Nbt> = match &self.replacement {
            Some(values) => values.iter().map(|value| value.apply(None)).collect(),
            None => original.map(<[Nbt]>::to_vec).unwrap_or_default(),
        };

        for (&index, function) in &self.edits {
            let Some(slot) = resolve_index(items.len(), index) else {
                debug!(index, len = items.len(), "ignoring edit outside the list");
                continue;
            };
            let value = function.apply(list_index(&items, index));
            items[slot] = value;
        }

        for (&index, values) in self.insertions.range(0..).rev() {
            let at = usize::try_from(index).unwrap_or(0).min(items.len());
            splice(&mut items, at, values);
        }
        for (&index, values) in self.insertions.range(..0) {
            let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
            let at = usize::try_from((len + 1 + i64::from(index)).max(0))
                .unwrap_or(0)
                .min(items.len());
            splice(&mut items, at, values);
        }
        items
    }
}

fn resolve_index(len: usize, index: i32) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = i64::from(index);
    let resolved = if index < 0 { len + index } else { index };
    if resolved < 0 || resolved >= len {
        return None;
    }
    usize::try_from(resolved).ok()
}

fn splice(items: &mut Vec<Nbt>, at: usize, values: &[NbtFunction]) {
    items.splice(at..at, values.iter().map(|value| value.apply(None)));
}

fn write_element(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    index: Option<i32>,
    function: &NbtFunction,
) -> fmt::Result {
    if !*first {
        f.write_str(",")?;
    }
    *first = false;
    match index {
        Some(index) => {
            write!(f, "{index}")?;
            function.write(f, true)
        }
        None => function.write(f, false),
    }
}

impl fmt::Display for ListFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for function in self.replacement.iter().flatten() {
            write_element(f, &mut first, None, function)?;
        }
        for (&index, function) in &self.edits {
            write_element(f, &mut first, Some(index), function)?;
        }

        if !self.insertions.is_empty() {
            if !first {
                f.write_str(";")?;
                first = true;
            }
            for (&index, values) in self.insertions.range(0..) {
                let index = (index > 0).then_some(index);
                for function in values {
                    write_element(f, &mut first, index, function)?;
                }
            }
            if !first {
                f.write_str(",")?;
            }
            f.write_str("...")?;
            first = false;
            for (&index, values) in self.insertions.range(..0) {
                let index = (index < -1).then_some(-index - 1);
                for function in values {
                    write_element(f, &mut first, index, function)?;
                }
            }
        }
        f.write_str("]")
    }
}
