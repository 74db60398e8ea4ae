//! Block predicates and block functions.
//!
//! Blocks are seen through [`BlockView`] so hosts can test their own block
//! representation. [`BlockState`] is the plain value implementation.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::nbt::{Nbt, write_key};
use super::nbt_function::NbtFunction;
use super::nbt_predicate::NbtPredicate;
use crate::base::{is_unquoted_word, quote};
use crate::parser::sign::{Comparison, Sign};

pub const DEFAULT_NAMESPACE: &str = "minecraft";

// =============================================================================
// Resource locations
// =============================================================================

/// A namespaced identifier such as `minecraft:stone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    namespace: SmolStr,
    path: SmolStr,
}

impl ResourceLocation {
    /// Parse `namespace:path`, or `path` in the default namespace.
    pub fn parse(text: &str) -> Option<Self> {
        let (namespace, path) = match text.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => ("", text),
        };
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        };
        let valid = namespace.chars().all(is_namespace_char)
            && !path.is_empty()
            && path.chars().all(|c| is_namespace_char(c) || c == '/');
        valid.then(|| Self {
            namespace: namespace.into(),
            path: path.into(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

// =============================================================================
// Block access
// =============================================================================

/// Read access to a block in the world.
pub trait BlockView {
    fn id(&self) -> &ResourceLocation;
    fn has_tag(&self, tag: &ResourceLocation) -> bool;
    fn property(&self, name: &str) -> Option<&str>;
    fn block_entity(&self) -> Option<&Nbt>;
}

/// A block id with its properties, tags and block entity data.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub id: ResourceLocation,
    pub properties: IndexMap<SmolStr, SmolStr>,
    pub tags: FxHashSet<ResourceLocation>,
    pub nbt: Option<Nbt>,
}

impl BlockState {
    pub fn new(id: ResourceLocation) -> Self {
        Self {
            id,
            properties: IndexMap::new(),
            tags: FxHashSet::default(),
            nbt: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_tag(mut self, tag: ResourceLocation) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn with_nbt(mut self, nbt: Nbt) -> Self {
        self.nbt = Some(nbt);
        self
    }
}

impl BlockView for BlockState {
    fn id(&self) -> &ResourceLocation {
        &self.id
    }

    fn has_tag(&self, tag: &ResourceLocation) -> bool {
        self.tags.contains(tag)
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(SmolStr::as_str)
    }

    fn block_entity(&self) -> Option<&Nbt> {
        self.nbt.as_ref()
    }
}

// =============================================================================
// Predicates
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTarget {
    /// `*`
    Any,
    Block(ResourceLocation),
    /// `#tag`
    Tag(ResourceLocation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// `*`: the property is present
    Exists,
    Value(SmolStr),
}

/// One `name sign value` entry of a block predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPredicate {
    pub name: SmolStr,
    pub comparison: Comparison,
    pub negated: bool,
    pub value: PropertyValue,
}

impl PropertyPredicate {
    pub fn test(&self, block: &impl BlockView) -> bool {
        let actual = block.property(&self.name);
        let matched = match (&self.value, actual) {
            (_, None) => false,
            (PropertyValue::Exists, Some(_)) => true,
            (PropertyValue::Value(expected), Some(actual)) => match self.comparison {
                Comparison::Eq => actual == expected.as_str(),
                op => match (actual.parse::<f64>(), expected.parse::<f64>()) {
                    (Ok(lhs), Ok(rhs)) => op.test(lhs, rhs),
                    _ => false,
                },
            },
        };
        matched != self.negated
    }
}

impl fmt::Display for PropertyPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_key(f, &self.name)?;
        if self.negated {
            f.write_str("!")?;
        }
        write!(f, "{}", self.comparison.sign(Sign::Equals))?;
        match &self.value {
            PropertyValue::Exists => f.write_str("*"),
            PropertyValue::Value(value) => write_word(f, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockPredicate {
    pub negated: bool,
    pub target: BlockTarget,
    /// Every entry must hold
    pub properties: Vec<PropertyPredicate>,
    /// Tested against the block entity
    pub nbt: Option<NbtPredicate>,
}

impl BlockPredicate {
    pub fn test(&self, block: &impl BlockView) -> bool {
        let target = match &self.target {
            BlockTarget::Any => true,
            BlockTarget::Block(id) => block.id() == id,
            BlockTarget::Tag(tag) => block.has_tag(tag),
        };
        let matched = target
            && self.properties.iter().all(|p| p.test(block))
            && self
                .nbt
                .as_ref()
                .is_none_or(|nbt| nbt.test_opt(block.block_entity()));
        matched != self.negated
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlockPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        match &self.target {
            BlockTarget::Any => f.write_str("*")?,
            BlockTarget::Block(id) => write!(f, "{id}")?,
            BlockTarget::Tag(tag) => write!(f, "#{tag}")?,
        }
        if !self.properties.is_empty() {
            f.write_str("[")?;
            for (i, property) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{property}")?;
            }
            f.write_str("]")?;
        }
        if let Some(nbt) = &self.nbt {
            nbt.write(f, Some(Sign::Match))?;
        }
        Ok(())
    }
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BlockFunction {
    /// `None` for `*`, keeping the current block
    pub block: Option<ResourceLocation>,
    pub properties: IndexMap<SmolStr, SmolStr>,
    pub nbt: Option<NbtFunction>,
}

impl BlockFunction {
    /// Produce the block this function places over `current`.
    ///
    /// Only `*` keeps the current properties and block entity; naming a
    /// block starts from that block's defaults.
    pub fn apply(&self, current: &BlockState) -> BlockState {
        let mut result = match &self.block {
            None => current.clone(),
            Some(id) => BlockState::new(id.clone()),
        };
        for (name, value) in &self.properties {
            result.properties.insert(name.clone(), value.clone());
        }
        if let Some(nbt) = &self.nbt {
            result.nbt = Some(nbt.apply(result.nbt.as_ref()));
        }
        result
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlockFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block {
            None => f.write_str("*")?,
            Some(id) => write!(f, "{id}")?,
        }
        if !self.properties.is_empty() {
            f.write_str("[")?;
            for (i, (name, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_key(f, name)?;
                f.write_str("=")?;
                write_word(f, value)?;
            }
            f.write_str("]")?;
        }
        if let Some(nbt) = &self.nbt {
            write!(f, "{nbt}")?;
        }
        Ok(())
    }
}

fn write_word(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if is_unquoted_word(text) {
        f.write_str(text)
    } else {
        f.write_str(&quote(text))
    }
}
