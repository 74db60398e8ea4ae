//! Parser tests
//!
//! Tests for:
//! - Sign parsing and defaulting
//! - NBT predicates and functions
//! - Block predicates and functions
//! - Keyword arguments and regions
//! - Entry point limits and error spans

pub mod tests_block;
pub mod tests_keywords;
pub mod tests_limits;
pub mod tests_nbt_function;
pub mod tests_nbt_predicate;
pub mod tests_region;
pub mod tests_sign;
