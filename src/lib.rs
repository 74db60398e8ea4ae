//! # command-grammar
//!
//! Suggestion-aware parsers for the small languages found in game command
//! arguments: NBT predicates and functions, block predicates and functions,
//! positions, keyword arguments and region expressions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Entry points, grammars, sign and leaf parsers, parser state
//!   ↓
//! syntax    → AST values, evaluation, printing back to text
//!   ↓
//! ide       → Completion candidates recorded during a parse
//!   ↓
//! base      → Primitives (TextRange, character classes, quoting)
//! ```
//!
//! ## Example
//!
//! ```
//! use command_grammar::{Nbt, parse_nbt_predicate, suggest_region};
//!
//! let predicate = parse_nbt_predicate("{Count:1..16}").unwrap();
//! assert!(predicate.test(&Nbt::compound([("Count", Nbt::Byte(3))])));
//!
//! assert_eq!(suggest_region("sph").texts(), vec!["sphere"]);
//! ```

// ============================================================================
// MODULES (dependency order: base → ide → syntax → parser)
// ============================================================================

/// Foundation types: TextRange, character classes, quoting
pub mod base;

/// IDE features: completion candidates
pub mod ide;

/// Syntax: AST values for every language
pub mod syntax;

/// Parser: scanner, parser state, grammars and entry points
pub mod parser;

// Re-export entry points
pub use parser::{
    ParseOutcome, ParserConfig, ParserState, ParseResult, SyntaxError, ErrorCode, parse_block_function,
    parse_block_function_with, parse_block_predicate, parse_block_predicate_with,
    parse_keyword_args, parse_keyword_args_with, parse_nbt, parse_nbt_function,
    parse_nbt_function_with, parse_nbt_predicate, parse_nbt_predicate_with, parse_position,
    parse_position_with, parse_region, parse_region_with, run, suggest_block_function,
    suggest_block_function_with, suggest_block_predicate, suggest_block_predicate_with,
    suggest_keyword_args, suggest_keyword_args_with, suggest_nbt_function,
    suggest_nbt_function_with, suggest_nbt_predicate, suggest_nbt_predicate_with,
    suggest_position, suggest_position_with, suggest_region, suggest_region_with,
};

// Re-export value types
pub use base::{TextRange, TextSize};
pub use ide::{Suggestion, Suggestions};
pub use syntax::{
    ArgGrammar, ArgValue, ArgumentError, BlockFunction, BlockPredicate, BlockState, BlockView,
    KeywordArgs, KeywordSchema, Nbt, NbtFunction, NbtPredicate, Origin, Position, Region,
    ResourceLocation, Shape,
};
