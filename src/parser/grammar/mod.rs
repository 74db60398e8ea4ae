//! Grammar modules for the command argument languages
//!
//! Two generic engines do the structural work:
//! - `compound` - `{key sign value, ...}` bodies, configured by a [`CompoundDialect`]
//! - `list` - `[...]` bodies with positional elements, configured by a [`ListDialect`]
//!
//! Each remaining module is one language built on top of them. Their root
//! productions take a [`ParserState`](crate::parser::ParserState) so hosts
//! can embed them in grammars of their own.

pub mod block;
pub mod compound;
pub mod keywords;
pub mod list;
pub mod nbt_function;
pub mod nbt_predicate;
pub mod position;
pub mod region;
pub mod snbt;

pub use block::{block_function, block_predicate};
pub use compound::{CompoundDialect, DuplicateKeys, Entry, parse_compound};
pub use keywords::{arg_value, keyword_args};
pub use list::{FunctionListBody, ListDialect, ListElement, parse_function_list, parse_list};
pub use nbt_function::{function_value, nbt_function};
pub use nbt_predicate::{nbt_predicate, predicate_value};
pub use position::position;
pub use region::region;
pub use snbt::nbt_value;
