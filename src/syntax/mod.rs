//! Values produced by the grammars.
//!
//! Every type here prints back to text the grammar reads as an equal value.

pub mod block;
pub mod keywords;
pub mod nbt;
pub mod nbt_function;
pub mod nbt_predicate;
pub mod position;
pub mod region;

pub use block::{
    BlockFunction, BlockPredicate, BlockState, BlockTarget, BlockView, PropertyPredicate,
    PropertyValue, ResourceLocation,
};
pub use keywords::{ArgGrammar, ArgValue, ArgumentError, KeywordArgs, KeywordSchema, Param};
pub use nbt::Nbt;
pub use nbt_function::{ListFunction, NbtFunction};
pub use nbt_predicate::{MatchKey, NbtPredicate, Pattern};
pub use position::{Coordinate, Origin, Position, PositionStyle};
pub use region::{Region, Shape};
