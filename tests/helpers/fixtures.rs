//! Common values the tests parse against.

use once_cell::sync::Lazy;

use command_grammar::{
    ArgGrammar, ArgValue, BlockState, KeywordSchema, Nbt, Position, ResourceLocation,
    parse_block_predicate, parse_nbt, parse_nbt_function, parse_nbt_predicate,
};

pub const PLAYER_SNBT: &str = r#"{
    Health: 20.0f,
    Name: "Steve",
    Tags: ["admin", "builder"],
    Inventory: [
        {id: "minecraft:stone", Count: 3b, Slot: 0b},
        {id: "minecraft:torch", Count: 64b, Slot: 1b}
    ],
    Pos: [1.5d, 64.0d, -2.5d]
}"#;

/// A player-like compound.
pub static PLAYER: Lazy<Nbt> =
    Lazy::new(|| parse_nbt(PLAYER_SNBT).expect("player fixture should parse"));

pub fn location(text: &str) -> ResourceLocation {
    ResourceLocation::parse(text).expect("valid resource location")
}

/// A chest facing north with a locked block entity.
pub static CHEST: Lazy<BlockState> = Lazy::new(|| {
    BlockState::new(location("chest"))
        .with_property("facing", "north")
        .with_property("waterlogged", "false")
        .with_property("size", "27")
        .with_tag(location("containers"))
        .with_nbt(Nbt::compound([
            ("Lock", Nbt::string("secret")),
            ("Items", Nbt::List(Vec::new())),
        ]))
});

pub const MODES: &[&str] = &["replace", "keep", "destroy"];

/// Arguments of a fill-like command.
pub static FILL_SCHEMA: Lazy<KeywordSchema> = Lazy::new(|| {
    KeywordSchema::new()
        .required("block", ArgGrammar::BlockFunction)
        .optional("at", ArgGrammar::Position, ArgValue::Position(Position::here()))
        .optional("mode", ArgGrammar::Enum(MODES), ArgValue::Enum("replace"))
        .optional(
            "filter",
            ArgGrammar::BlockPredicate,
            ArgValue::BlockPredicate(parse_block_predicate("*").expect("any block")),
        )
        .optional("limit", ArgGrammar::Int { min: 1, max: 32768 }, ArgValue::Int(4096))
        .optional("strength", ArgGrammar::Float { min: 0.0, max: 1.0 }, ArgValue::Float(1.0))
        .optional("label", ArgGrammar::Word, ArgValue::Word("fill".into()))
        .optional(
            "data",
            ArgGrammar::NbtFunction,
            ArgValue::NbtFunction(parse_nbt_function("{}").expect("empty merge")),
        )
        .optional(
            "when",
            ArgGrammar::NbtPredicate,
            ArgValue::NbtPredicate(parse_nbt_predicate("*").expect("always")),
        )
});
