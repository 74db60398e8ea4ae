//! Block predicate and block function parsing.

use command_grammar::syntax::BlockTarget;
use command_grammar::{BlockView, ErrorCode, Nbt, parse_block_function, parse_block_predicate};
use rstest::rstest;

use crate::helpers::assertions::assert_error;
use crate::helpers::fixtures::{CHEST, location};

#[rstest]
#[case("chest", true)]
#[case("minecraft:chest", true)]
#[case("barrel", false)]
#[case("!barrel", true)]
#[case("*", true)]
#[case("#containers", true)]
#[case("#minecraft:logs", false)]
#[case("chest[facing=north]", true)]
#[case("chest[facing!=north]", false)]
#[case("chest[size>=27,size<28]", true)]
#[case("chest[size>27]", false)]
#[case("chest[facing>1]", false)]
#[case("chest[waterlogged=*]", true)]
#[case("chest[open=*]", false)]
#[case("chest[open!=*]", true)]
#[case("chest{Lock:\"secret\"}", true)]
#[case("chest{Lock:\"other\"}", false)]
#[case("chest{Items:[]}", true)]
#[case("*[facing=north]{CustomName!:*}", true)]
fn test_predicates_against_chest(#[case] input: &str, #[case] expected: bool) {
    let predicate = parse_block_predicate(input)
        .unwrap_or_else(|err| panic!("'{input}' failed: {}", err.format()));
    assert_eq!(predicate.test(&*CHEST), expected, "{input}");
}

#[test]
fn test_predicate_duplicates_accumulate() {
    let predicate = parse_block_predicate("chest[size>1, size>2, size>3]").unwrap();
    assert_eq!(predicate.properties.len(), 3);
    assert_eq!(predicate.target, BlockTarget::Block(location("chest")));
}

#[test]
fn test_quoted_property_value() {
    let predicate = parse_block_predicate("sign[text=\"hello world\"]").unwrap();
    assert_eq!(predicate.as_string(), "minecraft:sign[text=\"hello world\"]");
}

#[rstest]
#[case("chest[facing:north]", ErrorCode::E0102)]
#[case("chest[facing~north]", ErrorCode::E0102)]
#[case("chest[size<*]", ErrorCode::E0501)]
#[case("chest[facing=north", ErrorCode::E0202)]
#[case("chest[facing=north}", ErrorCode::E0101)]
#[case("Chest", ErrorCode::E0303)]
#[case("#", ErrorCode::E0303)]
#[case("chest{Lock:", ErrorCode::E0106)]
fn test_predicate_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_block_predicate(input), code);
}

// =============================================================================
// FUNCTIONS
// =============================================================================

#[test]
fn test_named_block_starts_fresh() {
    let function = parse_block_function("barrel[facing=up]").unwrap();
    let result = function.apply(&CHEST);
    assert_eq!(result.id(), &location("barrel"));
    assert_eq!(result.property("facing"), Some("up"));
    assert_eq!(result.property("size"), None);
    assert!(result.block_entity().is_none());
}

#[test]
fn test_wildcard_keeps_current_block() {
    let function = parse_block_function("*[facing=south]{Lock:\"new\", -Items}").unwrap();
    let result = function.apply(&CHEST);
    assert_eq!(result.id(), &location("chest"));
    assert_eq!(result.property("facing"), Some("south"));
    assert_eq!(result.property("size"), Some("27"));
    assert_eq!(
        result.block_entity(),
        Some(&Nbt::compound([("Lock", Nbt::string("new"))]))
    );
}

#[test]
fn test_function_duplicates_overwrite() {
    let function = parse_block_function("chest[facing=east, size=9, facing=west]").unwrap();
    assert_eq!(function.properties.len(), 2);
    assert_eq!(function.properties.get_index(0).map(|(k, v)| (k.as_str(), v.as_str())), Some(("facing", "west")));
}

#[rstest]
#[case("chest[facing!=north]", ErrorCode::E0102)]
#[case("chest[size>=3]", ErrorCode::E0102)]
#[case("!chest", ErrorCode::E0303)]
#[case("#logs", ErrorCode::E0303)]
fn test_function_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_block_function(input), code);
}
