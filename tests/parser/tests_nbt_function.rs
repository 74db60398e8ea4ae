//! NBT function parsing and application.

use command_grammar::{ErrorCode, Nbt, NbtFunction, parse_nbt, parse_nbt_function};
use rstest::rstest;

use crate::helpers::assertions::assert_error;
use crate::helpers::fixtures::PLAYER;

fn apply(function: &str) -> Nbt {
    let function = parse_nbt_function(function)
        .unwrap_or_else(|err| panic!("'{function}' failed: {}", err.format()));
    function.apply(Some(&PLAYER))
}

fn snbt(input: &str) -> Nbt {
    parse_nbt(input).unwrap_or_else(|err| panic!("'{input}' failed: {}", err.format()))
}

fn list(items: &[&str]) -> Nbt {
    Nbt::List(items.iter().map(|item| Nbt::string(*item)).collect())
}

// =============================================================================
// COMPOUNDS
// =============================================================================

#[test]
fn test_merge_keeps_other_keys() {
    let result = apply("{Health:10.0f, -Tags}");
    assert_eq!(result.get("Health"), Some(&Nbt::Float(10.0)));
    assert_eq!(result.get("Tags"), None);
    assert_eq!(result.get("Name"), Some(&Nbt::string("Steve")));
}

#[test]
fn test_replace_drops_other_keys() {
    assert_eq!(apply("={Name:\"Alex\"}"), snbt("{Name:\"Alex\"}"));
}

#[test]
fn test_nested_merge() {
    let result = apply("{Inventory:[0:{Count:1b}]}");
    assert_eq!(
        result.get("Inventory").and_then(|items| items.as_list()).map(|items| items[0].clone()),
        Some(snbt("{id:\"minecraft:stone\", Count:1b, Slot:0b}"))
    );
}

#[test]
fn test_nested_replace() {
    let result = apply("{Inventory:[0={id:\"minecraft:air\"}]}");
    let first = result.get("Inventory").and_then(|items| items.as_list()).map(|items| items[0].clone());
    assert_eq!(first, Some(snbt("{id:\"minecraft:air\"}")));
}

#[test]
fn test_missing_target_starts_empty() {
    let function = parse_nbt_function("{a:{b:1}}").unwrap();
    assert_eq!(function.apply(None), snbt("{a:{b:1}}"));
}

#[test]
fn test_duplicate_keys_overwrite() {
    let function = parse_nbt_function("{a:1, b:2, a:3}").unwrap();
    let NbtFunction::Compound { entries, .. } = &function else {
        panic!("expected a compound function");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(function.apply(None), snbt("{a:3, b:2}"));
}

#[test]
fn test_removal_only_when_merging() {
    assert_error(parse_nbt_function("={-a}"), ErrorCode::E0102);
}

// =============================================================================
// LISTS
// =============================================================================

#[rstest]
#[case("[\"x\"]", &["x"])]
#[case("[]", &["admin", "builder"])]
#[case("=[]", &[])]
#[case("[;\"new\"]", &["admin", "builder", "new"])]
#[case("[\"new\", ...]", &["new", "admin", "builder"])]
#[case("[;\"new\", ...]", &["new", "admin", "builder"])]
#[case("[;..., \"new\"]", &["admin", "builder", "new"])]
#[case("[0:\"root\"]", &["root", "builder"])]
#[case("[-1:\"last\"]", &["admin", "last"])]
#[case("[;1:\"mid\", ...]", &["admin", "mid", "builder"])]
#[case("[;..., 1:\"mid\"]", &["admin", "mid", "builder"])]
#[case("[\"a\", \"b\"; \"x\", ..., \"y\"]", &["x", "a", "b", "y"])]
#[case("[5:\"ignored\"]", &["admin", "builder"])]
fn test_tag_list_functions(#[case] function: &str, #[case] expected: &[&str]) {
    let result = apply(&format!("{{Tags:{function}}}"));
    assert_eq!(result.get("Tags"), Some(&list(expected)), "{function}");
}

#[test]
fn test_insertion_order() {
    let function = parse_nbt_function("[; 0:a, 2:c, 0:b, ..., x, 1:y]").unwrap();
    let result = function.apply(Some(&list(&["d", "e", "f"])));
    assert_eq!(result, list(&["a", "b", "d", "e", "c", "y", "f", "x"]));
}

#[rstest]
#[case("[;a;b]", ErrorCode::E0204)]
#[case("[..., ; a]", ErrorCode::E0205)]
#[case("[;..., a, ...]", ErrorCode::E0206)]
#[case("[a", ErrorCode::E0202)]
fn test_list_structure_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_nbt_function(input), code);
}

#[test]
fn test_functions_have_no_comparisons() {
    assert_error(parse_nbt_function("{a<3}"), ErrorCode::E0102);
}
