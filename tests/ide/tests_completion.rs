//! Completion candidates offered at the end of partially typed input.

use command_grammar::base::text_range;
use command_grammar::{
    suggest_block_function, suggest_block_predicate, suggest_keyword_args, suggest_nbt_function,
    suggest_nbt_predicate, suggest_position, suggest_region,
};
use rstest::rstest;

use crate::helpers::fixtures::FILL_SCHEMA;

// =============================================================================
// REGIONS AND KEYWORDS
// =============================================================================

#[rstest]
#[case("", vec!["box", "sphere", "cylinder"])]
#[case("s", vec!["sphere"])]
#[case("SPH", vec!["sphere"])]
#[case("sphere r", vec!["radius="])]
#[case("sphere radius=1 ", vec!["center=", "hollow="])]
#[case("sphere hollow=", vec!["true", "false"])]
#[case("sphere hollow=f", vec!["false"])]
#[case("cylinder height=2 radius", vec!["="])]
fn test_region(#[case] input: &str, #[case] expected: Vec<&str>) {
    assert_eq!(suggest_region(input).texts(), expected, "{input}");
}

#[test]
fn test_suggestions_replace_typed_prefix() {
    let suggestions = suggest_region("sphere ra");
    assert_eq!(suggestions.range, text_range(7, 9));
}

#[test]
fn test_names_are_not_offered_inside_values() {
    assert!(!suggest_region("sphere radius=").contains("center="));
    assert!(suggest_region("sphere center=").contains("~,~,~"));
}

#[test]
fn test_keyword_values_use_their_grammar() {
    let suggestions = suggest_keyword_args("", &FILL_SCHEMA);
    assert!(suggestions.contains("block="));
    assert!(suggestions.contains("when="));

    assert_eq!(
        suggest_keyword_args("mode=", &FILL_SCHEMA).texts(),
        vec!["replace", "keep", "destroy"]
    );
    assert!(suggest_keyword_args("block=", &FILL_SCHEMA).contains("*"));
    assert!(suggest_keyword_args("filter=", &FILL_SCHEMA).contains("#"));
}

// =============================================================================
// POSITIONS
// =============================================================================

#[test]
fn test_position_starts() {
    assert_eq!(suggest_position("").texts(), vec!["~ ~ ~", "^ ^ ^", "~", "^"]);
    assert_eq!(suggest_position("~1 ").texts(), vec!["~", "^"]);
}

// =============================================================================
// BLOCKS
// =============================================================================

#[test]
fn test_block_predicate_start() {
    let suggestions = suggest_block_predicate("");
    for text in ["!", "*", "#"] {
        assert!(suggestions.contains(text), "missing {text}");
    }
}

#[test]
fn test_block_suffixes() {
    assert_eq!(suggest_block_predicate("chest").texts(), vec!["[", "{"]);
    assert!(suggest_block_function("*").contains("["));
}

#[test]
fn test_block_function_start() {
    assert!(suggest_block_function("").contains("*"));
}

// =============================================================================
// NBT
// =============================================================================

#[test]
fn test_nbt_predicate_start() {
    let suggestions = suggest_nbt_predicate("");
    for text in ["*", "{", "[", "\""] {
        assert!(suggestions.contains(text), "missing {text}");
    }
}

#[test]
fn test_signs_after_key() {
    let suggestions = suggest_nbt_predicate("{Health");
    for text in [":", "=", "<", "!:"] {
        assert!(suggestions.contains(text), "missing {text}");
    }
    assert_eq!(suggestions.range, text_range(7, 7));
}

#[test]
fn test_nbt_function_start() {
    let suggestions = suggest_nbt_function("");
    assert!(suggestions.contains("{"));
    assert!(suggestions.contains("["));
}

#[rstest]
#[case("[1")]
#[case("[2:a, 1")]
fn test_indexed_or_bare_element_keeps_both(#[case] input: &str) {
    let predicate = suggest_nbt_predicate(input);
    let function = suggest_nbt_function(input);
    for suggestions in [&predicate, &function] {
        for text in [":", ",", "]"] {
            assert!(suggestions.contains(text), "{input}: missing {text}");
        }
    }
    assert!(function.contains(";"));
}
