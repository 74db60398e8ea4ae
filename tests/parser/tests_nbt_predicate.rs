//! NBT predicate parsing and evaluation against a player compound.

use command_grammar::parser::Comparison;
use command_grammar::syntax::MatchKey;
use command_grammar::{ErrorCode, Nbt, NbtPredicate, parse_nbt_predicate};
use rstest::rstest;

use crate::helpers::assertions::assert_error;
use crate::helpers::fixtures::PLAYER;

fn matches(input: &str) -> bool {
    let predicate = parse_nbt_predicate(input)
        .unwrap_or_else(|err| panic!("'{input}' failed: {}", err.format()));
    predicate.test(&PLAYER)
}

// =============================================================================
// SIGN DEFAULTING
// =============================================================================

#[test]
fn test_top_level_defaults_to_match() {
    assert_eq!(
        parse_nbt_predicate("5").unwrap(),
        NbtPredicate::Compare {
            op: Comparison::Eq,
            value: 5.0
        }
    );
    assert_eq!(parse_nbt_predicate("=5").unwrap(), NbtPredicate::Equals(Nbt::Int(5)));
}

#[test]
fn test_compound_entries_need_a_sign() {
    assert_error(parse_nbt_predicate("{Health 20}"), ErrorCode::E0102);
}

#[test]
fn test_equals_list_elements_inherit_equals() {
    let NbtPredicate::EqualsList(elements) = parse_nbt_predicate("=[1b, 2b]").unwrap() else {
        panic!("expected an equals list");
    };
    assert_eq!(
        elements,
        vec![NbtPredicate::Equals(Nbt::Byte(1)), NbtPredicate::Equals(Nbt::Byte(2))]
    );
}

// =============================================================================
// EVALUATION
// =============================================================================

#[rstest]
#[case("{Health:20}", true)]
#[case("{Health=20.0f}", true)]
#[case("{Health=20}", false)]
#[case("{Health>=10}", true)]
#[case("{Health<10}", false)]
#[case("{Health:10..}", true)]
#[case("{Health:..19.5}", false)]
#[case("{Name:\"Steve\"}", true)]
#[case("{Name~\"^St\"}", true)]
#[case("{Name!~\"^St\"}", false)]
#[case("{Name:\"A\"..\"T\"}", true)]
#[case("{Missing!:*}", true)]
#[case("{Name!:*}", false)]
#[case("{*:\"Steve\"}", true)]
#[case("{*:\"Alex\"}", false)]
#[case("{Name!:\"Alex\"}", true)]
fn test_scalar_entries(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(matches(input), expected, "{input}");
}

#[rstest]
#[case("{Tags:[\"admin\"]}", true)]
#[case("{Tags:[\"builder\", \"admin\"]}", true)]
#[case("{Tags:[\"guest\"]}", false)]
#[case("{Tags:[0:\"admin\"]}", true)]
#[case("{Tags:[-1:\"builder\"]}", true)]
#[case("{Tags:[1:\"admin\"]}", false)]
#[case("{Tags:[5!:*]}", true)]
#[case("{Tags=[\"admin\", \"builder\"]}", true)]
#[case("{Tags=[\"admin\"]}", false)]
#[case("{Tags:[]}", true)]
#[case("{Tags=[]}", false)]
fn test_list_entries(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(matches(input), expected, "{input}");
}

#[rstest]
#[case("{Inventory:[{id:\"minecraft:torch\", Count:64b}]}", true)]
#[case("{Inventory:[{id:\"minecraft:torch\", Count<10}]}", false)]
#[case("{Inventory:[={id:\"minecraft:stone\", Count:3b, Slot:0b}]}", true)]
#[case("{Inventory:[={id:\"minecraft:stone\", Count:3b}]}", false)]
#[case("{Inventory:[1:{Slot:1b}], Pos:[1:64..]}", true)]
#[case("={Name:\"Steve\"}", false)]
fn test_nested_entries(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(matches(input), expected, "{input}");
}

// =============================================================================
// DUPLICATE KEYS
// =============================================================================

#[test]
fn test_match_mode_keeps_duplicates() {
    let predicate = parse_nbt_predicate("{Health>25, Health<30}").unwrap();
    let NbtPredicate::MatchCompound(entries) = &predicate else {
        panic!("expected a match compound");
    };
    assert_eq!(entries[&MatchKey::Named("Health".into())].len(), 2);
    // Entries sharing a key are alternatives
    assert!(predicate.test(&PLAYER));
    assert!(!matches("{Health>25, Health<10}"));
}

#[test]
fn test_equals_mode_rejects_duplicates() {
    let err = parse_nbt_predicate("={a:1, a:1}").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0401);
    assert_eq!(u32::from(err.range.start()), 7);
}

#[test]
fn test_wildcard_only_in_match_mode() {
    assert_error(parse_nbt_predicate("={*:1}"), ErrorCode::E0106);
}

// =============================================================================
// LIST DISAMBIGUATION
// =============================================================================

#[test]
fn test_positional_then_bare() {
    let NbtPredicate::MatchList {
        elements,
        positional,
    } = parse_nbt_predicate("[2: \"x\", \"y\"]").unwrap()
    else {
        panic!("expected a match list");
    };
    assert_eq!(elements, vec![NbtPredicate::Equals(Nbt::string("y"))]);
    assert_eq!(positional.len(), 1);
    assert_eq!(positional[&2], NbtPredicate::Equals(Nbt::string("x")));
}

#[test]
fn test_number_without_sign_is_an_element() {
    let NbtPredicate::MatchList {
        elements,
        positional,
    } = parse_nbt_predicate("[2 \"x\"]").unwrap()
    else {
        panic!("expected a match list");
    };
    assert!(positional.is_empty());
    assert_eq!(
        elements,
        vec![
            NbtPredicate::Compare {
                op: Comparison::Eq,
                value: 2.0
            },
            NbtPredicate::Equals(Nbt::string("x")),
        ]
    );
}

#[test]
fn test_duplicate_positional_index() {
    assert_error(parse_nbt_predicate("[0:a, 0:b]"), ErrorCode::E0403);
}

// =============================================================================
// ERRORS
// =============================================================================

#[rstest]
#[case("{a:1", ErrorCode::E0201)]
#[case("[\"a\", \"b\"", ErrorCode::E0202)]
#[case("{a:1;b:2}", ErrorCode::E0101)]
#[case("{a:\"open}", ErrorCode::E0103)]
#[case("{a<\"text\"}", ErrorCode::E0501)]
#[case("{a~\"[\"}", ErrorCode::E0502)]
#[case("{a:1..\"z\"}", ErrorCode::E0501)]
fn test_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_nbt_predicate(input), code);
}
