//! Sign parsing through the public parser state.

use command_grammar::parser::sign::{NBT_PREDICATE_SIGNS, parse_sign};
use command_grammar::parser::{ErrorCode, ParserState, Sign};
use command_grammar::TextRange;
use rstest::rstest;

#[rstest]
#[case("", false, true, (true, false))]
#[case("", false, false, (false, false))]
#[case(":", true, true, (false, false))]
#[case("!=", true, false, (true, true))]
fn test_sign_defaulting(
    #[case] input: &str,
    #[case] must: bool,
    #[case] equals_default: bool,
    #[case] expected: (bool, bool),
) {
    let mut state = ParserState::new(input);
    assert_eq!(parse_sign(&mut state, must, equals_default).unwrap(), expected);
}

#[test]
fn test_missing_sign_does_not_consume() {
    let mut state = ParserState::new("value");
    assert_eq!(parse_sign(&mut state, false, true).unwrap(), (true, false));
    assert_eq!(state.cursor(), 0);
}

#[test]
fn test_required_sign_reports_cursor() {
    let mut state = ParserState::new("  x");
    let err = parse_sign(&mut state, true, false).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0102);
    assert_eq!(err.range, TextRange::empty(2.into()));
    assert_eq!(state.cursor(), 2);
}

#[rstest]
#[case("<=", Sign::LessEq)]
#[case("<", Sign::Less)]
#[case(">=", Sign::GreaterEq)]
#[case("~", Sign::Regex)]
fn test_longest_sign_wins(#[case] input: &str, #[case] expected: Sign) {
    let mut state = ParserState::new(input);
    let parsed = NBT_PREDICATE_SIGNS.parse(&mut state, true, Sign::Match).unwrap();
    assert_eq!(parsed.sign, expected);
    assert!(parsed.explicit);
    assert_eq!(state.cursor(), input.len());
}

#[test]
fn test_ordering_signs_cannot_be_negated() {
    let mut state = ParserState::new("!<3");
    let err = NBT_PREDICATE_SIGNS.parse(&mut state, true, Sign::Match).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0102);
    assert_eq!(state.cursor(), 0);
}
