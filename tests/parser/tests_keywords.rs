//! Keyword arguments against a fill-like schema.

use command_grammar::syntax::Coordinate;
use command_grammar::{
    ArgValue, ArgumentError, ErrorCode, Position, ResourceLocation, parse_keyword_args,
};
use rstest::rstest;

use crate::helpers::assertions::assert_error;
use crate::helpers::fixtures::{CHEST, FILL_SCHEMA};

#[test]
fn test_defaults_fill_in() {
    let args = parse_keyword_args("block=stone", &FILL_SCHEMA).unwrap();
    assert_eq!(args.provided().len(), 1);
    assert_eq!(args.get_word("mode").unwrap(), "replace");
    assert_eq!(args.get_i64("limit").unwrap(), 4096);
    assert_eq!(args.get_f64("strength").unwrap(), 1.0);
    assert_eq!(args.get_position("at").unwrap(), Position::here());
    assert!(args.get_block_predicate("filter").unwrap().test(&*CHEST));
}

#[test]
fn test_every_grammar() {
    let args = parse_keyword_args(
        concat!(
            "block=oak_log[axis=y] at=1,~2,^ ",
            "mode=keep filter=#containers[facing=north] limit=10 strength=.5 ",
            "label=\"two words\" data={Lock:\"k\"} when={Count:1..}",
        ),
        &FILL_SCHEMA,
    );
    // A local coordinate cannot follow world coordinates
    assert_error(args, ErrorCode::E0501);

    let args = parse_keyword_args(
        concat!(
            "block=oak_log[axis=y] at=1,~2,3 ",
            "mode=keep filter=#containers[facing=north] limit=10 strength=.5 ",
            "label=\"two words\" data={Lock:\"k\"} when={Count:1..}",
        ),
        &FILL_SCHEMA,
    )
    .unwrap();
    assert_eq!(
        args.get_block_function("block").unwrap().block,
        ResourceLocation::parse("oak_log")
    );
    assert_eq!(
        args.get_position("at").unwrap(),
        Position::World {
            x: Coordinate::absolute(1.0),
            y: Coordinate::relative(2.0),
            z: Coordinate::absolute(3.0),
        }
    );
    assert_eq!(args.get_word("mode").unwrap(), "keep");
    assert!(args.get_block_predicate("filter").unwrap().test(&*CHEST));
    assert_eq!(args.get_i64("limit").unwrap(), 10);
    assert_eq!(args.get_f64("strength").unwrap(), 0.5);
    assert_eq!(args.get_word("label").unwrap(), "two words");
    assert!(args.get_nbt_function("data").is_ok());
    assert!(args.get_nbt_predicate("when").is_ok());
    assert_eq!(args.provided().len(), FILL_SCHEMA.len());
}

#[test]
fn test_provided_order_and_display() {
    let args = parse_keyword_args("limit=3   block=*", &FILL_SCHEMA).unwrap();
    let names: Vec<&str> = args.provided().keys().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["limit", "block"]);
    assert_eq!(args.as_string(), "limit=3 block=*");
}

#[test]
fn test_missing_required_is_reported_on_access() {
    let args = parse_keyword_args("mode=destroy", &FILL_SCHEMA).unwrap();
    let err = args.get_block_function("block").unwrap_err();
    assert_eq!(err, ArgumentError::MissingRequired("block".into()));
    assert_eq!(err.code(), ErrorCode::E0701);
}

#[test]
fn test_typed_access() {
    let args = parse_keyword_args("block=stone", &FILL_SCHEMA).unwrap();
    assert!(matches!(args.get_bool("mode"), Err(ArgumentError::TypeMismatch { .. })));
    assert!(matches!(args.get("size"), Err(ArgumentError::Unknown(_))));
    assert!(matches!(args.get("limit"), Ok(ArgValue::Int(4096))));
}

#[test]
fn test_empty_input() {
    let args = parse_keyword_args("   ", &FILL_SCHEMA).unwrap();
    assert!(args.provided().is_empty());
}

#[rstest]
#[case("block=stone block=dirt", ErrorCode::E0402)]
#[case("blocks=stone", ErrorCode::E0301)]
#[case("block stone", ErrorCode::E0101)]
#[case("block=stone,mode=keep", ErrorCode::E0101)]
#[case("mode=sideways", ErrorCode::E0302)]
#[case("limit=0", ErrorCode::E0601)]
#[case("strength=2", ErrorCode::E0601)]
#[case("limit=many", ErrorCode::E0105)]
#[case("at=1 2 3", ErrorCode::E0101)]
#[case("label=", ErrorCode::E0106)]
#[case("=stone", ErrorCode::E0303)]
fn test_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_keyword_args(input, &FILL_SCHEMA), code);
}

#[test]
fn test_unknown_name_span() {
    let err = parse_keyword_args("block=stone sizes=3", &FILL_SCHEMA).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0301);
    assert_eq!(u32::from(err.range.start()), 12);
    assert_eq!(u32::from(err.range.end()), 17);
    assert!(err.has_hint());
}
