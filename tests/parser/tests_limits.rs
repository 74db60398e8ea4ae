//! Entry point behavior: trailing input, size and depth limits.

use command_grammar::parser::grammar;
use command_grammar::{
    ErrorCode, ParserConfig, parse_block_predicate, parse_keyword_args_with,
    parse_nbt_function_with, parse_nbt_predicate, parse_nbt_predicate_with, parse_position, run,
};

use crate::helpers::assertions::assert_error;
use crate::helpers::fixtures::FILL_SCHEMA;

#[test]
fn test_trailing_input_is_rejected() {
    let err = parse_block_predicate("stone dirt").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0107);
    assert_eq!(u32::from(err.range.start()), 6);
    assert_eq!(u32::from(err.range.end()), 10);
}

#[test]
fn test_surrounding_whitespace_is_allowed() {
    assert!(parse_position("  ~ ~ ~  ").is_ok());
    assert!(parse_nbt_predicate(" {a:1} ").is_ok());
}

#[test]
fn test_input_length_limit() {
    let config = ParserConfig::default().with_max_input_len(8);
    let err = parse_nbt_predicate_with("{a:1, b:2}", &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0208);
    assert_eq!(u32::from(err.range.start()), 8);
    assert!(parse_nbt_predicate_with("{a:1}", &config).is_ok());
}

#[test]
fn test_depth_limit() {
    let config = ParserConfig::default().with_max_depth(3);
    assert!(parse_nbt_function_with("{a:{b:{c:1}}}", &config).is_ok());
    assert_error(parse_nbt_function_with("{a:{b:{c:{d:1}}}}", &config), ErrorCode::E0207);
    assert_error(parse_nbt_function_with("[[[[1]]]]", &config), ErrorCode::E0207);
}

#[test]
fn test_deep_input_does_not_overflow() {
    let input = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    assert_error(parse_nbt_predicate(&input), ErrorCode::E0207);
}

#[test]
fn test_run_reports_suggestions_on_failure() {
    let outcome = run("{Count:", &ParserConfig::default(), grammar::nbt_predicate);
    assert!(outcome.result.is_err());
    assert!(outcome.resolve("{Count:").contains("{"));
}

#[test]
fn test_argument_limit_counts_pairs() {
    let config = ParserConfig::default().with_max_arguments(2);
    let args = parse_keyword_args_with("block=stone mode=keep", &FILL_SCHEMA, &config).unwrap();
    assert_eq!(args.provided().len(), 2);

    let err = parse_keyword_args_with("block=stone mode=keep limit=3", &FILL_SCHEMA, &config)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::E0902);
    assert_eq!(u32::from(err.range.start()), 22);
}
