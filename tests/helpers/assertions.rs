//! Assertion helpers shared by the parser and syntax tests.

use std::fmt::{Debug, Display};

use command_grammar::{ErrorCode, ParseResult};

/// Parse `input`, print the value and check the printed text parses back
/// to an equal value.
pub fn assert_round_trip<T>(parse: impl Fn(&str) -> ParseResult<T>, input: &str) -> T
where
    T: Debug + Display + PartialEq,
{
    let value = parse(input).unwrap_or_else(|err| panic!("'{input}' failed: {}", err.format()));
    let printed = value.to_string();
    let reparsed =
        parse(&printed).unwrap_or_else(|err| panic!("'{printed}' (from '{input}') failed: {}", err.format()));
    assert_eq!(reparsed, value, "'{input}' printed as '{printed}'");
    value
}

/// Assert a parse failed with `code`.
pub fn assert_error<T: Debug>(result: ParseResult<T>, code: ErrorCode) {
    match result {
        Ok(value) => panic!("expected {code:?}, parsed {value:?}"),
        Err(err) => assert_eq!(err.code, code, "unexpected error: {}", err.format()),
    }
}
