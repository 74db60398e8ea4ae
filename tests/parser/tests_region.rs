//! Region expressions.

use command_grammar::{ErrorCode, Position, Region, Shape, parse_region};
use rstest::rstest;

use crate::helpers::assertions::assert_error;

#[test]
fn test_cylinder() {
    let region = parse_region("cylinder radius=2 height=5 hollow=true").unwrap();
    assert_eq!(region.shape(), Shape::Cylinder);
    assert_eq!(
        region,
        Region::Cylinder {
            center: Position::here(),
            radius: 2.0,
            height: 5.0,
            hollow: true,
        }
    );
}

#[test]
fn test_leading_and_trailing_whitespace() {
    assert!(parse_region("  sphere radius=1  ").is_ok());
}

#[rstest]
#[case("cube", ErrorCode::E0302)]
#[case("", ErrorCode::E0302)]
#[case("box from=0,0,0", ErrorCode::E0701)]
#[case("sphere", ErrorCode::E0701)]
#[case("sphere radius=-1", ErrorCode::E0601)]
#[case("sphere radius=1 depth=2", ErrorCode::E0301)]
#[case("sphere radius=1 radius=2", ErrorCode::E0402)]
#[case("sphere:radius=1", ErrorCode::E0101)]
fn test_errors(#[case] input: &str, #[case] code: ErrorCode) {
    assert_error(parse_region(input), code);
}

#[test]
fn test_missing_argument_hint() {
    let err = parse_region("box to=1,1,1").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0701);
    assert!(err.message.contains("from"));
    assert!(err.has_hint());
}
