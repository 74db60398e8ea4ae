//! Every parsed value prints as text that parses back to an equal value.

use command_grammar::{
    parse_block_function, parse_block_predicate, parse_nbt, parse_nbt_function,
    parse_nbt_predicate, parse_position, parse_region,
};
use rstest::rstest;

use crate::helpers::assertions::assert_round_trip;
use crate::helpers::fixtures::PLAYER_SNBT;

#[rstest]
#[case("*")]
#[case("!:*")]
#[case("=5b")]
#[case("!=\"two words\"")]
#[case("<=3.5")]
#[case("-2..7")]
#[case("\"a\"..")]
#[case("~\"^[a-z]+$\"")]
#[case("!~\"x\"")]
#[case("{Count:3b, Count:4b, *:\"any\", Tag!:*}")]
#[case("={id=\"minecraft:stone\", Count>1}")]
#[case("[1, 2:\"x\", -1:{a:1}]")]
#[case("=[[1], {a=2}, *]")]
#[case("{Small:0.0000001, Long:5L, Neg:-3.5d}")]
#[case("{\"odd key\":1, 'quoted \"inside\"':2}")]
fn test_nbt_predicate(#[case] input: &str) {
    assert_round_trip(parse_nbt_predicate, input);
}

#[rstest]
#[case("5")]
#[case("=\"text\"")]
#[case("{a:1, -b, c={d:2}}")]
#[case("={a:[1,2]}")]
#[case("[]")]
#[case("=[]")]
#[case("[x, y]")]
#[case("[0:x, -1:{a:1}]")]
#[case("[;x]")]
#[case("[0:x, -1:y; z, ..., w]")]
#[case("[a; 0:b, 3:c, ..., d, 2:e]")]
#[case("[..., 1:tail]")]
fn test_nbt_function(#[case] input: &str) {
    assert_round_trip(parse_nbt_function, input);
}

#[rstest]
#[case("stone")]
#[case("!#minecraft:logs[axis=y]")]
#[case("*[facing!=north,size>=9,open=*]{Lock:\"k\"}")]
#[case("sign[text=\"hello world\"]")]
fn test_block_predicate(#[case] input: &str) {
    assert_round_trip(parse_block_predicate, input);
}

#[rstest]
#[case("*")]
#[case("oak_log[axis=x]")]
#[case("chest{CustomName:\"a\", -Lock}")]
#[case("*[facing=east]{a:1}")]
fn test_block_function(#[case] input: &str) {
    assert_round_trip(parse_block_function, input);
}

#[rstest]
#[case("~ ~ ~")]
#[case("1 -2.5 ~0.25")]
#[case("^ ^1 ^-3")]
fn test_position(#[case] input: &str) {
    assert_round_trip(parse_position, input);
}

#[rstest]
#[case("box from=0,0,0 to=~5,~5,~5")]
#[case("sphere radius=2.5")]
#[case("cylinder center=^,^,^2 radius=3 height=4 hollow=true")]
fn test_region(#[case] input: &str) {
    assert_round_trip(parse_region, input);
}

#[test]
fn test_snbt() {
    let value = parse_nbt(PLAYER_SNBT).unwrap();
    assert_eq!(parse_nbt(&value.as_string()).unwrap(), value);
}
