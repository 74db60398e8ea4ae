//! Resolving positions against an origin and testing region membership.

use command_grammar::{Origin, Region, parse_position, parse_region};
use rstest::rstest;

fn close(actual: [f64; 3], expected: [f64; 3]) -> bool {
    (0..3).all(|axis| (actual[axis] - expected[axis]).abs() < 1e-9)
}

fn region(input: &str) -> Region {
    parse_region(input).unwrap_or_else(|err| panic!("'{input}' failed: {}", err.format()))
}

// =============================================================================
// POSITIONS
// =============================================================================

#[rstest]
#[case("1 2 3", [1.0, 2.0, 3.0])]
#[case("~ ~ ~", [10.0, 64.0, -5.0])]
#[case("~1 ~-4 5", [11.0, 60.0, 5.0])]
fn test_world_positions(#[case] input: &str, #[case] expected: [f64; 3]) {
    let origin = Origin::at([10.0, 64.0, -5.0]);
    let resolved = parse_position(input).unwrap().resolve(&origin);
    assert!(close(resolved, expected), "{input} resolved to {resolved:?}");
}

#[rstest]
// Facing +z, left is +x
#[case(0.0, 0.0, "^ ^ ^2", [0.0, 0.0, 2.0])]
#[case(0.0, 0.0, "^1 ^ ^", [1.0, 0.0, 0.0])]
#[case(0.0, 0.0, "^ ^3 ^", [0.0, 3.0, 0.0])]
// Facing -x
#[case(90.0, 0.0, "^ ^ ^1", [-1.0, 0.0, 0.0])]
// Looking straight down
#[case(0.0, 90.0, "^ ^ ^1", [0.0, -1.0, 0.0])]
fn test_local_positions(
    #[case] yaw: f64,
    #[case] pitch: f64,
    #[case] input: &str,
    #[case] expected: [f64; 3],
) {
    let origin = Origin::at([0.0; 3]).facing(yaw, pitch);
    let resolved = parse_position(input).unwrap().resolve(&origin);
    assert!(close(resolved, expected), "{input} resolved to {resolved:?}");
}

#[test]
fn test_block_pos_floors() {
    let origin = Origin::at([0.5, 0.0, -0.5]);
    assert_eq!(parse_position("~ ~ ~").unwrap().block_pos(&origin), [0, 0, -1]);
    assert_eq!(parse_position("-0.1 2.9 3").unwrap().block_pos(&origin), [-1, 2, 3]);
}

// =============================================================================
// REGIONS
// =============================================================================

#[rstest]
#[case([0.0, 0.0, 0.0], true)]
#[case([1.0, 1.0, 1.0], true)]
#[case([2.0, 0.0, 0.0], true)]
#[case([2.0, 2.0, 0.0], false)]
fn test_sphere_contains(#[case] point: [f64; 3], #[case] expected: bool) {
    let sphere = region("sphere radius=2");
    assert_eq!(sphere.contains(&Origin::default(), point), expected, "{point:?}");
}

#[test]
fn test_hollow_sphere_is_a_shell() {
    let shell = region("sphere radius=3 hollow=true");
    let origin = Origin::default();
    assert!(!shell.contains(&origin, [0.0, 0.0, 0.0]));
    assert!(!shell.contains(&origin, [1.0, 1.0, 0.0]));
    assert!(shell.contains(&origin, [0.0, 2.5, 0.0]));
    assert!(shell.contains(&origin, [3.0, 0.0, 0.0]));
}

#[test]
fn test_box_contains_whole_blocks() {
    let area = region("box from=2,0,2 to=0,1,0");
    let origin = Origin::default();
    assert!(area.contains(&origin, [0.0, 0.0, 0.0]));
    assert!(area.contains(&origin, [2.9, 1.9, 2.9]));
    assert!(!area.contains(&origin, [3.0, 0.0, 0.0]));
    assert!(!area.contains(&origin, [-0.1, 0.0, 0.0]));
}

#[test]
fn test_relative_center_follows_origin() {
    let sphere = region("sphere center=~,~10,~ radius=1");
    let origin = Origin::at([100.0, 0.0, 100.0]);
    assert!(sphere.contains(&origin, [100.0, 10.5, 100.0]));
    assert!(!sphere.contains(&origin, [0.0, 10.0, 0.0]));
}

#[test]
fn test_cylinder_contains() {
    let cylinder = region("cylinder center=0,0,0 radius=2 height=3");
    let origin = Origin::default();
    assert!(cylinder.contains(&origin, [1.0, 3.0, 1.0]));
    assert!(!cylinder.contains(&origin, [1.0, 3.5, 1.0]));
    assert!(!cylinder.contains(&origin, [1.0, -0.5, 1.0]));
    assert!(!cylinder.contains(&origin, [2.0, 1.0, 2.0]));
}

#[test]
fn test_bounds() {
    let origin = Origin::at([10.0, 20.0, 30.0]);
    assert_eq!(
        region("box from=~,~,~ to=~-2,~1,~").bounds(&origin),
        ([8.0, 20.0, 30.0], [11.0, 22.0, 31.0])
    );
    assert_eq!(
        region("sphere radius=1.5").bounds(&origin),
        ([8.5, 18.5, 28.5], [11.5, 21.5, 31.5])
    );
    assert_eq!(
        region("cylinder radius=2 height=4").bounds(&origin),
        ([8.0, 20.0, 28.0], [12.0, 24.0, 32.0])
    );
}
