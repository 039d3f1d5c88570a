//! End-to-end tests of the public board API: build a playing field the way a
//! scene-assembly layer would, with a payload per cell produced from the
//! cell's screen position.

use hexboard::{HexAxial, HexDirection, HourglassMap, Point2, WrapAroundMap};
use strum::IntoEnumIterator;

/// Stand-in for whatever visual entity a renderer would attach to a cell
#[derive(Debug, PartialEq)]
struct Tile {
    coordinate: HexAxial,
    position: Point2,
}

#[test]
fn test_board_assembly() {
    let height = 1.1;
    let map = WrapAroundMap::new(3, |coordinate| Tile {
        coordinate,
        position: coordinate.to_screen_space(height),
    });
    assert_eq!(map.len(), 37);

    // Every tile knows its own coordinate, and its screen position maps back
    // to that coordinate
    for (coordinate, tile) in map.iter() {
        assert_eq!(tile.coordinate, coordinate);
        assert_eq!(tile.position.to_axial(height), coordinate);
    }
}

#[test]
fn test_walking_off_the_board_wraps() {
    let map = WrapAroundMap::new(2, |coordinate| coordinate);
    // March from the center in each direction, around the board twice; every
    // step lands on a real cell
    for direction in HexDirection::iter() {
        let mut position = map.center();
        for _ in 0..(map.diameter() * 2) {
            let stepped = position + direction.vec();
            let wrapped = map.wrap_around(stepped.to_cube());
            assert!(map.is_in_bounds(wrapped));
            assert_eq!(*map.get(stepped.to_cube()), wrapped);
            position = wrapped;
        }
    }
}

#[test]
fn test_two_boards_share_mirror_state() {
    // Two boards of the same radius agree on wrapping, including boards
    // created before and after a reinitialization cycle
    let first = WrapAroundMap::new(2, |coordinate| coordinate);
    let mut second = WrapAroundMap::new(5, |coordinate| coordinate);
    second.reinitialize(2, |coordinate| coordinate);

    let outside = HexAxial::new(-2, 4).to_cube();
    assert_eq!(first.wrap_around(outside), second.wrap_around(outside));
}

#[test]
fn test_panel_assembly() {
    let mut panel = HourglassMap::new(1, 2, |row, col| (row, col));
    assert_eq!(panel.len(), 11);

    // Resizing the neck rebuilds, resizing back rebuilds again
    panel.reinitialize(3, 2, |row, col| (row, col));
    assert_eq!(panel.row_len(2), 3);
    panel.reinitialize(1, 2, |row, col| (row, col));
    assert_eq!(panel.row_len(2), 1);
}
