//! Hexboard is an in-memory spatial index for hexagonal game boards. This
//! crate contains the coordinate algebra and the grid containers; presentation
//! layers (meshes, input handling, scene assembly) are implemented elsewhere.
//!
//! ```
//! use hexboard::{HexAxial, WrapAroundMap};
//!
//! let map: WrapAroundMap<u32> = WrapAroundMap::new(2, |_| 0);
//! assert_eq!(map.len(), 19);
//! // Indexing by cube coordinate wraps around the board edges, so any
//! // coordinate in the plane resolves to a cell.
//! let wrapped = map.wrap_around(HexAxial::new(-1, 3).to_cube());
//! assert!(map.is_in_bounds(wrapped));
//! ```
//!
//! See the [hex] module docs for a description of the coordinate system, and
//! [WrapAroundMap]/[HourglassMap] for the two board shapes.

pub mod hex;
pub mod map;
pub mod screen;

pub use crate::{
    hex::{HexAxial, HexCube, HexDirection, HexVec},
    map::{mirror_centers, HourglassMap, MirrorCenters, WrapAroundMap},
    screen::Point2,
};
