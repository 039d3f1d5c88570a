//! This module holds the basic types of the hex coordinate system.
//!
//! We use the [axial/cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! with **pointy topped** tiles. Every position on the lattice has three
//! components (`r`, `q`, and `s`) with the invariant `s = -q - r`, which
//! means only two of them ever need to be stored. The same position has two
//! interchangeable views:
//!
//! - [HexAxial]: the `(r, q)` pair. This is the view the grid containers key
//!   on, since `r` doubles as a row index.
//! - [HexCube]: all three components. Rotation and distance are much easier
//!   to express on this view, so the algebra lives here.
//!
//! Conversion between the two is lossless and always explicit
//! ([HexAxial::to_cube] / [HexCube::to_axial]); there is deliberately no
//! silent coercion, so it's always visible at a call site which algebra is in
//! play.

mod unit;

pub use self::unit::*;
