//! This sub-module contains the basic unit types of the hex coordinate
//! system. See the parent module documentation for more info on the
//! coordinate system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// A position on the hex lattice in its two-component (axial) view. `r` is
/// the row, `q` is the column-ish diagonal axis; the third cube component can
/// be derived as `s = -q - r`.
///
/// The components are stored as `i16`s. We'll never have a board with a
/// radius of more than a few thousand (that'd be millions of cells), so this
/// saves on memory in the grid containers.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "axial<{}, {}>", "self.r", "self.q")]
pub struct HexAxial {
    r: i16,
    q: i16,
}

impl HexAxial {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(r: i16, q: i16) -> Self {
        Self { r, q }
    }

    pub const fn r(&self) -> i16 {
        self.r
    }

    pub const fn q(&self) -> i16 {
        self.q
    }

    /// The derived third cube component
    pub const fn s(&self) -> i16 {
        -(self.q + self.r)
    }

    /// Explicitly view this position as a cube coordinate. Lossless, since
    /// both views store the same two components.
    pub const fn to_cube(self) -> HexCube {
        HexCube::new_rq(self.r, self.q)
    }

    /// Get an iterator of all the positions directly adjacent to this one.
    /// The iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = HexAxial> {
        HexDirection::iter().map(move |dir| self + dir.vec())
    }
}

impl ops::Add<HexVec> for HexAxial {
    type Output = HexAxial;

    fn add(self, rhs: HexVec) -> Self::Output {
        Self::new(self.r + rhs.r, self.q + rhs.q)
    }
}

impl From<HexCube> for HexAxial {
    fn from(cube: HexCube) -> Self {
        cube.to_axial()
    }
}

/// A position on the hex lattice in its three-component (cube) view. Cube
/// coordinates make rotation and distance trivial to express, at the price of
/// carrying a redundant component.
///
/// Since `s = -q - r` always holds, this struct only stores `r` and `q` and
/// derives `s` as needed, which both saves a third of the memory and makes
/// the invariant impossible to break after construction. Equality and hashing
/// consequently depend only on `(r, q)`.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "cube<{}, {}, {}>", "self.r", "self.q", "self.s()")]
pub struct HexCube {
    r: i16,
    q: i16,
}

impl HexCube {
    pub const ORIGIN: Self = Self::new_rq(0, 0);

    /// Construct a cube coordinate from its two free components; `s` is
    /// derived.
    pub const fn new_rq(r: i16, q: i16) -> Self {
        Self { r, q }
    }

    /// Construct a cube coordinate from all three components. The redundant
    /// `s` is validated against the invariant `s = -q - r`, and an error is
    /// returned if it doesn't hold.
    pub fn new(r: i16, q: i16, s: i16) -> anyhow::Result<Self> {
        if s != -q - r {
            Err(anyhow!(
                "invalid cube coordinate ({}, {}, {}); must satisfy s = -q - r",
                r,
                q,
                s
            ))
        } else {
            Ok(Self::new_rq(r, q))
        }
    }

    pub const fn r(&self) -> i16 {
        self.r
    }

    pub const fn q(&self) -> i16 {
        self.q
    }

    pub const fn s(&self) -> i16 {
        -(self.q + self.r)
    }

    /// Explicitly view this position as an axial coordinate. Lossless.
    pub const fn to_axial(self) -> HexAxial {
        HexAxial::new(self.r, self.q)
    }

    /// Rotate this coordinate one sixth of a turn clockwise about the origin:
    /// `(r, q, s) -> (-s, -r, -q)`. Six applications return the original
    /// coordinate.
    pub fn rotate_cw(self) -> Self {
        Self::new_rq(-self.s(), -self.r)
    }

    /// Rotate this coordinate one sixth of a turn counter-clockwise about the
    /// origin: `(r, q, s) -> (-q, -s, -r)`. Inverse of [Self::rotate_cw].
    pub fn rotate_ccw(self) -> Self {
        Self::new_rq(-self.q, -self.s())
    }

    /// Rotate one sixth of a turn clockwise about an arbitrary pivot point.
    pub fn rotate_cw_around(self, pivot: HexCube) -> Self {
        (self - pivot).rotate_cw() + pivot
    }

    /// Rotate one sixth of a turn counter-clockwise about an arbitrary pivot
    /// point.
    pub fn rotate_ccw_around(self, pivot: HexCube) -> Self {
        (self - pivot).rotate_ccw() + pivot
    }

    /// Calculate the lattice distance between two positions, i.e. the number
    /// of hops it takes to get from one to the other. 0 if the positions are
    /// equal, 1 if they are adjacent, etc.
    pub fn distance_to(&self, other: HexCube) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        *[
            (self.r() - other.r()).abs(),
            (self.q() - other.q()).abs(),
            (self.s() - other.s()).abs(),
        ]
        .iter()
        .max()
        .unwrap() as usize
    }
}

impl From<HexAxial> for HexCube {
    fn from(axial: HexAxial) -> Self {
        axial.to_cube()
    }
}

/// A translation on the hex lattice, in axial components. This is essentially
/// the same data as a [HexAxial], but denoting some values explicitly as
/// vectors rather than positions makes it a bit clearer when shifting
/// positions around.
#[derive(Copy, Clone, Debug, Display, Add, Sub, AddAssign, SubAssign)]
#[display(fmt = "vec<{}, {}>", "self.r", "self.q")]
pub struct HexVec {
    pub r: i16,
    pub q: i16,
}

impl HexVec {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(r: i16, q: i16) -> Self {
        Self { r, q }
    }
}

/// The 6 directions in which hexes line up side-to-side, named for how they
/// read in screen space (pointy topped tiles, `+y` up). For any given cell, a
/// direction can represent two useful things:
///
/// - Direction from the cell's center to the midpoint of one of its sides
/// - Direction to a neighboring cell's center
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    /// Get a vector offset that would move a position one cell in this
    /// direction
    pub fn vec(self) -> HexVec {
        match self {
            Self::East => HexVec::new(0, 1),
            Self::SouthEast => HexVec::new(-1, 1),
            Self::SouthWest => HexVec::new(-1, 0),
            Self::West => HexVec::new(0, -1),
            Self::NorthWest => HexVec::new(1, -1),
            Self::NorthEast => HexVec::new(1, 0),
        }
    }
}
