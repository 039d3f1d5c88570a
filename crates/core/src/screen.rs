//! Conversions between the hex lattice and continuous 2D screen space.
//!
//! Screen space depicts the board from the top down: `+x` points right, `+y`
//! points up, and the tile at `axial<0, 0>` sits at the origin. Tiles are
//! pointy topped. The only free parameter is the tile "height" `h` (distance
//! from a tile's center to one of its vertices): tile centers land at
//!
//! ```text
//! x = h * (sqrt(3) * q + sqrt(3)/2 * r)
//! y = h * 3/2 * r
//! ```
//!
//! The inverse mapping is the exact algebraic inverse of the forward one
//! prior to rounding, so converting an integer axial coordinate to screen
//! space and back always recovers the same coordinate. That's what makes the
//! inverse safe to use for hit-testing pointer input against the board.

use crate::hex::HexAxial;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// sqrt(3), the width of a pointy-topped tile of height 1
pub const SQRT_3: f64 = 1.7320508075688772;

/// A 2D point in screen space. See module-level docs for a description of
/// what screen space means.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point about the origin by the given angle (in radians,
    /// counter-clockwise). Plain rotation-matrix application; nothing here is
    /// specific to hex grids.
    pub fn rotate(self, radians: f64) -> Self {
        let rotated = Rotation2::new(radians) * Vector2::new(self.x, self.y);
        Self {
            x: rotated.x,
            y: rotated.y,
        }
    }

    /// Rotate this point about an arbitrary pivot point by the given angle
    /// (in radians, counter-clockwise).
    pub fn rotate_around(self, radians: f64, pivot: Point2) -> Self {
        (self - pivot).rotate(radians) + pivot
    }

    /// The unsigned angle between this point's position vector and another's,
    /// in degrees
    pub fn angle_between(self, other: Point2) -> f64 {
        Vector2::new(self.x, self.y)
            .angle(&Vector2::new(other.x, other.y))
            .to_degrees()
    }

    /// Find the axial coordinate of the tile containing this point, for tiles
    /// of the given height. Inverse of [HexAxial::to_screen_space]; see
    /// module-level docs for the formula.
    pub fn to_axial(self, height: f64) -> HexAxial {
        let q = (SQRT_3 / 3.0 * self.x - self.y / 3.0) / height;
        let r = 2.0 / 3.0 * self.y / height;
        HexAxial::new(r.round() as i16, q.round() as i16)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl HexAxial {
    /// Convert this coordinate to the screen-space position of its tile
    /// center, for tiles of the given height. See module-level docs for the
    /// formula.
    pub fn to_screen_space(self, height: f64) -> Point2 {
        let r = f64::from(self.r());
        let q = f64::from(self.q());
        Point2 {
            x: height * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            y: height * 3.0 / 2.0 * r,
        }
    }
}
