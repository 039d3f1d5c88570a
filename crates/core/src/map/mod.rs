//! Bounded grid containers built on the hex coordinate system.
//!
//! Both containers own a hexagonal arrangement of rows with varying lengths,
//! stored as a single flat cell arena plus a per-row offset table
//! (`offsets[row] + column` addressing). That keeps every cell in one
//! allocation while preserving the jagged row shape in the addressing
//! scheme.
//!
//! - [WrapAroundMap] is a hex disk (widest row in the middle) with seamless
//!   wraparound: indexing by any cube coordinate in the plane folds it back
//!   onto the board first, via the shared [MirrorCenters] table.
//! - [HourglassMap] is the complement shape (narrowest row in the middle),
//!   with plain direct addressing and no wraparound.

mod hourglass;
mod mirror;
mod wraparound;

pub use self::{
    hourglass::HourglassMap,
    mirror::{mirror_centers, MirrorCenters},
    wraparound::WrapAroundMap,
};
