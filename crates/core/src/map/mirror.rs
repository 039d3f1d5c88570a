//! The mirror-center table that makes wraparound addressing work.
//!
//! A single bounded hex disk can't be tiled across the plane with per-axis
//! modulo arithmetic the way a rectangle can. Instead, the plane is tiled by
//! 7 periodic copies of the disk: the board itself plus 6 neighbor copies
//! arranged in a ring around it. Folding an arbitrary coordinate back onto
//! the board then amounts to finding which copy contains it and translating
//! by that copy's offset. See <https://gamedev.stackexchange.com/a/137603>
//! for a diagram of the tiling.

use crate::hex::{HexAxial, HexCube};
use fnv::FnvHashMap;
use log::debug;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Process-wide cache of mirror-center tables, keyed by board radius. Tables
/// are built lazily on the first request for a radius and then live for the
/// rest of the process, shared by every map of that radius. The mutex
/// serializes first-time builds so the same radius is never computed twice.
static CACHE: Lazy<Mutex<FnvHashMap<u16, &'static MirrorCenters>>> =
    Lazy::new(|| Mutex::new(FnvHashMap::default()));

/// Fetch the shared mirror-center table for the given board radius, building
/// it if this is the first request for that radius.
pub fn mirror_centers(radius: u16) -> &'static MirrorCenters {
    let mut cache = CACHE.lock().unwrap();
    *cache.entry(radius).or_insert_with(|| {
        debug!("building mirror center table for radius {radius}");
        Box::leak(Box::new(MirrorCenters::build(radius)))
    })
}

/// The 7 periodic reference points of a wraparound board of a particular
/// radius: index 0 is the board's own center, indices 1-6 are the centers of
/// the six mirror copies, in 60 degree clockwise steps. Never mutated after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorCenters {
    radius: u16,
    centers: [HexCube; 7],
}

impl MirrorCenters {
    fn build(radius: u16) -> Self {
        let r = radius as i16;
        let diameter = 2 * r + 1;
        let center = HexCube::new_rq(r, r);

        // Translation from the board's center to the first mirror copy's
        // center; the other five copies are successive 60 degree clockwise
        // rotations of the same translation.
        let mut translation = HexCube::new_rq(diameter, -r);
        let mut centers = [center; 7];
        for slot in centers.iter_mut().skip(1) {
            *slot = center + translation;
            translation = translation.rotate_cw();
        }

        Self { radius, centers }
    }

    /// The board radius this table was built for
    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// The board's own center, `cube<radius, radius, ..>`
    pub fn center(&self) -> HexCube {
        self.centers[0]
    }

    /// All 7 reference points, the board's own center first
    pub fn centers(&self) -> &[HexCube; 7] {
        &self.centers
    }

    /// Fold a coordinate back onto the board: find the first reference point
    /// (in index order) whose region contains the coordinate, and translate
    /// the coordinate by that region's offset from the board. A region
    /// contains every coordinate within `radius` of its center, boundary
    /// *inclusive*; since neighboring centers are `2 * radius + 1` apart, at
    /// most one region can match even with the inclusive rule.
    ///
    /// Returns `None` if the coordinate is beyond all 7 regions, i.e. more
    /// than a full board away from the board itself.
    pub fn wrap(&self, cube: HexCube) -> Option<HexAxial> {
        let radius = usize::from(self.radius);
        self.centers
            .iter()
            .find(|center| cube.distance_to(**center) <= radius)
            .map(|center| (cube - *center + self.center()).to_axial())
    }
}
