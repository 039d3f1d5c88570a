//! The wraparound board: a hex disk whose edges connect seamlessly to each
//! other, so moving off one side re-enters on the opposite side (the
//! hexagonal analogue of a torus).

use crate::{
    hex::{HexAxial, HexCube},
    map::mirror::{mirror_centers, MirrorCenters},
};
use log::debug;
use std::{cmp, ops};

/// A bounded hex-disk grid with seamless wraparound addressing.
///
/// For a board of radius `r`, the rows form a symmetric disk: row 0 and the
/// last row are the shortest (`r + 1` cells), the middle row is the longest
/// (`2r + 1` cells), for `3r(r + 1) + 1` cells total. Cell payloads live in a
/// single flat arena indexed through a per-row offset table, so the jagged
/// shape costs one allocation rather than one per row.
///
/// Indexing by [HexCube] accepts *any* coordinate in the plane: it is first
/// folded back onto the board through the shared [MirrorCenters] table for
/// this radius. The `*_wrapped` accessors skip that step for coordinates
/// already known to be on the board.
#[derive(Clone, Debug)]
pub struct WrapAroundMap<T> {
    radius: u16,
    /// Every cell payload, row-major
    cells: Vec<T>,
    /// `offsets[row]` is the arena index of the first cell of `row`, with one
    /// trailing entry equal to `cells.len()`, so each row's length is the
    /// delta between adjacent entries
    offsets: Vec<usize>,
    mirrors: &'static MirrorCenters,
}

impl<T> WrapAroundMap<T> {
    /// Initialize a new board of the given radius. `factory` is called
    /// exactly once per cell, in row-major order, to produce the cell's
    /// payload.
    pub fn new(radius: u16, factory: impl FnMut(HexAxial) -> T) -> Self {
        let (cells, offsets) = allocate(radius, factory);
        Self {
            radius,
            cells,
            offsets,
            mirrors: mirror_centers(radius),
        }
    }

    /// Initialize a new board with every cell defaulted
    pub fn with_radius(radius: u16) -> Self
    where
        T: Default,
    {
        Self::new(radius, |_| T::default())
    }

    /// Re-shape the board. If the radius is unchanged this is a no-op and
    /// existing cell contents are preserved; otherwise all current payloads
    /// are dropped and the grid is rebuilt through `factory`. If `factory`
    /// panics, the map keeps its old radius and contents.
    pub fn reinitialize(
        &mut self,
        radius: u16,
        factory: impl FnMut(HexAxial) -> T,
    ) {
        if radius != self.radius {
            // Build the new grid before touching any field, so a panicking
            // factory leaves the old one fully intact
            let (cells, offsets) = allocate(radius, factory);
            self.radius = radius;
            self.mirrors = mirror_centers(radius);
            self.cells = cells;
            self.offsets = offsets;
        }
    }

    /// Replace every cell's payload with `factory(coordinate)`, visiting each
    /// cell exactly once in row-major order.
    pub fn fill_each(&mut self, mut factory: impl FnMut(HexAxial) -> T) {
        for row in 0..self.diameter() {
            let (start, end) = (self.offsets[row], self.offsets[row + 1]);
            for (col, cell) in self.cells[start..end].iter_mut().enumerate() {
                *cell = factory(axial_at(self.radius, row, col));
            }
        }
    }

    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// The number of rows, `2 * radius + 1` (always odd)
    pub fn diameter(&self) -> usize {
        usize::from(self.radius) * 2 + 1
    }

    /// The coordinate of the board's center cell, `axial<radius, radius>`
    pub fn center(&self) -> HexAxial {
        HexAxial::new(self.radius as i16, self.radius as i16)
    }

    /// The number of cells on the board, `3 * radius * (radius + 1) + 1`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of cells in the given row
    pub fn row_len(&self, row: usize) -> usize {
        self.offsets[row + 1] - self.offsets[row]
    }

    /// Fold an arbitrary coordinate back onto the board. Any coordinate up to
    /// one full board away from the edge resolves to its unique equivalent
    /// cell; anything further out means the caller's bookkeeping is broken,
    /// so this fails fast rather than returning a garbage cell.
    pub fn wrap_around(&self, cube: HexCube) -> HexAxial {
        match self.mirrors.wrap(cube) {
            Some(axial) => axial,
            None => panic!(
                "coordinate {} is outside every mirror region of the \
                 radius-{} board",
                cube, self.radius
            ),
        }
    }

    /// Whether the coordinate addresses a cell directly, without wrapping
    pub fn is_in_bounds(&self, axial: HexAxial) -> bool {
        let row = axial.r();
        if row < 0 || row as usize >= self.diameter() {
            return false;
        }
        let col = col_index(self.radius, axial);
        col >= 0 && (col as usize) < self.row_len(row as usize)
    }

    /// A reference to the cell at the given coordinate, wrapping first
    pub fn get(&self, cube: HexCube) -> &T {
        self.get_wrapped(self.wrap_around(cube))
    }

    /// A mutable reference to the cell at the given coordinate, wrapping
    /// first
    pub fn get_mut(&mut self, cube: HexCube) -> &mut T {
        let axial = self.wrap_around(cube);
        self.get_wrapped_mut(axial)
    }

    /// Replace the cell at the given coordinate, wrapping first. The old
    /// payload is dropped.
    pub fn set(&mut self, cube: HexCube, value: T) {
        let axial = self.wrap_around(cube);
        self.set_wrapped(axial, value);
    }

    /// A reference to the cell at a coordinate already known to be on the
    /// board (e.g. one produced by [Self::wrap_around] or the coordinate
    /// enumeration). Skips the wrap step; panics if the coordinate is out of
    /// bounds.
    pub fn get_wrapped(&self, axial: HexAxial) -> &T {
        &self.cells[self.arena_index(axial)]
    }

    /// Mutable variant of [Self::get_wrapped]
    pub fn get_wrapped_mut(&mut self, axial: HexAxial) -> &mut T {
        let index = self.arena_index(axial);
        &mut self.cells[index]
    }

    /// Replace the cell at a coordinate already known to be on the board
    pub fn set_wrapped(&mut self, axial: HexAxial, value: T) {
        let index = self.arena_index(axial);
        self.cells[index] = value;
    }

    /// Visit every `(coordinate, payload)` pair in row-major order. The
    /// iterator is finite and can be restarted by calling this again.
    pub fn iter(&self) -> impl Iterator<Item = (HexAxial, &T)> + '_ {
        let radius = self.radius;
        (0..self.diameter()).flat_map(move |row| {
            self.cells[self.offsets[row]..self.offsets[row + 1]]
                .iter()
                .enumerate()
                .map(move |(col, value)| (axial_at(radius, row, col), value))
        })
    }

    /// Every cell coordinate, row-major
    pub fn coordinates(&self) -> impl Iterator<Item = HexAxial> + '_ {
        self.iter().map(|(axial, _)| axial)
    }

    /// Every cell payload, row-major
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Mutable variant of [Self::values]
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    /// Map the wrapped coordinate to its arena slot
    fn arena_index(&self, axial: HexAxial) -> usize {
        assert!(
            self.is_in_bounds(axial),
            "coordinate {} is out of bounds for the radius-{} board",
            axial,
            self.radius
        );
        self.offsets[axial.r() as usize] + col_index(self.radius, axial) as usize
    }
}

impl<T> ops::Index<HexCube> for WrapAroundMap<T> {
    type Output = T;

    fn index(&self, cube: HexCube) -> &T {
        self.get(cube)
    }
}

impl<T> ops::IndexMut<HexCube> for WrapAroundMap<T> {
    fn index_mut(&mut self, cube: HexCube) -> &mut T {
        self.get_mut(cube)
    }
}

/// Build the arena and offset table for a board of the given radius. Nothing
/// is committed to a map until this returns, so a panicking factory leaves
/// the caller's map untouched.
fn allocate<T>(
    radius: u16,
    mut factory: impl FnMut(HexAxial) -> T,
) -> (Vec<T>, Vec<usize>) {
    let diameter = usize::from(radius) * 2 + 1;
    debug!(
        "allocating wraparound grid: radius {}, {} cells",
        radius,
        cell_count(radius)
    );

    let mut cells = Vec::with_capacity(cell_count(radius));
    let mut offsets = Vec::with_capacity(diameter + 1);
    for row in 0..diameter {
        offsets.push(cells.len());
        for col in 0..row_len(radius, row) {
            cells.push(factory(axial_at(radius, row, col)));
        }
    }
    offsets.push(cells.len());
    debug_assert_eq!(cells.len(), cell_count(radius), "expected 3r(r+1)+1 cells");

    (cells, offsets)
}

/// Calculate the size of a board (the number of cells it contains) based on
/// its radius. Radius 0 means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub(crate) fn cell_count(radius: u16) -> usize {
    // 3r(r+1)+1 is the reduction of the geometric sum: f(0) = 1, and we add
    // 6r cells for every ring after that, so: 1, (+6) 7, (+12) 19, (+18) 37
    let r = usize::from(radius);
    3 * r * (r + 1) + 1
}

/// The length of `row` on a board of the given radius: longest in the middle,
/// shrinking by one per step toward either edge
fn row_len(radius: u16, row: usize) -> usize {
    let r = i32::from(radius);
    let diameter = 2 * r + 1;
    (diameter - (r - row as i32).abs()) as usize
}

/// Translate a coordinate's `q` component to its column within its row,
/// accounting for the trapezoidal row shape. Can be negative for coordinates
/// left of the row's first cell.
fn col_index(radius: u16, axial: HexAxial) -> i32 {
    i32::from(axial.q())
        - cmp::max(0, i32::from(radius) - i32::from(axial.r()))
}

/// Inverse of [col_index]: the coordinate of the cell at `(row, col)`
fn axial_at(radius: u16, row: usize, col: usize) -> HexAxial {
    let q = col as i32 + cmp::max(0, i32::from(radius) - row as i32);
    HexAxial::new(row as i16, q as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_one_shape() {
        let map: WrapAroundMap<bool> = WrapAroundMap::new(1, |_| true);
        assert_eq!(map.len(), 7);
        assert_eq!(map.diameter(), 3);
        assert_eq!(
            (map.row_len(0), map.row_len(1), map.row_len(2)),
            (2, 3, 2)
        );

        // The center cell, then the surrounding ring
        assert_eq!(map.center(), HexAxial::new(1, 1));
        for (r, q) in [(1, 1), (1, 0), (1, 2), (0, 1), (0, 2), (2, 0), (2, 1)]
        {
            assert!(map.is_in_bounds(HexAxial::new(r, q)), "({r}, {q})");
        }
        // Corners that fall outside the disk shape
        assert!(!map.is_in_bounds(HexAxial::new(0, 0)));
        assert!(!map.is_in_bounds(HexAxial::new(2, 2)));
        assert!(!map.is_in_bounds(HexAxial::new(-1, 1)));
    }

    #[test]
    fn test_cell_count_formula() {
        for radius in [0, 1, 2, 3, 10] {
            let map: WrapAroundMap<()> = WrapAroundMap::new(radius, |_| ());
            let row_sum: usize =
                (0..map.diameter()).map(|row| map.row_len(row)).sum();
            assert_eq!(map.len(), row_sum);
            assert_eq!(map.len(), cell_count(radius));
        }
        assert_eq!(cell_count(0), 1);
        assert_eq!(cell_count(1), 7);
        assert_eq!(cell_count(2), 19);
        assert_eq!(cell_count(3), 37);
    }

    #[test]
    fn test_factory_visits_each_cell_once() {
        let mut visited = Vec::new();
        let map = WrapAroundMap::new(2, |axial| {
            visited.push(axial);
            axial
        });
        assert_eq!(visited.len(), map.len());

        // Row-major order, and every cell holds its own coordinate
        let coordinates: Vec<_> = map.coordinates().collect();
        assert_eq!(visited, coordinates);
        for (axial, value) in map.iter() {
            assert_eq!(*value, axial);
        }
    }

    #[test]
    fn test_enumerated_coordinates_are_in_bounds() {
        let map: WrapAroundMap<()> = WrapAroundMap::with_radius(3);
        for axial in map.coordinates() {
            assert!(map.is_in_bounds(axial), "{axial}");
        }
    }

    #[test]
    fn test_wrap_around_covers_neighborhood() {
        // Stepping any distance up to a radius off any cell still resolves
        // to a cell on the board
        let map: WrapAroundMap<()> = WrapAroundMap::new(2, |_| ());
        let radius = map.radius() as i16;
        for axial in map.coordinates() {
            for dr in -radius..=radius {
                for dq in -radius..=radius {
                    let moved = axial + HexAxial::new(dr, dq);
                    let wrapped = map.wrap_around(moved.to_cube());
                    assert!(map.is_in_bounds(wrapped), "{moved} -> {wrapped}");
                }
            }
        }
    }

    #[test]
    fn test_wrap_around_is_idempotent() {
        let map: WrapAroundMap<()> = WrapAroundMap::new(2, |_| ());
        for axial in map.coordinates() {
            for offset in [HexAxial::new(-2, 0), HexAxial::new(1, 2)] {
                let wrapped = map.wrap_around((axial + offset).to_cube());
                assert_eq!(map.wrap_around(wrapped.to_cube()), wrapped);
            }
        }
    }

    #[test]
    fn test_wrap_around_in_bounds_is_identity() {
        let map: WrapAroundMap<()> = WrapAroundMap::new(2, |_| ());
        for axial in map.coordinates() {
            assert_eq!(map.wrap_around(axial.to_cube()), axial);
        }
    }

    #[test]
    #[should_panic(expected = "outside every mirror region")]
    fn test_wrap_around_rejects_far_coordinates() {
        let map: WrapAroundMap<()> = WrapAroundMap::new(1, |_| ());
        map.wrap_around(HexCube::new_rq(100, -250));
    }

    #[test]
    fn test_get_set_through_wrapping() {
        let mut map = WrapAroundMap::new(1, |_| 0);
        // One step above the top-left cell; wraps to somewhere on the board
        let outside = HexCube::new_rq(-1, 1);
        map.set(outside, 42);
        assert_eq!(*map.get(outside), 42);
        assert_eq!(map[outside], 42);

        // The wrapped image addresses the same cell directly
        let wrapped = map.wrap_around(outside);
        assert_eq!(*map.get_wrapped(wrapped), 42);
        map.set_wrapped(wrapped, 7);
        assert_eq!(map[outside], 7);
    }

    #[test]
    fn test_index_mut() {
        let mut map = WrapAroundMap::new(1, |_| 0);
        let center = map.center().to_cube();
        map[center] += 5;
        assert_eq!(map[center], 5);
    }

    #[test]
    fn test_fill_each() {
        let mut map = WrapAroundMap::new(1, |_| 0);
        map.fill_each(|axial| i32::from(axial.q()));
        for (axial, value) in map.iter() {
            assert_eq!(*value, i32::from(axial.q()));
        }
    }

    #[test]
    fn test_reinitialize_same_radius_is_noop() {
        let mut map = WrapAroundMap::new(1, |_| 1);
        map.set_wrapped(HexAxial::new(0, 1), 99);
        map.reinitialize(1, |_| 0);
        // Contents survive; the factory was never called
        assert_eq!(*map.get_wrapped(HexAxial::new(0, 1)), 99);
        assert_eq!(map.len(), 7);
    }

    #[test]
    fn test_reinitialize_new_radius_rebuilds() {
        let mut map = WrapAroundMap::new(1, |_| 1);
        map.reinitialize(2, |_| 0);
        assert_eq!(map.radius(), 2);
        assert_eq!(map.len(), 19);
        assert!(map.values().all(|&value| value == 0));
    }

    #[test]
    fn test_reinitialize_panicking_factory_preserves_old_grid() {
        let mut map = WrapAroundMap::new(1, |_| 0);
        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let mut calls = 0;
                map.reinitialize(2, |_| {
                    calls += 1;
                    if calls == 3 {
                        panic!("factory failure");
                    }
                    1
                });
            }));
        assert!(result.is_err());

        // The failed rebuild left no trace: old radius, old size, old
        // contents
        assert_eq!(map.radius(), 1);
        assert_eq!(map.len(), 7);
        assert!(map.values().all(|&value| value == 0));
    }

    #[test]
    fn test_values_mut() {
        let mut map = WrapAroundMap::new(1, |_| 1);
        for value in map.values_mut() {
            *value += 1;
        }
        assert!(map.values().all(|&value| value == 2));
    }
}
