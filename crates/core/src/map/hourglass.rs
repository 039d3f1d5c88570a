//! The hourglass panel: the complement shape of the wraparound disk, used
//! for irregular side panels rather than the playing field itself.

use log::debug;

/// A bounded hex grid in an hourglass shape: row `i` has
/// `|radius - i| + neck_width` cells, so the grid is narrowest at the center
/// row (the "neck") and widens by one cell per row toward either edge.
///
/// Unlike [WrapAroundMap](crate::map::WrapAroundMap) there is no wraparound
/// and no mirror table; cells are addressed directly by `(row, column)`.
/// Storage is the same flat arena plus per-row offset table.
#[derive(Clone, Debug)]
pub struct HourglassMap<T> {
    neck_width: u16,
    radius: u16,
    /// Every cell payload, row-major
    cells: Vec<T>,
    /// `offsets[row]` is the arena index of the first cell of `row`, with one
    /// trailing entry equal to `cells.len()`
    offsets: Vec<usize>,
}

impl<T> HourglassMap<T> {
    /// Initialize a new panel. `neck_width` is the length of the center row
    /// and must be at least 1; `radius` is the number of rows above (and
    /// below) the center row. `factory` is called exactly once per cell, in
    /// row-major order, to produce the cell's payload.
    pub fn new(
        neck_width: u16,
        radius: u16,
        factory: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let (cells, offsets) = allocate(neck_width, radius, factory);
        Self {
            neck_width,
            radius,
            cells,
            offsets,
        }
    }

    /// Initialize a new panel with every cell defaulted
    pub fn with_shape(neck_width: u16, radius: u16) -> Self
    where
        T: Default,
    {
        Self::new(neck_width, radius, |_, _| T::default())
    }

    /// Re-shape the panel. If both shape parameters are unchanged this is a
    /// no-op and existing cell contents are preserved; otherwise all current
    /// payloads are dropped and the grid is rebuilt through `factory`. If
    /// `factory` panics, the panel keeps its old shape and contents.
    pub fn reinitialize(
        &mut self,
        neck_width: u16,
        radius: u16,
        factory: impl FnMut(usize, usize) -> T,
    ) {
        if neck_width != self.neck_width || radius != self.radius {
            // Build the new grid before touching any field, so a panicking
            // factory leaves the old one fully intact
            let (cells, offsets) = allocate(neck_width, radius, factory);
            self.neck_width = neck_width;
            self.radius = radius;
            self.cells = cells;
            self.offsets = offsets;
        }
    }

    /// Replace every cell's payload with `factory(row, column)`, visiting
    /// each cell exactly once in row-major order.
    pub fn fill_each(&mut self, mut factory: impl FnMut(usize, usize) -> T) {
        for row in 0..self.diameter() {
            let (start, end) = (self.offsets[row], self.offsets[row + 1]);
            for (col, cell) in self.cells[start..end].iter_mut().enumerate() {
                *cell = factory(row, col);
            }
        }
    }

    /// The length of the center row
    pub fn neck_width(&self) -> u16 {
        self.neck_width
    }

    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// The number of rows, `2 * radius + 1` (always odd)
    pub fn diameter(&self) -> usize {
        usize::from(self.radius) * 2 + 1
    }

    /// The number of cells in the panel. This is the sum of the actual row
    /// lengths; there is no simple closed form that holds for all shape
    /// parameters.
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

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.diameter() && col < self.row_len(row)
    }

    /// A reference to the cell at the given position, or `None` if the
    /// position falls outside the hourglass shape
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.arena_index(row, col).map(|index| &self.cells[index])
    }

    /// Mutable variant of [Self::get]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.arena_index(row, col)
            .map(move |index| &mut self.cells[index])
    }

    /// Replace the cell at the given position, dropping the old payload.
    /// Panics if the position falls outside the hourglass shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        match self.arena_index(row, col) {
            Some(index) => self.cells[index] = value,
            None => panic!(
                "position ({}, {}) is out of bounds for hourglass panel \
                 (neck width {}, radius {})",
                row, col, self.neck_width, self.radius
            ),
        }
    }

    /// Visit every `((row, column), payload)` pair in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        (0..self.diameter()).flat_map(move |row| {
            self.cells[self.offsets[row]..self.offsets[row + 1]]
                .iter()
                .enumerate()
                .map(move |(col, value)| ((row, col), value))
        })
    }

    /// Every cell payload, row-major
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Mutable variant of [Self::values]
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    fn arena_index(&self, row: usize, col: usize) -> Option<usize> {
        if self.is_in_bounds(row, col) {
            Some(self.offsets[row] + col)
        } else {
            None
        }
    }
}

/// Build the arena and offset table for a panel of the given shape. Nothing
/// is committed to a map until this returns, so a panicking factory leaves
/// the caller's map untouched.
fn allocate<T>(
    neck_width: u16,
    radius: u16,
    mut factory: impl FnMut(usize, usize) -> T,
) -> (Vec<T>, Vec<usize>) {
    assert!(neck_width >= 1, "neck width must be at least 1");

    let diameter = usize::from(radius) * 2 + 1;
    debug!(
        "allocating hourglass grid: neck width {}, radius {}",
        neck_width, radius
    );

    let mut cells = Vec::new();
    let mut offsets = Vec::with_capacity(diameter + 1);
    for row in 0..diameter {
        offsets.push(cells.len());
        for col in 0..row_len(neck_width, radius, row) {
            cells.push(factory(row, col));
        }
    }
    offsets.push(cells.len());

    (cells, offsets)
}

/// The length of `row` on a panel with the given shape: shortest in the
/// middle, growing by one per step toward either edge
fn row_len(neck_width: u16, radius: u16, row: usize) -> usize {
    let r = i32::from(radius);
    ((r - row as i32).abs() + i32::from(neck_width)) as usize
}
