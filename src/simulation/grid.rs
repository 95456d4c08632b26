use crate::simulation::cell::Cell;

/// Axis-adjacent offsets: left, right, up, down
const AXIS_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fixed-size rectangle of cells, stored row-major.
///
/// Dimensions are set once at construction. Edges are hard walls: neighbor
/// lookups never wrap.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell white and at rest.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1, got {}x{}", width, height);
        let cells = vec![Cell::default(); width as usize * height as usize];
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Restore every cell to white with zero velocity
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Flat index of `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller bug and panic in every build profile.
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Panics when `(x, y)` is out of range.
    pub fn get(&self, x: u32, y: u32) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Panics when `(x, y)` is out of range.
    pub fn get_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        let i = self.index(x, y);
        &mut self.cells[i]
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// In-bounds axis-adjacent neighbors of `(x, y)`: 2 at corners, 3 on edges, 4 inside
    pub fn axis_neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        AXIS_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            self.contains(nx, ny).then_some((nx as u32, ny as u32))
        })
    }
}
