use crate::simulation::cell::Rgb;
use crate::simulation::grid::Grid;

/// Order in which velocity accumulation and color application happen within a tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every velocity is updated from start-of-tick colors, then every color moves.
    /// Waves spread evenly in all directions.
    #[default]
    Parallel,
    /// Each cell updates velocity and color before the next cell is visited, so
    /// later cells see neighbors that already moved this tick.
    Sequential,
}

impl UpdateMode {
    pub fn toggled(self) -> Self {
        match self {
            UpdateMode::Parallel => UpdateMode::Sequential,
            UpdateMode::Sequential => UpdateMode::Parallel,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UpdateMode::Parallel => "Parallel",
            UpdateMode::Sequential => "Sequential",
        }
    }
}

/// Advance the grid by one tick.
///
/// Cells are visited column by column, left to right, each column top to bottom.
/// In Sequential mode a cell therefore sees its left and up neighbors already
/// moved and its right and down neighbors not yet moved.
pub fn step(grid: &mut Grid, mode: UpdateMode, stiffness: f32) {
    match mode {
        UpdateMode::Sequential => {
            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    accelerate_cell(grid, x, y, stiffness);
                    grid.get_mut(x, y).advance();
                }
            }
        }
        UpdateMode::Parallel => {
            // Colors are untouched until every velocity is in place
            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    accelerate_cell(grid, x, y, stiffness);
                }
            }
            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    grid.get_mut(x, y).advance();
                }
            }
        }
    }
}

/// Mean color difference between `(x, y)` and its axis-adjacent neighbors.
///
/// `None` when the cell has no neighbors (1x1 grid).
pub fn neighbor_pull(grid: &Grid, x: u32, y: u32) -> Option<Rgb> {
    let center = grid.get(x, y).color;
    let mut sum = [0.0f32; 3];
    let mut count = 0u32;

    for (nx, ny) in grid.axis_neighbors(x, y) {
        let neighbor = grid.get(nx, ny).color;
        for ch in 0..3 {
            sum[ch] += neighbor[ch] - center[ch];
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(sum.map(|s| s / count as f32))
}

fn accelerate_cell(grid: &mut Grid, x: u32, y: u32, stiffness: f32) {
    if let Some(pull) = neighbor_pull(grid, x, y) {
        grid.get_mut(x, y).accelerate(pull.map(|p| p * stiffness));
    }
}
