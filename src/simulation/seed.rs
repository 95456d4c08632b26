use crate::simulation::cell::{Cell, Rgb};
use crate::simulation::grid::Grid;

/// Paint `color` at rest onto `(x, y)` and every in-bounds cell around it.
///
/// The caller guarantees `(x, y)` is inside the grid; neighbors that fall off
/// the edge are skipped.
pub fn seed(grid: &mut Grid, x: u32, y: u32, color: Rgb) {
    debug_assert!(grid.contains(x as i64, y as i64), "seed at ({}, {}) outside grid", x, y);

    let xs = x.saturating_sub(1)..=(x + 1).min(grid.width() - 1);
    let ys = y.saturating_sub(1)..=(y + 1).min(grid.height() - 1);
    for ty in ys {
        for tx in xs.clone() {
            *grid.get_mut(tx, ty) = Cell::at_rest(color);
        }
    }
    log::trace!("seeded {:?} around ({}, {})", color, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::cell::WHITE;

    const RED: Rgb = [1.0, 0.0, 0.0];

    fn disturbed(width: u32, height: u32) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.get_mut(x, y).velocity = [0.05, -0.05, 0.01];
            }
        }
        grid
    }

    #[test]
    fn test_interior_seed_fills_3x3_block() {
        let mut grid = disturbed(7, 6);
        let before = grid.clone();
        seed(&mut grid, 3, 2, RED);

        for y in 0..6u32 {
            for x in 0..7u32 {
                let inside = x.abs_diff(3) <= 1 && y.abs_diff(2) <= 1;
                if inside {
                    assert_eq!(*grid.get(x, y), Cell::at_rest(RED), "({}, {}) should be seeded", x, y);
                } else {
                    assert_eq!(grid.get(x, y), before.get(x, y), "({}, {}) should be untouched", x, y);
                }
            }
        }
    }

    #[test]
    fn test_corner_seed_fills_2x2_block() {
        let mut grid = Grid::new(5, 5);
        seed(&mut grid, 4, 4, RED);

        let seeded: Vec<_> = grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.color == RED)
            .map(|(i, _)| (i as u32 % 5, i as u32 / 5))
            .collect();
        assert_eq!(seeded, vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_origin_corner_seed() {
        let mut grid = Grid::new(3, 3);
        seed(&mut grid, 0, 0, RED);
        assert_eq!(grid.get(0, 0).color, RED);
        assert_eq!(grid.get(1, 1).color, RED);
        assert_eq!(grid.get(2, 0).color, WHITE);
        assert_eq!(grid.get(0, 2).color, WHITE);
    }

    #[test]
    fn test_edge_seed_fills_clipped_block() {
        let mut grid = Grid::new(5, 4);
        seed(&mut grid, 2, 0, RED);
        seed(&mut grid, 4, 2, [0.0, 0.0, 1.0]);

        // The second block overwrites (3, 1)
        let count = |color: Rgb| grid.cells().iter().filter(|c| c.color == color).count();
        assert_eq!(count(RED), 5);
        assert_eq!(count([0.0, 0.0, 1.0]), 6);
        for (x, y) in [(1, 0), (3, 0), (1, 1), (2, 1)] {
            assert_eq!(grid.get(x, y).color, RED);
        }
        for (x, y) in [(3, 1), (4, 1), (3, 3), (4, 3)] {
            assert_eq!(grid.get(x, y).color, [0.0, 0.0, 1.0]);
        }
        assert_eq!(grid.get(0, 0).color, WHITE);
        assert_eq!(grid.get(2, 2).color, WHITE);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut once = disturbed(6, 6);
        seed(&mut once, 2, 3, [0.5, 0.0, 1.0]);
        let mut twice = once.clone();
        seed(&mut twice, 2, 3, [0.5, 0.0, 1.0]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_seed_on_single_cell_grid() {
        let mut grid = Grid::new(1, 1);
        seed(&mut grid, 0, 0, RED);
        assert_eq!(*grid.get(0, 0), Cell::at_rest(RED));
    }
}
