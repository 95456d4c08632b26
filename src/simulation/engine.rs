use crate::config::SimConfig;
use crate::simulation::cell::Rgb;
use crate::simulation::grid::Grid;
use crate::simulation::seed::seed;
use crate::simulation::update::{step, UpdateMode};

/// Grid plus the state that governs how it evolves.
///
/// Every mutation goes through `&mut self`, so a tick and a seed can never
/// interleave.
pub struct Simulation {
    grid: Grid,
    mode: UpdateMode,
    config: SimConfig,
    tick: u64,
}

impl Simulation {
    /// A white, motionless grid of `width` x `height` cells in Parallel mode
    pub fn new(width: u32, height: u32, config: SimConfig) -> Self {
        log::debug!("Creating {}x{} grid (stiffness {})", width, height, config.stiffness);
        Self {
            grid: Grid::new(width, height),
            mode: UpdateMode::default(),
            config,
            tick: 0,
        }
    }

    /// Size the grid to cover a surface of the given pixel size
    pub fn for_surface(surface_width: u32, surface_height: u32, config: SimConfig) -> Self {
        let (width, height) = config.grid_dimensions(surface_width, surface_height);
        Self::new(width, height, config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
    }

    /// Ticks run since creation
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Back to white and motionless; mode and tick count are kept
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// One tick under the current mode
    pub fn step(&mut self) {
        step(&mut self.grid, self.mode, self.config.stiffness);
        self.tick += 1;
    }

    /// Inject `color` at `(x, y)` and its neighbors. Caller checks bounds.
    pub fn seed(&mut self, x: u32, y: u32, color: Rgb) {
        seed(&mut self.grid, x, y, color);
    }

    /// Grid cell under a surface pixel, `None` past the right or bottom edge
    pub fn cell_at_pixel(&self, px: f64, py: f64) -> Option<(u32, u32)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let cell = self.config.cell_size.max(1) as f64;
        let (x, y) = ((px / cell).floor() as i64, (py / cell).floor() as i64);
        self.grid.contains(x, y).then_some((x as u32, y as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::cell::{Cell, WHITE};

    #[test]
    fn test_new_simulation_is_neutral() {
        let sim = Simulation::new(10, 8, SimConfig::default());
        assert_eq!(sim.mode(), UpdateMode::Parallel);
        assert_eq!(sim.tick(), 0);
        assert!(sim.grid().cells().iter().all(|c| *c == Cell::at_rest(WHITE)));
    }

    #[test]
    fn test_for_surface_uses_cell_size() {
        let sim = Simulation::for_surface(1280, 720, SimConfig::default());
        assert_eq!((sim.grid().width(), sim.grid().height()), (128, 72));
    }

    #[test]
    fn test_reset_after_activity() {
        let mut sim = Simulation::new(10, 10, SimConfig::default());
        sim.set_mode(UpdateMode::Sequential);
        sim.seed(5, 5, [0.0, 0.0, 1.0]);
        for _ in 0..20 {
            sim.step();
        }
        sim.reset();
        assert!(sim.grid().cells().iter().all(|c| *c == Cell::at_rest(WHITE)));
        assert_eq!(sim.mode(), UpdateMode::Sequential);
        assert_eq!(sim.tick(), 20);
    }

    #[test]
    fn test_step_uses_configured_stiffness() {
        let config = SimConfig { stiffness: 0.1, cell_size: 10 };
        let mut sim = Simulation::new(3, 1, config);
        sim.seed(0, 0, [0.0, 0.0, 0.0]);
        // Cells 0 and 1 are black, cell 2 is white
        sim.step();
        let middle = sim.grid().get(1, 0).color[0];
        // Middle pulled toward the white right cell: (0 + 1) / 2 * 0.1
        assert!((middle - 0.05).abs() < 1e-6, "got {}", middle);
    }

    #[test]
    fn test_mode_switch_changes_next_step() {
        let mut a = Simulation::new(4, 1, SimConfig::default());
        let mut b = Simulation::new(4, 1, SimConfig::default());
        a.seed(0, 0, [0.0, 0.0, 0.0]);
        b.seed(0, 0, [0.0, 0.0, 0.0]);
        b.set_mode(UpdateMode::Sequential);
        a.step();
        b.step();
        assert_ne!(a.grid(), b.grid());
    }

    #[test]
    fn test_cell_at_pixel() {
        let sim = Simulation::new(128, 72, SimConfig::default());
        assert_eq!(sim.cell_at_pixel(0.0, 0.0), Some((0, 0)));
        assert_eq!(sim.cell_at_pixel(19.9, 35.0), Some((1, 3)));
        assert_eq!(sim.cell_at_pixel(1279.0, 719.0), Some((127, 71)));
        assert_eq!(sim.cell_at_pixel(1280.0, 10.0), None);
        assert_eq!(sim.cell_at_pixel(10.0, 725.0), None);
        assert_eq!(sim.cell_at_pixel(-1.0, 10.0), None);
    }
}
