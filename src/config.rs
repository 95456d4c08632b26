/// Side length of one grid cell in physical pixels
pub const CELL_SIZE: u32 = 10;

/// How strongly a cell's velocity responds to its neighbors' color differences
pub const STIFFNESS: f32 = 0.4;

/// Simulation ticks (and rendered frames) per second
pub const TARGET_FPS: u32 = 60;

/// Initial window size in logical pixels
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Parameters consulted by the engine on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Scale applied to the averaged neighbor difference before it is added to velocity
    pub stiffness: f32,
    /// Pixels per cell edge; the divisor between surface and grid coordinates
    pub cell_size: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            cell_size: CELL_SIZE,
        }
    }
}

impl SimConfig {
    /// Grid size for a surface of the given pixel size. Never returns a zero dimension.
    pub fn grid_dimensions(&self, surface_width: u32, surface_height: u32) -> (u32, u32) {
        let cell = self.cell_size.max(1);
        ((surface_width / cell).max(1), (surface_height / cell).max(1))
    }
}
