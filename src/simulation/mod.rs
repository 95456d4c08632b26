mod cell;
mod engine;
mod grid;
mod palette;
mod seed;
mod update;

pub use cell::{luminance, Cell, Rgb, WHITE};
pub use engine::Simulation;
pub use grid::Grid;
pub use palette::{random_color, Palette};
pub use seed::seed;
pub use update::{neighbor_pull, step, UpdateMode};
