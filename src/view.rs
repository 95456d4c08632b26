use crate::simulation::{luminance, Grid, Palette};

/// Display and input state that never feeds back into the simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub grayscale: bool,
    pub palette: Palette,
    pub menu_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            grayscale: false,
            palette: Palette::Random,
            menu_visible: true,
        }
    }
}

impl ViewState {
    /// Fill `out` with one opaque RGBA value per cell, row-major
    pub fn pack_colors(&self, grid: &Grid, out: &mut Vec<[f32; 4]>) {
        out.clear();
        out.extend(grid.cells().iter().map(|cell| {
            let [r, g, b] = cell.color;
            if self.grayscale {
                let l = luminance(cell.color);
                [l, l, l, 1.0]
            } else {
                [r, g, b, 1.0]
            }
        }));
    }
}
