/// Color or color-velocity triple: [red, green, blue]
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];

/// One square of the simulated surface.
///
/// - color: each channel kept within [0.0, 1.0]
/// - velocity: per-channel rate of change, unbounded, carried across ticks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub color: Rgb,
    pub velocity: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self::at_rest(WHITE)
    }
}

impl Cell {
    /// A cell holding `color` with zero velocity
    pub fn at_rest(color: Rgb) -> Self {
        Self {
            color,
            velocity: [0.0, 0.0, 0.0],
        }
    }

    /// Add `delta` to the velocity of every channel
    pub fn accelerate(&mut self, delta: Rgb) {
        for (v, d) in self.velocity.iter_mut().zip(delta) {
            *v += d;
        }
    }

    /// Move color by velocity, then clamp into [0, 1].
    ///
    /// A channel that ends up on a bound loses its velocity, so no pressure
    /// builds up against the wall.
    pub fn advance(&mut self) {
        for (c, v) in self.color.iter_mut().zip(self.velocity.iter_mut()) {
            *c += *v;
            if *c >= 1.0 {
                *c = 1.0;
                *v = 0.0;
            } else if *c <= 0.0 {
                *c = 0.0;
                *v = 0.0;
            }
        }
    }
}

/// Mean of the three channels, used for grayscale display
pub fn luminance(color: Rgb) -> f32 {
    (color[0] + color[1] + color[2]) / 3.0
}
