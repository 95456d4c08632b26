use rand::Rng;

use crate::simulation::cell::Rgb;

/// Colors available for seeding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    /// Fresh random color on every seed
    #[default]
    Random,
}

impl Palette {
    pub const FIXED: [Palette; 6] = [
        Palette::Red,
        Palette::Orange,
        Palette::Yellow,
        Palette::Green,
        Palette::Blue,
        Palette::Violet,
    ];

    /// Fixed hue for digits 1..=6
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=6 => Some(Self::FIXED[digit as usize - 1]),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Palette::Red => "red",
            Palette::Orange => "orange",
            Palette::Yellow => "yellow",
            Palette::Green => "green",
            Palette::Blue => "blue",
            Palette::Violet => "violet",
            Palette::Random => "random",
        }
    }

    /// Channel values for this palette entry. Only `Random` draws from `rng`.
    pub fn color<R: Rng + ?Sized>(self, rng: &mut R) -> Rgb {
        match self {
            Palette::Red => [1.0, 0.0, 0.0],
            Palette::Orange => [1.0, 0.5, 0.0],
            Palette::Yellow => [1.0, 1.0, 0.0],
            Palette::Green => [0.0, 1.0, 0.0],
            Palette::Blue => [0.0, 0.0, 1.0],
            Palette::Violet => [0.5, 0.0, 1.0],
            Palette::Random => random_color(rng),
        }
    }
}

/// Three channels in whole hundredths of [0, 1] (both ends included), then one
/// channel chosen uniformly and zeroed to keep the result saturated.
///
/// A chained draw (1 in 3 for red, else 1 in 2 for green, else blue) gives the
/// same 1/3 per channel.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let mut color: Rgb = [0.0; 3];
    for ch in &mut color {
        *ch = rng.gen_range(0..=100u32) as f32 / 100.0;
    }
    color[rng.gen_range(0..3usize)] = 0.0;
    color
}
