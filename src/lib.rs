//! Color waves: every cell's red, green, and blue channels accelerate toward
//! the average of its neighbors, so clicked-in color spreads as standing waves.

pub mod config;
pub mod input;
pub mod simulation;
pub mod view;
