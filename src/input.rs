use winit::keyboard::KeyCode;

use crate::simulation::{Palette, Simulation, UpdateMode};
use crate::view::ViewState;

/// Everything the keyboard can ask of the running app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectPalette(Palette),
    SetMode(UpdateMode),
    ToggleMode,
    Clear,
    SetGrayscale(bool),
    ToggleMenu,
    Quit,
}

/// Whether the event loop should keep going after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Digit1 => Command::SelectPalette(Palette::Red),
        KeyCode::Digit2 => Command::SelectPalette(Palette::Orange),
        KeyCode::Digit3 => Command::SelectPalette(Palette::Yellow),
        KeyCode::Digit4 => Command::SelectPalette(Palette::Green),
        KeyCode::Digit5 => Command::SelectPalette(Palette::Blue),
        KeyCode::Digit6 => Command::SelectPalette(Palette::Violet),
        KeyCode::KeyR => Command::SelectPalette(Palette::Random),
        KeyCode::KeyP => Command::SetMode(UpdateMode::Parallel),
        KeyCode::KeyS => Command::SetMode(UpdateMode::Sequential),
        KeyCode::Space => Command::ToggleMode,
        KeyCode::KeyW => Command::Clear,
        KeyCode::KeyG => Command::SetGrayscale(true),
        KeyCode::KeyC => Command::SetGrayscale(false),
        KeyCode::KeyM => Command::ToggleMenu,
        KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

impl Command {
    pub fn apply(self, sim: &mut Simulation, view: &mut ViewState) -> Flow {
        match self {
            Command::SelectPalette(palette) => {
                view.palette = palette;
                log::info!("Seed color: {}", palette.label());
            }
            Command::SetMode(mode) => {
                sim.set_mode(mode);
                log::info!("Update mode: {}", mode.label());
            }
            Command::ToggleMode => {
                let mode = sim.mode().toggled();
                sim.set_mode(mode);
                log::info!("Update mode: {}", mode.label());
            }
            Command::Clear => {
                sim.reset();
                log::info!("Cleared to white");
            }
            Command::SetGrayscale(on) => {
                view.grayscale = on;
                log::info!("Grayscale: {}", if on { "ON" } else { "OFF" });
            }
            Command::ToggleMenu => {
                view.menu_visible = !view.menu_visible;
                if view.menu_visible {
                    log_controls();
                }
            }
            Command::Quit => {
                log::info!("Escape pressed, exiting...");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }
}

pub fn log_controls() {
    log::info!("Controls:");
    log::info!("  Left click: Seed color");
    log::info!("  1-6: Red, orange, yellow, green, blue, violet");
    log::info!("  R: Random colors");
    log::info!("  P / S: Parallel / sequential update");
    log::info!("  Space: Toggle update mode");
    log::info!("  G / C: Grayscale / color display");
    log::info!("  W: Clear to white");
    log::info!("  M: Show/hide this menu");
    log::info!("  Escape: Quit");
}
