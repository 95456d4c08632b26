mod app;
mod gpu;

use anyhow::Result;
use winit::event_loop::EventLoop;

use color_waves::config::SimConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let mut app = app::App::new(SimConfig::default());
    event_loop.run_app(&mut app)?;
    Ok(())
}
