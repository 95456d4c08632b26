use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use color_waves::config::{SimConfig, TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use color_waves::input::{self, Flow};
use color_waves::simulation::Simulation;
use color_waves::view::ViewState;

use crate::gpu::{CellBuffers, GpuContext, RenderPipeline};

/// Everything that only exists once a window does
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    buffers: CellBuffers,
    pipeline: RenderPipeline,
    bind_group: wgpu::BindGroup,
    sim: Simulation,
}

/// Application state
pub struct App {
    config: SimConfig,
    graphics: Option<Graphics>,
    view: ViewState,
    cursor: Option<PhysicalPosition<f64>>,
    rng: StdRng,
    frame_interval: Duration,
    next_frame: Instant,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            graphics: None,
            view: ViewState::default(),
            cursor: None,
            rng: StdRng::from_entropy(),
            frame_interval: Duration::from_secs(1) / TARGET_FPS,
            next_frame: Instant::now(),
            fps_counter: FpsCounter::new(),
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let window_attrs = Window::default_attributes()
            .with_title("Color Waves")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("failed to create window")?,
        );

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        // The grid is sized once from the initial surface and never resized
        let sim = Simulation::for_surface(gpu.config.width, gpu.config.height, self.config);
        log::info!(
            "Grid size: {}x{} cells of {}px",
            sim.grid().width(),
            sim.grid().height(),
            self.config.cell_size
        );

        let buffers = CellBuffers::new(&gpu.device, sim.grid());
        buffers.update_render_params(&gpu.queue, self.config.cell_size);

        let pipeline = RenderPipeline::new(&gpu.device, gpu.format());
        let bind_group = pipeline.create_bind_group(
            &gpu.device,
            &buffers.colors_buffer,
            &buffers.render_params_buffer,
        );

        Ok(Graphics {
            window,
            gpu,
            buffers,
            pipeline,
            bind_group,
            sim,
        })
    }

    fn render(&mut self) {
        let Some(gfx) = self.graphics.as_mut() else {
            return;
        };

        gfx.buffers.upload_colors(&gfx.gpu.queue, gfx.sim.grid(), &self.view);

        let output = match gfx.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.gpu.surface.configure(&gfx.gpu.device, &gfx.gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gfx
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        gfx.pipeline.draw(&mut encoder, &target, &gfx.bind_group);

        gfx.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(fps) = self.fps_counter.tick() {
            gfx.window.set_title(&format!(
                "Color Waves - {:.0} FPS - {} - {}",
                fps,
                gfx.sim.mode().label(),
                self.view.palette.label()
            ));
        }
    }

    fn handle_click(&mut self) {
        let (Some(gfx), Some(pos)) = (self.graphics.as_mut(), self.cursor) else {
            return;
        };
        // Clicks past the grid's right or bottom edge are ignored
        if let Some((x, y)) = gfx.sim.cell_at_pixel(pos.x, pos.y) {
            let color = self.view.palette.color(&mut self.rng);
            log::debug!("Seeding {:?} at ({}, {})", color, x, y);
            gfx.sim.seed(x, y, color);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        log::info!("Initializing Color Waves...");
        match self.init_graphics(event_loop) {
            Ok(gfx) => {
                log::info!("Initialization complete!");
                input::log_controls();
                self.graphics = Some(gfx);
                self.next_frame = Instant::now();
            }
            Err(e) => {
                log::error!("Initialization failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !event.state.is_pressed() || event.repeat {
                    return;
                }
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };
                let (Some(command), Some(gfx)) =
                    (input::command_for_key(key_code), self.graphics.as_mut())
                else {
                    return;
                };
                if command.apply(&mut gfx.sim, &mut self.view) == Flow::Exit {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_click(),
            WindowEvent::Resized(new_size) => {
                if let Some(gfx) = &mut self.graphics {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    gfx.gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.graphics.as_mut() else {
            return;
        };

        // One simulation tick per frame, paced to TARGET_FPS
        let now = Instant::now();
        if now >= self.next_frame {
            gfx.sim.step();
            gfx.window.request_redraw();
            self.next_frame += self.frame_interval;
            if self.next_frame < now {
                // Fell behind; drop the missed ticks instead of bursting
                self.next_frame = now + self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
