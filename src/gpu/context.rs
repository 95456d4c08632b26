use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::{Device, Instance, Limits, Queue, Surface, SurfaceConfiguration};
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
}

impl GpuContext {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        log::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("color-waves-device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: required_limits(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .context("failed to create device")?;

        let max_dim = device.limits().max_texture_dimension_2d;
        let size = fit_surface(window.inner_size(), max_dim);
        let config = surface
            .get_default_config(&adapter, size.width, size.height)
            .context("surface not supported by adapter")?;

        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// Reconfigure for a new window size. The grid keeps its size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        let size = fit_surface(new_size, self.device.limits().max_texture_dimension_2d);
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

/// Downlevel-safe limits, with texture size raised to what the adapter offers
/// so HiDPI and full-screen surfaces fit.
fn required_limits(adapter_limits: Limits) -> Limits {
    Limits::downlevel_defaults().using_resolution(adapter_limits)
}

/// Surface size within `1..=max_dim` on both axes
fn fit_surface(size: PhysicalSize<u32>, max_dim: u32) -> PhysicalSize<u32> {
    let max_dim = max_dim.max(1);
    PhysicalSize::new(size.width.clamp(1, max_dim), size.height.clamp(1, max_dim))
}
