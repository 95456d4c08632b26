use wgpu::{Buffer, BufferUsages, Device, Queue};

use color_waves::simulation::Grid;
use color_waves::view::ViewState;

/// Per-frame cell colors plus the uniforms the fragment shader needs
pub struct CellBuffers {
    /// One vec4<f32> per cell, row-major
    pub colors_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    /// CPU staging for the packed colors, reused every frame
    staging: Vec<[f32; 4]>,
    width: u32,
    height: u32,
}

/// Render parameters passed to the fragment shader (16 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size: u32,
    pub _padding: u32,
}

impl CellBuffers {
    pub fn new(device: &Device, grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let cell_count = width as usize * height as usize;

        let colors_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cell-colors-buffer"),
            size: (cell_count * std::mem::size_of::<[f32; 4]>()) as u64,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            colors_buffer,
            render_params_buffer,
            staging: Vec::with_capacity(cell_count),
            width,
            height,
        }
    }

    /// Pack and upload the current grid colors
    pub fn upload_colors(&mut self, queue: &Queue, grid: &Grid, view: &ViewState) {
        debug_assert_eq!((grid.width(), grid.height()), (self.width, self.height));
        view.pack_colors(grid, &mut self.staging);
        queue.write_buffer(&self.colors_buffer, 0, bytemuck::cast_slice(&self.staging));
    }

    pub fn update_render_params(&self, queue: &Queue, cell_size: u32) {
        let params = RenderParams {
            grid_width: self.width,
            grid_height: self.height,
            cell_size: cell_size.max(1),
            _padding: 0,
        };
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}
