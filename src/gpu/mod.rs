mod buffers;
mod context;
mod render;

pub use buffers::CellBuffers;
pub use context::GpuContext;
pub use render::RenderPipeline;
