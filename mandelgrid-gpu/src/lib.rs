//! Accelerator-offloaded convergence computation using wgpu.

mod backend;
mod buffers;
mod device;
mod error;
mod pipeline;

pub use backend::GpuBackend;
pub use buffers::{GpuBuffers, Uniforms};
pub use device::GpuContext;
pub use error::GpuError;
pub use pipeline::ConvergencePipeline;
