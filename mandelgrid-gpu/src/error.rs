//! GPU error types.
//!
//! All of these are setup errors: they can only occur once, at backend
//! construction, and are never retried. Callers treat them as fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("No GPU adapter found")]
    NoAdapter,

    #[error("Adapter '{0}' does not support double-precision shaders")]
    NoDoublePrecision(String),

    #[error("Failed to create device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("Buffer mapping failed: {0}")]
    BufferMap(#[from] wgpu::BufferAsyncError),

    #[error("GPU unavailable: {0}")]
    Unavailable(String),
}
