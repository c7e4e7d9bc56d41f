//! GPU device initialization and capability detection.

use crate::error::GpuError;

/// Holds the wgpu device and queue.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Initialize the GPU, blocking until setup completes.
    ///
    /// The convergence kernel runs in double precision, so an adapter
    /// without `SHADER_F64` is rejected outright. Failures here are
    /// one-time setup errors; they are logged and surfaced, never retried.
    pub fn new() -> Result<Self, GpuError> {
        pollster::block_on(Self::init_internal()).inspect_err(|e| {
            log::error!("GPU initialization failed: {e}");
        })
    }

    async fn init_internal() -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("GPU adapter: {} ({:?})", info.name, info.backend);

        if !adapter.features().contains(wgpu::Features::SHADER_F64) {
            return Err(GpuError::NoDoublePrecision(info.name));
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("mandelgrid"),
                    required_features: wgpu::Features::SHADER_F64,
                    required_limits: adapter.limits(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        Ok(Self { device, queue })
    }
}
