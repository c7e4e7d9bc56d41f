//! Device buffer management for the convergence kernel.

use bytemuck::{Pod, Zeroable};

/// Uniform data for one dispatch: pixel dimensions and the iteration budget.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    pub _pad: u32,
}

impl Uniforms {
    pub fn new(width: u32, height: u32, max_iter: u16) -> Self {
        Self {
            width,
            height,
            max_iter: max_iter as u32,
            _pad: 0,
        }
    }
}

/// The kernel's device-resident buffers, allocated once per backend.
///
/// `mapping` carries the four pixel→plane coefficients
/// `[re_step, im_step, re_min, im_min]` as f64. `counts` receives one count
/// per work item; WGSL storage has no 16-bit integer type, so counts cross
/// the bus as u32 and narrow to the table's u16 on readback. `staging` is
/// the host-visible buffer the results are copied into for mapping.
pub struct GpuBuffers {
    pub uniforms: wgpu::Buffer,
    pub mapping: wgpu::Buffer,
    pub counts: wgpu::Buffer,
    pub staging: wgpu::Buffer,
    pub pixel_count: u32,
}

impl GpuBuffers {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let pixel_count = width * height;
        let counts_size = (pixel_count as usize * std::mem::size_of::<u32>()) as u64;

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("convergence_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mapping = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("convergence_mapping"),
            size: (4 * std::mem::size_of::<f64>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let counts = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("convergence_counts"),
            size: counts_size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("convergence_staging"),
            size: counts_size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            uniforms,
            mapping,
            counts,
            staging,
            pixel_count,
        }
    }
}
