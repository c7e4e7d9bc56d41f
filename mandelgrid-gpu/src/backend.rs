//! The accelerator execution strategy.

use crate::buffers::{GpuBuffers, Uniforms};
use crate::device::GpuContext;
use crate::error::GpuError;
use crate::pipeline::{ConvergencePipeline, WORKGROUP_SIZE};
use mandelgrid_compute::ConvergenceBackend;
use mandelgrid_core::{ConvergenceTable, PlaneMapper, Viewport};

/// Fills the convergence table on a compute device.
///
/// Setup (device, kernel compilation, buffer allocation, bind group) happens
/// once at construction and any failure there is surfaced as a fatal
/// [`GpuError`]. Per recompute, the host writes the uniforms and mapping
/// coefficients, dispatches one work item per pixel, and reads the counts
/// back through the staging buffer — writes, dispatch, and readback are
/// strictly sequenced, and no work item touches another's output slot.
pub struct GpuBackend {
    context: GpuContext,
    pipeline: ConvergencePipeline,
    buffers: GpuBuffers,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl GpuBackend {
    /// Initialize the device and build the kernel for a fixed pixel grid.
    pub fn new(width: u32, height: u32) -> Result<Self, GpuError> {
        Self::with_context(GpuContext::new()?, width, height)
    }

    /// Build the kernel on an already-initialized device.
    pub fn with_context(context: GpuContext, width: u32, height: u32) -> Result<Self, GpuError> {
        let pipeline = ConvergencePipeline::new(&context.device);
        let buffers = GpuBuffers::new(&context.device, width, height);

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("convergence_bind_group"),
                layout: &pipeline.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffers.uniforms.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: buffers.mapping.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buffers.counts.as_entire_binding(),
                    },
                ],
            });

        Ok(Self {
            context,
            pipeline,
            buffers,
            bind_group,
            width,
            height,
        })
    }

    fn dispatch(&self, mapper: &PlaneMapper, budget: u16) -> Result<Vec<u32>, GpuError> {
        self.context.queue.write_buffer(
            &self.buffers.uniforms,
            0,
            bytemuck::bytes_of(&Uniforms::new(self.width, self.height, budget)),
        );
        self.context.queue.write_buffer(
            &self.buffers.mapping,
            0,
            bytemuck::cast_slice(&mapper.coefficients()),
        );

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("convergence_encoder"),
                });

        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("convergence_pass"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.pipeline.compute_pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.dispatch_workgroups(self.buffers.pixel_count.div_ceil(WORKGROUP_SIZE), 1, 1);
        }

        let byte_size = (self.buffers.pixel_count as usize * std::mem::size_of::<u32>()) as u64;
        encoder.copy_buffer_to_buffer(
            &self.buffers.counts,
            0,
            &self.buffers.staging,
            0,
            byte_size,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));

        pollster::block_on(self.read_staging())
    }

    async fn read_staging(&self) -> Result<Vec<u32>, GpuError> {
        let slice = self.buffers.staging.slice(..);

        let (tx, rx) = futures_channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        self.context.device.poll(wgpu::Maintain::Wait);

        rx.await
            .map_err(|_| GpuError::Unavailable("Channel closed".into()))?
            .map_err(GpuError::BufferMap)?;

        let data = {
            let view = slice.get_mapped_range();
            bytemuck::cast_slice(&view).to_vec()
        };
        self.buffers.staging.unmap();

        Ok(data)
    }
}

impl ConvergenceBackend for GpuBackend {
    fn name(&self) -> &'static str {
        "accelerator"
    }

    fn compute(&mut self, viewport: &Viewport, budget: u16) -> ConvergenceTable {
        assert_eq!(
            (viewport.width(), viewport.height()),
            (self.width, self.height),
            "viewport dimensions are fixed at backend construction"
        );

        // Setup succeeded at construction, so a failure here means the
        // device was lost mid-session; that is not a recoverable
        // per-recompute condition.
        let counts = match self.dispatch(&viewport.mapper(), budget) {
            Ok(counts) => counts,
            Err(e) => panic!("accelerator recompute failed after successful setup: {e}"),
        };

        let cells = counts.iter().map(|&c| c as u16).collect();
        ConvergenceTable::from_cells(self.width, self.height, cells)
    }
}
