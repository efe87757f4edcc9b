//! WebGPU shape renderer: paddles as quads, balls as discs

pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{unit_disc, unit_quad};
use game_core::Scene;
use resources::{GameBuffers, GpuMesh};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub shape_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub meshes: (GpuMesh, GpuMesh), // quad, disc
}

impl Renderer {
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        field_width: f32,
        field_height: f32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::for_field(field_width, field_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let quad = GpuMesh::upload(&ctx.device, "Quad", unit_quad());
        let disc = GpuMesh::upload(&ctx.device, "Disc", unit_disc(32));

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            shape_pipeline: pipes.shape_pipeline,
            camera_bind_group,
            buffers,
            meshes: (quad, disc),
        })
    }

    /// Match the surface to a resized canvas; the camera stays on the field
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
