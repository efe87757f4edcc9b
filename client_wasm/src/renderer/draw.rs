use super::resources::{GpuMesh, InstanceBuffer};
use super::Renderer;
use crate::instances::SceneInstances;
use game_core::Scene;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let instances = SceneInstances::from_scene(scene);
    let Renderer {
        device,
        queue,
        buffers,
        ..
    } = renderer;
    buffers.rects.write(device, queue, &instances.rects);
    buffers.discs.write(device, queue, &instances.discs);

    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&renderer.shape_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        draw_instanced(&mut pass, &renderer.meshes.0, &renderer.buffers.rects);
        draw_instanced(&mut pass, &renderer.meshes.1, &renderer.buffers.discs);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();
    Ok(())
}

fn draw_instanced(pass: &mut RenderPass<'_>, mesh: &GpuMesh, instances: &InstanceBuffer) {
    if instances.count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances.count);
}
