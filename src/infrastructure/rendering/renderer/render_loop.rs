use super::*;
use crate::log_debug;

impl SceneRenderer {
    /// Re-upload vertex data if the scene changed since the last upload.
    fn sync_scene(&mut self, scene: &Scene) {
        if self.uploaded_key == Some(scene.upload_key()) {
            return;
        }

        let mut nodes = Vec::with_capacity(scene.len());
        scene.for_each_node(|shape, transform| {
            let geometry = GpuGeometry::from_draw(&draw_geometry(&shape.mesh, self.strip_parity));
            if geometry.vertices.is_empty() {
                return;
            }
            nodes.push(self.upload_node(&geometry, NodeUniforms::new(transform)));
        });

        log_debug!(
            LogComponent::Infrastructure("SceneRenderer"),
            "📦 Uploaded {} nodes for scene revision {}",
            nodes.len(),
            scene.revision()
        );

        self.nodes = nodes;
        self.uploaded_key = Some(scene.upload_key());
    }

    fn upload_node(&self, geometry: &GpuGeometry, uniforms: NodeUniforms) -> GpuNode {
        let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices.as_ref().map(|indices| {
            self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shape Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let node_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Node Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let node_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.node_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: node_buffer.as_entire_binding(),
            }],
            label: Some("node_bind_group"),
        });

        GpuNode {
            vertex_buffer,
            index_buffer,
            draw_count: geometry.draw_count(),
            topology: geometry.topology,
            node_bind_group,
            _node_buffer: node_buffer,
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), JsValue> {
        self.record_frame_time();
        self.sync_scene(scene);

        let camera = CameraUniforms::from_camera(&scene.camera);
        self.queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));

        let output = self.surface.get_current_texture().map_err(|e| {
            let error_msg = format!("Failed to get surface texture: {:?}", e);
            get_logger().error(LogComponent::Infrastructure("SceneRenderer"), &error_msg);
            AppError::Rendering(error_msg)
        })?;

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b, a] = scene.background.map(f64::from);

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Scene Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            for node in &self.nodes {
                let pipeline = match node.topology {
                    wgpu::PrimitiveTopology::TriangleStrip => &self.strip_pipeline,
                    _ => &self.list_pipeline,
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(1, &node.node_bind_group, &[]);
                render_pass.set_vertex_buffer(0, node.vertex_buffer.slice(..));

                match &node.index_buffer {
                    Some(index_buffer) => {
                        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        render_pass.draw_indexed(0..node.draw_count, 0, 0..1);
                    }
                    None => render_pass.draw(0..node.draw_count, 0..1),
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
