use glam::{Mat4, Vec3};
use shape_scene_wasm::domain::geometry::ShapeKind;
use shape_scene_wasm::domain::scene::{Camera, draw_geometry};
use shape_scene_wasm::infrastructure::rendering::gpu_structures::{
    CameraUniforms, GpuGeometry, NodeUniforms, ShapeVertex,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn vertex_layout_is_position_then_color() {
    assert_eq!(std::mem::size_of::<ShapeVertex>(), 24);
    let desc = ShapeVertex::desc();
    assert_eq!(desc.array_stride, 24);
    assert_eq!(desc.attributes.len(), 2);
    assert_eq!(desc.attributes[0].offset, 0);
    assert_eq!(desc.attributes[1].offset, 12);
    assert_eq!(desc.attributes[1].shader_location, 1);
}

#[wasm_bindgen_test]
fn uniform_sizes_match_shader() {
    assert_eq!(std::mem::size_of::<CameraUniforms>(), 64);
    assert_eq!(std::mem::size_of::<NodeUniforms>(), 64);
    assert_eq!(CameraUniforms::default().view_proj, Mat4::IDENTITY.to_cols_array_2d());
}

#[wasm_bindgen_test]
fn camera_uniform_is_view_projection() {
    let camera = Camera::default();
    let uniforms = CameraUniforms::from_camera(&camera);
    assert_eq!(uniforms.view_proj, camera.view_projection().to_cols_array_2d());

    let node = NodeUniforms::new(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(node.node_transform[3], [1.0, 2.0, 3.0, 1.0]);
}

#[wasm_bindgen_test]
fn geometry_topology_follows_draw_form() {
    let triangle = ShapeKind::Triangle.build();
    let list = GpuGeometry::from_draw(&draw_geometry(&triangle, true));
    assert_eq!(list.topology, wgpu::PrimitiveTopology::TriangleList);
    assert_eq!(list.indices, None);
    assert_eq!(list.draw_count(), 3);
    assert_eq!(list.vertices[0], ShapeVertex { position: [0.0, 1.0, 0.0], color: [1.0, 0.0, 0.0] });

    let torus = ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 3, m: 3 }.build();
    let strip = GpuGeometry::from_draw(&draw_geometry(&torus, true));
    assert_eq!(strip.topology, wgpu::PrimitiveTopology::TriangleStrip);
    assert_eq!(strip.draw_count(), 54);

    let indexed = GpuGeometry::from_draw(&draw_geometry(&torus, false));
    assert_eq!(indexed.topology, wgpu::PrimitiveTopology::TriangleList);
    assert_eq!(indexed.draw_count(), 54);
    assert!(indexed.vertices.len() < 54);
}
