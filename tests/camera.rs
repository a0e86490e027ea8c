use glam::{Vec3, Vec4};
use shape_scene_wasm::domain::scene::{Camera, Projection};
use wasm_bindgen_test::*;

fn clip(camera: &Camera, point: Vec3) -> Vec3 {
    let p = camera.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);
    p.truncate() / p.w
}

#[wasm_bindgen_test]
fn look_at_target_projects_to_center() {
    let mut camera = Camera::default();
    camera.look_at(Vec3::new(0.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y);
    let ndc = clip(&camera, Vec3::ZERO);
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[wasm_bindgen_test]
fn perspective_shrinks_distant_objects() {
    let camera = Camera::default();
    let near = clip(&camera, Vec3::new(1.0, 0.0, 0.0));
    let far = clip(&camera, Vec3::new(1.0, 0.0, -10.0));
    assert!(near.x > far.x);
    assert!(camera.projection.is_perspective());
}

#[wasm_bindgen_test]
fn orthographic_box_maps_to_clip_edges() {
    let mut camera = Camera::default();
    camera.orthographic(-2.0, 2.0, -1.0, 1.0, 0.1, 100.0);
    assert!(!camera.projection.is_perspective());

    let corner = camera.projection_matrix().project_point3(Vec3::new(2.0, 1.0, -50.0));
    assert!((corner.x - 1.0).abs() < 1e-5);
    assert!((corner.y - 1.0).abs() < 1e-5);

    let near = clip(&camera, Vec3::new(0.5, 0.0, 0.0));
    let far = clip(&camera, Vec3::new(0.5, 0.0, -10.0));
    assert!((near.x - far.x).abs() < 1e-5);
}

#[wasm_bindgen_test]
fn perspective_setter_replaces_projection() {
    let mut camera = Camera::default();
    camera.perspective(45.0, 1.0, 1.0, 10.0);
    assert_eq!(
        camera.projection,
        Projection::Perspective { fovy_degrees: 45.0, aspect: 1.0, near: 1.0, far: 10.0 }
    );
}
