use shape_scene_wasm::domain::geometry::{Mesh, Primitive, primitives};
use wasm_bindgen_test::*;

fn dump(mesh: &Mesh) -> String {
    let mut lines = vec![mesh.primitive.to_string()];
    lines.extend(mesh.positions.iter().zip(&mesh.colors).map(|(p, c)| format!("{:?} {:?}", p, c)));
    lines.join("\n")
}

#[wasm_bindgen_test]
fn fixed_vertex_counts() {
    assert_eq!(primitives::triangle().vertex_count(), primitives::TRIANGLE_VERTICES);
    assert_eq!(primitives::pyramid().vertex_count(), primitives::PYRAMID_VERTICES);
    assert_eq!(primitives::cube(1.0).vertex_count(), primitives::CUBE_VERTICES);
    assert_eq!(primitives::triangle_fan().vertex_count(), primitives::FAN_VERTICES);
    assert_eq!(primitives::pyramid().colors.len(), 12);
    assert_eq!(primitives::cube(3.0).colors.len(), 36);
}

#[wasm_bindgen_test]
fn generators_are_deterministic() {
    assert_eq!(primitives::triangle(), primitives::triangle());
    assert_eq!(primitives::pyramid(), primitives::pyramid());
    assert_eq!(primitives::cube(0.5), primitives::cube(0.5));
}

#[wasm_bindgen_test]
fn triangle_snapshot() {
    insta::assert_snapshot!(dump(&primitives::triangle()), @r"
    triangles
    [0.0, 1.0, 0.0] [1.0, 0.0, 0.0]
    [-1.0, -1.0, 0.0] [0.0, 1.0, 0.0]
    [1.0, -1.0, 0.0] [0.0, 0.0, 1.0]
    ");
}

#[wasm_bindgen_test]
fn pyramid_snapshot() {
    insta::assert_snapshot!(dump(&primitives::pyramid()), @r"
    triangles
    [0.0, 1.5, 0.0] [1.0, 0.0, 0.0]
    [-1.5, -1.5, -0.75] [0.0, 1.0, 0.0]
    [1.5, -1.5, 1.5] [0.0, 0.0, 1.0]
    [0.0, 1.5, 0.0] [1.0, 0.0, 0.0]
    [-1.5, -1.5, -0.75] [0.0, 1.0, 0.0]
    [1.5, -1.5, -1.5] [0.0, 0.0, 1.0]
    [0.0, 1.5, 0.0] [1.0, 0.0, 0.0]
    [1.5, -1.5, 1.5] [0.0, 1.0, 0.0]
    [1.5, -1.5, -1.5] [0.0, 0.0, 1.0]
    [-1.5, -1.5, -0.75] [1.0, 0.0, 0.0]
    [1.5, -1.5, 1.5] [0.0, 1.0, 0.0]
    [1.5, -1.5, -1.5] [0.0, 0.0, 1.0]
    ");
}

#[wasm_bindgen_test]
fn cube_corners_sit_at_half_size() {
    for size in [1.0, 2.0, 0.25] {
        let half = (size / 2.0) as f32;
        let cube = primitives::cube(size);
        assert_eq!(cube.primitive, Primitive::Triangles);
        for p in &cube.positions {
            assert!(p.iter().all(|c| c.abs() == half));
        }
    }
}

#[wasm_bindgen_test]
fn cube_faces_are_flat() {
    let cube = primitives::cube(2.0);
    for face in cube.positions.chunks(6) {
        let shared_axis = (0..3).any(|axis| face.iter().all(|p| p[axis] == face[0][axis]));
        assert!(shared_axis, "face is not axis aligned: {:?}", face);
    }
}

#[wasm_bindgen_test]
fn fan_starts_at_white_center() {
    let fan = primitives::triangle_fan();
    assert_eq!(fan.primitive, Primitive::TriangleFan);
    assert_eq!(fan.positions[0], [0.0, 0.0, 1.0]);
    assert_eq!(fan.colors[0], [1.0, 1.0, 1.0]);
    assert_eq!(fan.colors[1], [1.0, 0.0, 0.0]);
    assert_eq!(fan.colors[3], [0.0, 0.0, 1.0]);
    assert_eq!(fan.colors[8], [0.0, 1.0, 0.0]);
}
