use glam::{Mat4, Vec3};
use shape_scene_wasm::domain::geometry::{Primitive, ShapeKind, ShapeSelector};
use shape_scene_wasm::domain::scene::{DrawGeometry, Scene, draw_geometry};
use wasm_bindgen_test::*;

fn empty_scene() -> Scene {
    Scene::new([0.0, 0.0, 0.0, 1.0])
}

#[wasm_bindgen_test]
fn adding_shapes_bumps_revision() {
    let mut scene = empty_scene();
    assert!(scene.is_empty());
    assert_eq!(scene.revision(), 0);

    scene.add_shape(ShapeKind::Triangle, Vec3::ZERO);
    scene.add_shape(ShapeKind::Cube { size: 1.0 }, Vec3::X);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.revision(), 2);
    assert_eq!(scene.vertex_count(), 3 + 36);
}

#[wasm_bindgen_test]
fn clear_removes_nodes_and_bumps_revision() {
    let mut scene = empty_scene();
    scene.add_shape(ShapeKind::Pyramid, Vec3::ZERO);
    let before = scene.revision();

    scene.clear();
    assert!(scene.is_empty());
    assert_eq!(scene.vertex_count(), 0);
    assert!(scene.revision() > before);
}

#[wasm_bindgen_test]
fn nodes_are_visited_in_insertion_order() {
    let mut scene = empty_scene();
    scene.add_shape(ShapeKind::Triangle, Vec3::new(-1.0, 0.0, -1.0));
    scene.add_shape(ShapeKind::Cube { size: 0.5 }, Vec3::new(0.0, -1.0, 1.0));
    scene.add_shape(ShapeKind::Pyramid, Vec3::new(1.0, 2.0, 0.0));

    let mut visited = Vec::new();
    scene.for_each_node(|shape, transform| visited.push((shape.kind.selector(), transform)));

    assert_eq!(
        visited,
        vec![
            (ShapeSelector::Triangle, Mat4::from_translation(Vec3::new(-1.0, 0.0, -1.0))),
            (ShapeSelector::Cube, Mat4::from_translation(Vec3::new(0.0, -1.0, 1.0))),
            (ShapeSelector::Pyramid, Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0))),
        ]
    );
}

#[wasm_bindgen_test]
fn lists_are_drawn_without_copying() {
    let mesh = ShapeKind::Sphere { r: 1.0, n: 4, m: 4 }.build();
    match draw_geometry(&mesh, true) {
        DrawGeometry::List(list) => assert_eq!(list.vertex_count(), 96),
        other => panic!("unexpected geometry: {:?}", other),
    }
}

#[wasm_bindgen_test]
fn fans_are_drawn_as_lists() {
    let fan = ShapeKind::TriangleFan.build();
    let geometry = draw_geometry(&fan, true);
    assert_eq!(geometry.element_count(), 21);
    assert!(matches!(geometry, DrawGeometry::List(ref mesh) if mesh.primitive == Primitive::Triangles));
}

#[wasm_bindgen_test]
fn torus_strip_parity_toggle() {
    let torus = ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 6, m: 5 }.build();

    let strip = draw_geometry(&torus, true);
    assert!(matches!(strip, DrawGeometry::Strip(_)));
    assert_eq!(strip.element_count(), 180);

    let welded = draw_geometry(&torus, false);
    match welded {
        DrawGeometry::Indexed(ref indexed) => {
            assert_eq!(indexed.indices.len(), 180);
            assert!(indexed.positions.len() < 180);
        }
        ref other => panic!("unexpected geometry: {:?}", other),
    }
}

#[wasm_bindgen_test]
fn identically_built_scenes_have_distinct_upload_keys() {
    let build = || {
        let mut scene = empty_scene();
        scene.add_shape(ShapeKind::Sphere { r: 1.0, n: 3, m: 3 }, Vec3::ZERO);
        scene.add_shape(ShapeKind::Triangle, Vec3::X);
        scene
    };
    let first = build();
    let second = build();

    assert_eq!(first.revision(), second.revision());
    assert_ne!(first.upload_key(), second.upload_key());
}

#[wasm_bindgen_test]
fn upload_key_follows_structural_changes() {
    let mut scene = empty_scene();
    let initial = scene.upload_key();

    scene.add_shape(ShapeKind::Pyramid, Vec3::ZERO);
    let after_add = scene.upload_key();
    assert_ne!(initial, after_add);
    assert_eq!(initial.0, after_add.0);

    scene.camera.look_at(Vec3::ONE, Vec3::ZERO, Vec3::Y);
    assert_eq!(scene.upload_key(), after_add);
}
