use quickcheck_macros::quickcheck;
use shape_scene_wasm::domain::geometry::{Primitive, ShapeKind, ShapeSelector};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn every_shape_builds_its_expected_vertex_count() {
    for selector in ShapeSelector::iter() {
        let kind = selector.default_shape();
        assert_eq!(kind.selector(), selector);
        assert_eq!(kind.build().vertex_count(), kind.expected_vertex_count(), "{}", selector);
    }
}

#[quickcheck]
fn surface_counts_match_without_building(n: u8, m: u8) -> bool {
    let (n, m) = (n as u32 % 32, m as u32 % 32);
    let torus = ShapeKind::Torus { r1: 2.0, r2: 0.25, n, m };
    let sphere = ShapeKind::Sphere { r: 0.5, n, m };
    torus.build().vertex_count() == torus.expected_vertex_count()
        && sphere.build().vertex_count() == sphere.expected_vertex_count()
}

#[wasm_bindgen_test]
fn dispatch_picks_matching_primitive() {
    assert_eq!(ShapeKind::Triangle.build().primitive, Primitive::Triangles);
    assert_eq!(ShapeKind::Cube { size: 2.0 }.build().primitive, Primitive::Triangles);
    assert_eq!(
        ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 4, m: 4 }.build().primitive,
        Primitive::TriangleStrip
    );
    assert_eq!(ShapeKind::TriangleFan.build().primitive, Primitive::TriangleFan);
}

#[wasm_bindgen_test]
fn selector_parses_form_values() {
    assert_eq!(ShapeSelector::from_str("torus"), Ok(ShapeSelector::Torus));
    assert_eq!(ShapeSelector::from_str("fan"), Ok(ShapeSelector::TriangleFan));
    assert!(ShapeSelector::from_str("Torus").is_err());
    assert!(ShapeSelector::from_str("dodecahedron").is_err());

    for selector in ShapeSelector::iter() {
        assert_eq!(ShapeSelector::from_str(selector.as_ref()), Ok(selector));
    }
}

#[wasm_bindgen_test]
fn selector_labels() {
    let labels: Vec<String> = ShapeSelector::iter().map(|s| s.to_string()).collect();
    assert_eq!(labels, ["Triangle", "Pyramid", "Cube", "Torus", "Sphere", "Triangle fan"]);
}

#[wasm_bindgen_test]
fn default_surface_parameters() {
    assert_eq!(
        ShapeSelector::Torus.default_shape(),
        ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 30, m: 20 }
    );
    assert_eq!(ShapeSelector::Sphere.default_shape().expected_vertex_count(), 5400);
}

#[wasm_bindgen_test]
fn oversized_resolution_count_saturates() {
    let torus = ShapeKind::Torus { r1: 1.0, r2: 0.5, n: u32::MAX, m: u32::MAX };
    assert_eq!(torus.expected_vertex_count(), usize::MAX);
}
