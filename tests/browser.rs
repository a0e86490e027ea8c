#![cfg(target_arch = "wasm32")]

use shape_scene_wasm::application::SceneContext;
use shape_scene_wasm::domain::config::SceneConfig;
use shape_scene_wasm::domain::geometry::ShapeKind;
use shape_scene_wasm::infrastructure::dom;
use shape_scene_wasm::infrastructure::rendering::SceneRenderer;
use shape_scene_wasm::presentation::ShapeSceneApi;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn setup_canvas(id: &str, width: u32, height: u32) {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
}

fn setup_form(id: &str, inner_html: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();
    form.set_id(id);
    form.set_inner_html(inner_html);
    document.body().unwrap().append_child(&form).unwrap();
}

#[wasm_bindgen_test]
fn form_reads_checked_radios_and_numbers() {
    setup_form(
        "params-a",
        r#"
        <input type="radio" name="shape" value="cube">
        <input type="radio" name="shape" value="torus" checked>
        <input type="number" name="r1" value="2">
        <input type="radio" name="projection_type" value="perspective" checked>
        <input type="number" name="fovy" value="45">
        "#,
    );

    let values = dom::read_form_by_id("params-a").unwrap();
    assert_eq!(values.get("shape"), Some("torus"));
    assert_eq!(values.get("r1"), Some("2"));
    assert_eq!(values.get("fovy"), Some("45"));
    assert_eq!(values.get("zfar"), None);
}

#[wasm_bindgen_test]
fn unchecked_shape_is_absent() {
    setup_form("params-b", r#"<input type="radio" name="shape" value="sphere">"#);
    let values = dom::read_form_by_id("params-b").unwrap();
    assert_eq!(values.get("shape"), None);
}

#[wasm_bindgen_test]
fn missing_form_is_a_browser_error() {
    assert!(dom::read_form_by_id("no-such-form").is_err());
}

#[wasm_bindgen_test(async)]
async fn renderer_draws_demo_scene() {
    setup_canvas("test-canvas", 300, 300);
    let mut renderer = SceneRenderer::new("test-canvas", 300, 300, true).await.unwrap();
    let mut context = SceneContext::new(SceneConfig::default());

    renderer.render(&context.scene).unwrap();

    context.select_shape(ShapeKind::TriangleFan);
    renderer.render(&context.scene).unwrap();
    assert_eq!(renderer.size(), (300, 300));
}

#[wasm_bindgen_test(async)]
async fn renderer_keeps_drawing_after_resize() {
    setup_canvas("resize-canvas", 300, 300);
    let mut renderer = SceneRenderer::new("resize-canvas", 300, 300, true).await.unwrap();
    let context = SceneContext::new(SceneConfig::default());
    assert_eq!(renderer.average_fps(), 0.0);

    renderer.resize(400, 200);
    assert_eq!(renderer.size(), (400, 200));
    renderer.render(&context.scene).unwrap();

    renderer.resize(0, 100);
    assert_eq!(renderer.size(), (400, 200));

    let fps = renderer.measure_fps(&context.scene, 5).unwrap();
    assert!(fps >= 0.0);
    assert!(renderer.average_fps() >= 0.0);
}

#[wasm_bindgen_test]
fn js_api_swaps_shapes_before_initialization() {
    let api = ShapeSceneApi::new(Some("not-yet-created".to_string()));
    assert_eq!(api.vertex_count(), 6 * 30 * 20 + 6 * 30 * 30 + 3);

    api.select_shape("cube").unwrap();
    assert_eq!(api.vertex_count(), 36);
    assert!(api.select_shape("blob").is_err());

    api.set_orthographic(-2.0, 2.0, -2.0, 2.0, 0.1, 10.0).unwrap();
    api.render().unwrap();
    assert_eq!(api.fps(), 0.0);
}
