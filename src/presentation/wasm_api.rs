use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::SceneContext;
use crate::domain::{
    errors::AppError,
    geometry::ShapeSelector,
    logging::{LogComponent, get_logger},
    scene::Projection,
};
use crate::infrastructure::{dom, rendering::SceneRenderer};

/// JavaScript entry point for pages that drive the scene without the Leptos UI.
#[wasm_bindgen]
pub struct ShapeSceneApi {
    context: Rc<RefCell<SceneContext>>,
    renderer: Rc<RefCell<Option<SceneRenderer>>>,
}

#[wasm_bindgen]
impl ShapeSceneApi {
    /// Build the demo scene. `canvas_id` overrides the configured canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Self {
        let mut config = dom::load_scene_config();
        if let Some(id) = canvas_id {
            config.canvas_id = id;
        }
        Self {
            context: Rc::new(RefCell::new(SceneContext::new(config))),
            renderer: Rc::new(RefCell::new(None)),
        }
    }

    /// Acquire the GPU and draw the first frame.
    pub fn initialize(&self) -> Promise {
        let context = Rc::clone(&self.context);
        let renderer_slot = Rc::clone(&self.renderer);

        future_to_promise(async move {
            let config = context.borrow().service.config().clone();
            let mut renderer =
                SceneRenderer::new(&config.canvas_id, config.width, config.height, config.strip_parity)
                    .await?;
            renderer.render(&context.borrow().scene)?;
            *renderer_slot.borrow_mut() = Some(renderer);

            get_logger().info(LogComponent::Presentation("ShapeSceneApi"), "🚀 Scene initialized");
            Ok(JsValue::from_str("initialized"))
        })
    }

    /// Read the parameter form with the given id and rebuild the scene from it.
    #[wasm_bindgen(js_name = applyForm)]
    pub fn apply_form(&self, form_id: &str) -> Result<(), JsValue> {
        let values = dom::read_form_by_id(form_id)?;
        self.context.borrow_mut().apply_form(&values)?;
        self.render()
    }

    /// Show a single shape with its default parameters.
    #[wasm_bindgen(js_name = selectShape)]
    pub fn select_shape(&self, name: &str) -> Result<(), JsValue> {
        let selector = ShapeSelector::from_str(name)
            .map_err(|_| AppError::Validation(format!("unknown shape {:?}", name)))?;
        self.context.borrow_mut().select_shape(selector.default_shape());
        self.render()
    }

    #[wasm_bindgen(js_name = setPerspective)]
    pub fn set_perspective(&self, fovy: f32, near: f32, far: f32) -> Result<(), JsValue> {
        self.context.borrow_mut().set_projection(Projection::Perspective {
            fovy_degrees: fovy,
            aspect: 1.0,
            near,
            far,
        });
        self.render()
    }

    #[wasm_bindgen(js_name = setOrthographic)]
    pub fn set_orthographic(
        &self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<(), JsValue> {
        self.context
            .borrow_mut()
            .set_projection(Projection::Orthographic { left, right, bottom, top, near, far });
        self.render()
    }

    /// Draw a frame. A no-op until `initialize` has resolved.
    pub fn render(&self) -> Result<(), JsValue> {
        match self.renderer.borrow_mut().as_mut() {
            Some(renderer) => renderer.render(&self.context.borrow().scene),
            None => Ok(()),
        }
    }

    /// Mean FPS over recent frames; 0 before the second frame.
    pub fn fps(&self) -> f64 {
        self.renderer.borrow().as_ref().map_or(0.0, SceneRenderer::average_fps)
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.context.borrow().scene.vertex_count()
    }
}
