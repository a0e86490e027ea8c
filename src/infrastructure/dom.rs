//! Reading scene input from the host page.

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::domain::{
    config::SceneConfig,
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    scene::FormValues,
};
use crate::log_warn;

/// Every field name the parameter form may carry.
pub const FORM_FIELDS: &[&str] = &[
    "shape",
    "size",
    "r1",
    "r2",
    "m",
    "x",
    "r",
    "m_sphere",
    "x_sphere",
    "projection_type",
    "fovy",
    "znear",
    "zfar",
    "left",
    "right",
    "bot",
    "top",
    "front",
    "back",
];

pub const CONFIG_ELEMENT_ID: &str = "scene-config";

fn document() -> AppResult<web_sys::Document> {
    web_sys::window()
        .ok_or_else(|| AppError::Browser("window not available".to_string()))?
        .document()
        .ok_or_else(|| AppError::Browser("document not available".to_string()))
}

/// Snapshot the string values of a form's known fields.
pub fn read_form(form: &HtmlFormElement) -> AppResult<FormValues> {
    let data = FormData::new_with_form(form)
        .map_err(|e| AppError::Browser(format!("FormData unavailable: {:?}", e)))?;

    Ok(FORM_FIELDS
        .iter()
        .filter_map(|&name| data.get(name).as_string().map(|value| (name, value)))
        .collect())
}

pub fn read_form_by_id(form_id: &str) -> AppResult<FormValues> {
    let form = document()?
        .get_element_by_id(form_id)
        .ok_or_else(|| AppError::Browser(format!("form '{}' not found", form_id)))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| AppError::Browser(format!("element '{}' is not a form", form_id)))?;
    read_form(&form)
}

/// Load the embedded JSON configuration, falling back to defaults when the
/// block is absent or malformed.
pub fn load_scene_config() -> SceneConfig {
    let json = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json {
        Some(json) => SceneConfig::from_json(&json).unwrap_or_else(|e| {
            log_warn!(LogComponent::Infrastructure("Dom"), "⚠️ Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            SceneConfig::default()
        }),
        None => {
            get_logger().debug(
                LogComponent::Infrastructure("Dom"),
                "No embedded scene config, using defaults",
            );
            SceneConfig::default()
        }
    }
}
