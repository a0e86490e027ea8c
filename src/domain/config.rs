use serde::{Deserialize, Serialize};

use crate::domain::errors::AppResult;
use crate::domain::scene::FormValues;

/// Page-level scene configuration.
///
/// Read from a `<script type="application/json" id="scene-config">` block;
/// every field is optional and falls back to [`SceneConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
    pub background: [f32; 4],
    pub camera: CameraConfig,
    /// Draw the torus as the literal six-vertices-per-cell strip. When
    /// false it is welded into an indexed triangle list instead.
    pub strip_parity: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: "webgl_canvas".to_string(),
            width: 600,
            height: 600,
            background: [0.0, 0.0, 0.0, 1.0],
            camera: CameraConfig::default(),
            strip_parity: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub up: [f32; 3],
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 2.0, 4.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl CameraConfig {
    /// Initial values of the perspective fields of the parameter form.
    pub fn form_defaults(&self) -> FormValues {
        [("fovy", self.fovy), ("znear", self.znear), ("zfar", self.zfar)]
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
