//! Scene parameters as entered in the camera/shape form.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::camera::Projection;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::geometry::{ShapeKind, ShapeSelector};

/// Upper bound for a single resolution count; larger inputs are clamped.
pub const MAX_RESOLUTION: u32 = 1024;

/// Raw `name -> value` pairs of the parameter form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn required(&self, name: &str) -> AppResult<&str> {
        self.get(name).map(str::trim).ok_or_else(|| AppError::missing_field(name))
    }

    fn number(&self, name: &str) -> AppResult<f64> {
        let raw = self.required(name)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::invalid_field(name, raw))
    }

    fn float(&self, name: &str) -> AppResult<f32> {
        self.number(name).map(|v| v as f32)
    }

    /// Counts below one give an empty mesh; fractions are truncated.
    fn resolution(&self, name: &str) -> AppResult<u32> {
        let value = self.number(name)?;
        Ok(if value < 1.0 { 0 } else { value.floor().min(MAX_RESOLUTION as f64) as u32 })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParameters {
    /// `None` when no shape is selected; the scene content is then kept
    pub shape: Option<ShapeKind>,
    pub projection: Projection,
}

impl SceneParameters {
    /// Parse the selected shape and projection. Only the fields the current
    /// selection needs are read.
    pub fn from_form(values: &FormValues) -> AppResult<Self> {
        Ok(Self { shape: parse_shape(values)?, projection: parse_projection(values)? })
    }
}

fn parse_shape(values: &FormValues) -> AppResult<Option<ShapeKind>> {
    let Some(raw) = values.get("shape").map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let selector = ShapeSelector::from_str(raw)
        .map_err(|_| AppError::Validation(format!("unknown shape {:?}", raw)))?;

    let shape = match selector {
        ShapeSelector::Triangle => ShapeKind::Triangle,
        ShapeSelector::Pyramid => ShapeKind::Pyramid,
        ShapeSelector::Cube => ShapeKind::Cube { size: values.number("size")? },
        ShapeSelector::Torus => ShapeKind::Torus {
            r1: values.number("r1")?,
            r2: values.number("r2")?,
            n: values.resolution("m")?,
            m: values.resolution("x")?,
        },
        ShapeSelector::Sphere => ShapeKind::Sphere {
            r: values.number("r")?,
            n: values.resolution("m_sphere")?,
            m: values.resolution("x_sphere")?,
        },
        ShapeSelector::TriangleFan => ShapeKind::TriangleFan,
    };
    Ok(Some(shape))
}

fn parse_projection(values: &FormValues) -> AppResult<Projection> {
    match values.required("projection_type")? {
        "perspective" => Ok(Projection::Perspective {
            fovy_degrees: values.float("fovy")?,
            aspect: 1.0,
            near: values.float("znear")?,
            far: values.float("zfar")?,
        }),
        "orthographic" => Ok(Projection::Orthographic {
            left: values.float("left")?,
            right: values.float("right")?,
            bottom: values.float("bot")?,
            top: values.float("top")?,
            near: values.float("front")?,
            far: values.float("back")?,
        }),
        other => Err(AppError::Validation(format!("unknown projection type {:?}", other))),
    }
}
