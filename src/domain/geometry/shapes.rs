use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

use super::mesh::Mesh;
use super::{primitives, surfaces};

/// Shape choice as offered by the parameter form's radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum ShapeSelector {
    #[display(fmt = "Triangle")]
    #[strum(serialize = "triangle")]
    Triangle,
    #[display(fmt = "Pyramid")]
    #[strum(serialize = "pyramid")]
    Pyramid,
    #[display(fmt = "Cube")]
    #[strum(serialize = "cube")]
    Cube,
    #[display(fmt = "Torus")]
    #[strum(serialize = "torus")]
    Torus,
    #[display(fmt = "Sphere")]
    #[strum(serialize = "sphere")]
    Sphere,
    #[display(fmt = "Triangle fan")]
    #[strum(serialize = "fan")]
    TriangleFan,
}

/// A fully parameterized shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Triangle,
    Pyramid,
    Cube { size: f64 },
    Torus { r1: f64, r2: f64, n: u32, m: u32 },
    Sphere { r: f64, n: u32, m: u32 },
    TriangleFan,
}

impl ShapeSelector {
    /// The shape with the parameters the form starts out with.
    pub fn default_shape(&self) -> ShapeKind {
        match self {
            ShapeSelector::Triangle => ShapeKind::Triangle,
            ShapeSelector::Pyramid => ShapeKind::Pyramid,
            ShapeSelector::Cube => ShapeKind::Cube { size: 1.0 },
            ShapeSelector::Torus => ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 30, m: 20 },
            ShapeSelector::Sphere => ShapeKind::Sphere { r: 1.5, n: 30, m: 30 },
            ShapeSelector::TriangleFan => ShapeKind::TriangleFan,
        }
    }
}

impl ShapeKind {
    pub fn selector(&self) -> ShapeSelector {
        match self {
            ShapeKind::Triangle => ShapeSelector::Triangle,
            ShapeKind::Pyramid => ShapeSelector::Pyramid,
            ShapeKind::Cube { .. } => ShapeSelector::Cube,
            ShapeKind::Torus { .. } => ShapeSelector::Torus,
            ShapeKind::Sphere { .. } => ShapeSelector::Sphere,
            ShapeKind::TriangleFan => ShapeSelector::TriangleFan,
        }
    }

    /// Generate the shape's vertex and color buffers.
    pub fn build(&self) -> Mesh {
        match *self {
            ShapeKind::Triangle => primitives::triangle(),
            ShapeKind::Pyramid => primitives::pyramid(),
            ShapeKind::Cube { size } => primitives::cube(size),
            ShapeKind::Torus { r1, r2, n, m } => surfaces::torus_mesh(r1, r2, n, m),
            ShapeKind::Sphere { r, n, m } => surfaces::sphere_mesh(r, n, m),
            ShapeKind::TriangleFan => primitives::triangle_fan(),
        }
    }

    /// Vertex count [`build`](Self::build) will produce, without generating.
    ///
    /// Saturates at `usize::MAX` for resolutions no mesh could hold; form input
    /// is capped at [`MAX_RESOLUTION`](crate::domain::scene::parameters::MAX_RESOLUTION).
    pub fn expected_vertex_count(&self) -> usize {
        match *self {
            ShapeKind::Triangle => primitives::TRIANGLE_VERTICES,
            ShapeKind::Pyramid => primitives::PYRAMID_VERTICES,
            ShapeKind::Cube { .. } => primitives::CUBE_VERTICES,
            ShapeKind::Torus { n, m, .. } | ShapeKind::Sphere { n, m, .. } => {
                (n as usize).saturating_mul(m as usize).saturating_mul(6)
            }
            ShapeKind::TriangleFan => primitives::FAN_VERTICES,
        }
    }
}
