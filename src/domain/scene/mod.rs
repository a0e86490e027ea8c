pub mod camera;
pub mod parameters;

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Mat4, Vec3};

use crate::domain::geometry::{IndexedMesh, Mesh, Primitive, ShapeKind};
use crate::domain::logging::LogComponent;
use crate::ecs::{EcsWorld, components::ShapeComponent};
use crate::log_debug;

pub use camera::{Camera, Projection};
pub use parameters::{FormValues, SceneParameters};

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(0);

/// Shapes, their node transforms and the camera looking at them.
pub struct Scene {
    id: u64,
    ecs: EcsWorld,
    pub camera: Camera,
    /// Clear color as RGBA
    pub background: [f32; 4],
    revision: u64,
}

impl Scene {
    pub fn new(background: [f32; 4]) -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            ecs: EcsWorld::new(),
            camera: Camera::default(),
            background,
            revision: 0,
        }
    }

    /// Generate `kind`'s mesh and place it at `translation`.
    pub fn add_shape(&mut self, kind: ShapeKind, translation: Vec3) -> hecs::Entity {
        let mesh = kind.build();
        log_debug!(
            LogComponent::Domain("Scene"),
            "{} generated: {} vertices ({})",
            kind.selector(),
            mesh.vertex_count(),
            mesh.primitive
        );
        self.revision += 1;
        self.ecs.spawn_shape(kind, mesh, Mat4::from_translation(translation))
    }

    pub fn clear(&mut self) {
        self.ecs.clear();
        self.revision += 1;
    }

    pub fn len(&self) -> usize {
        self.ecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ecs.is_empty()
    }

    /// Bumped on every structural change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `(scene id, revision)`: unique per scene instance and content state.
    /// GPU buffers are rebuilt whenever it changes.
    pub fn upload_key(&self) -> (u64, u64) {
        (self.id, self.revision)
    }

    pub fn vertex_count(&self) -> usize {
        let mut total = 0;
        self.ecs.for_each_shape(|shape, _| total += shape.mesh.vertex_count());
        total
    }

    /// Visit nodes in the order they were added.
    pub fn for_each_node<F>(&self, f: F)
    where
        F: FnMut(&ShapeComponent, Mat4),
    {
        self.ecs.for_each_shape(f);
    }
}

/// Geometry in a form the GPU can draw directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawGeometry<'a> {
    List(Cow<'a, Mesh>),
    Strip(Cow<'a, Mesh>),
    Indexed(IndexedMesh),
}

impl DrawGeometry<'_> {
    pub fn element_count(&self) -> usize {
        match self {
            DrawGeometry::List(mesh) | DrawGeometry::Strip(mesh) => mesh.vertex_count(),
            DrawGeometry::Indexed(indexed) => indexed.indices.len(),
        }
    }
}

/// Fans become lists. Strips are drawn as strips when `strip_parity` is set,
/// otherwise welded into an indexed triangle list.
pub fn draw_geometry(mesh: &Mesh, strip_parity: bool) -> DrawGeometry<'_> {
    match mesh.primitive {
        Primitive::Triangles => DrawGeometry::List(Cow::Borrowed(mesh)),
        Primitive::TriangleFan => DrawGeometry::List(Cow::Owned(mesh.fan_as_triangles())),
        Primitive::TriangleStrip if strip_parity => DrawGeometry::Strip(Cow::Borrowed(mesh)),
        Primitive::TriangleStrip => DrawGeometry::Indexed(IndexedMesh::from_mesh(mesh)),
    }
}
