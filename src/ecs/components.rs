use glam::Mat4;

use crate::domain::geometry::{Mesh, ShapeKind};

/// ECS component holding a shape and the mesh generated for it.
#[derive(Debug, Clone)]
pub struct ShapeComponent {
    pub kind: ShapeKind,
    pub mesh: Mesh,
}

/// Model matrix of a scene node.
#[derive(Debug, Clone, Copy)]
pub struct TransformComponent(pub Mat4);

/// Insertion sequence, used to draw nodes in the order they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawOrder(pub u64);
