use glam::Mat4;
use hecs::World;

use crate::domain::geometry::{Mesh, ShapeKind};

pub mod components;

use components::{DrawOrder, ShapeComponent, TransformComponent};

/// ECS world backing the scene graph.
#[derive(Default)]
pub struct EcsWorld {
    pub world: World,
    next_order: u64,
}

impl EcsWorld {
    pub fn new() -> Self {
        Self { world: World::new(), next_order: 0 }
    }

    /// Spawn a shape node; the mesh is moved into the entity.
    pub fn spawn_shape(&mut self, kind: ShapeKind, mesh: Mesh, transform: Mat4) -> hecs::Entity {
        let order = DrawOrder(self.next_order);
        self.next_order += 1;
        self.world.spawn((ShapeComponent { kind, mesh }, TransformComponent(transform), order))
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Visit every shape node in draw order.
    pub fn for_each_shape<F>(&self, mut f: F)
    where
        F: FnMut(&ShapeComponent, Mat4),
    {
        let mut query = self.world.query::<(&ShapeComponent, &TransformComponent, &DrawOrder)>();
        let mut nodes: Vec<_> = query.iter().map(|(_, node)| node).collect();
        nodes.sort_by_key(|(_, _, order)| **order);
        for (shape, transform, _) in nodes {
            f(shape, transform.0);
        }
    }
}
