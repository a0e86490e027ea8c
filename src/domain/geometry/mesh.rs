use std::collections::HashMap;

use derive_more::Display;

/// A vertex position `(x, y, z)`.
pub type Position = [f32; 3];
/// A per-vertex `(r, g, b)` color.
pub type Color = [f32; 3];

/// How consecutive vertices of a [`Mesh`] are assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Primitive {
    #[display(fmt = "triangles")]
    Triangles,
    #[display(fmt = "triangle-strip")]
    TriangleStrip,
    #[display(fmt = "triangle-fan")]
    TriangleFan,
}

/// Non-indexed geometry with one color per vertex.
///
/// `positions` and `colors` always have the same length. A mesh is built once
/// by its generator and is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub primitive: Primitive,
    pub positions: Vec<Position>,
    pub colors: Vec<Color>,
}

impl Mesh {
    pub fn new(primitive: Primitive, positions: Vec<Position>, colors: Vec<Color>) -> Self {
        debug_assert_eq!(positions.len(), colors.len(), "vertex attribute length mismatch");
        Self { primitive, positions, colors }
    }

    pub fn with_capacity(primitive: Primitive, vertices: usize) -> Self {
        Self {
            primitive,
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `x, y, z, x, y, z, ...` layout, as a `Float32Array` would hold it.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    pub fn flat_colors(&self) -> Vec<f32> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Rewrite a fan as an independent triangle list: `k` fan vertices
    /// become `3 * (k - 2)` list vertices. Other primitives are returned as-is.
    pub fn fan_as_triangles(&self) -> Mesh {
        if self.primitive != Primitive::TriangleFan {
            return self.clone();
        }
        let fans = self.vertex_count().saturating_sub(2);
        let mut out = Mesh::with_capacity(Primitive::Triangles, fans * 3);
        for i in 1..=fans {
            for idx in [0, i, i + 1] {
                out.positions.push(self.positions[idx]);
                out.colors.push(self.colors[idx]);
            }
        }
        out
    }
}

/// Triangle-list geometry with shared vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<Position>,
    pub colors: Vec<Color>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Weld identical `(position, color)` pairs of a triangle list.
    ///
    /// Strips and fans are reinterpreted as the triangle list their vertices
    /// were generated for, so a 6-vertices-per-cell surface maps onto the
    /// same triangles either way.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let list = mesh.fan_as_triangles();
        let mut lookup: HashMap<([u32; 3], [u32; 3]), u32> = HashMap::new();
        let mut indexed = IndexedMesh {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::with_capacity(list.vertex_count()),
        };

        for (position, color) in list.positions.iter().zip(&list.colors) {
            let key = (position.map(f32::to_bits), color.map(f32::to_bits));
            let index = *lookup.entry(key).or_insert_with(|| {
                indexed.positions.push(*position);
                indexed.colors.push(*color);
                (indexed.positions.len() - 1) as u32
            });
            indexed.indices.push(index);
        }

        indexed
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Re-expand into a non-indexed triangle list.
    pub fn expand(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(Primitive::Triangles, self.indices.len());
        for &i in &self.indices {
            mesh.positions.push(self.positions[i as usize]);
            mesh.colors.push(self.colors[i as usize]);
        }
        mesh
    }
}
