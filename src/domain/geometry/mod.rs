pub mod checkerboard;
pub mod mesh;
pub mod primitives;
pub mod shapes;
pub mod surfaces;

pub use checkerboard::Checkerboard;
pub use mesh::{Color, IndexedMesh, Mesh, Position, Primitive};
pub use shapes::{ShapeKind, ShapeSelector};
pub use surfaces::{ParametricSurface, Sphere, Torus, sphere_vertex, torus_vertex, triangulate};
