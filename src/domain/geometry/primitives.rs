//! Hand-authored meshes with fixed vertex counts.

use super::mesh::{Color, Mesh, Position, Primitive};

const RED: Color = [1.0, 0.0, 0.0];
const GREEN: Color = [0.0, 1.0, 0.0];
const BLUE: Color = [0.0, 0.0, 1.0];
const YELLOW: Color = [1.0, 1.0, 0.0];
const WHITE: Color = [1.0, 1.0, 1.0];

pub const TRIANGLE_VERTICES: usize = 3;
pub const PYRAMID_VERTICES: usize = 12;
pub const CUBE_VERTICES: usize = 36;
pub const FAN_VERTICES: usize = 9;

pub fn triangle() -> Mesh {
    Mesh::new(
        Primitive::Triangles,
        vec![[0.0, 1.0, 0.0], [-1.0, -1.0, 0.0], [1.0, -1.0, 0.0]],
        vec![RED, GREEN, BLUE],
    )
}

/// Four faces sharing the apex `(0, 1.5, 0)`; the base corners are not
/// symmetric, which gives the pyramid its skewed look.
pub fn pyramid() -> Mesh {
    const APEX: Position = [0.0, 1.5, 0.0];
    const BASE_A: Position = [-1.5, -1.5, -0.75];
    const BASE_B: Position = [1.5, -1.5, 1.5];
    const BASE_C: Position = [1.5, -1.5, -1.5];

    let positions = vec![
        APEX, BASE_A, BASE_B, //
        APEX, BASE_A, BASE_C, //
        APEX, BASE_B, BASE_C, //
        BASE_A, BASE_B, BASE_C,
    ];
    let colors = [RED, GREEN, BLUE].repeat(4);
    Mesh::new(Primitive::Triangles, positions, colors)
}

/// Axis-aligned cube with edge length `size`, centered at the origin.
pub fn cube(size: f64) -> Mesh {
    let h = (size / 2.0) as f32;
    let corners: [Position; 8] = [
        [-h, h, h],
        [h, h, h],
        [h, -h, h],
        [-h, -h, h],
        [-h, -h, -h],
        [-h, h, -h],
        [h, h, -h],
        [h, -h, -h],
    ];
    #[rustfmt::skip]
    const FACES: [usize; CUBE_VERTICES] = [
        0, 1, 2,  0, 3, 2, // front
        1, 2, 7,  1, 6, 7, // right
        7, 4, 5,  7, 6, 5, // back
        0, 3, 4,  0, 5, 4, // left
        0, 1, 6,  0, 5, 6, // top
        4, 7, 2,  2, 3, 4, // bottom
    ];

    let palette = [RED, GREEN, BLUE, YELLOW];
    #[rustfmt::skip]
    const SHADES: [usize; CUBE_VERTICES] = [
        0, 1, 2,  0, 3, 2,
        1, 2, 3,  1, 0, 3,
        3, 2, 1,  3, 0, 1,
        0, 3, 2,  0, 1, 2,
        0, 1, 0,  0, 1, 0,
        2, 3, 2,  2, 3, 2,
    ];

    Mesh::new(
        Primitive::Triangles,
        FACES.iter().map(|&c| corners[c]).collect(),
        SHADES.iter().map(|&c| palette[c]).collect(),
    )
}

/// Eight spokes around a raised center vertex, drawn as a fan.
pub fn triangle_fan() -> Mesh {
    let positions = vec![
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [-0.7, 0.7, 0.0],
        [-1.0, 0.0, 0.0],
        [-0.7, -0.7, 0.0],
        [0.0, -1.0, 0.0],
        [0.7, -0.7, 0.0],
        [1.0, 0.0, 0.0],
        [0.7, 0.7, 0.0],
    ];
    let mut colors = vec![WHITE];
    colors.extend([RED, GREEN, BLUE].repeat(3).into_iter().take(FAN_VERTICES - 1));
    Mesh::new(Primitive::TriangleFan, positions, colors)
}
