//! Parametric surfaces sampled on an `(N, M)` grid.
//!
//! Every grid cell `(i, j)` with `i ∈ [1, N]`, `j ∈ [1, M]` becomes two
//! triangles, `(i, j) (i-1, j) (i-1, j-1)` and `(i, j) (i, j-1) (i-1, j-1)`,
//! with fully expanded (unshared) corners, so a surface always yields
//! `6 · N · M` vertices. A zero resolution yields an empty mesh.

use std::f64::consts::PI;

use super::checkerboard::{Checkerboard, VERTICES_PER_CELL};
use super::mesh::{Mesh, Position, Primitive};

/// A surface that can be evaluated at integer grid coordinates.
pub trait ParametricSurface {
    /// Grid resolution `(N, M)` along the two parametric axes.
    fn resolution(&self) -> (u32, u32);

    /// Point at grid coordinate `(i, j)`, `i ∈ [0, N]`, `j ∈ [0, M]`.
    fn point(&self, i: u32, j: u32) -> Position;

    fn primitive(&self) -> Primitive {
        Primitive::Triangles
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    /// Latitude steps from pole to pole
    pub n: u32,
    /// Longitude steps around the z-axis
    pub m: u32,
}

impl Sphere {
    pub fn new(radius: f64, n: u32, m: u32) -> Self {
        Self { radius, n, m }
    }
}

impl ParametricSurface for Sphere {
    fn resolution(&self) -> (u32, u32) {
        (self.n, self.m)
    }

    fn point(&self, i: u32, j: u32) -> Position {
        sphere_vertex(self.radius, i, j, self.n, self.m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    /// Distance from the torus center to the tube center
    pub major_radius: f64,
    /// Tube radius
    pub minor_radius: f64,
    /// Steps of the sweep around the z-axis
    pub n: u32,
    /// Steps around the tube cross-section
    pub m: u32,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64, n: u32, m: u32) -> Self {
        Self { major_radius, minor_radius, n, m }
    }
}

impl ParametricSurface for Torus {
    fn resolution(&self) -> (u32, u32) {
        (self.n, self.m)
    }

    fn point(&self, i: u32, j: u32) -> Position {
        torus_vertex(i, j, self.n, self.m, self.major_radius, self.minor_radius)
    }

    // The six-vertices-per-cell layout is submitted as a strip, matching how
    // the torus has always been drawn.
    fn primitive(&self) -> Primitive {
        Primitive::TriangleStrip
    }
}

/// Sphere point for latitude index `u` (θ = u·π/N) and longitude index `v`
/// (φ = v·2π/M).
pub fn sphere_vertex(r: f64, u: u32, v: u32, n: u32, m: u32) -> Position {
    let theta = u as f64 * PI / n as f64;
    let phi = v as f64 * 2.0 * PI / m as f64;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    [(r * cos_phi * sin_theta) as f32, (r * sin_phi * sin_theta) as f32, (r * cos_theta) as f32]
}

/// Torus point for sweep index `i` (v = i·2π/N) and tube index `j`
/// (u = j·2π/M).
pub fn torus_vertex(i: u32, j: u32, n: u32, m: u32, r1: f64, r2: f64) -> Position {
    let v = i as f64 * 2.0 * PI / n as f64;
    let u = j as f64 * 2.0 * PI / m as f64;

    let ring = r1 + r2 * u.cos();
    [(ring * v.cos()) as f32, (ring * v.sin()) as f32, (r2 * u.sin()) as f32]
}

/// Sample `surface` into an unindexed, checkerboard-colored mesh.
pub fn triangulate<S: ParametricSurface>(surface: &S, colors: &Checkerboard) -> Mesh {
    let (n, m) = surface.resolution();
    let capacity = (n as usize)
        .checked_mul(m as usize)
        .and_then(|cells| cells.checked_mul(VERTICES_PER_CELL))
        .unwrap_or(0);
    let mut mesh = Mesh::with_capacity(surface.primitive(), capacity);

    for i in 1..=n {
        for j in 1..=m {
            for (ci, cj) in [(i, j), (i - 1, j), (i - 1, j - 1), (i, j), (i, j - 1), (i - 1, j - 1)] {
                mesh.positions.push(surface.point(ci, cj));
            }
            colors.paint_cell(i, j, &mut mesh.colors);
        }
    }

    mesh
}

pub fn sphere_mesh(radius: f64, n: u32, m: u32) -> Mesh {
    triangulate(&Sphere::new(radius, n, m), &Checkerboard::default())
}

pub fn torus_mesh(major_radius: f64, minor_radius: f64, n: u32, m: u32) -> Mesh {
    triangulate(&Torus::new(major_radius, minor_radius, n, m), &Checkerboard::default())
}
