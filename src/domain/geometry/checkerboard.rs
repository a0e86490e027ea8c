use super::mesh::Color;

/// Color of cells whose index parities differ.
pub const CHECKER_COLOR_A: Color = [1.0, 0.0, 0.0];
/// Color of cells whose index parities match.
pub const CHECKER_COLOR_B: Color = [0.0, 1.0, 0.0];

/// Each quad cell is two triangles with unshared corners.
pub const VERTICES_PER_CELL: usize = 6;

/// Two-color tiling over a `(i, j)` cell grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    pub a: Color,
    pub b: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self { a: CHECKER_COLOR_A, b: CHECKER_COLOR_B }
    }
}

impl Checkerboard {
    pub fn new(a: Color, b: Color) -> Self {
        Self { a, b }
    }

    pub fn cell_color(&self, i: u32, j: u32) -> Color {
        if i % 2 + j % 2 == 1 { self.a } else { self.b }
    }

    /// Push the cell color once for every vertex of the cell.
    pub fn paint_cell(&self, i: u32, j: u32, colors: &mut Vec<Color>) {
        let color = self.cell_color(i, j);
        colors.extend(std::iter::repeat_n(color, VERTICES_PER_CELL));
    }
}
