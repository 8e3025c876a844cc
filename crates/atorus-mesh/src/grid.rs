//! Vertex numbering and triangulation of the periodic UV grid.

use atorus_math::periodic::grid_param;
use atorus_math::Point2;

use crate::config::GridLayout;

/// A `nu x nv` grid of quads over the unit UV square.
///
/// Vertices are numbered row by row: `index = j * columns + i`, where `i` steps
/// along `u` and `j` along `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub layout: GridLayout,
    pub nu: usize,
    pub nv: usize,
}

impl Grid {
    pub fn new(layout: GridLayout, nu: usize, nv: usize) -> Self {
        Self { layout, nu, nv }
    }

    /// Vertices per row of constant `v`.
    pub fn columns(&self) -> usize {
        match self.layout {
            GridLayout::Clamped => self.nu + 1,
            GridLayout::Wrapped => self.nu,
        }
    }

    /// Number of rows of constant `v`.
    pub fn rows(&self) -> usize {
        match self.layout {
            GridLayout::Clamped => self.nv + 1,
            GridLayout::Wrapped => self.nv,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn triangle_count(&self) -> usize {
        2 * self.nu * self.nv
    }

    /// Whether UV coordinates jump across the seam, so UV differences must be
    /// taken modulo 1.
    pub fn is_periodic_uv(&self) -> bool {
        self.layout == GridLayout::Wrapped
    }

    /// Index of grid vertex `(i, j)`; wraps modulo the resolution in the wrapped layout.
    pub fn vertex_index(&self, i: usize, j: usize) -> u32 {
        let (i, j) = match self.layout {
            GridLayout::Clamped => (i, j),
            GridLayout::Wrapped => (i % self.nu, j % self.nv),
        };
        (j * self.columns() + i) as u32
    }

    /// Grid coordinates `(i, j)` of a vertex index.
    pub fn grid_coords(&self, index: usize) -> (usize, usize) {
        let columns = self.columns();
        (index % columns, index / columns)
    }

    /// Normalized parameters of grid vertex `(i, j)`.
    pub fn uv(&self, i: usize, j: usize) -> Point2 {
        Point2::new(grid_param(i, self.nu), grid_param(j, self.nv))
    }

    /// Two triangles per quad, `(a, c, b)` and `(b, c, d)` with
    /// `a = (i, j)`, `b = (i+1, j)`, `c = (i, j+1)`, `d = (i+1, j+1)`.
    ///
    /// Seen from outside the surface these wind counter-clockwise.
    pub fn indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangle_count() * 3);
        for j in 0..self.nv {
            for i in 0..self.nu {
                let a = self.vertex_index(i, j);
                let b = self.vertex_index(i + 1, j);
                let c = self.vertex_index(i, j + 1);
                let d = self.vertex_index(i + 1, j + 1);
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
        indices
    }
}
