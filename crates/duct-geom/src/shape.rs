//! Duct shape data model
//!
//! A shape is a closed polygon whose vertices may carry a rounded-corner
//! radius and whose edges may carry a signed bulge depth.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Geometry data-model errors
#[derive(Debug, Clone, Error)]
pub enum GeomError {
    #[error("parallel array length mismatch: {vertices} vertices, {radii} radii, {depths} depths")]
    LengthMismatch {
        vertices: usize,
        radii: usize,
        depths: usize,
    },
}

/// Result type for geometry data-model operations
pub type GeomResult<T> = Result<T, GeomError>;

/// A closed duct shape.
///
/// The three arrays are parallel and stay the same length through every
/// mutation: `corner_radii[i]` rounds vertex `i`, `segment_depths[i]`
/// bulges the edge from vertex `i` to vertex `(i + 1) % len`.
/// Consecutive vertices are implicitly connected and the last connects
/// back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier, stable for the shape's lifetime
    pub id: Uuid,
    vertices: Vec<Vec2>,
    corner_radii: Vec<f32>,
    segment_depths: Vec<f32>,
}

impl Shape {
    /// Create a shape from a vertex polygon; radii and depths start at 0.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let n = vertices.len();
        Self {
            id: Uuid::new_v4(),
            vertices,
            corner_radii: vec![0.0; n],
            segment_depths: vec![0.0; n],
        }
    }

    /// Create a shape from full per-vertex data.
    ///
    /// Fails when the arrays are not the same length.
    pub fn with_data(
        vertices: Vec<Vec2>,
        corner_radii: Vec<f32>,
        segment_depths: Vec<f32>,
    ) -> GeomResult<Self> {
        if corner_radii.len() != vertices.len() || segment_depths.len() != vertices.len() {
            return Err(GeomError::LengthMismatch {
                vertices: vertices.len(),
                radii: corner_radii.len(),
                depths: segment_depths.len(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            vertices,
            corner_radii,
            segment_depths,
        })
    }

    /// Number of vertices (and edges)
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the shape has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex polygon, in order
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Per-vertex corner radii
    pub fn corner_radii(&self) -> &[f32] {
        &self.corner_radii
    }

    /// Per-edge bulge depths
    pub fn segment_depths(&self) -> &[f32] {
        &self.segment_depths
    }

    /// Vector along edge `i` (vertex `i` to the next vertex)
    pub fn edge_vector(&self, index: usize) -> Option<Vec2> {
        let n = self.vertices.len();
        if index >= n {
            return None;
        }
        Some(self.vertices[(index + 1) % n] - self.vertices[index])
    }

    /// Length of edge `i`
    pub fn edge_length(&self, index: usize) -> Option<f32> {
        self.edge_vector(index).map(|v| v.length())
    }

    /// Insert a vertex before `index`; the radius and depth arrays grow
    /// in step, defaulting the new entries to 0.
    pub fn insert_vertex(&mut self, index: usize, position: Vec2) -> bool {
        if index > self.vertices.len() {
            return false;
        }
        self.vertices.insert(index, position);
        self.corner_radii.insert(index, 0.0);
        self.segment_depths.insert(index, 0.0);
        true
    }

    /// Remove the vertex at `index`, shrinking all three arrays.
    pub fn remove_vertex(&mut self, index: usize) -> Option<Vec2> {
        if index >= self.vertices.len() {
            return None;
        }
        self.corner_radii.remove(index);
        self.segment_depths.remove(index);
        Some(self.vertices.remove(index))
    }

    /// Move the vertex at `index`.
    pub fn set_vertex(&mut self, index: usize, position: Vec2) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = position;
                true
            }
            None => false,
        }
    }

    /// Set the corner radius at `index`, clamped non-negative.
    pub fn set_corner_radius(&mut self, index: usize, radius: f32) -> bool {
        match self.corner_radii.get_mut(index) {
            Some(r) => {
                *r = radius.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Set the bulge depth of edge `index`.
    pub fn set_segment_depth(&mut self, index: usize, depth: f32) -> bool {
        match self.segment_depths.get_mut(index) {
            Some(d) => {
                *d = depth;
                true
            }
            None => false,
        }
    }
}
