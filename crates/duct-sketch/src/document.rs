//! Shape document
//!
//! The collaborator-side store for duct shapes: owns every shape and
//! the selected-shape pointer, and funnels all mutation through
//! operations that keep the per-vertex arrays in sync. Geometry
//! functions receive immutable shape references and return fresh
//! derived data; nothing here shares mutable state with the engine.

use std::collections::HashMap;

use duct_geom::{Shape, vector};
use glam::Vec2;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Document errors
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(Uuid),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Owns the shape collection and the selection.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: HashMap<Uuid, Shape>,
    selected: Option<Uuid>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Shape Management ==============

    /// Add a shape, returning its id.
    pub fn add_shape(&mut self, shape: Shape) -> Uuid {
        let id = shape.id;
        info!(%id, vertices = shape.len(), "shape added");
        self.shapes.insert(id, shape);
        id
    }

    /// Remove a shape; a removed shape is also deselected.
    pub fn remove_shape(&mut self, id: Uuid) -> Option<Shape> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            info!(%id, "shape removed");
        }
        removed
    }

    /// Get a shape by id
    pub fn get_shape(&self, id: Uuid) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Iterate over all shapes
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the document holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    // ============== Selection ==============

    /// Select a shape
    pub fn select(&mut self, id: Uuid) -> DocumentResult<()> {
        if !self.shapes.contains_key(&id) {
            return Err(DocumentError::ShapeNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Id of the selected shape
    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// The selected shape
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shapes.get(&id))
    }

    // ============== Shape Mutation ==============
    //
    // All vertex/radius/depth edits go through here so the parallel
    // arrays can never drift apart.

    /// Insert a vertex before `index`; radius and depth arrays grow in
    /// step with new entries at 0.
    pub fn insert_vertex(&mut self, id: Uuid, index: usize, position: Vec2) -> DocumentResult<()> {
        let shape = self.shape_mut(id)?;
        if !shape.insert_vertex(index, position) {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        Ok(())
    }

    /// Remove the vertex at `index`.
    pub fn remove_vertex(&mut self, id: Uuid, index: usize) -> DocumentResult<Vec2> {
        self.shape_mut(id)?
            .remove_vertex(index)
            .ok_or(DocumentError::IndexOutOfRange(index))
    }

    /// Move the vertex at `index`.
    pub fn move_vertex(&mut self, id: Uuid, index: usize, position: Vec2) -> DocumentResult<()> {
        if !self.shape_mut(id)?.set_vertex(index, position) {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        Ok(())
    }

    /// Set the corner radius at `index` (clamped non-negative).
    pub fn set_corner_radius(&mut self, id: Uuid, index: usize, radius: f32) -> DocumentResult<()> {
        if !self.shape_mut(id)?.set_corner_radius(index, radius) {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        Ok(())
    }

    /// Set the bulge depth of edge `index`.
    ///
    /// The magnitude is clamped to half the chord length, the editing
    /// bound beyond which the implied arc degenerates.
    pub fn set_segment_depth(&mut self, id: Uuid, index: usize, depth: f32) -> DocumentResult<()> {
        let shape = self.shape_mut(id)?;
        let chord = shape
            .edge_length(index)
            .ok_or(DocumentError::IndexOutOfRange(index))?;
        let limit = chord / 2.0;
        let clamped = depth.clamp(-limit, limit);
        shape.set_segment_depth(index, clamped);
        Ok(())
    }

    // ============== Sketch Integration ==============

    /// Turn a finished sketch outline into a new shape and select it.
    ///
    /// Radii and depths start at zero; the caller is expected to pass
    /// the polygon returned by a committed sketch session.
    pub fn commit_sketch(&mut self, points: Vec<Vec2>) -> Uuid {
        let shape = Shape::new(points);
        let id = self.add_shape(shape);
        self.selected = Some(id);
        id
    }

    // ============== Labels ==============
    //
    // Length/angle readouts for edge and corner labels, implemented
    // once on top of the geometry primitives.

    /// Length of edge `index`, for segment labels.
    pub fn segment_length(&self, id: Uuid, index: usize) -> DocumentResult<f32> {
        let shape = self.shape(id)?;
        shape
            .edge_length(index)
            .ok_or(DocumentError::IndexOutOfRange(index))
    }

    /// Interior angle at vertex `index`, in radians, for corner labels.
    pub fn corner_angle(&self, id: Uuid, index: usize) -> DocumentResult<f32> {
        let shape = self.shape(id)?;
        let verts = shape.vertices();
        let n = verts.len();
        if index >= n {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        let to_prev = verts[(index + n - 1) % n] - verts[index];
        let to_next = verts[(index + 1) % n] - verts[index];
        Ok(vector::angle_between(to_prev, to_next))
    }

    fn shape(&self, id: Uuid) -> DocumentResult<&Shape> {
        self.shapes.get(&id).ok_or(DocumentError::ShapeNotFound(id))
    }

    fn shape_mut(&mut self, id: Uuid) -> DocumentResult<&mut Shape> {
        self.shapes
            .get_mut(&id)
            .ok_or(DocumentError::ShapeNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn square_points() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_add_and_get_shape() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_shape(id).unwrap().len(), 4);
    }

    #[test]
    fn test_select_requires_existing_shape() {
        let mut doc = Document::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            doc.select(missing),
            Err(DocumentError::ShapeNotFound(_))
        ));

        let id = doc.add_shape(Shape::new(square_points()));
        doc.select(id).unwrap();
        assert_eq!(doc.selected_id(), Some(id));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));
        doc.select(id).unwrap();
        doc.remove_shape(id);
        assert!(doc.selected_id().is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_vertex_edits_keep_arrays_parallel() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));

        doc.insert_vertex(id, 2, Vec2::new(100.0, 50.0)).unwrap();
        let shape = doc.get_shape(id).unwrap();
        assert_eq!(shape.len(), 5);
        assert_eq!(shape.corner_radii().len(), 5);
        assert_eq!(shape.segment_depths().len(), 5);

        doc.remove_vertex(id, 2).unwrap();
        let shape = doc.get_shape(id).unwrap();
        assert_eq!(shape.len(), 4);
        assert_eq!(shape.corner_radii().len(), 4);
        assert_eq!(shape.segment_depths().len(), 4);
    }

    #[test]
    fn test_segment_depth_clamped_to_half_chord() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));

        doc.set_segment_depth(id, 0, 500.0).unwrap();
        assert_eq!(doc.get_shape(id).unwrap().segment_depths()[0], 50.0);

        doc.set_segment_depth(id, 0, -500.0).unwrap();
        assert_eq!(doc.get_shape(id).unwrap().segment_depths()[0], -50.0);

        doc.set_segment_depth(id, 0, 20.0).unwrap();
        assert_eq!(doc.get_shape(id).unwrap().segment_depths()[0], 20.0);
    }

    #[test]
    fn test_mutation_on_missing_shape_errors() {
        let mut doc = Document::new();
        let missing = Uuid::new_v4();
        assert!(doc.move_vertex(missing, 0, Vec2::ZERO).is_err());
        assert!(doc.set_corner_radius(missing, 0, 1.0).is_err());
    }

    #[test]
    fn test_out_of_range_index_errors() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));
        assert!(matches!(
            doc.set_corner_radius(id, 9, 1.0),
            Err(DocumentError::IndexOutOfRange(9))
        ));
        assert!(doc.segment_length(id, 9).is_err());
    }

    #[test]
    fn test_commit_sketch_selects_new_shape() {
        let mut doc = Document::new();
        let id = doc.commit_sketch(square_points());
        assert_eq!(doc.selected_id(), Some(id));
        let shape = doc.selected_shape().unwrap();
        assert_eq!(shape.corner_radii(), &[0.0; 4]);
        assert_eq!(shape.segment_depths(), &[0.0; 4]);
    }

    #[test]
    fn test_sketch_to_boundary_flow() {
        use crate::session::SketchSession;
        use duct_geom::build_boundary_path;

        let mut session = SketchSession::new();
        session.start(Vec2::ZERO);
        session.update(Vec2::new(400.0, 0.0));
        session.update(Vec2::new(400.0, 300.0));
        let outline = session.commit().unwrap();

        let mut doc = Document::new();
        let id = doc.commit_sketch(outline);
        let shape = doc.get_shape(id).unwrap();
        assert_eq!(shape.len(), 6);

        let path = build_boundary_path(shape);
        // Fresh sketch shapes have no radii or depths: straight lines only
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn test_labels() {
        let mut doc = Document::new();
        let id = doc.add_shape(Shape::new(square_points()));
        assert_relative_eq!(doc.segment_length(id, 0).unwrap(), 100.0);
        assert_relative_eq!(
            doc.corner_angle(id, 1).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-5
        );
    }
}
