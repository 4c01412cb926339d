//! Freehand duct sketch session
//!
//! Consumes a stream of pointer positions and incrementally builds the
//! orthogonal centerline a new duct shape is thickened around. The
//! sketch is constrained to alternating horizontal/vertical runs; a
//! turn is registered when the pointer strays far enough from the
//! locked axis.

use duct_geom::build_outline;
use glam::Vec2;
use tracing::debug;

/// Perpendicular displacement that registers a turn.
pub const TURN_THRESHOLD: f32 = 150.0;

/// Thickness of the generated duct outline.
pub const DUCT_THICKNESS: f32 = 150.0;

/// Live segments shorter than this suppress the preview.
pub const MIN_SEGMENT_LENGTH: f32 = 5.0;

/// Axis a drawing run is locked to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Axis of the dominant component of `delta`
    fn dominant(delta: Vec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    fn flipped(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Pin `pos` to this axis through `anchor`.
    fn constrain(self, anchor: Vec2, pos: Vec2) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(pos.x, anchor.y),
            Axis::Vertical => Vec2::new(anchor.x, pos.y),
        }
    }

    /// Displacement of `pos` perpendicular to this axis.
    fn perpendicular_distance(self, anchor: Vec2, pos: Vec2) -> f32 {
        match self {
            Axis::Horizontal => (pos.y - anchor.y).abs(),
            Axis::Vertical => (pos.x - anchor.x).abs(),
        }
    }
}

/// Abstract cancel-class input signals, decoupled from any concrete
/// input-event API. The host maps its own events (Escape, modifier
/// keys) onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelSignal {
    /// Explicit cancel request
    CancelRequested,
    /// Modifier condition that aborts the draw
    ModifierHeld,
}

/// In-progress drawing data
#[derive(Debug, Clone)]
struct Drawing {
    /// Last committed centerline vertex
    anchor: Vec2,
    /// Axis the live run is locked to; `None` until the first dominant
    /// displacement
    locked_axis: Option<Axis>,
    /// Committed centerline vertices, anchor included
    centerline: Vec<Vec2>,
    /// Constrained live endpoint of the current run
    live: Option<Vec2>,
}

/// Freehand sketch session state machine.
///
/// `Idle -> Drawing -> {committed | cancelled}`; at most one drawing is
/// active at a time, and `start` while drawing is ignored.
#[derive(Debug, Clone)]
pub struct SketchSession {
    drawing: Option<Drawing>,
    thickness: f32,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchSession {
    pub fn new() -> Self {
        Self {
            drawing: None,
            thickness: DUCT_THICKNESS,
        }
    }

    /// Session generating outlines of a non-default thickness
    pub fn with_thickness(thickness: f32) -> Self {
        Self {
            drawing: None,
            thickness,
        }
    }

    /// Whether a drawing is in progress
    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    /// Committed centerline vertices of the active drawing
    pub fn centerline(&self) -> &[Vec2] {
        self.drawing
            .as_ref()
            .map_or(&[][..], |d| d.centerline.as_slice())
    }

    /// Constrained live endpoint of the active drawing
    pub fn live_endpoint(&self) -> Option<Vec2> {
        self.drawing.as_ref().and_then(|d| d.live)
    }

    /// Axis the active drawing is locked to
    pub fn locked_axis(&self) -> Option<Axis> {
        self.drawing.as_ref().and_then(|d| d.locked_axis)
    }

    /// Begin a drawing at `pos`.
    ///
    /// Ignored when a drawing is already active; the host's interaction
    /// model cannot normally produce that, but overlapping sessions must
    /// not reset an in-flight centerline.
    pub fn start(&mut self, pos: Vec2) {
        if self.drawing.is_some() {
            debug!("sketch start ignored: drawing already active");
            return;
        }
        debug!(x = pos.x, y = pos.y, "sketch start");
        self.drawing = Some(Drawing {
            anchor: pos,
            locked_axis: None,
            centerline: vec![pos],
            live: None,
        });
    }

    /// Feed a pointer position.
    ///
    /// Returns the preview outline polygon, or `None` while the live
    /// segment is too short to preview (or no drawing is active).
    pub fn update(&mut self, pos: Vec2) -> Option<Vec<Vec2>> {
        let drawing = self.drawing.as_mut()?;

        let delta = pos - drawing.anchor;
        let axis = *drawing
            .locked_axis
            .get_or_insert_with(|| Axis::dominant(delta));

        let mut constrained = axis.constrain(drawing.anchor, pos);
        if axis.perpendicular_distance(drawing.anchor, pos) > TURN_THRESHOLD {
            // Turn: commit the constrained point, re-anchor there and
            // continue on the other axis.
            debug!(x = constrained.x, y = constrained.y, "sketch turn");
            drawing.centerline.push(constrained);
            drawing.anchor = constrained;
            let flipped = axis.flipped();
            drawing.locked_axis = Some(flipped);
            constrained = flipped.constrain(drawing.anchor, pos);
        }

        if (constrained - drawing.anchor).length() < MIN_SEGMENT_LENGTH {
            // No appreciable movement yet
            drawing.live = None;
            return None;
        }
        drawing.live = Some(constrained);

        let mut points = drawing.centerline.clone();
        points.push(constrained);
        Some(build_outline(&points, self.thickness))
    }

    /// Finish the drawing.
    ///
    /// Returns the outline polygon of the thickened centerline when it
    /// is substantial enough to become a shape; an accidental click
    /// yields `None`. The session is idle afterwards either way.
    pub fn commit(&mut self) -> Option<Vec<Vec2>> {
        let drawing = self.drawing.take()?;

        let mut points = drawing.centerline;
        if let Some(live) = drawing.live {
            points.push(live);
        }
        let outline = build_outline(&points, self.thickness);
        if outline.len() > 3 {
            debug!(points = outline.len(), "sketch committed");
            Some(outline)
        } else {
            debug!("sketch commit discarded: degenerate outline");
            None
        }
    }

    /// Abandon the drawing without creating anything.
    pub fn cancel(&mut self) {
        if self.drawing.take().is_some() {
            debug!("sketch cancelled");
        }
    }

    /// Deliver a cancel-class input signal; any active drawing is
    /// discarded.
    pub fn signal(&mut self, signal: CancelSignal) {
        debug!(?signal, "sketch signal");
        self.cancel();
    }
}
