//! 2D Duct Geometry Engine
//!
//! Pure geometry for closed duct/pipe shapes:
//! - Rounded corners (tangent points and effective radii per vertex)
//! - Bulged edges (circular arcs through a signed sagitta depth)
//! - Boundary path construction (ordered line/arc command sequences)
//! - Orthogonal centerline thickening (closed outline polygons)
//!
//! Every entry point is a pure function of its inputs; the engine never
//! retains or mutates caller-owned data.

mod boundary;
mod bulge;
mod corner;
mod outline;
mod shape;
pub mod vector;

pub use boundary::*;
pub use bulge::*;
pub use corner::*;
pub use outline::*;
pub use shape::*;
