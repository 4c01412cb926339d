//! Freehand duct sketching and the shape document
//!
//! Provides the interactive layer on top of `duct-geom`:
//! - A sketch session state machine that turns raw pointer motion into
//!   an orthogonal centerline with live outline previews
//! - A document that owns every shape and the selection, and funnels
//!   all mutation through invariant-preserving operations

mod document;
mod session;

pub use document::*;
pub use session::*;
