//! Canvas editor state machine for the cognito-canvas workflow builder.
//!
//! This crate owns the interactive editing session: which element is
//! selected, whether a node is being dragged or an edge is being drawn, and
//! the zoom/pan viewport. All graph mutations go through
//! [`CanvasEditor`], so the UI layer stays a thin event-to-method mapping
//! and the whole state machine is testable without a rendering harness.

pub mod controller;
pub mod error;
pub mod viewport;

pub use controller::{CanvasEditor, Interaction, Selection};
pub use error::EditorError;
pub use viewport::{Viewport, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
