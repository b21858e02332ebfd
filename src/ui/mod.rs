//! User interface components for dropsurface.
//!
//! The upload surface itself plus the demo pages that exercise it.

mod disclosure;     // Collapsible detail block
pub mod home;       // Demo gallery page (public for routing)
mod size_picker;    // Overlay size selector for the demo
pub mod test_panel; // Placeholder wiring-check page (public for routing)
mod upload_surface; // The drag-and-drop upload surface

pub use upload_surface::{SurfaceSize, UploadSurface};
