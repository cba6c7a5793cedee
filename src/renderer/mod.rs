//! Render-facing data
//!
//! No GPU code lives here: the host renderer pulls a `FrameSnapshot` each frame
//! and turns it into instances and scene parameters with the helpers below.

pub mod instance;
pub mod scene;

pub use instance::{WallInstance, build_instances, colors, cursor_position, cursor_rotation};
pub use scene::SceneView;
