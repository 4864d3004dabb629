//! meshdrag: interactive 2D mesh editing
//!
//! Drag points, faces, or a whole selection; rotate and scale a selection
//! with a floating transform handle. The crate is the interaction engine:
//! hosts feed it pointer events and draw the `Scene` it hands back.
//!
//! - `geometry`: vectors, bounding boxes, polygon tests
//! - `selection`, `mesh`, `handle`: the editor's state
//! - `gesture`: one tracker per drag kind, driven by `GestureController`
//! - `editor`: the session object that owns everything
//! - `scene`, `picking`: the boundary with the renderer

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod handle;
pub mod input;
pub mod mesh;
pub mod picking;
pub mod scene;
pub mod selection;

pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use geometry::{BoundingBox, Vec2, Vector};
pub use handle::HandlePose;
pub use input::{PointerEvent, Target};
pub use mesh::{Face, Mesh, MeshStore};
pub use picking::pick;
pub use scene::{HandleGlyph, Scene};
pub use selection::Selection;
