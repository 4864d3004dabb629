//! Transform handle
//!
//! The handle summarizes a multi-point selection: it sits on the centroid of
//! the selected points, remembers how far the group has been rotated since the
//! selection last changed, and is only shown when two or more points are
//! selected.

use serde::Serialize;

use crate::geometry::Vec2;
use crate::mesh::Mesh;
use crate::selection::Selection;

/// Handle pose: where it sits, how far it is turned, whether it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HandlePose {
    pub position: Vec2,
    /// Accumulated rotation in radians
    pub angle: f32,
    pub visible: bool,
}

impl HandlePose {
    /// Fresh pose for a selection: centroid of the selected points, angle
    /// reset, shown for two or more points. Indices outside the mesh are
    /// ignored.
    pub fn from_selection(mesh: &Mesh, selection: &Selection) -> Self {
        let selected: Vec<Vec2> = selection
            .selected_indices()
            .into_iter()
            .filter_map(|idx| mesh.point(idx))
            .collect();

        let position = if selected.is_empty() {
            Vec2::ZERO
        } else {
            let sum = selected.iter().fold(Vec2::ZERO, |acc, &p| acc + p);
            sum * (1.0 / selected.len() as f32)
        };

        Self {
            position,
            angle: 0.0,
            visible: selected.len() > 1,
        }
    }

    /// Same pose shifted by `delta`
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            ..self
        }
    }

    /// Same pose with `delta` added to the accumulated angle
    pub fn rotated(self, delta: f32) -> Self {
        Self {
            angle: self.angle + delta,
            ..self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.angle.is_finite()
    }
}
