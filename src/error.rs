//! Error types for mesh editing operations.

use thiserror::Error;

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur while building or editing a mesh.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A vector was built from a slice of the wrong length.
    #[error("shape mismatch: expected {expected} components, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A face references a point that does not exist.
    #[error("face {face} references point {index}, but the mesh has {point_count} points")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        point_count: usize,
    },

    /// A point index outside the mesh was targeted.
    #[error("point index {index} out of range (mesh has {point_count} points)")]
    InvalidPointIndex { index: usize, point_count: usize },

    /// A coordinate became NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// The host delivered a NaN or infinite pointer position.
    #[error("pointer position is not finite")]
    NonFinitePointer,

    /// A gesture produced a NaN or infinite handle pose.
    #[error("handle pose is not finite")]
    NonFiniteHandle,

    /// A point-only replacement tried to change the number of points.
    #[error("point count changed from {expected} to {actual}")]
    PointCountChanged { expected: usize, actual: usize },

    /// Reading or parsing the editor config failed.
    #[error("config error: {0}")]
    Config(String),
}

impl EditorError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create an invalid point index error.
    #[must_use]
    pub const fn invalid_point(index: usize, point_count: usize) -> Self {
        Self::InvalidPointIndex { index, point_count }
    }

    /// Create a config error.
    #[must_use]
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditorError::shape_mismatch(2, 3);
        assert!(format!("{err}").contains("expected 2"));

        let err = EditorError::invalid_point(7, 4);
        assert!(format!("{err}").contains("7"));

        let err = EditorError::InvalidFaceIndex { face: 1, index: 9, point_count: 4 };
        assert!(format!("{err}").contains("face 1"));

        let err = EditorError::config("bad ron");
        assert!(format!("{err}").contains("bad ron"));
    }
}
