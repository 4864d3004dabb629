//! Mesh storage
//!
//! The mesh is a validated, immutable snapshot. Editing never touches a
//! snapshot in place: gestures build a complete new point list and the store
//! swaps it in, so anything reading between two events sees either the old
//! mesh or the new one.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{EditorError, EditorResult};
use crate::geometry::Vec2;

/// A closed polygon over mesh point indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Resolve this face's corners against a point list
    pub fn corners(&self, points: &[Vec2]) -> Vec<Vec2> {
        self.indices.iter().filter_map(|&i| points.get(i).copied()).collect()
    }
}

/// Points plus the faces built on them
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    points: Vec<Vec2>,
    /// Topology never changes during a session, so snapshots share it
    faces: Arc<[Face]>,
}

impl Mesh {
    /// Build a mesh, rejecting out-of-range face indices and non-finite points
    pub fn new(points: Vec<Vec2>, faces: Vec<Face>) -> EditorResult<Self> {
        Self::with_shared_faces(points, faces.into())
    }

    fn with_shared_faces(points: Vec<Vec2>, faces: Arc<[Face]>) -> EditorResult<Self> {
        validate_points(&points)?;
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&bad) = face.indices.iter().find(|&&i| i >= points.len()) {
                return Err(EditorError::InvalidFaceIndex {
                    face: face_idx,
                    index: bad,
                    point_count: points.len(),
                });
            }
        }
        Ok(Self { points, faces })
    }

    /// Two triangles over a square, the mesh a fresh session opens with
    pub fn demo() -> Self {
        Self {
            points: vec![
                Vec2::new(50.0, 50.0),
                Vec2::new(200.0, 50.0),
                Vec2::new(50.0, 200.0),
                Vec2::new(200.0, 200.0),
            ],
            faces: vec![Face::new(vec![0, 1, 2]), Face::new(vec![1, 2, 3])].into(),
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Check that `index` names an existing point
    pub fn check_index(&self, index: usize) -> EditorResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditorError::invalid_point(index, self.points.len()))
        }
    }

    /// Same topology, new coordinates
    fn with_points(&self, points: Vec<Vec2>) -> EditorResult<Self> {
        if points.len() != self.points.len() {
            return Err(EditorError::PointCountChanged {
                expected: self.points.len(),
                actual: points.len(),
            });
        }
        validate_points(&points)?;
        Ok(Self {
            points,
            faces: Arc::clone(&self.faces),
        })
    }
}

fn validate_points(points: &[Vec2]) -> EditorResult<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(EditorError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// Owner of the committed mesh
#[derive(Debug, Clone)]
pub struct MeshStore {
    mesh: Mesh,
}

impl MeshStore {
    pub fn new(mesh: Mesh) -> Self {
        Self { mesh }
    }

    /// Current committed snapshot
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Replace points and faces together. On error the old mesh stays.
    pub fn replace_mesh(&mut self, points: Vec<Vec2>, faces: Vec<Face>) -> EditorResult<()> {
        self.mesh = Mesh::new(points, faces)?;
        Ok(())
    }

    /// Replace only the coordinates, keeping the shared faces
    pub fn replace_points(&mut self, points: Vec<Vec2>) -> EditorResult<()> {
        self.mesh = self.mesh.with_points(points)?;
        Ok(())
    }
}
