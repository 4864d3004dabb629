//! Vector math for the 2D editor
//!
//! `Vector<N>` is a fixed-length `f32` tuple. Equal lengths are checked by the
//! type system; the only runtime shape check happens when a vector is built
//! from a slice handed in by the host.

use std::ops::{Add, Mul, Neg, Sub};

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::error::{EditorError, EditorResult};

/// Fixed-length numeric vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>(pub [f32; N]);

/// 2D point / vector in screen space
pub type Vec2 = Vector<2>;

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Vector<N> {
    pub const ZERO: Self = Vector([0.0; N]);

    /// Build a vector from a per-component function
    pub fn from_fn(f: impl FnMut(usize) -> f32) -> Self {
        Vector(std::array::from_fn(f))
    }

    /// Component-wise minimum
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Component-wise maximum
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    pub fn dot(self, other: Self) -> f32 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Euclidean length
    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vector([x, y])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    /// Angle of this vector from the +x axis (screen space, y down)
    pub fn angle(self) -> f32 {
        self.y().atan2(self.x())
    }

    /// Rotate about `origin` by `angle` radians.
    ///
    /// Works in polar form: the offset from `origin` keeps its radius and gets
    /// `angle` added to its direction. A point sitting on `origin` has no
    /// direction and is returned as `origin`.
    pub fn rotate_about(self, origin: Vec2, angle: f32) -> Vec2 {
        let offset = self - origin;
        let radius = offset.len();
        if radius == 0.0 {
            return origin;
        }
        let theta = offset.angle() + angle;
        origin + Vec2::new(radius * theta.cos(), radius * theta.sin())
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] + other.0[i])
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] - other.0[i])
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::from_fn(|i| self.0[i] * s)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(components: [f32; N]) -> Self {
        Vector(components)
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = EditorError;

    fn try_from(components: &[f32]) -> EditorResult<Self> {
        let array: [f32; N] = components
            .try_into()
            .map_err(|_| EditorError::shape_mismatch(N, components.len()))?;
        Ok(Vector(array))
    }
}

// Serialized as a plain `[x, y]` tuple so the renderer sees bare arrays
impl<const N: usize> Serialize for Vector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.0 {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).len() < 0.001
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 10.0));
        assert_eq!(a.min(b), Vec2::new(1.0, 2.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
        assert!((a.dot(b) - 13.0).abs() < 0.001);
        assert!((Vec2::new(3.0, 4.0).len() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_generalizes_to_three_components() {
        let a = Vector([1.0, 2.0, 2.0]);
        assert!((a.len() - 3.0).abs() < 0.001);
        assert_eq!(a + a, Vector([2.0, 4.0, 4.0]));
    }

    #[test]
    fn test_shape_mismatch() {
        let ok = Vec2::try_from(&[1.0, 2.0][..]).unwrap();
        assert_eq!(ok, Vec2::new(1.0, 2.0));

        let err = Vec2::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert!(matches!(err, EditorError::ShapeMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let origin = Vec2::new(125.0, 50.0);
        // Screen space is y-down, so +pi/2 turns +x into +y
        let rotated = Vec2::new(200.0, 50.0).rotate_about(origin, FRAC_PI_2);
        assert!(close(rotated, Vec2::new(125.0, 125.0)), "{:?}", rotated);

        let rotated = Vec2::new(50.0, 50.0).rotate_about(origin, FRAC_PI_2);
        assert!(close(rotated, Vec2::new(125.0, -25.0)), "{:?}", rotated);
    }

    #[test]
    fn test_rotate_about_self_is_fixed() {
        let origin = Vec2::new(10.0, -4.0);
        let rotated = origin.rotate_about(origin, PI / 3.0);
        assert_eq!(rotated, origin);
        assert!(rotated.is_finite());
    }

    proptest! {
        #[test]
        fn prop_add_sub_round_trip(
            x1 in -1.0e4f32..1.0e4, y1 in -1.0e4f32..1.0e4,
            x2 in -1.0e4f32..1.0e4, y2 in -1.0e4f32..1.0e4,
        ) {
            let v1 = Vec2::new(x1, y1);
            let v2 = Vec2::new(x2, y2);
            let back = (v1 + v2) - v2;
            prop_assert!((back - v1).len() < 0.01);
        }

        #[test]
        fn prop_rotation_preserves_radius(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            ox in -1000.0f32..1000.0, oy in -1000.0f32..1000.0,
            angle in -10.0f32..10.0,
        ) {
            let v = Vec2::new(x, y);
            let origin = Vec2::new(ox, oy);
            let before = (v - origin).len();
            let after = (v.rotate_about(origin, angle) - origin).len();
            prop_assert!((before - after).abs() <= 1.0e-3 * before.max(1.0));
        }
    }
}
