//! Axis-aligned bounding box in screen space.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::math::Vec2;

/// Box stored as its `[min, max]` corners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Collapsed box used when no box-selection is in progress
    pub const ZERO: BoundingBox = BoundingBox {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Box spanned by two opposite corners, in either order
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f32 {
        self.max.y() - self.min.y()
    }

    /// Zero for a point or a zero-width/height box
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Closed containment test on every axis
    pub fn contains(&self, p: Vec2) -> bool {
        (0..2).all(|i| self.min.0[i] <= p.0[i] && p.0[i] <= self.max.0[i])
    }
}

// Same bare-tuple shape as `Vector`: `[[x0, y0], [x1, y1]]`
impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_corners() {
        // Dragged left and down
        let b = BoundingBox::from_corners(Vec2::new(100.0, 100.0), Vec2::new(50.0, 150.0));
        assert_eq!(b.min, Vec2::new(50.0, 100.0));
        assert_eq!(b.max, Vec2::new(100.0, 150.0));
        assert!((b.area() - 2500.0).abs() < 0.001);
    }

    #[test]
    fn test_contains() {
        let b = BoundingBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        assert!(b.contains(Vec2::new(50.0, 50.0)));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(100.0, 100.0)));
        assert!(!b.contains(Vec2::new(-1.0, 50.0)));
        assert!(!b.contains(Vec2::new(101.0, 50.0)));
    }

    #[test]
    fn test_degenerate_area() {
        assert_eq!(BoundingBox::ZERO.area(), 0.0);
        let line = BoundingBox::from_corners(Vec2::new(10.0, 5.0), Vec2::new(10.0, 80.0));
        assert_eq!(line.area(), 0.0);
        assert!(line.contains(Vec2::new(10.0, 40.0)));
    }

    proptest! {
        #[test]
        fn prop_corner_order_independent(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(BoundingBox::from_corners(a, b), BoundingBox::from_corners(b, a));
        }

        #[test]
        fn prop_contains_both_corners(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let bounds = BoundingBox::from_corners(a, b);
            prop_assert!(bounds.contains(a));
            prop_assert!(bounds.contains(b));
        }
    }
}
