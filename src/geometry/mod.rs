//! Screen-space geometry: vectors, boxes and polygon tests

mod bounds;
mod math;

pub use bounds::BoundingBox;
pub use math::{Vec2, Vector};

/// Test if a point lies inside a closed polygon (even-odd rule).
/// Works for any winding order and any vertex count; fewer than three
/// vertices never contain anything.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        // Edge crosses the horizontal ray through p
        if (a.y() > p.y()) != (b.y() > p.y()) {
            let cross_x = a.x() + (p.y() - a.y()) / (b.y() - a.y()) * (b.x() - a.x());
            if p.x() < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
