//! Affordance picking
//!
//! Maps a screen position to the element drawn topmost under it, in reverse
//! draw order: point markers, then the handle glyph, then faces, then the
//! background.

use crate::config::EditorConfig;
use crate::geometry::{point_in_polygon, Vec2};
use crate::input::Target;
use crate::scene::Scene;

pub fn pick(scene: &Scene<'_>, config: &EditorConfig, p: Vec2) -> Target {
    // Later points draw over earlier ones
    if let Some(idx) = scene
        .points
        .iter()
        .rposition(|&pt| (pt - p).len() <= config.point_radius)
    {
        return Target::Point(idx);
    }

    if let Some(target) = scene.handle_glyph(config).and_then(|glyph| glyph.hit(p)) {
        return target;
    }

    let polygons: Vec<Vec<Vec2>> = scene.polygons().collect();
    if let Some(idx) = polygons.iter().rposition(|poly| point_in_polygon(p, poly)) {
        return Target::Face(idx);
    }

    Target::Background
}
