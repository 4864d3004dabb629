//! Scene composition
//!
//! A `Scene` is the per-frame description handed to the renderer. It borrows
//! the editor's committed state, so building one every frame costs nothing
//! and always reflects a consistent snapshot.

use serde::Serialize;

use crate::config::EditorConfig;
use crate::geometry::{BoundingBox, Vec2};
use crate::handle::HandlePose;
use crate::input::Target;
use crate::mesh::{Face, Mesh};
use crate::selection::Selection;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scene<'a> {
    pub points: &'a [Vec2],
    pub faces: &'a [Face],
    pub selection: &'a Selection,
    pub handle: HandlePose,
    pub selection_rect: BoundingBox,
}

impl<'a> Scene<'a> {
    pub fn compose(
        mesh: &'a Mesh,
        selection: &'a Selection,
        handle: HandlePose,
        selection_rect: BoundingBox,
    ) -> Self {
        Self {
            points: mesh.points(),
            faces: mesh.faces(),
            selection,
            handle,
            selection_rect,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// The rectangle is only drawn while it has positive area
    pub fn show_selection_rect(&self) -> bool {
        self.selection_rect.area() > 0.0
    }

    /// Face outlines resolved to screen positions, in draw order
    pub fn polygons(&self) -> impl Iterator<Item = Vec<Vec2>> + '_ {
        self.faces.iter().map(|face| face.corners(self.points))
    }

    /// Handle glyph geometry, when the handle is shown
    pub fn handle_glyph(&self, config: &EditorConfig) -> Option<HandleGlyph> {
        self.handle.visible.then(|| HandleGlyph::new(&self.handle, config))
    }
}

/// Handle glyph laid out in its own frame: origin at the handle position,
/// turned by the handle angle (screen space, y down).
///
/// - center disc of radius `center_radius` (reposition)
/// - rotation arc of radius `arc_radius` over the `x >= 0` half, running from
///   the bottom to the top with an arrow head at the top (rotate)
/// - square knob left of the arc (scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGlyph {
    pub position: Vec2,
    pub angle: f32,
    pub center_radius: f32,
    pub arc_radius: f32,
    pub stroke: f32,
    /// Knob center in the glyph frame
    pub knob_offset: Vec2,
    pub knob_half_size: f32,
}

impl HandleGlyph {
    const KNOB_HALF_SIZE: f32 = 3.0;
    const KNOB_DISTANCE: f32 = 1.2;

    pub fn new(pose: &HandlePose, config: &EditorConfig) -> Self {
        Self {
            position: pose.position,
            angle: pose.angle,
            center_radius: config.handle_center_radius,
            arc_radius: config.handle_radius,
            stroke: config.handle_stroke,
            knob_offset: Vec2::new(-config.handle_radius * Self::KNOB_DISTANCE, 0.0),
            knob_half_size: Self::KNOB_HALF_SIZE,
        }
    }

    /// Screen position -> glyph frame
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        (p - self.position).rotate_about(Vec2::ZERO, -self.angle)
    }

    /// Glyph frame -> screen position
    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        local.rotate_about(Vec2::ZERO, self.angle) + self.position
    }

    /// Arc polyline in screen space, bottom to top
    pub fn arc_points(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let t = std::f32::consts::FRAC_PI_2
                    - std::f32::consts::PI * i as f32 / segments as f32;
                self.to_screen(Vec2::new(self.arc_radius * t.cos(), self.arc_radius * t.sin()))
            })
            .collect()
    }

    /// Arrow head at the top end of the arc, pointing along the sweep
    pub fn arrow_head(&self) -> [Vec2; 3] {
        let r = self.arc_radius;
        let s = self.stroke;
        [
            self.to_screen(Vec2::new(-s, -r)),
            self.to_screen(Vec2::new(0.0, -r - s)),
            self.to_screen(Vec2::new(0.0, -r + s)),
        ]
    }

    /// Knob corners in screen space, clockwise from top-left
    pub fn knob_corners(&self) -> [Vec2; 4] {
        let h = self.knob_half_size;
        let c = self.knob_offset;
        [
            self.to_screen(c + Vec2::new(-h, -h)),
            self.to_screen(c + Vec2::new(h, -h)),
            self.to_screen(c + Vec2::new(h, h)),
            self.to_screen(c + Vec2::new(-h, h)),
        ]
    }

    /// Which handle affordance, if any, lies under `p`. The knob and the arc
    /// are drawn over the disc, so they win.
    pub fn hit(&self, p: Vec2) -> Option<Target> {
        let local = self.to_local(p);
        let radius = local.len();

        let knob = local - self.knob_offset;
        if knob.x().abs() <= self.knob_half_size && knob.y().abs() <= self.knob_half_size {
            return Some(Target::HandleScale);
        }
        if local.x() >= 0.0 && (radius - self.arc_radius).abs() <= self.stroke * 0.5 {
            return Some(Target::HandleRotate);
        }
        if radius <= self.center_radius {
            return Some(Target::HandleMove);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn glyph(angle: f32) -> HandleGlyph {
        let pose = HandlePose { position: Vec2::new(100.0, 100.0), angle, visible: true };
        HandleGlyph::new(&pose, &EditorConfig::default())
    }

    #[test]
    fn test_compose_reads_mesh() {
        let mesh = Mesh::demo();
        let selection = Selection::from_indices([2]);
        let scene = Scene::compose(&mesh, &selection, HandlePose::default(), BoundingBox::ZERO);

        assert_eq!(scene.points.len(), 4);
        assert!(scene.is_selected(2));
        assert!(!scene.is_selected(0));
        assert!(!scene.show_selection_rect());
        assert!(scene.handle_glyph(&EditorConfig::default()).is_none());

        let polygons: Vec<_> = scene.polygons().collect();
        assert_eq!(polygons[1], vec![Vec2::new(200.0, 50.0), Vec2::new(50.0, 200.0), Vec2::new(200.0, 200.0)]);
    }

    #[test]
    fn test_scene_serializes_flat_arrays() {
        let mesh = Mesh::demo();
        let selection = Selection::from_indices([0, 1]);
        let rect = BoundingBox::from_corners(Vec2::new(1.0, 2.0), Vec2::new(0.0, 0.0));
        let scene = Scene::compose(&mesh, &selection, HandlePose::default(), rect);

        let text = ron::to_string(&scene).unwrap();
        assert!(text.contains("faces:[[0,1,2],[1,2,3]]"), "{text}");
        assert!(text.contains("selection:{0:true,1:true}"), "{text}");
        assert!(text.contains("selection_rect:((0.0,0.0),(1.0,2.0))"), "{text}");
        assert!(!text.contains("min:"), "{text}");
    }

    #[test]
    fn test_glyph_affordances() {
        let g = glyph(0.0);
        assert_eq!(g.hit(Vec2::new(100.0, 100.0)), Some(Target::HandleMove));
        assert_eq!(g.hit(Vec2::new(115.0, 100.0)), Some(Target::HandleRotate));
        assert_eq!(g.hit(Vec2::new(82.0, 100.0)), Some(Target::HandleScale));
        // Left half of the ring has no arc
        assert_eq!(g.hit(Vec2::new(100.0 - 15.0 * 0.7071, 100.0 - 15.0 * 0.7071)), None);
        assert_eq!(g.hit(Vec2::new(160.0, 100.0)), None);
    }

    #[test]
    fn test_glyph_follows_rotation() {
        // Quarter turn: the knob moves from the left to the top
        let g = glyph(FRAC_PI_2);
        assert_eq!(g.hit(Vec2::new(100.0, 82.0)), Some(Target::HandleScale));
        assert_eq!(g.hit(Vec2::new(100.0, 115.0)), Some(Target::HandleRotate));
        assert_eq!(g.hit(Vec2::new(82.0, 100.0)), None);
    }

    #[test]
    fn test_arc_runs_bottom_to_top() {
        let arc = glyph(0.0).arc_points(8);
        assert_eq!(arc.len(), 9);
        assert!((arc[0] - Vec2::new(100.0, 115.0)).len() < 0.001);
        assert!((arc[4] - Vec2::new(115.0, 100.0)).len() < 0.001);
        assert!((arc[8] - Vec2::new(100.0, 85.0)).len() < 0.001);
    }
}
