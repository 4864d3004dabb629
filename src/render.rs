//! Macroquad drawing of an editor scene
//!
//! Draw order (bottom to top): faces, handle glyph, point markers, selection
//! rectangle. Picking walks the same order in reverse.

use macroquad::prelude::{
    draw_circle, draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines, draw_triangle,
    vec2, Color, BLACK, BLUE, GRAY, RED, WHITE,
};

use meshdrag::{EditorConfig, HandleGlyph, Scene, Vec2};

const FACE_FILL: Color = Color::new(1.0, 0.75, 0.8, 1.0);
const RECT_FILL: Color = Color::new(0.5, 0.5, 1.0, 0.5);
const ARC_SEGMENTS: usize = 24;

fn mq(p: Vec2) -> macroquad::math::Vec2 {
    vec2(p.x(), p.y())
}

fn line(a: Vec2, b: Vec2, thickness: f32, color: Color) {
    draw_line(a.x(), a.y(), b.x(), b.y(), thickness, color);
}

pub fn draw_scene(scene: &Scene<'_>, config: &EditorConfig) {
    for polygon in scene.polygons() {
        draw_polygon(&polygon);
    }

    if let Some(glyph) = scene.handle_glyph(config) {
        draw_handle(&glyph);
    }

    for (idx, p) in scene.points.iter().enumerate() {
        let color = if scene.is_selected(idx) { BLACK } else { GRAY };
        draw_circle(p.x(), p.y(), config.point_radius, color);
    }

    if scene.show_selection_rect() {
        let rect = scene.selection_rect;
        draw_rectangle(rect.min.x(), rect.min.y(), rect.width(), rect.height(), RECT_FILL);
        draw_rectangle_lines(rect.min.x(), rect.min.y(), rect.width(), rect.height(), 1.0, BLUE);
    }
}

/// Fan-filled polygon with a closed outline
fn draw_polygon(corners: &[Vec2]) {
    if let Some((&first, rest)) = corners.split_first() {
        for pair in rest.windows(2) {
            draw_triangle(mq(first), mq(pair[0]), mq(pair[1]), FACE_FILL);
        }
    }
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        line(a, b, 1.0, RED);
    }
}

fn draw_handle(glyph: &HandleGlyph) {
    let center = glyph.position;
    draw_circle(center.x(), center.y(), glyph.center_radius, WHITE);
    draw_circle_lines(center.x(), center.y(), glyph.center_radius, 1.0, GRAY);

    let arc = glyph.arc_points(ARC_SEGMENTS);
    for pair in arc.windows(2) {
        line(pair[0], pair[1], glyph.stroke, BLACK);
    }
    let [tip, a, b] = glyph.arrow_head();
    draw_triangle(mq(tip), mq(a), mq(b), BLACK);

    let [k0, k1, k2, k3] = glyph.knob_corners();
    draw_triangle(mq(k0), mq(k1), mq(k2), BLACK);
    draw_triangle(mq(k0), mq(k2), mq(k3), BLACK);
}
