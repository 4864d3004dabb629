//! meshdrag: a tiny 2D mesh editor
//!
//! - Click a point to select it, ctrl-click to add/remove
//! - Drag a point (or any point of the selection) to move it
//! - Drag a face to move the whole mesh
//! - Drag on the background to box-select (ctrl adds)
//! - With two or more points selected, use the handle to move, rotate or scale

mod logging_setup;
mod render;

use macroquad::prelude::*;
use meshdrag::{pick, Editor, EditorConfig, Mesh, PointerEvent, Vec2 as Point};
use tracing::{info, warn};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn window_conf() -> Conf {
    Conf {
        window_title: format!("meshdrag v{}", VERSION),
        window_width: 1024,
        window_height: 768,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Turn this frame's mouse state into pointer events
fn frame_events(editor: &Editor, config: &EditorConfig, last_pointer: &mut Point) -> Vec<PointerEvent> {
    let (mx, my) = mouse_position();
    let position = Point::new(mx, my);
    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        let target = pick(&editor.scene(), config, position);
        events.push(PointerEvent::Down { target, position, ctrl });
    } else if position != *last_pointer && editor.is_dragging() {
        events.push(PointerEvent::Move { position });
    }

    if is_mouse_button_released(MouseButton::Left) {
        events.push(PointerEvent::Up { position, ctrl });
    }

    *last_pointer = position;
    events
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = EditorConfig::load_or_default();
    logging_setup::init(&config.log_level);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = EditorConfig::default_path();
        if !path.exists() {
            match config.save(&path) {
                Ok(()) => info!(path = %path.display(), "wrote default editor config"),
                Err(e) => warn!(error = %e, "could not write default editor config"),
            }
        }
    }

    let mut editor = Editor::new(Mesh::demo(), config.clone());
    let mut last_pointer = Point::ZERO;

    info!("=== meshdrag v{} ===", VERSION);

    loop {
        for event in frame_events(&editor, &config, &mut last_pointer) {
            if let Err(e) = editor.handle_event(event) {
                warn!(error = %e, ?event, "pointer event rejected");
            }
        }

        clear_background(WHITE);
        render::draw_scene(&editor.scene(), &config);

        next_frame().await;
    }
}
