//! Pointer input as delivered by the host

use crate::geometry::Vec2;

/// The affordance a pointer-down landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A point marker, by point index
    Point(usize),
    /// A face polygon, by face index
    Face(usize),
    /// Empty canvas (starts a box selection)
    Background,
    /// Center disc of the transform handle
    HandleMove,
    /// Rotation arc of the transform handle
    HandleRotate,
    /// Scale knob of the transform handle
    HandleScale,
}

impl Target {
    pub fn is_handle(&self) -> bool {
        matches!(self, Target::HandleMove | Target::HandleRotate | Target::HandleScale)
    }
}

/// Normalized pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { target: Target, position: Vec2, ctrl: bool },
    Move { position: Vec2 },
    Up { position: Vec2, ctrl: bool },
}

impl PointerEvent {
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }
}
