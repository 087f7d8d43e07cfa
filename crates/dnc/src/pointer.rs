//! Backend-agnostic pointer events consumed by the hover engine

use glam::Vec2;

/// Pointer event targeted at a bound element
///
/// Hosts translate their windowing events (enter/leave notifications, motion,
/// button release) into these before handing them to a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the element's bounds
    Enter,
    /// Pointer left the element's bounds
    Leave,
    /// Pointer moved while over the element
    Move {
        /// Pointer position in window coordinates
        position: Vec2,
    },
    /// A direct activation gesture (click, tap, Enter key) on the element
    Click,
}

impl PointerEvent {
    /// Convenience constructor for a motion event
    pub fn moved(x: f32, y: f32) -> Self {
        Self::Move {
            position: Vec2::new(x, y),
        }
    }
}
