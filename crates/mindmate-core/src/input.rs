//! Pointer events delivered by the host UI layer.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// The pointer left the surface bounds.
    Leave,
}

/// What a pointer event asks of the stroke tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeAction {
    Begin(Point),
    Extend(Point),
    End,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => Some(*position),
            PointerEvent::Leave => None,
        }
    }

    /// Convert from client coordinates to coordinates relative to a surface
    /// whose top-left corner sits at `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        let offset = Vec2::new(-origin.x, -origin.y);
        match self {
            PointerEvent::Down { position, button } => PointerEvent::Down {
                position: position + offset,
                button,
            },
            PointerEvent::Up { position, button } => PointerEvent::Up {
                position: position + offset,
                button,
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: position + offset,
            },
            PointerEvent::Leave => PointerEvent::Leave,
        }
    }

    /// Map the event onto the stroke state machine. Only the left button
    /// draws; other buttons are ignored.
    pub fn stroke_action(&self) -> Option<StrokeAction> {
        match *self {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => Some(StrokeAction::Begin(position)),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => Some(StrokeAction::End),
            PointerEvent::Move { position } => Some(StrokeAction::Extend(position)),
            PointerEvent::Leave => Some(StrokeAction::End),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => None,
        }
    }
}
