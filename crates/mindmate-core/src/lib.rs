//! MindMate Core Library
//!
//! Platform-agnostic state and logic for the MindMate wellness companion:
//! the doodle stroke tool, palette and styles, screens and navigation,
//! notifications, milestone badges, the scripted chat companion, and the
//! per-screen form state.

pub mod chat;
pub mod input;
pub mod milestone;
pub mod notify;
pub mod palette;
pub mod rng;
pub mod screen;
pub mod screens;
pub mod stroke;
pub mod style;
pub mod tools;

pub use chat::{ChatMessage, ChatSession, ScriptedResponder};
pub use input::{MouseButton, PointerEvent, StrokeAction};
pub use milestone::{Badge, MilestoneKind};
pub use notify::{Notifier, Toast, ToastQueue};
pub use palette::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Palette, PaletteEntry};
pub use rng::SimpleRng;
pub use screen::{HistoryNavigator, Navigator, Screen};
pub use stroke::{Segment, Stroke};
pub use style::{Rgba, StrokeStyle, StyleError};
pub use tools::{StrokeTool, ToolState};
