//! Freehand stroke tool: the idle → drawing → idle state machine behind the
//! doodle surface.

use crate::stroke::{Segment, Stroke};
use crate::style::StrokeStyle;
use kurbo::Point;

/// State of the stroke tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// A stroke session is active.
    Drawing {
        /// Last point of the session; the next segment starts here.
        last: Point,
        /// Samples of the stroke so far.
        stroke: Stroke,
    },
}

/// Tracks the current stroke style and the active stroke session.
///
/// At most one session is active at a time.
#[derive(Debug, Clone, Default)]
pub struct StrokeTool {
    pub state: ToolState,
    /// Style applied to new segments.
    pub current_style: StrokeStyle,
}

impl StrokeTool {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            state: ToolState::Idle,
            current_style: style,
        }
    }

    /// Whether a stroke session is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ToolState::Drawing { .. })
    }

    /// Start a session at `point`. A second call while drawing restarts the
    /// session from `point` and drops the unfinished stroke record.
    pub fn begin(&mut self, point: Point) {
        if self.is_drawing() {
            log::debug!("Stroke restarted at ({}, {})", point.x, point.y);
        }
        self.state = ToolState::Drawing {
            last: point,
            stroke: Stroke::new(point, self.current_style),
        };
    }

    /// Advance the session to `point`, returning the segment to paint.
    /// Returns `None` when no session is active.
    pub fn extend(&mut self, point: Point) -> Option<Segment> {
        let ToolState::Drawing { last, stroke } = &mut self.state else {
            return None;
        };

        let segment = Segment {
            from: *last,
            to: point,
            style: self.current_style,
        };
        *last = point;
        stroke.add_point(point);
        Some(segment)
    }

    /// Finish the session, returning the committed stroke.
    /// Returns `None` when no session was active.
    pub fn end(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            ToolState::Drawing { stroke, .. } => Some(stroke),
            ToolState::Idle => None,
        }
    }

    /// Drop the active session without committing it.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Replace the style used for subsequent segments.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.current_style = style;
    }

    /// Last point of the active session.
    pub fn last_point(&self) -> Option<Point> {
        match &self.state {
            ToolState::Drawing { last, .. } => Some(*last),
            ToolState::Idle => None,
        }
    }
}
