//! Committed stroke records.

use crate::style::StrokeStyle;
use kurbo::{BezPath, Line, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight piece of a stroke between two consecutive pointer samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Style in effect when the segment was drawn.
    pub style: StrokeStyle,
}

impl Segment {
    pub fn line(&self) -> Line {
        Line::new(self.from, self.to)
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.from);
        path.line_to(self.to);
        path
    }
}

/// A freehand stroke: the pointer samples between down and up, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in the stroke path.
    pub points: Vec<Point>,
    /// Style the stroke was started with.
    pub style: StrokeStyle,
}

impl Stroke {
    /// Create a stroke starting at `start`.
    pub fn new(start: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![start],
            style,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self { points, style }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last sampled point.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Bounding box of the sampled points, not including the stroke width.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Whether `point` lies on the painted stroke, within `tolerance`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let half_width = self.style.stroke_width() / 2.0;

        if self.points.len() < 2 {
            return self
                .points
                .first()
                .is_some_and(|p| p.distance(point) <= tolerance + half_width);
        }

        for window in self.points.windows(2) {
            let start = window[0];
            let end = window[1];

            let line_vec = Vec2::new(end.x - start.x, end.y - start.y);
            let point_vec = Vec2::new(point.x - start.x, point.y - start.y);

            let line_len_sq = line_vec.hypot2();
            if line_len_sq < f64::EPSILON {
                if start.distance(point) <= tolerance + half_width {
                    return true;
                }
                continue;
            }

            let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
            let projection = start + line_vec * t;

            if projection.distance(point) <= tolerance + half_width {
                return true;
            }
        }

        false
    }

    /// The stroke as one connected polyline.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some(first) = self.points.first() else {
            return path;
        };

        path.move_to(*first);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}
