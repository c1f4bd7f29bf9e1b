//! Raster drawing surface for the doodle space.
//!
//! The surface owns a fixed-size pixmap and a [`StrokeTool`]. Pointer input
//! drives the tool; every segment the tool emits is painted immediately with
//! round caps and joins, so consecutive short segments read as one smooth
//! stroke. Committed pixels only change again on [`DrawingSurface::clear`].

use crate::export;
use kurbo::{BezPath, PathEl, Point, Rect};
use mindmate_core::input::{PointerEvent, StrokeAction};
use mindmate_core::stroke::{Segment, Stroke};
use mindmate_core::style::{Rgba, StrokeStyle};
use mindmate_core::tools::StrokeTool;
use peniko::Color;
use thiserror::Error;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};

/// Canvas width used by the doodle space.
pub const DEFAULT_CANVAS_WIDTH: u32 = 320;
/// Canvas height used by the doodle space.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Coordinates are clamped to this magnitude before clipping.
const COORD_LIMIT: f64 = 1e12;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Size and background of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// Color the raster starts with and returns to on clear.
    pub background: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: Color::from_rgba8(0, 0, 0, 0),
        }
    }
}

impl SurfaceConfig {
    /// Set the raster size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    fn background_skia(&self) -> tiny_skia::Color {
        let rgba = self.background.to_rgba8();
        tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// A fixed-size raster that captures freehand strokes.
pub struct DrawingSurface {
    /// `None` when the configured size has zero area.
    pixmap: Option<Pixmap>,
    config: SurfaceConfig,
    tool: StrokeTool,
    /// Strokes committed since the last clear, oldest first.
    strokes: Vec<Stroke>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl std::fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("drawing", &self.is_drawing())
            .field("strokes", &self.strokes.len())
            .finish()
    }
}

impl DrawingSurface {
    /// Create a surface filled with the configured background.
    ///
    /// A zero-area size yields an uninitialized surface: pointer handling
    /// still tracks stroke state, but nothing is painted and export fails.
    pub fn new(config: SurfaceConfig) -> Self {
        let pixmap = Pixmap::new(config.width, config.height).map(|mut pixmap| {
            pixmap.fill(config.background_skia());
            pixmap
        });
        if pixmap.is_none() {
            log::warn!(
                "Surface of size {}x{} has no pixels; drawing is disabled",
                config.width,
                config.height
            );
        }

        Self {
            pixmap,
            config,
            tool: StrokeTool::default(),
            strokes: Vec::new(),
        }
    }

    /// Create a surface with no pixels.
    pub fn uninitialized() -> Self {
        Self::new(SurfaceConfig::default().with_size(0, 0))
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.pixmap.is_some()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::width)
    }

    pub fn height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::height)
    }

    /// Whether a stroke session is active.
    pub fn is_drawing(&self) -> bool {
        self.tool.is_drawing()
    }

    /// Style applied to subsequent segments.
    pub fn style(&self) -> StrokeStyle {
        self.tool.current_style
    }

    /// Strokes committed since the last clear, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Start a stroke at `point`.
    ///
    /// Calling this while a stroke is active commits the unfinished stroke and
    /// starts a new one from `point`.
    pub fn begin_stroke(&mut self, point: Point) {
        if is_nan(point) {
            log::debug!("Ignoring stroke start at NaN point");
            return;
        }
        if self.tool.is_drawing() {
            self.commit();
        }
        log::debug!("Stroke started at ({}, {})", point.x, point.y);
        self.tool.begin(point);
    }

    /// Draw a segment from the last point to `point`.
    /// Does nothing unless a stroke is active. NaN samples are skipped and
    /// leave the last point unchanged.
    pub fn extend_stroke(&mut self, point: Point) {
        if is_nan(point) {
            log::trace!("Skipping NaN sample");
            return;
        }
        if let Some(segment) = self.tool.extend(point) {
            self.paint_segment(&segment);
        }
    }

    /// Finish the active stroke. Does nothing if none is active.
    pub fn end_stroke(&mut self) {
        self.commit();
    }

    /// Reset the raster to the background and end any active stroke.
    /// The current style is kept.
    pub fn clear(&mut self) {
        self.tool.cancel();
        self.strokes.clear();
        let background = self.config.background_skia();
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(background);
        }
        log::debug!("Surface cleared");
    }

    /// Replace the style for subsequent segments. Committed pixels are not
    /// repainted.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.tool.set_style(style);
    }

    /// Encode the committed pixels as PNG.
    pub fn export_image(&self) -> SurfaceResult<Vec<u8>> {
        let pixmap = self.pixmap.as_ref().ok_or_else(|| {
            SurfaceError::Encoding(format!(
                "surface of size {}x{} is not initialized",
                self.config.width, self.config.height
            ))
        })?;
        export::encode_png(pixmap)
    }

    /// Feed a pointer event from the host UI.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event.stroke_action() {
            Some(StrokeAction::Begin(point)) => self.begin_stroke(point),
            Some(StrokeAction::Extend(point)) => self.extend_stroke(point),
            Some(StrokeAction::End) => self.end_stroke(),
            None => {}
        }
    }

    /// Straight-alpha color of the pixel at (`x`, `y`), or `None` outside the
    /// raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let color = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some(Rgba::new(color.red(), color.green(), color.blue(), color.alpha()))
    }

    /// Whether every pixel still has the background color.
    pub fn is_blank(&self) -> bool {
        let Some(pixmap) = self.pixmap.as_ref() else {
            return true;
        };
        let background: PremultipliedColorU8 =
            self.config.background_skia().premultiply().to_color_u8();
        pixmap.pixels().iter().all(|p| *p == background)
    }

    fn commit(&mut self) {
        if let Some(stroke) = self.tool.end() {
            log::debug!("Stroke finished with {} points", stroke.len());
            if stroke.len() > 1 {
                self.strokes.push(stroke);
            }
        }
    }

    fn paint_segment(&mut self, segment: &Segment) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            log::trace!("Segment dropped: surface is not initialized");
            return;
        };
        let visible = Rect::new(0.0, 0.0, f64::from(pixmap.width()), f64::from(pixmap.height()));
        let margin = segment.style.stroke_width() + 1.0;
        let Some((from, to)) =
            clip_segment(segment.from, segment.to, visible.inflate(margin, margin))
        else {
            return;
        };
        let clipped = Segment { from, to, ..*segment };
        let Some(path) = to_skia_path(&clipped.to_path()) else {
            log::trace!("Segment dropped: degenerate path {:?}", segment.line());
            return;
        };

        let rgba = segment.style.stroke().to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
        paint.anti_alias = true;

        let stroke = tiny_skia::Stroke {
            width: segment.style.stroke_width() as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };

        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn is_nan(point: Point) -> bool {
    point.x.is_nan() || point.y.is_nan()
}

/// Clip the segment `from`..`to` to `rect` (Liang-Barsky). Endpoints are
/// first clamped to [`COORD_LIMIT`] so that huge or infinite coordinates stay
/// representable. Returns `None` when nothing of the segment lies inside.
fn clip_segment(from: Point, to: Point, rect: Rect) -> Option<(Point, Point)> {
    let clamp = |p: Point| {
        Point::new(
            p.x.clamp(-COORD_LIMIT, COORD_LIMIT),
            p.y.clamp(-COORD_LIMIT, COORD_LIMIT),
        )
    };
    let (from, to) = (clamp(from), clamp(to));
    let d = to - from;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, from.x - rect.x0),
        (d.x, rect.x1 - from.x),
        (-d.y, from.y - rect.y0),
        (d.y, rect.y1 - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((from + d * t0, from + d * t1))
}

/// Convert a kurbo path to a tiny-skia path.
/// Returns `None` for paths tiny-skia rejects (empty or non-finite).
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
