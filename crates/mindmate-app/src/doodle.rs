//! The doodle space screen: palette, brush size and the drawing surface.

use mindmate_core::input::PointerEvent;
use mindmate_core::notify::{Notifier, Toast};
use mindmate_core::palette::{DEFAULT_BRUSH_SIZE, Palette, PaletteEntry};
use mindmate_core::screen::{Navigator, Screen};
use mindmate_core::style::{StrokeStyle, StyleError};
use mindmate_render::{DrawingSurface, SurfaceConfig};

use crate::app::{AppResult, DOODLE_FILE_NAME};
use crate::sink::FileSink;

/// Host glue around a [`DrawingSurface`].
#[derive(Debug)]
pub struct DoodleScreen {
    surface: DrawingSurface,
    color: &'static PaletteEntry,
    brush_size: u8,
}

impl Default for DoodleScreen {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl DoodleScreen {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            surface: DrawingSurface::new(config),
            color: Palette::default_entry(),
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// The selected palette color.
    pub fn color(&self) -> &'static PaletteEntry {
        self.color
    }

    pub fn brush_size(&self) -> u8 {
        self.brush_size
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        self.surface.handle_pointer_event(event);
    }

    /// Pick a palette color by name. Unknown names leave the selection as is.
    pub fn select_color(&mut self, name: &str) -> Result<(), StyleError> {
        let entry = Palette::require(name)?;
        let style = StrokeStyle::new(entry.color, self.brush_size)?;
        self.color = entry;
        self.surface.set_style(style);
        Ok(())
    }

    /// Change the brush size. Sizes outside `1..=10` are rejected.
    pub fn set_brush_size(&mut self, size: u8) -> Result<(), StyleError> {
        let style = StrokeStyle::new(self.color.color, size)?;
        self.brush_size = size;
        self.surface.set_style(style);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn back(&self, navigator: &mut impl Navigator) {
        navigator.navigate(Screen::Dashboard);
    }

    /// Export the canvas and hand it to `sink`, reporting the outcome with a
    /// toast. Returns where the sink stored the image.
    pub fn save(
        &self,
        sink: &mut impl FileSink,
        notifier: &mut impl Notifier,
    ) -> AppResult<String> {
        let result: AppResult<String> = self
            .surface
            .export_image()
            .map_err(Into::into)
            .and_then(|png| sink.save(DOODLE_FILE_NAME, &png).map_err(Into::into));

        match &result {
            Ok(location) => {
                log::info!("Doodle saved to {}", location);
                notifier.notify(Toast::new("Doodle Saved", "Your doodle was saved."));
            }
            Err(e) => {
                log::error!("Failed to save doodle: {}", e);
                notifier.notify(Toast::new("Save Failed", e.to_string()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppError;
    use crate::sink::MemorySink;
    use kurbo::Point;
    use mindmate_core::input::MouseButton;
    use mindmate_core::notify::ToastQueue;
    use mindmate_core::screen::HistoryNavigator;
    use mindmate_core::style::Rgba;

    fn draw_line(screen: &mut DoodleScreen, from: Point, to: Point) {
        screen.handle_pointer_event(PointerEvent::Down {
            position: from,
            button: MouseButton::Left,
        });
        screen.handle_pointer_event(PointerEvent::Move { position: to });
        screen.handle_pointer_event(PointerEvent::Up {
            position: to,
            button: MouseButton::Left,
        });
    }

    #[test]
    fn test_defaults() {
        let screen = DoodleScreen::default();
        assert_eq!(screen.color().name, "Electric Mint");
        assert_eq!(screen.brush_size(), 3);
        assert_eq!(screen.surface().style(), StrokeStyle::default());
    }

    #[test]
    fn test_select_color() {
        let mut screen = DoodleScreen::default();
        screen.select_color("graphite").unwrap();
        assert_eq!(screen.color().name, "Graphite");
        assert_eq!(screen.surface().style().color(), Rgba::rgb(0x2E, 0x2E, 0x2E));
        assert_eq!(screen.surface().style().width(), 3);

        assert!(screen.select_color("Neon Orange").is_err());
        assert_eq!(screen.color().name, "Graphite");
    }

    #[test]
    fn test_set_brush_size() {
        let mut screen = DoodleScreen::default();
        screen.set_brush_size(8).unwrap();
        assert_eq!(screen.surface().style().width(), 8);

        assert!(screen.set_brush_size(0).is_err());
        assert!(screen.set_brush_size(11).is_err());
        assert_eq!(screen.brush_size(), 8);
    }

    #[test]
    fn test_draw_and_clear() {
        let mut screen = DoodleScreen::default();
        draw_line(&mut screen, Point::new(10.0, 10.0), Point::new(100.0, 10.0));
        assert!(!screen.surface().is_blank());
        assert_eq!(screen.surface().strokes().len(), 1);

        screen.clear();
        assert!(screen.surface().is_blank());
        assert!(screen.surface().strokes().is_empty());
    }

    #[test]
    fn test_back() {
        let screen = DoodleScreen::default();
        let mut navigator = HistoryNavigator::new(Screen::DoodleSpace);
        screen.back(&mut navigator);
        assert_eq!(navigator.current(), Screen::Dashboard);
    }

    #[test]
    fn test_save() {
        let mut screen = DoodleScreen::default();
        draw_line(&mut screen, Point::new(20.0, 20.0), Point::new(60.0, 60.0));

        let mut sink = MemorySink::default();
        let mut toasts = ToastQueue::new();
        let location = screen.save(&mut sink, &mut toasts).unwrap();

        assert_eq!(location, DOODLE_FILE_NAME);
        let png = sink.get(DOODLE_FILE_NAME).unwrap();
        let decoded = image::load_from_memory(png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (320, 400));
        assert_eq!(toasts.last().unwrap().title, "Doodle Saved");
    }

    #[test]
    fn test_save_uninitialized() {
        let screen = DoodleScreen::new(SurfaceConfig::default().with_size(0, 0));
        let mut sink = MemorySink::default();
        let mut toasts = ToastQueue::new();

        let result = screen.save(&mut sink, &mut toasts);
        assert!(matches!(result, Err(AppError::Surface(_))));
        assert!(sink.is_empty());
        assert_eq!(toasts.last().unwrap().title, "Save Failed");
    }
}
