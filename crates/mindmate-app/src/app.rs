//! Application configuration and errors.

use mindmate_render::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, SurfaceConfig, SurfaceError};
use std::path::PathBuf;
use thiserror::Error;

use crate::sink::SinkError;

/// File name used when saving a doodle.
pub const DOODLE_FILE_NAME: &str = "mindful-doodle.png";

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Where saved doodles are written.
    pub output_dir: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "MindMate".to_string(),
            output_dir: PathBuf::from("."),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Build a config from command-line arguments (program name excluded).
    /// The first argument, if any, is the output directory.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(dir) = args.into_iter().next() {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    /// Surface settings for the doodle canvas.
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig::default().with_size(self.canvas_width, self.canvas_height)
    }
}
