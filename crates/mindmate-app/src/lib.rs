//! MindMate Application
//!
//! The host shell: the doodle screen that ties the drawing surface to
//! navigation and notifications, file sinks for saved images, and
//! configuration.

mod app;
mod doodle;
mod sink;

pub use app::{AppConfig, AppError, AppResult, DOODLE_FILE_NAME};
pub use doodle::DoodleScreen;
pub use sink::{DirectorySink, FileSink, MemorySink, SinkError, SinkResult};
