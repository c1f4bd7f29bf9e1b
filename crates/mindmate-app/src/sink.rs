//! File-save collaborators for exported images.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sink errors.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Receives exported files. Naming and location belong to the implementation.
pub trait FileSink {
    /// Store `data` under `name`, returning where it went.
    fn save(&mut self, name: &str, data: &[u8]) -> SinkResult<String>;
}

/// Writes files into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&mut self, name: &str, data: &[u8]) -> SinkResult<String> {
        let file_name = Path::new(name)
            .file_name()
            .filter(|f| f.len() == name.len())
            .ok_or_else(|| SinkError::InvalidName(name.to_string()))?;

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, data)?;
        log::info!("Wrote {} bytes to {:?}", data.len(), path);
        Ok(path.display().to_string())
    }
}

/// Keeps files in memory, for tests and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSink for MemorySink {
    fn save(&mut self, name: &str, data: &[u8]) -> SinkResult<String> {
        self.files.insert(name.to_string(), data.to_vec());
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_sink_writes_file() {
        let temp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(temp.path().join("out"));

        let location = sink.save("doodle.png", b"png").unwrap();
        assert!(location.ends_with("doodle.png"));
        assert_eq!(std::fs::read(temp.path().join("out/doodle.png")).unwrap(), b"png");
    }

    #[test]
    fn test_directory_sink_rejects_paths() {
        let temp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(temp.path());

        assert!(matches!(
            sink.save("../escape.png", b"x"),
            Err(SinkError::InvalidName(_))
        ));
        assert!(matches!(sink.save("", b"x"), Err(SinkError::InvalidName(_))));
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.save("a.png", &[1, 2, 3]).unwrap();
        assert_eq!(sink.get("a.png"), Some(&[1u8, 2, 3][..]));
        assert_eq!(sink.len(), 1);
    }
}
