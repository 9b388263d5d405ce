use super::SnapshotStore;
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A snapshot kept in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(BookError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn read_snapshot(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(BookError::SnapshotNotFound(self.path.clone()));
        }
        fs::read_to_string(&self.path).map_err(BookError::Io)
    }

    fn write_snapshot(&self, content: &str) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("book");
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        // Atomic write
        fs::write(&tmp_path, content).map_err(BookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
