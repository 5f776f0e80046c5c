use std::fs;
use std::path::{Path, PathBuf};

use super::StateBackend;
use crate::error::{KardexError, Result};

/// Production backend: one data file, rewritten in full on every mutation.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path).map_err(KardexError::Io)?;
        Ok(Some(text))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(KardexError::Io)?;
            }
        }
        fs::write(&self.path, text).map_err(KardexError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_reads_as_no_state() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("inventory.json"));
        assert_eq!(backend.read().unwrap(), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("inventory.json");
        let mut backend = FileBackend::new(&path);

        backend.write("[]").unwrap();
        assert!(path.exists());
        assert_eq!(backend.read().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn write_overwrites_in_full() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::new(dir.path().join("inventory.json"));

        backend.write("first, longer contents").unwrap();
        backend.write("[]").unwrap();
        assert_eq!(backend.read().unwrap(), Some("[]".to_string()));
    }
}
