use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use super::model::VideoProject;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Project store is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Project store is unavailable: {0}")]
    Unavailable(String),
    #[error("A project with id {0} already exists")]
    DuplicateId(String),
}

/// Whole-collection persistence for project records.
pub trait ProjectStore: Send + Sync {
    fn load(&self) -> Result<Vec<VideoProject>, StoreError>;
    fn save(&self, projects: &[VideoProject]) -> Result<(), StoreError>;
}

/// Keeps the collection as a JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectStore for JsonFileStore {
    fn load(&self) -> Result<Vec<VideoProject>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, projects: &[VideoProject]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let content = serde_json::to_string_pretty(projects)?;

        // Write next to the target so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!("Saved {} projects to {:?}", projects.len(), self.path);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    projects: Mutex<Vec<VideoProject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn load(&self) -> Result<Vec<VideoProject>, StoreError> {
        self.projects
            .lock()
            .map(|projects| projects.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn save(&self, projects: &[VideoProject]) -> Result<(), StoreError> {
        let mut stored = self
            .projects
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *stored = projects.to_vec();
        Ok(())
    }
}
