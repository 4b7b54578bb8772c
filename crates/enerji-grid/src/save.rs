//! Delivery of export artifacts.
//!
//! The serializer does no I/O. A host hands the resulting [`ExportArtifact`] to a
//! [`SaveTarget`], which persists or delivers it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GridError, Result};
use crate::export::ExportArtifact;

/// A place that can receive exported files.
pub trait SaveTarget {
    /// Persists the artifact and returns where it went.
    fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory, creating it when needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl SaveTarget for DirectorySink {
    fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| GridError::Save {
            path: self.dir.clone(),
            source,
        })?;

        // Only the final component of the suggested name is used.
        let file_name = Path::new(&artifact.file_name)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(crate::export::DEFAULT_FILE_NAME));
        let path = self.dir.join(file_name);

        fs::write(&path, artifact.content.as_bytes()).map_err(|source| GridError::Save {
            path: path.clone(),
            source,
        })?;
        log::debug!("saved {} bytes to {}", artifact.content.len(), path.display());
        Ok(path)
    }
}
