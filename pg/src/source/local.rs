//! Local file source

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TextSource;
use crate::error::{FileRole, PageError};

/// Reads the YAML document from the filesystem
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for LocalSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn is_remote(&self) -> bool {
        false
    }

    fn load(&self) -> Result<String, PageError> {
        read_text(FileRole::Document, &self.path)
    }
}

/// Read a whole file as UTF-8 text, tagging failures with the file's role
pub(crate) fn read_text(role: FileRole, path: &Path) -> Result<String, PageError> {
    debug!(%role, path = %path.display(), "read_text: called");
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(len = text.len(), "read_text: file read");
            Ok(text)
        }
        Err(e) => {
            debug!(error = %e, "read_text: read failed");
            Err(PageError::from_read(role, path, e))
        }
    }
}
