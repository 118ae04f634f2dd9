//! Template substitution and page output

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::PLACEHOLDER;
use crate::error::{FileRole, PageError};
use crate::source::read_text;

/// An HTML template holding zero or more `{{MESSAGE}}` placeholders
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    text: String,
}

impl Template {
    /// Read the whole template from disk
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PageError> {
        let path = path.into();
        debug!(path = %path.display(), "Template::load: called");
        let text = read_text(FileRole::Template, &path)?;
        Ok(Self { path, text })
    }

    /// Wrap template text that is already in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of placeholders in the template
    pub fn placeholder_count(&self) -> usize {
        self.text.matches(PLACEHOLDER).count()
    }

    /// Replace every placeholder with `message`, verbatim
    ///
    /// The message is not scanned again, so a message containing the
    /// placeholder token is inserted as-is.
    pub fn render(&self, message: &str) -> RenderedPage {
        let replacements = self.placeholder_count();
        debug!(replacements, "Template::render: called");
        if replacements == 0 {
            warn!(
                "Template '{}' has no {} placeholder, writing it unchanged",
                self.path.display(),
                PLACEHOLDER
            );
        }

        RenderedPage {
            html: self.text.replace(PLACEHOLDER, message),
            replacements,
        }
    }
}

/// Fully rendered page, held in memory until written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub replacements: usize,
}

impl RenderedPage {
    /// Write the page to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<(), PageError> {
        debug!(path = %path.display(), bytes = self.html.len(), "RenderedPage::write_to: called");
        fs::write(path, &self.html).map_err(|source| {
            debug!(error = %source, "RenderedPage::write_to: write failed");
            PageError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}
