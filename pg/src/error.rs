//! Page generation error types

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which input file an I/O failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// The YAML document holding the message
    Document,
    /// The HTML template holding the placeholder
    Template,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "YAML"),
            Self::Template => write!(f, "Template"),
        }
    }
}

/// Errors that can occur while generating a page
///
/// Every variant is terminal: the run stops at the first one.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Could not fetch the YAML file from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{role} file not found at '{}'", .path.display())]
    NotFound { role: FileRole, path: PathBuf },

    #[error("Could not read {role} file at '{}'", .path.display())]
    Read {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse the YAML file")]
    Parse(#[from] serde_yaml::Error),

    #[error("'{key}' key not found in the YAML file")]
    MissingField { key: String },

    #[error("Could not write the output file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid usage: {0}")]
    Usage(String),
}

impl PageError {
    /// Pipeline stage that produced this error
    pub fn stage(&self) -> &'static str {
        match self {
            PageError::Fetch { .. } => "fetch",
            PageError::NotFound { .. } | PageError::Read { .. } => "read",
            PageError::Parse(_) | PageError::MissingField { .. } => "parse",
            PageError::Write { .. } => "write",
            PageError::Usage(_) => "usage",
        }
    }

    /// Classify an I/O error from reading one of the input files
    pub(crate) fn from_read(role: FileRole, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            PageError::NotFound { role, path }
        } else {
            PageError::Read { role, path, source }
        }
    }
}
