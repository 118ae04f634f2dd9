//! Text sources for the YAML document
//!
//! A [`TextSource`] yields the raw document text, either from a local file or
//! over HTTP. [`SourceDescriptor`] decides which one a command-line argument
//! names.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::config::FetchConfig;
use crate::error::PageError;

mod local;
mod remote;

pub use local::LocalSource;
pub(crate) use local::read_text;
pub use remote::RemoteSource;

/// Something that can produce the raw text of a YAML document
pub trait TextSource {
    /// Human-readable location (URL or path) for progress output
    fn location(&self) -> String;

    /// Whether this source goes over the network
    fn is_remote(&self) -> bool;

    /// Read the full text, unmodified
    fn load(&self) -> Result<String, PageError>;
}

/// Where the YAML document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// An http:// or https:// URL
    Remote(String),
    /// A path on the local filesystem
    Local(PathBuf),
}

impl SourceDescriptor {
    /// Classify a command-line source argument
    pub fn parse(descriptor: &str) -> Result<Self, PageError> {
        debug!(%descriptor, "SourceDescriptor::parse: called");
        if descriptor.trim().is_empty() {
            debug!("SourceDescriptor::parse: empty descriptor");
            return Err(PageError::Usage("source must not be empty".to_string()));
        }

        if has_http_scheme(descriptor) {
            debug!("SourceDescriptor::parse: matched remote");
            Ok(Self::Remote(descriptor.to_string()))
        } else {
            debug!("SourceDescriptor::parse: matched local");
            Ok(Self::Local(PathBuf::from(descriptor)))
        }
    }

    /// Build the matching source implementation
    pub fn into_source(self, fetch: &FetchConfig) -> Box<dyn TextSource> {
        match self {
            Self::Remote(url) => Box::new(RemoteSource::new(url, fetch.clone())),
            Self::Local(path) => Box::new(LocalSource::new(path)),
        }
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn has_http_scheme(descriptor: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        descriptor
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
