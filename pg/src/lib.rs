//! pagegen - render a YAML message into an HTML template
//!
//! Fetches a small YAML document (a mapping with a `message` key) from a URL or a
//! local file, then substitutes that message for every `{{MESSAGE}}` placeholder
//! in a template and writes the page to disk.
//!
//! # Pipeline
//!
//! ```text
//! SourceDescriptor ──► TextSource::load ──► MessageDocument ──► Template::render ──► RenderedPage::write_to
//!  (url | path)         (remote | local)     ("message" key)     ({{MESSAGE}})         (output file)
//! ```
//!
//! Every stage either hands its output to the next one or stops the run with a
//! [`PageError`]. Nothing is written until the page is fully rendered in memory.
//!
//! # Example
//!
//! ```ignore
//! use pagegen::{FetchConfig, SourceDescriptor, generate_page};
//!
//! let source = SourceDescriptor::parse("message.yml")?.into_source(&FetchConfig::default());
//! let summary = generate_page(source.as_ref(), "template.html".as_ref(), "index.html".as_ref())?;
//! println!("{} placeholder(s) replaced", summary.replacements);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod source;

pub use config::{Config, FetchConfig};
pub use document::{MessageDocument, extract_message};
pub use error::{FileRole, PageError};
pub use pipeline::{PageSummary, generate_page};
pub use render::{RenderedPage, Template};
pub use source::{LocalSource, RemoteSource, SourceDescriptor, TextSource};

/// Placeholder token replaced by the message
pub const PLACEHOLDER: &str = "{{MESSAGE}}";

/// Document key holding the message
pub const MESSAGE_KEY: &str = "message";
