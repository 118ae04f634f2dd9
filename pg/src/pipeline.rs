//! The generate-page run: load, parse, render, write
//!
//! Progress lines go to stdout as each stage finishes. The first error ends the
//! run; the output file is only touched once the page is complete in memory.

use std::path::{Path, PathBuf};

use colored::*;
use tracing::{debug, info};

use crate::document::extract_message;
use crate::error::PageError;
use crate::render::Template;
use crate::source::TextSource;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub message: String,
    pub output: PathBuf,
    pub replacements: usize,
}

/// Generate `output` from the document behind `source` and the template at `template`
pub fn generate_page(source: &dyn TextSource, template: &Path, output: &Path) -> Result<PageSummary, PageError> {
    debug!(
        source = %source.location(),
        template = %template.display(),
        output = %output.display(),
        "generate_page: called"
    );

    if source.is_remote() {
        println!("Fetching YAML data from: {}", source.location());
    } else {
        println!("Reading YAML data from: {}", source.location());
    }
    let text = source.load()?;

    let message = extract_message(&text)?;
    println!("Successfully parsed message: '{}'", message);

    let template = Template::load(template)?;
    let page = template.render(&message);
    info!(replacements = page.replacements, "generate_page: template rendered");

    page.write_to(output)?;
    println!(
        "{} Successfully generated HTML file at: {}",
        "✓".green(),
        output.display().to_string().cyan()
    );

    Ok(PageSummary {
        message,
        output: output.to_path_buf(),
        replacements: page.replacements,
    })
}
