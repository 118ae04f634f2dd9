//! YAML message document
//!
//! The document is a mapping; only its `message` key is read. Values that are
//! absent or falsy (null, `false`, zero, empty string or collection) count as
//! missing. Non-zero numbers and `true` are turned into their YAML text. A
//! non-empty sequence or mapping has no text form and also counts as missing.

use serde_yaml::Value;
use tracing::debug;

use crate::MESSAGE_KEY;
use crate::error::PageError;

/// A parsed YAML document that should carry a message
#[derive(Debug, Clone)]
pub struct MessageDocument {
    root: Value,
}

impl MessageDocument {
    /// Parse raw YAML text
    pub fn parse(text: &str) -> Result<Self, PageError> {
        debug!(len = text.len(), "MessageDocument::parse: called");
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self { root })
    }

    /// Extract the message as non-empty text
    pub fn message(&self) -> Result<String, PageError> {
        let missing = || PageError::MissingField {
            key: MESSAGE_KEY.to_string(),
        };

        let value = match self.root.get(MESSAGE_KEY) {
            Some(v) => v,
            None => {
                debug!("MessageDocument::message: key absent or root is not a mapping");
                return Err(missing());
            }
        };

        match scalar_text(value) {
            Some(text) => {
                debug!(%text, "MessageDocument::message: found");
                Ok(text)
            }
            None => {
                debug!(?value, "MessageDocument::message: value is not usable text");
                Err(missing())
            }
        }
    }
}

/// Parse `text` and pull out its message in one step
pub fn extract_message(text: &str) -> Result<String, PageError> {
    MessageDocument::parse(text)?.message()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if !is_zero(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

fn is_zero(n: &serde_yaml::Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}
