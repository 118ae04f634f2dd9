//! HTTP source
//!
//! A single blocking GET. Transport failures and non-success statuses are both
//! reported as [`PageError::Fetch`]; there are no retries.

use reqwest::blocking::Client;
use tracing::debug;

use super::TextSource;
use crate::config::FetchConfig;
use crate::error::PageError;

/// Fetches the YAML document from an http(s) URL
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    config: FetchConfig,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, config: FetchConfig) -> Self {
        Self { url: url.into(), config }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_error(&self, source: reqwest::Error) -> PageError {
        PageError::Fetch {
            url: self.url.clone(),
            source,
        }
    }

    fn client(&self) -> Result<Client, PageError> {
        Client::builder()
            .timeout(self.config.timeout())
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(|e| self.fetch_error(e))
    }
}

impl TextSource for RemoteSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn is_remote(&self) -> bool {
        true
    }

    fn load(&self) -> Result<String, PageError> {
        debug!(url = %self.url, "RemoteSource::load: called");
        let client = self.client()?;

        debug!("RemoteSource::load: sending HTTP request");
        let response = match client.get(&self.url).send() {
            Ok(r) => {
                debug!(status = %r.status(), "RemoteSource::load: HTTP response received");
                r
            }
            Err(e) => {
                debug!(%e, "RemoteSource::load: HTTP request failed");
                return Err(self.fetch_error(e));
            }
        };

        let response = response.error_for_status().map_err(|e| {
            debug!(%e, "RemoteSource::load: HTTP error status");
            self.fetch_error(e)
        })?;

        let body = response.text().map_err(|e| {
            debug!(%e, "RemoteSource::load: failed to read response body");
            self.fetch_error(e)
        })?;

        debug!(body_len = body.len(), "RemoteSource::load: response body read");
        Ok(body)
    }
}
