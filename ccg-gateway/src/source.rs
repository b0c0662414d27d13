//! Where the catalog document comes from.
//!
//! The caller always names the location explicitly (a URL, a file, or an
//! already-parsed value); nothing here guesses page-relative paths.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::error::LoadError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A location that can produce the raw catalog document.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Short description of the location, for logs and status output.
    fn describe(&self) -> String;

    /// Fetch and parse the document. Called at most once per gateway.
    async fn fetch(&self) -> Result<Value, LoadError>;
}

/// Parse a response body or file contents as JSON.
pub fn parse_body(bytes: &[u8], location: &str) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes)
        .map_err(|e| LoadError::format(format!("{location} is not valid JSON: {e}")))
}

// ── HTTP ────────────────────────────────────────────────────────────────────

/// `GET` a catalog over HTTP(S).
pub struct HttpSource {
    http: reqwest::Client,
    url: reqwest::Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, LoadError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::network(format!("Could not build HTTP client: {e}")))?;
        Self::with_client(url, http)
    }

    pub fn with_client(url: &str, http: reqwest::Client) -> Result<Self, LoadError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| LoadError::network(format!("Invalid catalog URL '{url}': {e}")))?;
        Ok(Self { http, url })
    }
}

impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LoadError::network(format!("GET {} failed: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::http_status(status.as_u16(), self.url.as_str()));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| LoadError::network(format!("Reading {} failed: {e}", self.url)))?;
        parse_body(&bytes, self.url.as_str())
    }
}

// ── File ────────────────────────────────────────────────────────────────────

/// Read a catalog from the local filesystem (a checked-out copy of the site).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::network(format!("Reading {} failed: {e}", self.path.display())))?;
        parse_body(&bytes, &self.describe())
    }
}

// ── Inline ──────────────────────────────────────────────────────────────────

/// A document the caller already has in memory.
pub struct InlineSource {
    value: Value,
}

impl InlineSource {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl CatalogSource for InlineSource {
    fn describe(&self) -> String {
        "inline document".to_string()
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        Ok(self.value.clone())
    }
}

// ── Any ─────────────────────────────────────────────────────────────────────

/// One of the built-in sources, chosen from a location string.
pub enum Source {
    Http(HttpSource),
    File(FileSource),
    Inline(InlineSource),
}

impl Source {
    /// `http://` and `https://` locations are fetched; anything else is a
    /// file path.
    pub fn from_location(location: &str, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let source = HttpSource::with_timeout(trimmed, timeout.unwrap_or(DEFAULT_TIMEOUT))?;
            Ok(Self::Http(source))
        } else {
            Ok(Self::File(FileSource::new(trimmed)))
        }
    }
}

impl CatalogSource for Source {
    fn describe(&self) -> String {
        match self {
            Self::Http(s) => s.describe(),
            Self::File(s) => s.describe(),
            Self::Inline(s) => s.describe(),
        }
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        match self {
            Self::Http(s) => s.fetch().await,
            Self::File(s) => s.fetch().await,
            Self::Inline(s) => s.fetch().await,
        }
    }
}
