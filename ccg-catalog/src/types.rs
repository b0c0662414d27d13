//! Data model types for the game catalog.
//!
//! [`RawGameRecord`] mirrors one entry of the site's `games.json` exactly as
//! it arrives: every field optional, every field allowed to hold whatever JSON
//! shape a past revision of the file used. [`CanonicalGameRecord`] is the one
//! shape the rest of the engine works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Loose field values ──────────────────────────────────────────────────────

/// A JSON field whose shape is not trusted.
///
/// Deserialization never fails: anything that is not a string, a number or an
/// array lands in [`LooseField::Other`] and reads as empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseField {
    Text(String),
    Number(serde_json::Number),
    List(Vec<Value>),
    Other(Value),
}

impl LooseField {
    /// Every usable text entry, trimmed, in document order.
    ///
    /// A bare string or number is a one-element sequence. Blank strings and
    /// nested objects are skipped.
    pub fn texts(&self) -> Vec<String> {
        match self {
            Self::Text(s) => non_blank(s).into_iter().collect(),
            Self::Number(n) => vec![n.to_string()],
            Self::List(items) => items.iter().filter_map(scalar_text).collect(),
            Self::Other(_) => Vec::new(),
        }
    }

    /// The first usable text entry, if any.
    pub fn first_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => non_blank(s),
            Self::Number(n) => Some(n.to_string()),
            Self::List(items) => items.iter().find_map(scalar_text),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for LooseField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ── Raw record ──────────────────────────────────────────────────────────────

/// One untrusted entry of the catalog document.
///
/// Field names follow the JSON keys used across the site's history; camelCase
/// duplicates (`sortTitle`, `videoId`, ...) are kept as separate fields so the
/// normalizer can apply a fixed preference order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawGameRecord {
    pub id: Option<LooseField>,
    pub gameid: Option<LooseField>,

    pub title: Option<LooseField>,
    pub sorttitle: Option<LooseField>,
    #[serde(rename = "sortTitle")]
    pub sort_title: Option<LooseField>,

    pub genres: Option<LooseField>,
    pub genre: Option<LooseField>,
    pub tags: Option<LooseField>,
    pub collection: Option<LooseField>,
    pub collections: Option<LooseField>,

    pub thumbnail: Option<LooseField>,
    pub thumblink: Option<LooseField>,

    pub video: Option<LooseField>,
    #[serde(rename = "videoId")]
    pub video_id: Option<LooseField>,
    pub videoid: Option<LooseField>,

    pub disk: Option<LooseField>,
    #[serde(rename = "diskLinks")]
    pub disk_links: Option<LooseField>,
    pub d64: Option<LooseField>,
    pub tape: Option<LooseField>,
    pub tap: Option<LooseField>,
    pub t64: Option<LooseField>,
    pub cart: Option<LooseField>,
    pub crt: Option<LooseField>,
    pub prg: Option<LooseField>,

    pub pdf: Option<LooseField>,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<LooseField>,
    pub pdflink: Option<LooseField>,
    pub manual: Option<LooseField>,
    pub docs: Option<LooseField>,

    pub lemon: Option<LooseField>,
    #[serde(rename = "lemonUrl")]
    pub lemon_url: Option<LooseField>,

    pub year: Option<LooseField>,
    pub developer: Option<LooseField>,
    pub publisher: Option<LooseField>,
    pub composer: Option<LooseField>,
    pub system: Option<LooseField>,
}

impl RawGameRecord {
    /// Decode one catalog entry. Entries that are not JSON objects decode to
    /// an empty record, which the normalizer then rejects as invalid.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("Catalog entry is not an object: {e}");
                Self::default()
            }
        }
    }
}

// ── Canonical record ────────────────────────────────────────────────────────

/// A game entry after field normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalGameRecord {
    /// Never empty. Taken from `gameid`, falling back to `id`.
    pub id: String,
    /// Never empty. Falls back to `id` when the entry has no title.
    pub title: String,
    /// Ordering key: sort title, then title, then id.
    pub sort_key: String,
    /// Genre and collection labels in field-priority order. Index 0 is the
    /// primary genre.
    pub category_labels: Vec<String>,
    /// Empty when the entry has no thumbnail.
    pub thumbnail_url: String,
    /// Full watch URL, or empty.
    pub video_url: String,
    /// First entry of the highest-priority download field, or empty.
    pub download_url: String,
    /// Every entry of the field `download_url` came from.
    pub download_urls: Vec<String>,
    /// First entry of the highest-priority manual field, or empty.
    pub manual_url: String,
    /// Lemon64 page links.
    pub lemon_urls: Vec<String>,
    pub year: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub composer: Option<String>,
    pub system: Option<String>,
}

impl CanonicalGameRecord {
    /// The label callers treat as the record's main genre.
    pub fn primary_label(&self) -> Option<&str> {
        self.category_labels.first().map(String::as_str)
    }
}

/// Counts reported after normalizing a whole catalog document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Entries in the source array.
    pub total: usize,
    /// Entries kept.
    pub loaded: usize,
    /// Entries without a usable identity.
    pub skipped_invalid: usize,
    /// Entries dropped because an earlier entry had the same id.
    pub duplicate_ids: usize,
}

/// Normalized records plus the summary of how they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCatalog {
    pub records: Vec<CanonicalGameRecord>,
    pub summary: LoadSummary,
}
