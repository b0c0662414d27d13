//! Ordering and projection into renderer-ready rows.
//!
//! No markup is produced here: a [`PresentationRow`] is plain data that a DOM
//! builder, a template, or the CLI turns into cards or table rows.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::category::UnknownCategory;
use crate::types::CanonicalGameRecord;

/// Optional facts shown next to a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub year: Option<String>,
    pub system: Option<String>,
    pub developer: Option<String>,
}

impl Badges {
    /// Present badges in display order: year, system, developer.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.year, &self.system, &self.developer]
            .into_iter()
            .filter_map(|b| b.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Everything a renderer needs to draw one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationRow {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub badges: Badges,
    pub video_url: String,
    pub download_url: String,
    pub manual_url: String,
}

impl PresentationRow {
    /// Link to the game's detail page.
    ///
    /// The base is page-relative and belongs to the caller (for example
    /// `../game.html?id=`); the id is query-encoded.
    pub fn detail_href(&self, base: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(self.id.as_bytes()).collect();
        format!("{base}{encoded}")
    }
}

impl From<&CanonicalGameRecord> for PresentationRow {
    fn from(record: &CanonicalGameRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            badges: Badges {
                year: record.year.clone(),
                system: record.system.clone(),
                developer: record.developer.clone(),
            },
            video_url: record.video_url.clone(),
            download_url: record.download_url.clone(),
            manual_url: record.manual_url.clone(),
        }
    }
}

/// Case- and accent-insensitive collation key: "Éxodus" sorts with "exodus".
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Total order used by every listing: collation key, then id.
///
/// Records with equal keys are ordered by id whatever their input order.
pub fn compare_records(a: &CanonicalGameRecord, b: &CanonicalGameRecord) -> Ordering {
    collation_key(&a.sort_key)
        .cmp(&collation_key(&b.sort_key))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort records and project them into rows.
pub fn present<'a, I>(records: I) -> Vec<PresentationRow>
where
    I: IntoIterator<Item = &'a CanonicalGameRecord>,
{
    let mut keyed: Vec<(String, &CanonicalGameRecord)> = records
        .into_iter()
        .map(|r| (collation_key(&r.sort_key), r))
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.id.cmp(&b.id)));
    keyed.into_iter().map(|(_, r)| PresentationRow::from(r)).collect()
}

// ── Page status ─────────────────────────────────────────────────────────────

/// The short status line a page shows above (or instead of) its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loaded { count: usize },
    /// A valid category that simply has no games yet.
    NoMatches,
    UnknownCategory { hint: String },
    GameNotFound { id: String },
    LoadFailed,
}

impl PageStatus {
    /// Status for a finished listing.
    pub fn for_rows(rows: &[PresentationRow]) -> Self {
        if rows.is_empty() {
            Self::NoMatches
        } else {
            Self::Loaded { count: rows.len() }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. } | Self::GameNotFound { .. } | Self::LoadFailed
        )
    }
}

impl From<UnknownCategory> for PageStatus {
    fn from(e: UnknownCategory) -> Self {
        Self::UnknownCategory { hint: e.hint }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { count: 1 } => write!(f, "Loaded 1 game."),
            Self::Loaded { count } => write!(f, "Loaded {count} games."),
            Self::NoMatches => write!(f, "No games found for this category."),
            Self::UnknownCategory { hint } if hint.is_empty() => {
                write!(f, "This page has no category configured.")
            }
            Self::UnknownCategory { hint } => write!(f, "Category not configured: {hint}"),
            Self::GameNotFound { id } => write!(f, "Game not found: {id}"),
            Self::LoadFailed => write!(f, "Could not load game data."),
        }
    }
}

#[cfg(test)]
#[path = "tests/present_tests.rs"]
mod tests;
