//! Field normalization: raw catalog entries to [`CanonicalGameRecord`].
//!
//! Every optional field degrades to an empty value. The only hard requirement
//! is an identity (`gameid` or `id`); entries without one are rejected and
//! counted by [`normalize_all`].

use std::collections::HashSet;

use crate::types::{CanonicalGameRecord, LoadSummary, LooseField, NormalizedCatalog, RawGameRecord};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// A raw entry with neither a `gameid` nor an `id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("game record has no usable `gameid` or `id`")]
pub struct InvalidRecord;

/// Normalize one raw entry.
///
/// Pure: the same input always produces an equal record.
pub fn normalize(raw: &RawGameRecord) -> Result<CanonicalGameRecord, InvalidRecord> {
    let id = first_text([&raw.gameid, &raw.id]).ok_or(InvalidRecord)?;
    let title = first_text([&raw.title]).unwrap_or_else(|| id.clone());
    let sort_key = first_text([&raw.sorttitle, &raw.sort_title]).unwrap_or_else(|| title.clone());

    let download = first_populated(download_fields(raw));
    let manual = first_populated(manual_fields(raw));

    Ok(CanonicalGameRecord {
        category_labels: category_labels(raw),
        thumbnail_url: thumbnail_url(raw),
        video_url: video_url(raw),
        download_url: download.and_then(LooseField::first_text).unwrap_or_default(),
        download_urls: download.map(LooseField::texts).unwrap_or_default(),
        manual_url: manual.and_then(LooseField::first_text).unwrap_or_default(),
        lemon_urls: dedup_exact(all_texts([&raw.lemon, &raw.lemon_url])),
        year: first_text([&raw.year]),
        developer: first_text([&raw.developer]),
        publisher: first_text([&raw.publisher]),
        composer: first_text([&raw.composer]),
        system: first_text([&raw.system]),
        id,
        title,
        sort_key,
    })
}

/// Normalize a whole catalog.
///
/// Invalid entries are skipped and duplicate ids keep their first occurrence;
/// both are counted in the returned summary rather than failing the load.
pub fn normalize_all(raws: &[RawGameRecord]) -> NormalizedCatalog {
    let mut summary = LoadSummary {
        total: raws.len(),
        ..Default::default()
    };
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raws.len());

    for (index, raw) in raws.iter().enumerate() {
        let record = match normalize(raw) {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Skipping catalog entry {index}: {e}");
                summary.skipped_invalid += 1;
                continue;
            }
        };
        if !seen.insert(record.id.clone()) {
            log::debug!("Skipping catalog entry {index}: duplicate id '{}'", record.id);
            summary.duplicate_ids += 1;
            continue;
        }
        records.push(record);
    }

    summary.loaded = records.len();
    if summary.skipped_invalid > 0 {
        log::warn!(
            "Skipped {} catalog entries without a usable id",
            summary.skipped_invalid
        );
    }
    if summary.duplicate_ids > 0 {
        log::warn!("Dropped {} catalog entries with duplicate ids", summary.duplicate_ids);
    }

    NormalizedCatalog { records, summary }
}

// ── Field rules ─────────────────────────────────────────────────────────────

/// Labels from `genres`, `genre`, `tags`, `collection`, `collections`, in that
/// order, de-duplicated case-insensitively with the first spelling kept.
fn category_labels(raw: &RawGameRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    all_texts([
        &raw.genres,
        &raw.genre,
        &raw.tags,
        &raw.collection,
        &raw.collections,
    ])
    .into_iter()
    .filter(|label| seen.insert(label.to_lowercase()))
    .collect()
}

fn thumbnail_url(raw: &RawGameRecord) -> String {
    let Some(path) = first_text([&raw.thumbnail, &raw.thumblink]) else {
        return String::new();
    };
    let mut rest = path.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

/// A full URL in any video field wins over a bare YouTube id in another; a
/// bare id only becomes a watch URL when no field holds a URL.
fn video_url(raw: &RawGameRecord) -> String {
    let values: Vec<String> = [&raw.video, &raw.video_id, &raw.videoid]
        .into_iter()
        .filter_map(|field| first_text([field]))
        .collect();

    if let Some(url) = values.iter().find(|v| is_url(v)) {
        return url.clone();
    }
    values
        .iter()
        .find(|v| is_bare_token(v))
        .map(|id| format!("{YOUTUBE_WATCH_URL}{id}"))
        .unwrap_or_default()
}

/// Disk images, then tapes, then cartridges, then program files.
fn download_fields(raw: &RawGameRecord) -> [&Option<LooseField>; 9] {
    [
        &raw.disk,
        &raw.disk_links,
        &raw.d64,
        &raw.tape,
        &raw.tap,
        &raw.t64,
        &raw.cart,
        &raw.crt,
        &raw.prg,
    ]
}

/// PDFs, then manuals, then other docs.
fn manual_fields(raw: &RawGameRecord) -> [&Option<LooseField>; 5] {
    [&raw.pdf, &raw.pdf_url, &raw.pdflink, &raw.manual, &raw.docs]
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// The first field, scanning left to right, that holds any usable text.
fn first_populated<'a, const N: usize>(
    fields: [&'a Option<LooseField>; N],
) -> Option<&'a LooseField> {
    fields
        .into_iter()
        .flatten()
        .find(|field| field.first_text().is_some())
}

fn first_text<const N: usize>(fields: [&Option<LooseField>; N]) -> Option<String> {
    fields
        .into_iter()
        .flatten()
        .find_map(LooseField::first_text)
}

fn all_texts<const N: usize>(fields: [&Option<LooseField>; N]) -> Vec<String> {
    fields
        .into_iter()
        .flatten()
        .flat_map(LooseField::texts)
        .collect()
}

fn dedup_exact(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn is_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn is_bare_token(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
