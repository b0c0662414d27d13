//! Memoized catalog loading.
//!
//! A [`CatalogGateway`] loads its source at most once. Callers that arrive
//! while the first load is still pending wait on the same initialization
//! instead of issuing their own request, and a failure is remembered just
//! like a success. Dropping the gateway (or calling [`CatalogGateway::reset`])
//! is the only way to load again.

use std::sync::Arc;
use std::time::Instant;

use ccg_catalog::{
    CanonicalGameRecord, CategoryHint, LoadSummary, PageStatus, PresentationRow, RawGameRecord,
    UnknownCategory, find_by_id, match_category, normalize_all, present, search,
};
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::LoadError;
use crate::source::CatalogSource;

/// A normalized catalog snapshot, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub records: Vec<CanonicalGameRecord>,
    pub summary: LoadSummary,
    /// Where the document came from.
    pub source: String,
}

impl LoadedCatalog {
    /// Genre or collection page: resolve the hint, match, sort, project.
    pub fn category_rows(&self, hint: CategoryHint<'_>) -> Result<Vec<PresentationRow>, UnknownCategory> {
        let key = hint.resolve()?;
        Ok(present(match_category(&self.records, key)))
    }

    /// Complete A–Z index, optionally narrowed by a search term.
    pub fn index_rows(&self, term: Option<&str>) -> Vec<PresentationRow> {
        present(search(&self.records, term.unwrap_or_default()))
    }

    /// Single game page.
    pub fn game(&self, id: &str) -> Option<&CanonicalGameRecord> {
        find_by_id(&self.records, id)
    }
}

/// Turn a document into a catalog. The document must be a JSON array.
pub fn decode_catalog(value: Value, source: impl Into<String>) -> Result<LoadedCatalog, LoadError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::format(format!(
                "expected a JSON array of games, found {}",
                json_kind(&other)
            )));
        }
    };
    let raws: Vec<RawGameRecord> = items.into_iter().map(RawGameRecord::from_value).collect();
    let normalized = normalize_all(&raws);
    Ok(LoadedCatalog {
        records: normalized.records,
        summary: normalized.summary,
        source: source.into(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loads a catalog once and hands the same result to every caller.
pub struct CatalogGateway<S> {
    source: S,
    cell: OnceCell<Result<Arc<LoadedCatalog>, LoadError>>,
}

impl<S: CatalogSource> CatalogGateway<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the catalog, or return the result of the load that already ran
    /// (or is running).
    pub async fn load_catalog(&self) -> Result<Arc<LoadedCatalog>, LoadError> {
        if self.cell.initialized() {
            log::debug!("Catalog cache hit for {}", self.source.describe());
        }
        self.cell.get_or_init(|| self.load_uncached()).await.clone()
    }

    /// The settled result, if a load has finished.
    pub fn cached(&self) -> Option<&Result<Arc<LoadedCatalog>, LoadError>> {
        self.cell.get()
    }

    /// Forget the cached result. Requires exclusive access, so no load can be
    /// in flight.
    pub fn reset(&mut self) {
        self.cell.take();
    }

    async fn load_uncached(&self) -> Result<Arc<LoadedCatalog>, LoadError> {
        let location = self.source.describe();
        let start = Instant::now();
        log::debug!("Loading catalog from {location}");

        let result = self
            .source
            .fetch()
            .await
            .and_then(|value| decode_catalog(value, location.clone()));

        match &result {
            Ok(catalog) => log::debug!(
                "Loaded {} of {} catalog entries from {location} in {:.2?}",
                catalog.summary.loaded,
                catalog.summary.total,
                start.elapsed(),
            ),
            Err(e) => log::debug!("Could not load catalog from {location}: {e}"),
        }

        result.map(Arc::new)
    }
}

impl From<&LoadError> for PageStatus {
    fn from(_: &LoadError) -> Self {
        PageStatus::LoadFailed
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
