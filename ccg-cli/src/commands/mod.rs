pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod game;
pub(crate) mod genre;
pub(crate) mod index;

use std::sync::Arc;

use ccg_gateway::{CatalogGateway, LoadedCatalog, Source};

use crate::error::CliError;
use crate::settings::Settings;

/// Load the catalog named by the settings.
pub(crate) fn load_catalog(settings: &Settings) -> Result<Arc<LoadedCatalog>, CliError> {
    let source = Source::from_location(&settings.source, settings.timeout)?;
    let gateway = CatalogGateway::new(source);

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let catalog = rt.block_on(gateway.load_catalog())?;

    let summary = &catalog.summary;
    log::debug!(
        "Catalog {}: {} entries, {} loaded, {} invalid, {} duplicate ids",
        catalog.source,
        summary.total,
        summary.loaded,
        summary.skipped_invalid,
        summary.duplicate_ids,
    );
    Ok(catalog)
}
