use crate::cli_types::OutputFormat;
use crate::commands::load_catalog;
use crate::error::CliError;
use crate::render::print_rows;
use crate::settings::Settings;

pub(crate) fn run_index(
    settings: &Settings,
    format: OutputFormat,
    search: Option<&str>,
) -> Result<(), CliError> {
    let catalog = load_catalog(settings)?;
    let rows = catalog.index_rows(search);

    let heading = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => format!("Complete Index (matching \"{term}\")"),
        None => "Complete Index".to_string(),
    };
    print_rows(&heading, &rows, format, &settings.detail_base)
}
