use ccg_catalog::CategoryHint;

use crate::cli_types::{CategoryArgs, OutputFormat};
use crate::commands::load_catalog;
use crate::error::CliError;
use crate::render::print_rows;
use crate::settings::Settings;

pub(crate) fn run_genre(
    settings: &Settings,
    format: OutputFormat,
    args: &CategoryArgs,
) -> Result<(), CliError> {
    let hint = if args.slug {
        CategoryHint::Slug(&args.category)
    } else if args.key {
        CategoryHint::Key(&args.category)
    } else {
        CategoryHint::Label(&args.category)
    };

    // An unconfigured category is reported before anything is fetched.
    let key = hint.resolve()?;
    log::debug!("'{}' resolved to category key '{key}'", args.category);

    let catalog = load_catalog(settings)?;
    let rows = catalog.category_rows(CategoryHint::Key(key.as_str()))?;
    print_rows(key.display_name(), &rows, format, &settings.detail_base)
}
