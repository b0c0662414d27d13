use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ccg_catalog::PageStatus;

use crate::cli_types::OutputFormat;
use crate::commands::load_catalog;
use crate::error::CliError;
use crate::render::print_field;
use crate::settings::Settings;

pub(crate) fn run_game(settings: &Settings, format: OutputFormat, id: &str) -> Result<(), CliError> {
    let catalog = load_catalog(settings)?;
    let game = catalog
        .game(id)
        .ok_or_else(|| {
            CliError::Page(PageStatus::GameNotFound {
                id: id.trim().to_string(),
            })
        })?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(game)?);
        return Ok(());
    }

    log::info!("{}", game.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    print_field("id", &game.id);
    print_field("genres", &game.category_labels.join(", "));
    for (label, value) in [
        ("year", &game.year),
        ("developer", &game.developer),
        ("publisher", &game.publisher),
        ("composer", &game.composer),
        ("system", &game.system),
    ] {
        print_field(label, value.as_deref().unwrap_or_default());
    }
    print_field("thumbnail", &game.thumbnail_url);
    print_field("video", &game.video_url);
    print_field("manual", &game.manual_url);
    print_field("download", &game.download_url);
    for extra in game.download_urls.iter().skip(1) {
        print_field("", extra);
    }
    for lemon in &game.lemon_urls {
        print_field("lemon64", lemon);
    }
    Ok(())
}
