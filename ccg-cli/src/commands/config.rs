use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::ConfigAction;
use crate::error::CliError;
use crate::settings::{Settings, save_source, settings_path};

pub(crate) fn run_config(action: &ConfigAction, flag: Option<String>) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => run_config_show(flag),
        ConfigAction::SetSource { location } => run_config_set_source(location),
        ConfigAction::Path => {
            log::info!("{}", settings_path().display());
            Ok(())
        }
    }
}

fn run_config_show(flag: Option<String>) -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load(flag)?;

    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    let file_state = if path.exists() { "" } else { " (not created yet)" };
    log::info!("  File:        {}{file_state}", path.display());
    log::info!(
        "  Source:      {} {}",
        settings.source,
        format!("({})", settings.source_from).if_supports_color(Stdout, |t| t.dimmed())
    );
    log::info!(
        "  Detail base: {} {}",
        settings.detail_base,
        format!("({})", settings.detail_base_from).if_supports_color(Stdout, |t| t.dimmed())
    );
    match settings.timeout {
        Some(t) => log::info!("  Timeout:     {}s", t.as_secs()),
        None => log::info!(
            "  Timeout:     {}",
            "client default".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    Ok(())
}

fn run_config_set_source(location: &str) -> Result<(), CliError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(CliError::config("catalog location must not be empty"));
    }
    let path = save_source(location)?;
    log::info!(
        "{} Catalog source set to {location}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green())
    );
    log::info!("  Saved to {}", path.display());
    Ok(())
}
