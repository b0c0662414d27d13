//! ccg CLI
//!
//! Command-line browser for the Cheeky Commodore Gamer game catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod render;
mod settings;

use clap::Parser;

use ccg_catalog::PageStatus;

use cli_types::{Cli, Commands};
use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose, cli.format);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let format = cli.format;

    match cli.command {
        Commands::Config { action } => commands::config::run_config(&action, cli.source),
        Commands::Genre { category } => {
            let settings = Settings::load(cli.source)?;
            commands::genre::run_genre(&settings, format, &category)
        }
        Commands::Index { search } => {
            let settings = Settings::load(cli.source)?;
            commands::index::run_index(&settings, format, search.as_deref())
        }
        Commands::Game { id } => {
            let settings = Settings::load(cli.source)?;
            commands::game::run_game(&settings, format, &id)
        }
        Commands::Categories { offline } => {
            let settings = Settings::load(cli.source)?;
            commands::categories::run_categories(&settings, format, offline)
        }
    }
}

fn report(e: &CliError) {
    match e {
        CliError::Load(load) => {
            log::error!("{}", PageStatus::from(load));
            log::error!("  {load}");
        }
        other => log::error!("{other}"),
    }
}
