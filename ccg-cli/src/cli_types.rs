//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ccg")]
#[command(about = "Browse the Cheeky Commodore Gamer game catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog location: an http(s) URL or a path to games.json
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Output format for listings
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// How the category argument should be interpreted.
#[derive(Args, Clone)]
pub(crate) struct CategoryArgs {
    /// Category label, file name or key (e.g., "Role-Playing Games", rpg.html, bpjs)
    pub category: String,

    /// Treat the argument as a page file name
    #[arg(long, conflicts_with = "key")]
    pub slug: bool,

    /// Treat the argument as a canonical key
    #[arg(long)]
    pub key: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the games of one genre or collection
    Genre {
        #[command(flatten)]
        category: CategoryArgs,
    },

    /// List every game, A to Z
    Index {
        /// Only show games whose title contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single game
    Game {
        /// Game id (the `id` or `gameid` field)
        id: String,
    },

    /// Show configured categories and how many games each has
    Categories {
        /// Only print the alias table; do not load the catalog
        #[arg(long)]
        offline: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Save the catalog location to the settings file
    SetSource {
        /// URL or path to games.json
        location: String,
    },

    /// Print the settings file path
    Path,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
