use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use ccg_catalog::{CATEGORIES, CategoryCounts, CategoryKey, category_counts};

use crate::cli_types::OutputFormat;
use crate::commands::load_catalog;
use crate::error::CliError;
use crate::settings::Settings;

#[derive(Serialize)]
struct JsonCategory {
    key: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<usize>,
}

pub(crate) fn run_categories(
    settings: &Settings,
    format: OutputFormat,
    offline: bool,
) -> Result<(), CliError> {
    let counts = if offline {
        None
    } else {
        let catalog = load_catalog(settings)?;
        Some(category_counts(&catalog.records))
    };

    if format == OutputFormat::Json {
        print_json(counts.as_ref())?;
    } else {
        print_text(counts.as_ref());
    }
    Ok(())
}

fn print_json(counts: Option<&CategoryCounts>) -> Result<(), CliError> {
    let categories: Vec<JsonCategory> = CATEGORIES
        .iter()
        .map(|def| JsonCategory {
            key: def.key,
            display_name: def.display_name,
            aliases: def.aliases,
            games: counts.map(|c| count_for(c, def.key)),
        })
        .collect();

    match counts {
        Some(counts) => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "categories": categories,
                "unresolved": counts.unresolved,
                "uncategorized": counts.uncategorized,
            }))?
        ),
        None => println!("{}", serde_json::to_string_pretty(&categories)?),
    }
    Ok(())
}

fn print_text(counts: Option<&CategoryCounts>) {
    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    for def in CATEGORIES {
        let games = match counts {
            Some(c) => format!("{:>5}  ", count_for(c, def.key)),
            None => String::new(),
        };
        let key = format!("{:<12}", def.key);
        log::info!(
            "  {}{} {}",
            games,
            key.if_supports_color(Stdout, |t| t.cyan()),
            def.display_name
        );
        log::info!(
            "  {}{:<12} {}",
            " ".repeat(games.len()),
            "",
            def.aliases
                .join(", ")
                .if_supports_color(Stdout, |t| t.dimmed())
        );
    }

    let Some(counts) = counts else {
        return;
    };
    log::info!("");
    if counts.uncategorized > 0 {
        log::info!("{} games have no genre or collection.", counts.uncategorized);
    }
    for (label, n) in &counts.unresolved {
        log::warn!("Label \"{label}\" on {n} game(s) is not a configured category");
    }
}

fn count_for(counts: &CategoryCounts, key: &str) -> usize {
    CategoryKey::from_canonical(key)
        .and_then(|k| counts.by_key.get(&k))
        .copied()
        .unwrap_or(0)
}
