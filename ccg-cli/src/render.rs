//! Plain-text and JSON rendering of presentation rows.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use ccg_catalog::{PageStatus, PresentationRow};

use crate::cli_types::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    row: &'a PresentationRow,
    detail_href: String,
}

#[derive(Serialize)]
struct JsonListing<'a> {
    heading: &'a str,
    status: String,
    rows: Vec<JsonRow<'a>>,
}

/// Print a listing with its heading and status line.
pub(crate) fn print_rows(
    heading: &str,
    rows: &[PresentationRow],
    format: OutputFormat,
    detail_base: &str,
) -> Result<(), CliError> {
    let status = PageStatus::for_rows(rows);

    if format == OutputFormat::Json {
        let listing = JsonListing {
            heading,
            status: status.to_string(),
            rows: rows
                .iter()
                .map(|row| JsonRow {
                    row,
                    detail_href: row.detail_href(detail_base),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    for row in rows {
        print_row(row, detail_base);
    }
    if !rows.is_empty() {
        log::info!("");
    }
    log::info!("{status}");
    Ok(())
}

fn print_row(row: &PresentationRow, detail_base: &str) {
    let badges: Vec<&str> = row.badges.iter().collect();
    let meta = if badges.is_empty() {
        String::new()
    } else {
        format!("  ({})", badges.join(" \u{2022} "))
    };

    log::info!(
        "  {}{}",
        row.title.if_supports_color(Stdout, |t| t.bold()),
        meta.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "    {}",
        row.detail_href(detail_base)
            .if_supports_color(Stdout, |t| t.cyan())
    );

    let mut links = Vec::new();
    if !row.video_url.is_empty() {
        links.push("video");
    }
    if !row.download_url.is_empty() {
        links.push("download");
    }
    if !row.manual_url.is_empty() {
        links.push("manual");
    }
    if !links.is_empty() {
        log::info!(
            "    {}",
            links.join(", ").if_supports_color(Stdout, |t| t.green())
        );
    }
}

/// One `label: value` line of a detail view; empty values print as `-`.
pub(crate) fn print_field(label: &str, value: &str) {
    let shown = if value.is_empty() { "-" } else { value };
    let label = if label.is_empty() {
        format!("{:<10}", "")
    } else {
        format!("{:<10}", format!("{label}:"))
    };
    log::info!(
        "  {} {}",
        label.if_supports_color(Stdout, |t| t.dimmed()),
        shown
    );
}
