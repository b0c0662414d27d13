use clap::CommandFactory;

use super::*;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_genre_defaults_to_label() {
    let cli = Cli::try_parse_from(["ccg", "genre", "Role-Playing Games"]).unwrap();
    let Commands::Genre { category } = cli.command else {
        panic!("expected genre");
    };
    assert_eq!(category.category, "Role-Playing Games");
    assert!(!category.slug);
    assert!(!category.key);
    assert!(cli.format == OutputFormat::Text);
}

#[test]
fn test_slug_and_key_conflict() {
    assert!(Cli::try_parse_from(["ccg", "genre", "rpg", "--slug", "--key"]).is_err());
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "ccg",
        "index",
        "--search",
        "zool",
        "--format",
        "json",
        "-s",
        "site/games.json",
    ])
    .unwrap();
    assert_eq!(cli.source.as_deref(), Some("site/games.json"));
    assert!(cli.format == OutputFormat::Json);
    let Commands::Index { search } = cli.command else {
        panic!("expected index");
    };
    assert_eq!(search.as_deref(), Some("zool"));
}

#[test]
fn test_config_set_source() {
    let cli = Cli::try_parse_from(["ccg", "config", "set-source", "https://example.org/games.json"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config { action: ConfigAction::SetSource { ref location } }
            if location == "https://example.org/games.json"
    ));
}
