use std::collections::HashMap;

use ccg_catalog::category::{ALIAS_TABLE_VERSION, clean_label};
use ccg_catalog::{CATEGORIES, CategoryHint, CategoryKey, resolve_key, resolve_slug};

fn resolved(label: &str) -> Option<&'static str> {
    resolve_key(label).map(|k| k.as_str())
}

#[test]
fn table_has_nineteen_keys() {
    assert_eq!(ALIAS_TABLE_VERSION, 1);
    assert_eq!(CATEGORIES.len(), 19);
    assert_eq!(CategoryKey::all().count(), 19);
}

#[test]
fn every_key_has_an_alias() {
    for def in CATEGORIES {
        assert!(!def.aliases.is_empty(), "{} has no aliases", def.key);
    }
}

#[test]
fn every_alias_maps_to_exactly_one_key() {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for def in CATEGORIES {
        for spelling in std::iter::once(&def.key).chain(def.aliases.iter()) {
            if let Some(previous) = owners.insert(*spelling, def.key) {
                panic!("'{spelling}' belongs to both {previous} and {}", def.key);
            }
        }
    }
}

#[test]
fn every_alias_and_key_resolves_to_its_own_key() {
    for def in CATEGORIES {
        assert_eq!(resolved(def.key), Some(def.key));
        for alias in def.aliases {
            assert_eq!(resolved(alias), Some(def.key), "alias '{alias}'");
        }
    }
}

#[test]
fn aliases_are_stored_cleaned() {
    for def in CATEGORIES {
        for alias in def.aliases {
            assert_eq!(clean_label(alias), *alias, "alias '{alias}' is not in cleaned form");
            assert!(!alias.starts_with("c64 "), "alias '{alias}' keeps the c64 prefix");
        }
    }
}

#[test]
fn display_names_resolve_back() {
    for key in CategoryKey::all() {
        assert_eq!(resolve_key(key.display_name()), Some(key), "{key}");
    }
}

#[test]
fn bpjs_spellings() {
    assert_eq!(resolved("BPJS Indexed Games"), Some("bpjs"));
    assert_eq!(resolved("bpjs games"), Some("bpjs"));
    assert_eq!(resolved("BPjS Games"), Some("bpjs"));
}

#[test]
fn role_playing_spellings() {
    for label in ["Role-Playing Games", "role playing games", "RPG", "  Role   Playing  "] {
        assert_eq!(resolved(label), Some("role-playing"), "{label}");
    }
}

#[test]
fn action_adventure_spellings() {
    for label in ["Action Adventure Games", "action adventure", "Action-Adventure"] {
        assert_eq!(resolved(label), Some("action-adventure"), "{label}");
    }
}

#[test]
fn miscellaneous_spellings() {
    for label in ["Miscellaneous", "MIscellaneous", "Miscellaneous Games", "misc"] {
        assert_eq!(resolved(label), Some("miscellaneous"), "{label}");
    }
}

#[test]
fn shoot_em_up_apostrophes() {
    assert_eq!(resolved("Shoot 'em Up Games"), Some("shoot-em-up"));
    assert_eq!(resolved("Shoot \u{2019}em Up"), Some("shoot-em-up"));
    assert_eq!(resolved("shmups"), Some("shoot-em-up"));
}

#[test]
fn c64_prefix_and_games_suffix() {
    assert_eq!(resolved("C64 Platform Games"), Some("platform"));
    assert_eq!(resolved("c64   racing"), Some("racing"));
    assert_eq!(resolved("Top Picks Games"), Some("top-picks"));
}

#[test]
fn unknown_labels_resolve_to_none() {
    for label in ["", "   ", "games", "Flight Simulators", "RPG-like Oddities", "platforms games games"] {
        assert_eq!(resolved(label), None, "{label}");
    }
}

#[test]
fn resolution_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(resolved("Arcade Games"), Some("arcade"));
    }
}

#[test]
fn slugs() {
    assert_eq!(resolve_slug("role-playing-games.html").map(|k| k.as_str()), Some("role-playing"));
    assert_eq!(resolve_slug("games/genres/shoot-em-up.html").map(|k| k.as_str()), Some("shoot-em-up"));
    assert_eq!(resolve_slug("bpjs_indexed_games").map(|k| k.as_str()), Some("bpjs"));
    assert_eq!(resolve_slug("top-picks").map(|k| k.as_str()), Some("top-picks"));
    assert_eq!(resolve_slug("index.html"), None);
}

#[test]
fn hints() {
    assert_eq!(CategoryHint::Key("bpjs").resolve().unwrap().as_str(), "bpjs");
    assert_eq!(CategoryHint::Label("Platform Games").resolve().unwrap().as_str(), "platform");
    assert_eq!(CategoryHint::Slug("racing-games.html").resolve().unwrap().as_str(), "racing");

    let err = CategoryHint::Label(" Flight Sims ").resolve().unwrap_err();
    assert_eq!(err.hint, "Flight Sims");
    assert_eq!(err.to_string(), "Category not configured: Flight Sims");
}
