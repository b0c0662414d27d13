//! Category key resolution.
//!
//! Genre and collection names are spelled many ways across the site: page
//! headings ("BPJS Indexed Games"), data tags ("BPjS Games"), file names
//! (`role-playing-games.html`). Everything is funnelled through one flat alias
//! table so that a page heading and a record's labels resolve the same way.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

/// Bump when a key is added, removed or renamed.
pub const ALIAS_TABLE_VERSION: u32 = 1;

/// One genre or collection supported by the site.
#[derive(Debug)]
pub struct CategoryDef {
    /// Canonical key, also accepted as an alias of itself.
    pub key: &'static str,
    /// Heading used when the site shows the category.
    pub display_name: &'static str,
    /// Spellings in cleaned form (lowercase, single-spaced, no `c64 ` prefix).
    pub aliases: &'static [&'static str],
}

/// The closed list of categories.
pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "action-adventure",
        display_name: "Action Adventure Games",
        aliases: &[
            "action adventure",
            "action adventure games",
            "action-adventure games",
            "action & adventure",
            "action/adventure",
        ],
    },
    CategoryDef {
        key: "adventure",
        display_name: "Adventure Games",
        aliases: &["adventures", "text adventure", "text adventures", "graphic adventure"],
    },
    CategoryDef {
        key: "arcade",
        display_name: "Arcade Games",
        aliases: &["arcade games", "arcade conversions", "coin-op", "coin-op conversions"],
    },
    CategoryDef {
        key: "bpjs",
        display_name: "BPJS Indexed Games",
        aliases: &["bpjs indexed", "bpjs indexed games", "bpjs games", "bpjs index"],
    },
    CategoryDef {
        key: "cartridge",
        display_name: "Cartridge Games",
        aliases: &["cartridges", "cart", "carts", "cartridge games"],
    },
    CategoryDef {
        key: "casino",
        display_name: "Casino Games",
        aliases: &["gambling", "card games", "casino & card games"],
    },
    CategoryDef {
        key: "fighting",
        display_name: "Fighting Games",
        aliases: &["beat em up", "beat 'em up", "beat-em-up", "beat em ups", "beat 'em ups"],
    },
    CategoryDef {
        key: "horror",
        display_name: "Horror Games",
        aliases: &["survival horror", "horror games"],
    },
    CategoryDef {
        key: "licensed",
        display_name: "Licensed Games",
        aliases: &["licenced", "licensed games", "licenced games", "tie-ins", "movie tie-ins"],
    },
    CategoryDef {
        key: "miscellaneous",
        display_name: "Miscellaneous Games",
        aliases: &["misc", "miscellanous", "miscelaneous", "other", "others"],
    },
    CategoryDef {
        key: "platform",
        display_name: "Platform Games",
        aliases: &["platformer", "platformers", "platform games", "platformer games"],
    },
    CategoryDef {
        key: "puzzle",
        display_name: "Puzzle Games",
        aliases: &["puzzles", "puzzler", "puzzle games", "logic"],
    },
    CategoryDef {
        key: "quiz",
        display_name: "Quiz Games",
        aliases: &["quizzes", "trivia", "quiz games"],
    },
    CategoryDef {
        key: "racing",
        display_name: "Racing Games",
        aliases: &["driving", "racing & driving", "racing games", "racers"],
    },
    CategoryDef {
        key: "role-playing",
        display_name: "Role-Playing Games",
        aliases: &[
            "role playing",
            "role playing games",
            "role-playing games",
            "roleplaying",
            "roleplaying games",
            "rpg",
            "rpgs",
        ],
    },
    CategoryDef {
        key: "shoot-em-up",
        display_name: "Shoot 'em Up Games",
        aliases: &[
            "shoot em up",
            "shoot 'em up",
            "shoot'em up",
            "shoot-'em-up",
            "shoot em ups",
            "shoot 'em ups",
            "shoot-em-ups",
            "shmup",
            "shmups",
        ],
    },
    CategoryDef {
        key: "sports",
        display_name: "Sports Games",
        aliases: &["sport", "sports games", "sport games"],
    },
    CategoryDef {
        key: "strategy",
        display_name: "Strategy Games",
        aliases: &["strategy games", "wargames", "war games", "wargame"],
    },
    CategoryDef {
        key: "top-picks",
        display_name: "Top Picks",
        aliases: &["top picks", "top pick", "ccg top picks"],
    },
];

/// Alias (and canonical key) → category. Built once from [`CATEGORIES`].
static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static CategoryDef>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for def in CATEGORIES {
        index.insert(def.key, def);
        for alias in def.aliases {
            index.insert(*alias, def);
        }
    }
    index
});

// ── CategoryKey ─────────────────────────────────────────────────────────────

/// A canonical category identifier such as `role-playing` or `bpjs`.
///
/// Only obtainable from the alias table, so every key is known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(&'static str);

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Look up an exact canonical key. Aliases are not accepted here.
    pub fn from_canonical(key: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|def| def.key == key)
            .map(|def| Self(def.key))
    }

    /// Every key in table order.
    pub fn all() -> impl Iterator<Item = CategoryKey> {
        CATEGORIES.iter().map(|def| Self(def.key))
    }

    pub fn display_name(&self) -> &'static str {
        self.def().map(|def| def.display_name).unwrap_or(self.0)
    }

    fn def(&self) -> Option<&'static CategoryDef> {
        CATEGORIES.iter().find(|def| def.key == self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

// ── Resolution ──────────────────────────────────────────────────────────────

/// Lowercase, fold typographic apostrophes, and collapse whitespace runs.
pub fn clean_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Resolve a human-readable label to its canonical key.
///
/// Returns `None` for labels outside the alias table; callers show a
/// "category not configured" state instead of an empty list.
///
/// ```
/// use ccg_catalog::category::resolve_key;
///
/// assert_eq!(resolve_key("BPJS Indexed Games").unwrap().as_str(), "bpjs");
/// assert_eq!(resolve_key("C64 Platform Games").unwrap().as_str(), "platform");
/// assert!(resolve_key("Flight Simulators").is_none());
/// ```
pub fn resolve_key(label: &str) -> Option<CategoryKey> {
    let cleaned = clean_label(label);
    let cleaned = cleaned.strip_prefix("c64 ").unwrap_or(cleaned.as_str());

    lookup(cleaned).or_else(|| cleaned.strip_suffix(" games").and_then(lookup))
}

/// Resolve a page file name such as `games/genres/role-playing-games.html`.
pub fn resolve_slug(slug: &str) -> Option<CategoryKey> {
    let file = slug.rsplit(['/', '\\']).next().unwrap_or(slug);
    let stem = match file.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file,
    };

    CategoryKey::from_canonical(&stem.to_lowercase())
        .or_else(|| resolve_key(&stem.replace(['-', '_'], " ")))
}

fn lookup(cleaned: &str) -> Option<CategoryKey> {
    ALIAS_INDEX.get(cleaned).map(|def| CategoryKey(def.key))
}

/// How a page identifies the category it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryHint<'a> {
    /// Heading text or a data attribute holding a display name.
    Label(&'a str),
    /// The page's file name.
    Slug(&'a str),
    /// A canonical key; resolving it is a no-op.
    Key(&'a str),
}

/// The page's category hint did not resolve to any configured category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Category not configured: {hint}")]
pub struct UnknownCategory {
    pub hint: String,
}

impl CategoryHint<'_> {
    pub fn resolve(&self) -> Result<CategoryKey, UnknownCategory> {
        let (resolved, text) = match *self {
            Self::Label(label) => (resolve_key(label), label),
            Self::Slug(slug) => (resolve_slug(slug), slug),
            Self::Key(key) => (
                CategoryKey::from_canonical(key).or_else(|| resolve_key(key)),
                key,
            ),
        };
        resolved.ok_or_else(|| UnknownCategory {
            hint: text.trim().to_string(),
        })
    }
}
