//! Game catalog model and the pure half of the catalog resolution pipeline.
//!
//! Raw `games.json` entries are normalized into [`CanonicalGameRecord`]s,
//! category labels are resolved to [`CategoryKey`]s, and matching records are
//! ordered and projected into [`PresentationRow`]s. Nothing here performs I/O;
//! loading lives in `ccg-gateway`.

pub mod category;
pub mod matcher;
pub mod normalize;
pub mod present;
pub mod types;

pub use category::{
    CATEGORIES, CategoryDef, CategoryHint, CategoryKey, UnknownCategory, resolve_key, resolve_slug,
};
pub use matcher::{CategoryCounts, category_counts, find_by_id, match_category, search};
pub use normalize::{InvalidRecord, normalize, normalize_all};
pub use present::{Badges, PageStatus, PresentationRow, present};
pub use types::*;
