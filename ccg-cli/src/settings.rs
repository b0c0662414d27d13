//! Settings file and catalog-location resolution.
//!
//! The settings file lives at `~/.config/ccg/settings.toml`:
//!
//! ```toml
//! [catalog]
//! source = "https://example.org/games/games.json"
//! detail_base = "game.html?id="
//! timeout_secs = 30
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::CliError;

pub(crate) const SOURCE_ENV: &str = "CCG_CATALOG_SOURCE";
pub(crate) const DEFAULT_SOURCE: &str = "games/games.json";
pub(crate) const DEFAULT_DETAIL_BASE: &str = "game.html?id=";

/// Canonical path to the settings file: `~/.config/ccg/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ccg").join("settings.toml")
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    catalog: Option<CatalogSection>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogSection {
    source: Option<String>,
    detail_base: Option<String>,
    timeout_secs: Option<u64>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${var}"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub source: String,
    pub source_from: SettingSource,
    pub detail_base: String,
    pub detail_base_from: SettingSource,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Resolve settings using the priority chain:
    ///
    /// 1. `--source` flag
    /// 2. `$CCG_CATALOG_SOURCE`
    /// 3. `settings.toml`
    /// 4. Built-in default
    pub(crate) fn load(flag: Option<String>) -> Result<Self, CliError> {
        let file = read_settings_file(&settings_path())?;
        Ok(Self::resolve(flag, std::env::var(SOURCE_ENV).ok(), file))
    }

    fn resolve(flag: Option<String>, env: Option<String>, file: SettingsFile) -> Self {
        let section = file.catalog.unwrap_or_default();

        let (source, source_from) = non_empty(flag)
            .map(|v| (v, SettingSource::Flag))
            .or_else(|| non_empty(env).map(|v| (v, SettingSource::EnvVar(SOURCE_ENV))))
            .or_else(|| non_empty(section.source).map(|v| (v, SettingSource::ConfigFile)))
            .unwrap_or_else(|| (DEFAULT_SOURCE.to_string(), SettingSource::Default));

        let (detail_base, detail_base_from) = match non_empty(section.detail_base) {
            Some(v) => (v, SettingSource::ConfigFile),
            None => (DEFAULT_DETAIL_BASE.to_string(), SettingSource::Default),
        };

        Self {
            source,
            source_from,
            detail_base,
            detail_base_from,
            timeout: section.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, CliError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SettingsFile::default()),
        Err(e) => Err(CliError::config(format!("{}: {e}", path.display()))),
    }
}

fn parse_settings(contents: &str) -> Result<SettingsFile, toml::de::Error> {
    toml::from_str(contents)
}

/// Save the catalog location in `settings.toml`, keeping any other keys.
pub(crate) fn save_source(location: &str) -> Result<PathBuf, CliError> {
    let settings = settings_path();
    save_source_at(&settings, location)?;
    Ok(settings)
}

fn save_source_at(settings: &Path, location: &str) -> Result<(), CliError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .map_err(|e| CliError::config(format!("{}: {e}", settings.display())))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(CliError::config(format!("{}: {e}", settings.display()))),
    };

    set_source(&mut doc, location)?;

    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::config(e.to_string()))?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(|e| CliError::config(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| CliError::config(e.to_string()))?;
    std::fs::rename(&tmp, settings).map_err(|e| CliError::config(e.to_string()))?;

    Ok(())
}

fn set_source(doc: &mut toml::Value, location: &str) -> Result<(), CliError> {
    let table = doc
        .as_table_mut()
        .ok_or_else(|| CliError::config("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog = catalog
        .as_table_mut()
        .ok_or_else(|| CliError::config("[catalog] is not a table"))?;
    catalog.insert(
        "source".to_string(),
        toml::Value::String(location.to_string()),
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
