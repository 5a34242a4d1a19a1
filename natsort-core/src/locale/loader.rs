//! Locale table loader
//!
//! Parses the embedded locale table once and caches it for the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{config::LocaleTable, Locale};
use crate::error::{Error, Result};

/// Parsed locale table: locales by code, and default codes by language
#[derive(Debug)]
struct Registry {
    locales: HashMap<String, Locale>,
    defaults: HashMap<String, String>,
}

/// Embedded locale table, parsed on first access
static EMBEDDED: OnceLock<std::result::Result<Registry, String>> = OnceLock::new();

fn registry() -> Result<&'static Registry> {
    EMBEDDED
        .get_or_init(|| load_table(include_str!("../../configs/locales.toml")))
        .as_ref()
        .map_err(|e| Error::LocaleTable(e.clone()))
}

/// Parse and validate a locale table from TOML
fn load_table(toml_str: &str) -> std::result::Result<Registry, String> {
    let table: LocaleTable =
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse locale table: {e}"))?;
    table.validate()?;

    let mut locales = HashMap::with_capacity(table.locales.len());
    let mut defaults = HashMap::new();
    for entry in &table.locales {
        let locale = Locale::new(&entry.code, entry.decimal_point, entry.thousands_sep)
            .map_err(|e| e.to_string())?;
        locales.insert(entry.code.clone(), locale);
        if entry.language_default {
            defaults.insert(entry.language().to_string(), entry.code.clone());
        }
    }
    Ok(Registry { locales, defaults })
}

/// Reduce a POSIX locale name (`de_DE.UTF-8@euro`) to its table code (`de_DE`)
pub fn normalize_name(name: &str) -> &str {
    let end = name.find(['.', '@']).unwrap_or(name.len());
    match &name[..end] {
        "POSIX" => "C",
        code => code,
    }
}

/// Look up a locale by name
///
/// Accepts full POSIX names. A bare language or an unlisted territory
/// (`de_AT`) resolves to the language's `language_default` locale, or to
/// the alphabetically first locale of that language when none is marked.
pub fn get_locale(name: &str) -> Result<Locale> {
    let registry = registry()?;
    let code = normalize_name(name.trim());

    if let Some(locale) = registry.locales.get(code) {
        return Ok(locale.clone());
    }

    let language = code.split('_').next().unwrap_or(code);
    let fallback = match registry.defaults.get(language) {
        Some(default) => registry.locales.get(default),
        None => registry
            .locales
            .values()
            .filter(|l| l.code().split('_').next() == Some(language))
            .min_by(|a, b| a.code().cmp(b.code())),
    };

    match fallback {
        Some(locale) => {
            log::debug!("Locale {name:?} resolved to {}", locale.code());
            Ok(locale.clone())
        }
        None => Err(Error::UnknownLocale(name.to_string())),
    }
}

/// Codes of all built-in locales, sorted
pub fn available_locales() -> Result<Vec<String>> {
    let mut codes: Vec<String> = registry()?.locales.keys().cloned().collect();
    codes.sort();
    Ok(codes)
}

/// Resolve the locale configured in the process environment
///
/// Checks `LC_ALL`, `LC_NUMERIC` and `LANG` in that order. Returns `None`
/// when nothing is set or the configured name is not in the table.
pub fn locale_from_env() -> Option<Locale> {
    let name = ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())?;

    match get_locale(&name) {
        Ok(locale) => {
            log::debug!("Using locale {} from environment", locale.code());
            Some(locale)
        }
        Err(e) => {
            log::warn!("Ignoring environment locale {name:?}: {e}");
            None
        }
    }
}
