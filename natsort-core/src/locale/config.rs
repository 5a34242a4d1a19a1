//! Locale table schema
//!
//! This module defines the TOML schema for the numeric locale table.

use serde::{Deserialize, Serialize};

/// Root of the locale table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleTable {
    pub locales: Vec<LocaleEntry>,
}

/// One locale's numeric conventions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub code: String,
    pub name: String,
    pub decimal_point: char,
    #[serde(default)]
    pub thousands_sep: Option<char>,
    /// Locale chosen for a bare language name or an unlisted territory
    #[serde(default)]
    pub language_default: bool,
}

impl LocaleEntry {
    /// Language part of the code (`de` for `de_CH`)
    pub fn language(&self) -> &str {
        self.code.split('_').next().unwrap_or(&self.code)
    }
}

impl LocaleTable {
    /// Validate the table
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.locales.is_empty() {
            return Err("No locales defined".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        let mut defaults = std::collections::HashSet::new();
        for entry in &self.locales {
            if !seen.insert(entry.code.as_str()) {
                return Err(format!("Duplicate locale code: {}", entry.code));
            }
            if entry.language_default && !defaults.insert(entry.language()) {
                return Err(format!(
                    "More than one language default for: {}",
                    entry.language()
                ));
            }
        }

        Ok(())
    }
}
