//! User preferences that survive restarts: the theme, the font scale and the set of checked
//! checklist items.
//!
//! Each preference lives under its own storage key. A key that cannot be read or parsed falls back
//! to its default without affecting the others, and a failed write leaves the in-memory value in
//! place.

use crate::storage::Storage;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "trip_deck_theme_v1";
pub const FONT_KEY: &str = "trip_deck_font_v1";
pub const CHECKED_KEY: &str = "trip_deck_prep_checked_v1";

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

serde_plain::derive_display_from_serialize!(Theme);
serde_plain::derive_fromstr_from_deserialize!(Theme);

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontScale {
    Normal,
    #[default]
    Large,
    Extra,
}

serde_plain::derive_display_from_serialize!(FontScale);
serde_plain::derive_fromstr_from_deserialize!(FontScale);

/// The preferences, loaded once from `S` and written back on every change.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    theme: Theme,
    font_scale: FontScale,
    checked: BTreeSet<String>,
}

impl<S: Storage> PreferenceStore<S> {
    /// Reads every preference from `storage`. This never fails: each missing or invalid value is
    /// replaced by its default.
    pub fn load(storage: S) -> Self {
        let theme = load_key(&storage, THEME_KEY, |raw| {
            let dark: bool = serde_json::from_str(raw)?;
            Ok(if dark { Theme::Dark } else { Theme::Light })
        });
        let font_scale = load_key(&storage, FONT_KEY, |raw| Ok(FontScale::from_str(raw)?));
        let checked = load_key(&storage, CHECKED_KEY, |raw| Ok(serde_json::from_str(raw)?));
        Self {
            storage,
            theme,
            font_scale,
            checked,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        let value = serde_json::to_string(&theme.is_dark())?;
        self.persist(THEME_KEY, &value)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_font_scale(&mut self, font_scale: FontScale) -> Result<()> {
        self.font_scale = font_scale;
        self.persist(FONT_KEY, &font_scale.to_string())
    }

    /// Flips the checked state of `key` and returns whether it is now checked. When the write
    /// fails the new state is still kept in memory.
    pub fn toggle_checked(&mut self, key: &str) -> Result<bool> {
        let now_checked = if self.checked.remove(key) {
            false
        } else {
            self.checked.insert(key.to_string());
            true
        };
        let value = serde_json::to_string(&self.checked)?;
        self.persist(CHECKED_KEY, &value)?;
        Ok(now_checked)
    }

    fn persist(&mut self, key: &str, value: &str) -> Result<()> {
        debug!("Saving preference {key}={value}");
        let result = self
            .storage
            .set(key, value)
            .with_context(|| format!("Unable to save the preference '{key}'"));
        if let Err(e) = &result {
            warn!("{e:#}");
        }
        result
    }
}

fn load_key<S, T, F>(storage: &S, key: &str, parse: F) -> T
where
    S: Storage,
    T: Default,
    F: FnOnce(&str) -> Result<T>,
{
    match storage.get(key) {
        Ok(Some(raw)) => match parse(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring invalid value '{raw}' for preference '{key}': {e}");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Unable to read preference '{key}', using the default: {e:#}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let prefs = PreferenceStore::load(MemoryStorage::new());
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.font_scale(), FontScale::Large);
        assert!(prefs.checked().is_empty());
    }

    #[test]
    fn test_font_scale_survives_reload() {
        let mut prefs = PreferenceStore::load(MemoryStorage::new());
        prefs.set_font_scale(FontScale::Extra).unwrap();
        let prefs = PreferenceStore::load(prefs.into_storage());
        assert_eq!(prefs.font_scale(), FontScale::Extra);
    }

    #[test]
    fn test_wire_formats() {
        let mut prefs = PreferenceStore::load(MemoryStorage::new());
        prefs.set_theme(Theme::Dark).unwrap();
        prefs.set_font_scale(FontScale::Normal).unwrap();
        prefs.toggle_checked("Bag-Clothes-Socks").unwrap();
        prefs.toggle_checked("Bag-Clothes-Hat").unwrap();
        let storage = prefs.storage();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get(FONT_KEY).unwrap().as_deref(), Some("normal"));
        assert_eq!(
            storage.get(CHECKED_KEY).unwrap().as_deref(),
            Some(r#"["Bag-Clothes-Hat","Bag-Clothes-Socks"]"#)
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut storage = MemoryStorage::new();
        storage.set(FONT_KEY, "huge").unwrap();
        storage.set(THEME_KEY, "maybe").unwrap();
        storage.set(CHECKED_KEY, "{not json").unwrap();
        let prefs = PreferenceStore::load(storage);
        assert_eq!(prefs.font_scale(), FontScale::Large);
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(prefs.checked().is_empty());
    }

    #[test]
    fn test_invalid_key_does_not_affect_others() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "not a bool").unwrap();
        storage.set(FONT_KEY, "extra").unwrap();
        storage.set(CHECKED_KEY, r#"["a"]"#).unwrap();
        let prefs = PreferenceStore::load(storage);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.font_scale(), FontScale::Extra);
        assert!(prefs.is_checked("a"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut prefs = PreferenceStore::load(MemoryStorage::new());
        assert!(prefs.toggle_checked("k").unwrap());
        assert!(prefs.is_checked("k"));
        assert!(!prefs.toggle_checked("k").unwrap());
        assert!(!prefs.is_checked("k"));
        let prefs = PreferenceStore::load(prefs.into_storage());
        assert!(prefs.checked().is_empty());
    }

    #[test]
    fn test_failing_key_is_isolated() {
        let storage = MemoryStorage::new().with_failing_key(CHECKED_KEY);
        let mut prefs = PreferenceStore::load(storage);
        assert!(prefs.checked().is_empty());

        // The write fails but the in-memory state keeps the change.
        assert!(prefs.toggle_checked("k").is_err());
        assert!(prefs.is_checked("k"));

        prefs.set_theme(Theme::Dark).unwrap();
        let prefs = PreferenceStore::load(prefs.into_storage());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(prefs.checked().is_empty());
    }

    #[test]
    fn test_toggle_theme() {
        let mut prefs = PreferenceStore::load(MemoryStorage::new());
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_file_backed_reload() {
        let dir = TempDir::new().unwrap();
        let mut prefs = PreferenceStore::load(FileStorage::new(dir.path()).unwrap());
        prefs.set_theme(Theme::Dark).unwrap();
        prefs.toggle_checked("Carry-on-General-Passport").unwrap();
        drop(prefs);

        let prefs = PreferenceStore::load(FileStorage::new(dir.path()).unwrap());
        assert!(prefs.theme().is_dark());
        assert!(prefs.is_checked("Carry-on-General-Passport"));
    }
}
