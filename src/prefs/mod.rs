// SPDX-License-Identifier: MIT

//! Persisted user preferences (language + theme) with change subscription.
//!
//! One writer (the UI), no cross-instance synchronization: the store loads
//! once at startup and writes the TOML file back on every accepted change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// UI theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// The persisted preference set. Unknown or missing fields fall back to the
/// defaults ("ar" / "light"), so a stale file never blocks startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Change notification delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefEvent {
    LanguageChanged(Language),
    ThemeChanged(ThemeMode),
}

/// Preference store: read / write / subscribe.
pub struct PrefStore {
    path: PathBuf,
    prefs: Prefs,
    subscribers: Vec<Sender<PrefEvent>>,
}

impl PrefStore {
    /// Open the store at the platform config location, falling back to
    /// defaults (and logging) when the file is unreadable.
    pub fn open_default() -> Self {
        let path = default_path();
        match Self::load_from(&path) {
            Ok(store) => {
                tracing::debug!(
                    language = store.language().tag(),
                    theme = %store.theme(),
                    "loaded preferences"
                );
                store
            }
            Err(err) => {
                tracing::warn!(?path, %err, "could not load preferences; using defaults");
                Self {
                    path,
                    prefs: Prefs::default(),
                    subscribers: Vec::new(),
                }
            }
        }
    }

    /// Load preferences from an explicit path. A missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let prefs = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading preferences from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("parsing preferences in {}", path.display()))?
        } else {
            Prefs::default()
        };

        Ok(Self {
            path,
            prefs,
            subscribers: Vec::new(),
        })
    }

    pub fn prefs(&self) -> Prefs {
        self.prefs
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.prefs.theme
    }

    /// Set the language, persist, and notify. Setting the current value is a
    /// no-op: no write, no event.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        if self.prefs.language == language {
            return Ok(());
        }
        self.prefs.language = language;
        self.save()?;
        self.notify(PrefEvent::LanguageChanged(language));
        Ok(())
    }

    /// Set the theme, persist, and notify. Same no-op rule as language.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        if self.prefs.theme == theme {
            return Ok(());
        }
        self.prefs.theme = theme;
        self.save()?;
        self.notify(PrefEvent::ThemeChanged(theme));
        Ok(())
    }

    /// Subscribe to preference changes. Receivers that are dropped are pruned
    /// on the next notification.
    pub fn subscribe(&mut self) -> Receiver<PrefEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: PrefEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&self.prefs).context("serializing preferences")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing preferences to {}", self.path.display()))?;
        Ok(())
    }
}

/// Platform-specific location of the preferences file.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "devfolio", "Devfolio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prefs.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let store = PrefStore::load_from(tmp.path().join("prefs.toml")).unwrap();

        assert_eq!(store.language(), Language::Ar);
        assert_eq!(store.theme(), ThemeMode::Light);
    }

    #[test]
    fn language_survives_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");

        let mut store = PrefStore::load_from(&path).unwrap();
        store.set_language(Language::En).unwrap();
        drop(store);

        let reloaded = PrefStore::load_from(&path).unwrap();
        assert_eq!(reloaded.language(), Language::En);
    }

    #[test]
    fn theme_survives_reload_and_double_toggle_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");

        let mut store = PrefStore::load_from(&path).unwrap();
        let original = store.theme();

        store.set_theme(store.theme().toggled()).unwrap();
        assert_eq!(PrefStore::load_from(&path).unwrap().theme(), ThemeMode::Dark);

        store.set_theme(store.theme().toggled()).unwrap();
        assert_eq!(store.theme(), original);
        assert_eq!(PrefStore::load_from(&path).unwrap().theme(), original);
    }

    #[test]
    fn subscribers_receive_change_events() {
        let tmp = TempDir::new().unwrap();
        let mut store = PrefStore::load_from(tmp.path().join("prefs.toml")).unwrap();
        let events = store.subscribe();

        store.set_language(Language::En).unwrap();
        store.set_theme(ThemeMode::Dark).unwrap();

        assert_eq!(events.try_recv(), Ok(PrefEvent::LanguageChanged(Language::En)));
        assert_eq!(events.try_recv(), Ok(PrefEvent::ThemeChanged(ThemeMode::Dark)));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn setting_the_current_value_neither_writes_nor_notifies() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");
        let mut store = PrefStore::load_from(&path).unwrap();
        let events = store.subscribe();

        store.set_language(Language::Ar).unwrap();

        assert!(!path.exists());
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn stored_values_use_the_fixed_lowercase_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");
        let mut store = PrefStore::load_from(&path).unwrap();
        store.set_theme(ThemeMode::Dark).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("language = \"ar\""));
        assert!(content.contains("theme = \"dark\""));
    }
}
